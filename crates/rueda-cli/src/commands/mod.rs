pub mod categories;
pub mod config;
pub mod list;
pub mod video;

pub use categories::show_categories;
pub use list::{run_list, ListOptions};
pub use video::show_video;
