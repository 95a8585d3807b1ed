pub mod category;
pub mod difficulty;
pub mod moves;

pub use category::{Category, CategoryCatalog, CategoryId};
pub use difficulty::Difficulty;
pub use moves::Move;
