use anyhow::Result;
use rueda_core::CategoryCatalog;
use rueda_etl::{Config, DocumentLoader};

/// List the category catalogue.
pub async fn show_categories(config: &Config) -> Result<()> {
    let loader = DocumentLoader::from_config(config)?;
    let catalog = loader.load_categories().await?;

    if catalog.is_empty() {
        println!("No categories defined in {}", loader.source());
    } else {
        print!("{}", format_catalog(&catalog));
    }
    Ok(())
}

fn format_catalog(catalog: &CategoryCatalog) -> String {
    let width = catalog
        .iter()
        .map(|c| c.id.chars().count())
        .max()
        .unwrap_or_default();

    catalog
        .iter()
        .map(|c| {
            let name = if c.name.is_empty() { &c.id } else { &c.name };
            let line = if c.description.is_empty() {
                format!("{:<width$}  {}", c.id, name)
            } else {
                format!("{:<width$}  {} ({})", c.id, name, c.description)
            };
            line + "\n"
        })
        .collect()
}
