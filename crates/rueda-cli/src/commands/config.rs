use anyhow::Result;
use rueda_etl::{config, Config, Document, DocumentSource};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    let config_path = config::config_file_path();

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    println!(
        "File exists: {}\n",
        if config_path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!("  source: {}", config.source);
    println!(
        "  request_timeout_secs: {}",
        config
            .request_timeout_secs
            .map_or_else(|| String::from("<not set>"), |secs| secs.to_string())
    );
    println!("  log_level: {}", config.log_level);
    println!("  log_coloured: {}", config.log_coloured);

    match DocumentSource::parse(&config.source) {
        Ok(source) => {
            println!("\nDocuments:");
            println!("  moves: {}", source.location(Document::Moves));
            println!("  categories: {}", source.location(Document::Categories));
        }
        Err(e) => println!("\nInvalid source: {e}"),
    }

    println!("\nPriority: CLI args > ENV vars (RUEDA_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to point rueda at your move list.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
