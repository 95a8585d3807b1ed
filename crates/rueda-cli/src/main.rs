use anyhow::{anyhow, Result};
use clap::Parser;
use rueda_core::{CategoryFilter, DifficultyFilter, SortField};
use rueda_etl::Config;

mod commands;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "rueda", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL or directory holding rueda-moves.json (overrides config)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List moves as a table
    ///
    /// Loads the move and category documents from the configured source,
    /// filters them by category and difficulty, and sorts them by exactly one
    /// key. Names sort with Spanish collation: accents are secondary and ñ
    /// comes after n.
    ///
    /// Records without any name are skipped. Invalid difficulties default to
    /// 1 (Beginner) and invalid categories default to 'basic'; both are
    /// reported as warnings on stderr.
    List {
        /// Category id to show, or 'all'
        #[arg(long, short, default_value = "all")]
        category: CategoryFilter,

        /// Difficulty to show (1-3 or a label), or 'all'
        #[arg(long, short, default_value = "all")]
        difficulty: DifficultyFilter,

        /// Sort key: 'name' or 'difficulty'
        #[arg(long, short, default_value = "name")]
        sort: SortField,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Print the selected moves as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse moves interactively
    Browse,
    /// Resolve a video link into its embeddable form
    Video {
        /// Video URL (watch, youtu.be, embed or shorts)
        url: String,
    },
    /// List the move categories
    Categories,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn init_logging(config: &Config, verbose: bool) -> Result<()> {
    let level = if verbose {
        twyg::LogLevel::Debug
    } else {
        log_level(&config.log_level)
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(config.log_coloured)
        .output(twyg::Output::Stderr)
        .level(level)
        .build()
        .map_err(|e| anyhow!("Failed to build logging options: {e:?}"))?;

    twyg::setup(opts)
        .map(|_| ())
        .map_err(|e| anyhow!("Failed to set up logging: {e:?}"))
}

fn log_level(name: &str) -> twyg::LogLevel {
    match name.trim().to_ascii_lowercase().as_str() {
        "trace" => twyg::LogLevel::Trace,
        "debug" => twyg::LogLevel::Debug,
        "warn" | "warning" => twyg::LogLevel::Warn,
        "error" => twyg::LogLevel::Error,
        _ => twyg::LogLevel::Info,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_source(cli.source)?;

    // The terminal UI owns the screen, so it runs without a logger.
    if !matches!(cli.command, Commands::Browse) {
        init_logging(&config, cli.verbose)?;
    }

    match cli.command {
        Commands::List {
            category,
            difficulty,
            sort,
            desc,
            json,
        } => {
            let options = commands::ListOptions {
                category,
                difficulty,
                sort,
                desc,
                json,
            };
            commands::run_list(&config, options).await?;
        }
        Commands::Browse => {
            tui::run_tui(&config).await?;
        }
        Commands::Video { url } => {
            commands::show_video(&url)?;
        }
        Commands::Categories => {
            commands::show_categories(&config).await?;
        }
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
