//! AI search widget - Entry Point

use aisearch::api::{navigation_target, Endpoints, HttpSearchApi, SearchApi};
use aisearch::config::ResolvedConfig;
use aisearch::controller::SearchController;
use aisearch::view::{self, TuiOptions};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Search listings with AI-assisted autocomplete
#[derive(Parser, Debug)]
#[command(name = "aisearch")]
#[command(version)]
#[command(about = "Search listings with debounced autocomplete and resolve queries to listing pages")]
pub struct Args {
    /// One-shot command; the interactive search when absent
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Start the interactive search with this query typed in
    #[arg(short, long)]
    pub query: Option<String>,

    /// Site root serving the search API and listing pages
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Autocomplete debounce window in milliseconds
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// One-shot commands; without one the interactive search starts.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print autocomplete suggestions for a query, one per line
    Suggest {
        /// Partial query
        query: String,
    },
    /// Print the listing-page URL a query resolves to
    Resolve {
        /// Full query
        query: String,
    },
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, aisearch::config::ConfigError> {
    let config_file = aisearch::config::load_config_with_precedence(args.config.clone())?;
    let merged = aisearch::config::merge_config(config_file);
    let with_env = aisearch::config::apply_env_overrides(merged);
    Ok(aisearch::config::apply_cli_overrides(
        with_env,
        args.base_url.clone(),
        args.debounce_ms,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    // The interactive UI owns the terminal, so it logs to a file.
    match args.command {
        None => aisearch::logging::init(&config.log_file_path)?,
        Some(_) => aisearch::logging::init_stderr()?,
    }

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let endpoints = Endpoints::new(&config.base_url, &config.article_type, &config.country_code)?;
    let api = HttpSearchApi::new(endpoints.clone(), &config.user_agent)?;
    let runtime = tokio::runtime::Runtime::new()?;

    match args.command {
        Some(Command::Suggest { query }) => {
            if query.is_empty() {
                return Ok(());
            }
            for suggestion in runtime.block_on(api.fetch_suggestions(&query))? {
                println!("{suggestion}");
            }
        }
        Some(Command::Resolve { query }) => {
            let path = runtime.block_on(api.resolve_listing_path(&query))?;
            println!("{}", endpoints.listing_url(&navigation_target(&path)));
        }
        None => {
            let controller = SearchController::new(api, config.debounce(), runtime.handle().clone());
            let options = TuiOptions {
                initial_query: args.query,
                no_color: args.no_color,
            };
            if let Some(url) = view::run_interactive(controller, endpoints, options)? {
                println!("{url}");
            }
        }
    }

    Ok(())
}
