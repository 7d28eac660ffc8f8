//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod check;
mod render;
mod scroll;
mod search;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use skate_history::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "skate")]
#[command(about = "Skateboarding history timeline, maneuvers and skate terapia")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Site directory holding the JSON datasets
    #[arg(long, global = true)]
    site_dir: Option<PathBuf>,

    /// Fetch datasets from this base URL instead of the site directory
    #[arg(long, global = true, env = "SKATE_BASE_URL")]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Search like the timeline page's search box
    Search {
        /// Query (a year, a maneuver id, a word, or "skate terapia")
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Print a page's rendered content as HTML
    Render {
        #[command(subcommand)]
        page: RenderCommands,
    },

    /// Run the timeline scroll engine over a fixed layout
    Scroll(scroll::ScrollArgs),

    /// Check datasets for duplicate ids, ordering and broken placeholders
    Check,

    /// Serve the site directory over HTTP
    Serve {
        /// Bind address (port, host, or host:port)
        #[arg(default_value = "127.0.0.1:3030")]
        bind: String,
    },
}

#[derive(Subcommand)]
enum RenderCommands {
    /// Timeline entries
    Timeline,
    /// Skate terapia article
    Article,
    /// Maneuver detail page
    Maneuver {
        /// Maneuver id (omit to see the not-found page)
        #[arg(long)]
        id: Option<String>,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        site_dir: cli.site_dir,
        base_url: cli.base_url,
    };
    let (settings, _config) = load_settings_with_options(options).await?;

    match cli.command {
        Commands::Search { query } => search::cmd_search(&settings, &query.join(" ")).await,
        Commands::Render { page } => match page {
            RenderCommands::Timeline => render::cmd_render_timeline(&settings).await,
            RenderCommands::Article => render::cmd_render_article(&settings).await,
            RenderCommands::Maneuver { id } => {
                render::cmd_render_maneuver(&settings, id.as_deref()).await
            }
        },
        Commands::Scroll(args) => scroll::cmd_scroll(&settings, &args),
        Commands::Check => check::cmd_check(&settings).await,
        Commands::Serve { bind } => serve::cmd_serve(&settings, &bind).await,
    }
}
