//! CLI entry point for postroll

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postroll")]
#[command(version)]
#[command(about = "Load, validate and order Markdown blog posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Emit the post records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every post and report all problems
    Check,

    /// Show tag usage
    Tags,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Layout to use (defaults to `default_layout`)
        #[arg(short, long)]
        layout: Option<String>,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postroll=debug,info"
    } else {
        "postroll=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = postroll::Site::new(&base_dir)?;

    match cli.command {
        Commands::List { json } => {
            postroll::commands::list::run(&site, json)?;
        }

        Commands::Check => {
            postroll::commands::check::run(&site)?;
        }

        Commands::Tags => {
            postroll::commands::tags::run(&site)?;
        }

        Commands::New {
            title,
            layout,
            tags,
        } => {
            let path = site.new_post(&title, layout.as_deref(), &tags)?;
            println!("Created: {}", path.display());
        }
    }

    Ok(())
}
