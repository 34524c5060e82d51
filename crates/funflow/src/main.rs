mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fun")]
#[command(about = "Function Compute project tooling", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the active template and print it merged with its override
    Template {
        /// Ignore templates under .fun/build/artifacts
        #[arg(long)]
        no_build: bool,
        /// Template file to try before the conventional locations (repeatable)
        #[arg(short = 't', long = "template")]
        templates: Vec<PathBuf>,
        /// Print JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Print the directories derived from the active template
    Paths {
        /// Ignore templates under .fun/build/artifacts
        #[arg(long)]
        no_build: bool,
        /// Template file to try before the conventional locations
        #[arg(short = 't', long = "template")]
        template: Option<PathBuf>,
    },
    /// Find or create the default VPC, vswitch and security group
    Vpc {
        /// Only report what would be created
        #[arg(long)]
        dry_run: bool,
        /// Print JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show version information
    Version,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Template {
            no_build,
            templates,
            json,
        } => commands::template::handle(no_build, &templates, json),
        Commands::Paths { no_build, template } => {
            commands::paths::handle(no_build, template.as_deref())
        }
        Commands::Vpc { dry_run, json } => commands::vpc::handle(dry_run, json).await,
        Commands::Version => {
            println!("funflow {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
