mod cmd;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use devguide_core::catalog::Catalog;
use devguide_core::GuideService;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "devguide",
    about = "Guided developer-tool sessions: from a free-text question to a runnable command",
    version,
    propagate_version = true
)]
struct Cli {
    /// Catalog YAML replacing the built-in workflow/toolchain/tool data
    #[arg(long, global = true, env = "DEVGUIDE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as an MCP stdio server
    Mcp,

    /// Serve the HTTP API
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3141", env = "DEVGUIDE_PORT")]
        port: u16,
    },

    /// Bridge a stdio MCP client to a running HTTP instance
    Proxy {
        /// Base URL of the HTTP instance
        #[arg(
            long,
            default_value = "http://127.0.0.1:3141",
            env = "DEVGUIDE_ENDPOINT"
        )]
        endpoint: String,
    },

    /// Walk a question through workflow, toolchain, tool, and command locally
    Ask {
        /// The development question to classify
        question: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Mcp | Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    // Stdout is reserved for command output (and protocol frames in MCP
    // mode); all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        // {:#} renders the whole context chain on one line
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Mcp => {
            let service = build_service(cli.catalog.as_deref())?;
            cmd::mcp::run(&service)
        }
        Commands::Serve { port } => {
            let service = build_service(cli.catalog.as_deref())?;
            cmd::serve::run(service, port)
        }
        Commands::Proxy { endpoint } => cmd::proxy::run(&endpoint),
        Commands::Ask { question } => {
            let service = build_service(cli.catalog.as_deref())?;
            cmd::ask::run(&service, &question, cli.json)
        }
    }
}

fn build_service(catalog_path: Option<&Path>) -> anyhow::Result<GuideService> {
    let catalog = match catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    Ok(GuideService::new(catalog))
}
