use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use migration_wizard::api::MigrationClient;
use migration_wizard::catalog;
use migration_wizard::config::Config;
use migration_wizard::logging;
use migration_wizard::rest::{self, ApiDoc, ApiState, RestApiServer};
use migration_wizard::types::{MigrationPlan, Module};
use migration_wizard::ui;
use migration_wizard::wizard::CatalogSource;

#[derive(Parser)]
#[command(name = "migration-wizard")]
#[command(about = "Guided EKS version migration wizard backed by a mock engine")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Where the terminal wizard gets its modules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// Start the API in-process and talk to it over loopback HTTP
    #[default]
    Embedded,
    /// Talk to the API at `client.base_url`
    Remote,
    /// Read the static catalog directly, no HTTP
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DocFormat {
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the mock migration API server
    Serve {
        /// Interface to bind, IP or hostname (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (default: 7008)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the terminal wizard (default command)
    Wizard {
        #[arg(short, long, value_enum, default_value_t = SourceKind::Embedded)]
        source: SourceKind,
    },

    /// Print the migration plan for a version pair
    Plan {
        #[arg(long)]
        source_version: String,

        #[arg(long)]
        target_version: String,

        /// Ask the API at `client.base_url` instead of the local catalog
        #[arg(long)]
        remote: bool,
    },

    /// List the modules of a phase
    Modules {
        /// Phase id (1-3)
        phase: u32,

        /// Ask the API at `client.base_url` instead of the local catalog
        #[arg(long)]
        remote: bool,
    },

    /// Print the OpenAPI document
    Openapi {
        #[arg(short, long, value_enum, default_value_t = DocFormat::Json)]
        format: DocFormat,
    },

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = matches!(cli.command, None | Some(Commands::Wizard { .. }));

    // File-based for the terminal wizard, stderr for everything else
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            cmd_serve(config, host, port).await?;
        }
        Some(Commands::Wizard { source }) => {
            run_wizard(config, source, logging_handle.log_file_path).await?;
        }
        Some(Commands::Plan {
            source_version,
            target_version,
            remote,
        }) => {
            cmd_plan(&config, &source_version, &target_version, remote).await?;
        }
        Some(Commands::Modules { phase, remote }) => {
            cmd_modules(&config, phase, remote).await?;
        }
        Some(Commands::Openapi { format }) => {
            cmd_openapi(format)?;
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        None => {
            run_wizard(config, SourceKind::default(), logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    let addr = config.server_addr().await?;

    println!("Starting migration API on http://{addr}");
    println!("  OpenAPI: http://{addr}/api/openapi.json");
    println!("Press Ctrl+C to stop");

    rest::serve(ApiState::new(&config), addr).await
}

async fn run_wizard(
    config: Config,
    source: SourceKind,
    log_file_path: Option<PathBuf>,
) -> Result<()> {
    let result = match source {
        SourceKind::Offline => ui::run(&config, &CatalogSource).await,
        SourceKind::Remote => {
            let client = MigrationClient::new(&config.client)?;
            ui::run(&config, &client).await
        }
        SourceKind::Embedded => {
            let loopback = SocketAddr::from(([127, 0, 0, 1], 0));
            let server = RestApiServer::new(ApiState::new(&config), loopback);
            server.start().await?;
            let base_url = server
                .base_url()
                .context("Embedded API did not report an address")?;
            let client = MigrationClient::with_base_url(
                &base_url,
                Duration::from_secs(config.client.timeout_secs),
            )?;
            let result = ui::run(&config, &client).await;
            server.stop().await;
            result
        }
    };

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

async fn cmd_plan(
    config: &Config,
    source_version: &str,
    target_version: &str,
    remote: bool,
) -> Result<()> {
    for version in [source_version, target_version] {
        if !catalog::is_known_version(version) {
            tracing::warn!(version, "Version is not in the supported EKS list");
        }
    }

    let plan: MigrationPlan = if remote {
        MigrationClient::new(&config.client)?
            .plan(source_version, target_version)
            .await?
    } else {
        catalog::build_plan(source_version, target_version)
    };

    println!(
        "Migration Plan: {} → {}",
        plan.source_version, plan.target_version
    );
    println!("{}", "─".repeat(60));
    println!("{}", plan.summary);
    Ok(())
}

async fn cmd_modules(config: &Config, phase: u32, remote: bool) -> Result<()> {
    let modules: Vec<Module> = if remote {
        MigrationClient::new(&config.client)?
            .step_modules(phase)
            .await?
    } else {
        catalog::modules_for_phase(phase)
    };

    if modules.is_empty() {
        println!("No modules for phase {phase}");
        return Ok(());
    }

    let title = catalog::phase(phase)
        .map(|p| p.name)
        .unwrap_or_else(|| format!("Phase {phase}"));
    println!("{title} ({} modules)", modules.len());
    println!("{}", "─".repeat(60));

    for module in &modules {
        println!("{} [{}]", module.title, module.id);
        println!("    {}", module.description);
        for (i, step) in module.steps().iter().enumerate() {
            println!("    {}. {}", i + 1, step.name);
        }
    }

    Ok(())
}

fn cmd_openapi(format: DocFormat) -> Result<()> {
    let doc = match format {
        DocFormat::Json => ApiDoc::json()?,
        DocFormat::Yaml => ApiDoc::yaml()?,
    };
    println!("{doc}");
    Ok(())
}
