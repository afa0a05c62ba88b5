//! HTTP API starter service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use api_starter::api::{create_router, AppState};
use api_starter::config::Config;
use api_starter::error::AppError;
use api_starter::utils::shutdown_signal;

/// HTTP API starter service.
#[derive(Parser, Debug)]
#[command(name = "api-starter")]
#[command(about = "Minimal HTTP API skeleton with health checks and OpenAPI docs")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Override the bind host from configuration.
    #[arg(long, global = true)]
    host: Option<String>,

    /// Override the bind port from configuration.
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Run,

    /// Check configuration validity without binding a listener.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Run) | None => cmd_run(args.verbose, args.host, args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("API STARTER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Service Name: {}", config.service_name);
    println!("  Environment:  {}", config.environment);
    println!("  Debug:        {}", config.debug);
    println!("  Bind Address: {}", config.socket_addr());
    println!(
        "  API Key:      {}",
        if config.api_key.is_some() { "present" } else { "not set" }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until shutdown.
async fn cmd_run(
    verbose: bool,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Load configuration before logging so RUST_LOG from a .env file and
    // its documented default can feed the filter.
    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {e}");
        AppError::from(e)
    })?;

    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    // Initialize logging
    let filter = if verbose {
        EnvFilter::new("api_starter=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Validate configuration before binding anything
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    info!("Configuration loaded successfully");
    info!("Service: {} ({})", config.service_name, config.environment);

    // Build state and route table
    let addr = config.socket_addr();
    let state = AppState::new(config);
    let router = create_router(state);

    // Bind listener; a taken port is fatal
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind {}: {}", addr, e);
        AppError::Io(e)
    })?;
    info!("HTTP server listening on {}", addr);
    info!("Interactive docs available at http://{}/docs", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
