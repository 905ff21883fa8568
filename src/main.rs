//! Error Generator
//!
//! A test-fixture HTTP service that injects failures on purpose.
//!
//! # Routes
//!
//! ```text
//!  GET /health          200, never counted
//!  GET /generate-error  500, always (?type=<kind>)
//!  GET /random-error    500 with probability 0.30, else 200
//!  GET /timeout         200 after a 10 second hang
//!  GET /metrics         request/error counters as JSON
//! ```

use clap::Parser;
use std::path::PathBuf;

use error_generator::lifecycle::{bind_listener, resolve_config, Overrides};
use error_generator::observability::logging;
use error_generator::HttpServer;

#[derive(Parser)]
#[command(name = "error-generator")]
#[command(about = "HTTP fixture that injects errors and hangs on demand", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(&Overrides {
        config_path: cli.config,
        port: cli.port,
        log_level: cli.log_level,
    })?;

    logging::init(&config.observability.log_level);

    tracing::info!(
        service = %config.service_name,
        bind_address = %config.listener.bind_address,
        error_probability = config.faults.error_probability,
        hang_secs = config.faults.hang_secs,
        "Configuration loaded"
    );

    let listener = match bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let server = HttpServer::new(config);
    server.run(listener).await?;

    Ok(())
}
