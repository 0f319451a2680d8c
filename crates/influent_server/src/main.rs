//! Influent Generator Server
//!
//! REST API serving synthetic raw wastewater samples.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use influent_server::config::{build_config, CliArgs as ConfigCliArgs, ServerConfig};
use influent_server::server::Server;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Influent Generator API - synthetic wastewater influent samples
#[derive(Parser, Debug)]
#[command(name = "influent_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "INFLUENT_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "INFLUENT_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "INFLUENT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Deployment environment (development, production)
    #[arg(short, long, env = "INFLUENT_ENV")]
    environment: Option<String>,

    /// Seed for a reproducible sample stream
    #[arg(long, env = "INFLUENT_SEED")]
    seed: Option<u64>,

    /// Port for the Prometheus metrics exporter
    #[arg(long, env = "INFLUENT_METRICS_PORT")]
    metrics_port: Option<u16>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            environment: args.environment,
            seed: args.seed,
            metrics_port: args.metrics_port,
        }
    }
}

fn init_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::default()
                .add_directive(LevelFilter::from_level(config.log_level).into())
        });

    // JSON lines in production for log shippers
    let registry = tracing_subscriber::registry().with(filter);
    if config.environment.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn install_metrics_exporter(config: &ServerConfig) -> anyhow::Result<()> {
    let Some(port) = config.metrics_port else {
        return Ok(());
    };

    let ip = config
        .host
        .parse()
        .with_context(|| format!("metrics exporter needs an IP host, got {}", config.host))?;
    let addr = SocketAddr::new(ip, port);

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .context("failed to install Prometheus exporter")?;

    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(&config);

    tracing::info!("Influent Generator Server v{}", influent_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        seed = ?config.seed,
        metrics_port = ?config.metrics_port,
        "Server configuration loaded"
    );

    install_metrics_exporter(&config)?;

    let server = Server::new(config);
    tracing::info!(address = %server.bind_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
