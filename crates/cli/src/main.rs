use clap::Parser;
use dnsrpc_application::ports::ResultCachePort;
use dnsrpc_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsrpc")]
#[command(version)]
#[command(about = "DNS RPC server - commands in, TXT records out")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsrpc v{}", env!("CARGO_PKG_VERSION"));
    info!(
        dns_ttl_secs = config.providers.dns_ttl_secs,
        timeout_secs = config.providers.timeout_secs,
        "Outbound provider settings"
    );

    let services = di::Services::new(&config)?;
    let cache = services.cache.clone();

    tokio::select! {
        result = server::start_dns_server(&config.server, services.handler) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!(cached_results = cache.len(), "Server shutdown complete");
    Ok(())
}
