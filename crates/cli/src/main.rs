use clap::Parser;
use rkn_guard_domain::CliOverrides;
use rkn_guard_jobs::JobRunner;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rkn-guard")]
#[command(version)]
#[command(about = "RKN Guard - URL blocklist checker backed by the RKN registry")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    http_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Registry API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Registry update interval in seconds
    #[arg(long, value_name = "SECS")]
    update_interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        http_port: cli.http_port,
        bind_address: cli.bind.clone(),
        base_url: cli.base_url.clone(),
        update_interval_secs: cli.update_interval,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging)?;

    info!("Starting RKN Guard v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();

    let registry = di::RegistryServices::new(&config)?;
    let use_cases = di::UseCases::new(&config, &registry);

    let job_handles = JobRunner::new()
        .with_registry_update(di::registry_update_job(&config, &use_cases))
        .with_shutdown_token(shutdown.clone())
        .start();
    info!(jobs = job_handles.len(), "Background jobs started");

    tokio::spawn(server::wait_for_signal(shutdown.clone()));

    let web_addr = config.server.socket_addr()?;

    let served = server::start_web_server(web_addr, use_cases.app_state(), shutdown.clone()).await;
    if let Err(e) = &served {
        error!(error = %e, "Web server error");
    }

    // The server may also stop on its own; make sure the jobs follow.
    shutdown.cancel();
    for handle in job_handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job panicked");
        }
    }

    info!("Server shutdown complete");
    served
}
