use rkn_guard_domain::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG`, when set, wins over the configured level.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", cfg.level, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    if cfg.json {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        builder.try_init().map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(())
}
