use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber for `filter`.
///
/// Only the first call takes effect.
pub fn init(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(error = %e, "log subscriber already installed");
    }
    Ok(())
}
