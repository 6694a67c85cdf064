use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Installs a stderr logging layer. `--verbose` raises the default
/// level to DEBUG; `RUST_LOG` still overrides either way.
pub fn init(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };

    let filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(layer).init();
}
