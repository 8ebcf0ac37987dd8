//! Common logging initializer
//!

use eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialise logging early.
///
/// Filters come from the environment (`RUST_LOG`) as usual; the debug flag
/// only lowers the default level, it never changes behaviour.
///
pub fn init_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::from_default_env()
    };

    // Specific format
    //
    let fmt = fmt::layer().with_target(false).compact();

    // Combine filter & format
    //
    tracing_subscriber::registry().with(filter).with(fmt).init();

    Ok(())
}
