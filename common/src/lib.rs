//! This library shares the common code amongst all dronewatch modules.
//!

use clap::{crate_name, crate_version};

pub use config::*;
pub use logging::*;

mod config;
mod logging;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
