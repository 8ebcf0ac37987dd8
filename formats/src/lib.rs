//! Definition of the data formats.
//!
//! This module makes the link between the vendor input format
//! (`DroneLocation`, one record per drone per poll) and the shared output
//! format (`Feature`, the exchange unit with the situational-awareness sink).
//!
//! To add a new vendor, insert a `VENDOR.rs` file defining the input format
//! and a `From<&VENDOR> for Feature` with the transformations needed.
//!

use clap::{crate_name, crate_version};

// Re-export for convenience
//
pub use dronesense::*;
pub use feature::*;
pub use geo::*;

mod dronesense;
mod feature;
mod geo;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
