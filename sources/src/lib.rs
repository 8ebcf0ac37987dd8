//! Module to deal with the outside of the connector: the vendor API we fetch
//! drone telemetry from and the sink we submit feature collections to.
//!
//! The two traits keep the poll cycle independent from the concrete HTTP
//! endpoints:
//!
//! - `Fetchable` covers authentication (API key header) and fetching one
//!   validated batch of records,
//! - `Submit` covers handing the assembled collection downstream.
//!

use std::fmt::Debug;

use clap::{crate_name, crate_version};

use dronewatch_formats::{DroneLocation, FeatureCollection};

// Re-export these modules for a shorter import path.
//
pub use dronesense::*;
pub use error::*;
pub use sink::*;

mod dronesense;
mod error;
mod sink;

#[macro_use]
mod macros;

/// A source we can fetch one batch of drone-location records from.
///
/// Validation is part of fetching: a batch with any malformed record is
/// rejected whole, there is no partial acceptance.
///
pub trait Fetchable: Debug {
    /// Return the source's name
    fn name(&self) -> String;
    /// Fetch and validate the full record array
    fn fetch(&self) -> Result<Vec<DroneLocation>, SourceError>;
}

/// A sink we can submit one completed feature collection to, as one unit.
///
pub trait Submit: Debug {
    /// Return the sink's name
    fn name(&self) -> String;
    /// Submit the collection
    fn submit(&self, fc: &FeatureCollection) -> Result<(), SourceError>;
}

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
