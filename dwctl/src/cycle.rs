//! The one-shot poll cycle.
//!
//! Strictly linear: fetch and validate the whole batch, convert each record
//! in input order, submit the collection once, exit.  Any fetch or
//! validation failure aborts before submission; nothing is retried and
//! nothing is kept across invocations.
//!

use eyre::Result;
use tracing::{info, trace};

use dronewatch_common::Config;
use dronewatch_formats::{Feature, FeatureCollection};
use dronewatch_sources::{CotSink, DroneSense, Fetchable, Submit};

/// Run exactly one cycle against the configured endpoints, returning the
/// number of features submitted.
///
#[tracing::instrument(skip(cfg))]
pub fn run_cycle(cfg: &Config) -> Result<usize> {
    // Configuration error surfaces before any network call.
    //
    let key = cfg.api_key()?;

    let mut site = DroneSense::new(key);
    if let Some(base_url) = &cfg.base_url {
        site = site.with_base_url(base_url);
    }
    let sink = CotSink::new(&cfg.sink_url);

    trace!("fetching from {}", site.name());
    let data = site.fetch()?;
    trace!("{} records fetched", data.len());

    // One feature per record, input order preserved.
    //
    let features: Vec<Feature> = data.iter().map(Feature::from).collect();
    let fc = FeatureCollection::new(features);

    sink.submit(&fc)?;
    info!("{} features submitted to {}", fc.len(), sink.name());

    Ok(fc.len())
}
