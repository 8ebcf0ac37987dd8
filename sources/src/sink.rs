//! Feature-collection sink.
//!
//! The downstream situational-awareness system takes the whole collection in
//! one POST.  Submission is atomic from our point of view: either the whole
//! collection goes through or the cycle fails, there is no partial upload.
//!

use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use tracing::{debug, trace};

use dronewatch_formats::FeatureCollection;

use crate::{http_post, SourceError, Submit};

/// HTTP implementation of the `Submit` trait.
///
#[derive(Clone, Debug)]
pub struct CotSink {
    /// Full submission endpoint, from config
    pub url: String,
    /// reqwest blocking client
    pub client: Client,
}

impl CotSink {
    pub fn new(url: &str) -> Self {
        CotSink {
            url: url.to_owned(),
            client: Client::new(),
        }
    }
}

impl Submit for CotSink {
    fn name(&self) -> String {
        "cot-sink".to_string()
    }

    /// Submit the completed collection as one unit.
    ///
    #[tracing::instrument(skip(self, fc))]
    fn submit(&self, fc: &FeatureCollection) -> Result<(), SourceError> {
        trace!("sink::submit");

        let url = &self.url;
        let resp = http_post!(self, url, fc)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        debug!("{} features submitted.", fc.len());
        Ok(())
    }
}
