//! DroneSense site-specifics
//!
//! One authenticated GET returns every drone the fleet currently reports,
//! with its onboard sensors, as a JSON array.  Authentication is a plain
//! `X-API-KEY` header, no token exchange.  There is no pagination and no
//! retry: any failure rejects the whole batch and the next scheduled poll is
//! the recovery mechanism.
//!
//! This implements the `Fetchable` trait described in `lib.rs`.
//!

use std::fmt::{Display, Formatter};

use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use tracing::{debug, trace};

use dronewatch_formats::DroneLocation;

use crate::{http_get_key, Fetchable, SourceError};

/// Production endpoint base
pub const DEF_SITE_URL: &str = "https://api.dronesense.com";

/// Added to `base_url` to fetch data
const GET_PATH: &str = "/v1/drones/with-sensors";

/// This describes the DroneSense fleet API as a source.
///
#[derive(Clone, Debug)]
pub struct DroneSense {
    /// Base site url, overridable from config
    pub base_url: String,
    /// Auth data, API key
    pub api_key: String,
    /// reqwest blocking client
    pub client: Client,
}

impl DroneSense {
    pub fn new(api_key: &str) -> Self {
        DroneSense {
            base_url: DEF_SITE_URL.to_owned(),
            api_key: api_key.to_owned(),
            client: Client::new(),
        }
    }

    /// Point the source at a different base URL (tests, staging).
    ///
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_owned();
        self
    }
}

impl Display for DroneSense {
    /// Obfuscate the API key
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "dronesense({}, key=HIDDEN)", self.base_url)
    }
}

impl Fetchable for DroneSense {
    fn name(&self) -> String {
        "dronesense".to_string()
    }

    /// Fetch and validate the full record array in a single call.
    ///
    /// Deserialization doubles as schema validation: a single record with a
    /// missing required field fails the whole batch.
    ///
    #[tracing::instrument(skip(self))]
    fn fetch(&self) -> Result<Vec<DroneLocation>, SourceError> {
        trace!("dronesense::fetch");

        let url = format!("{}{}", self.base_url, GET_PATH);
        let key = &self.api_key;
        trace!("Fetching data through {}…", url);

        let resp = http_get_key!(self, url, key)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let resp = resp.text()?;
        debug!("{} bytes read.", resp.len());

        let data: Vec<DroneLocation> = serde_json::from_str(&resp)?;
        debug!("{} records.", data.len());
        Ok(data)
    }
}
