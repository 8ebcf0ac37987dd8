//! This is the `Config` struct for the connector.
//!
//! Configuration is a small HCL file holding the vendor API key, the sink
//! endpoint and a debug flag.  We look for it in the platform-specific
//! configuration directory unless a path is given on the command line, and
//! the API key can always be overridden through the environment so that the
//! secret never has to live on disk.
//!

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::{env, fs};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::Deserialize;
use tracing::{debug, trace};

/// Config filename
const CONFIG: &str = "config.hcl";

/// Main name for the directory base
const TAG: &str = "dronewatch";

/// Current version of the config file format
const CVERSION: usize = 1;

/// Environment variable overriding the `api_key` entry
pub const API_KEY_VAR: &str = "DWCTL_API_KEY";

/// Configuration for the connector: credentials for the vendor API, where to
/// submit the resulting feature collection and whether we want debug output.
///
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version, must match `CVERSION`.
    pub version: usize,
    /// Vendor API key, required unless `DWCTL_API_KEY` is set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Override for the vendor base URL (handy for testing).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Endpoint of the downstream feature-collection sink.
    pub sink_url: String,
    /// Debug mode, diagnostics only.
    #[serde(default)]
    pub debug: bool,
}

impl Config {
    /// Returns the path of the default config file
    ///
    #[tracing::instrument]
    pub fn default_file() -> PathBuf {
        let basedir = match BaseDirs::new() {
            Some(base) => base.home_dir().join(".config"),
            None => PathBuf::from(env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config"),
        };
        let cfg = basedir.join(TAG).join(CONFIG);
        debug!("default = {cfg:?}");
        cfg
    }

    /// Load the configuration.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on $HOME)
    ///
    /// The `DWCTL_API_KEY` environment variable, when present, takes
    /// precedence over the `api_key` entry in the file.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Config> {
        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => Self::default_file(),
        };

        if !fname.exists() {
            return Err(eyre!(
                "Unknown config file {:?} and no default in {:?}",
                fname,
                Self::default_file()
            ));
        }

        trace!("Loading config file {fname:?}");

        let data = fs::read_to_string(fname)?;
        let mut cfg = Self::from_hcl(&data)?;

        if let Ok(key) = env::var(API_KEY_VAR) {
            trace!("api_key taken from {}", API_KEY_VAR);
            cfg.api_key = Some(key);
        }
        Ok(cfg)
    }

    /// Parse a config file from a string, enforcing the version tag.
    ///
    pub fn from_hcl(data: &str) -> Result<Config> {
        let cfg: Config = hcl::from_str(data)?;
        if cfg.version != CVERSION {
            return Err(eyre!(
                "Bad config version {}, expected {}",
                cfg.version,
                CVERSION
            ));
        }
        Ok(cfg)
    }

    /// The vendor API key is required before any network call is made.
    ///
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| eyre!("No API key, set `api_key` in the config or {}", API_KEY_VAR))
    }
}

impl Display for Config {
    /// Obfuscate the API key
    ///
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut hidden = self.clone();
        if hidden.api_key.is_some() {
            hidden.api_key = Some("HIDDEN".to_string());
        }
        write!(f, "{:?}", hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &str = r##"
version = 1
api_key = "deadbeef"
sink_url = "https://cot.example.net/api/features"
"##;

    #[test]
    fn test_config_from_hcl() -> Result<()> {
        let cfg = Config::from_hcl(GOOD)?;
        assert_eq!("deadbeef", cfg.api_key()?);
        assert_eq!("https://cot.example.net/api/features", cfg.sink_url);
        assert!(cfg.base_url.is_none());
        assert!(!cfg.debug);
        Ok(())
    }

    #[test]
    fn test_config_bad_version() {
        let data = GOOD.replace("version = 1", "version = 42");
        assert!(Config::from_hcl(&data).is_err());
    }

    #[test]
    fn test_config_missing_key() -> Result<()> {
        let data = GOOD.replace("api_key = \"deadbeef\"", "");
        let cfg = Config::from_hcl(&data)?;
        assert!(cfg.api_key().is_err());
        Ok(())
    }

    #[test]
    fn test_config_hides_key() -> Result<()> {
        let cfg = Config::from_hcl(GOOD)?;
        let s = format!("{}", cfg);
        assert!(!s.contains("deadbeef"));
        assert!(s.contains("HIDDEN"));
        Ok(())
    }
}
