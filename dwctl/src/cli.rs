//! Module describing all possible commands and sub-commands to the `dwctl`
//! main driver
//!
//! We have two entry points for the same one-shot cycle:
//!
//! - `run` is the direct invocation, with banner,
//! - `cron` is the scheduled invocation, quiet on success.
//!
//! Both fetch the full drone array once, convert every record into a feature
//! and submit the collection; there are no flags beyond config and debug and
//! no exit-code contract beyond non-zero on failure.
//!

use std::path::PathBuf;

use clap::{crate_description, crate_name, crate_version, Parser};

/// CLI options
#[derive(Debug, Parser)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// debug mode.
    #[clap(short = 'D', long = "debug")]
    pub debug: bool,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `run`
/// `cron`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Run one fetch/transform/submit cycle now
    Run,
    /// Same cycle, invoked from the scheduler
    Cron,
    /// Display module versions
    Version,
}
