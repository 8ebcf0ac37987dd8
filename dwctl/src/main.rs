use clap::{crate_authors, crate_description, crate_version, Parser};
use eyre::Result;

use dronewatch_common::{init_logging, Config};
use dwctl::{run_cycle, Opts, SubCommand};

/// Binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Config holds the credentials and the sink endpoint.
    //
    let cfg = Config::load(opts.config.as_deref())?;

    // Initialise logging.
    //
    init_logging(opts.debug || cfg.debug)?;

    match opts.subcmd {
        // Direct invocation
        //
        SubCommand::Run => {
            banner();
            run_cycle(&cfg)?;
        }

        // Scheduled invocation, same cycle, quiet on success
        //
        SubCommand::Cron => {
            run_cycle(&cfg)?;
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", dronewatch_common::version());
            eprintln!("\t{}", dronewatch_formats::version());
            eprintln!("\t{}", dronewatch_sources::version());
        }
    }
    Ok(())
}

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}

/// Display banner
///
fn banner() {
    eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    )
}
