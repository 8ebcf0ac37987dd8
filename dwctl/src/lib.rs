//! Library part of the `dwctl` binary, mainly there so the poll cycle can be
//! driven from the integration tests.
//!

pub use cli::*;
pub use cycle::*;

mod cli;
mod cycle;
