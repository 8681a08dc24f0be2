//! CLI command implementations for herocrawl.

pub(crate) mod check;
pub(crate) mod logging;
pub(crate) mod play;

use clap::ValueEnum;

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum CheckFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}
