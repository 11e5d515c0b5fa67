//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Print every chart slot's spec as JSON (default)
    Charts,
    /// Print the date-restricted statistics view as JSON
    View,
    /// Show a table of headline figures and slot status
    Summary,
}
