/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Snapshot file name written by the stats generator
pub(crate) const DEFAULT_STATS_FILE: &str = "stats.json";

/// Message shown instead of a dashboard when the snapshot cannot be loaded
pub(crate) const LOAD_FAILURE_MESSAGE: &str =
    "Failed to load statistics. Run the stats generator first.";

/// Label for records whose category field is blank
pub(crate) const UNKNOWN: &str = "unknown";
