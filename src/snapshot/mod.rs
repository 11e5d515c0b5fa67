//! Statistics snapshot: the externally produced document and its loader

mod loader;
mod types;

pub(crate) use loader::{STDIN_PATH, SnapshotSource, load_snapshot};
pub(crate) use types::*;
