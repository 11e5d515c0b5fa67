//! Snapshot loader
//!
//! Obtains the statistics document as given, without validation. The document
//! may be a plain JSON file, an exported dashboard page that embeds it as a
//! `window.CLAUDE_STATS = {...};` assignment, or a URL fetched once.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use crate::error::LoadError;
use crate::snapshot::StatisticsSnapshot;

/// Global the exported dashboard page assigns the snapshot to
const EMBED_MARKER: &str = "window.CLAUDE_STATS";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// `--stats -` reads the document from standard input
pub(crate) const STDIN_PATH: &str = "-";

/// Where the snapshot comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SnapshotSource {
    File(PathBuf),
    Url(String),
    /// Document text already in memory
    Embedded(String),
}

impl SnapshotSource {
    /// Interpret a user-supplied location as a URL or a file path
    pub(crate) fn resolve(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            SnapshotSource::Url(trimmed.to_string())
        } else {
            SnapshotSource::File(PathBuf::from(trimmed))
        }
    }

    /// Read the whole document from standard input
    pub(crate) fn from_stdin() -> Result<Self, LoadError> {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|source| LoadError::Io {
                path: PathBuf::from(STDIN_PATH),
                source,
            })?;
        Ok(SnapshotSource::Embedded(text))
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            SnapshotSource::File(path) => path.display().to_string(),
            SnapshotSource::Url(url) => url.clone(),
            SnapshotSource::Embedded(_) => "embedded document".to_string(),
        }
    }
}

/// Load the snapshot. There is exactly one attempt; failures are not retried.
pub(crate) fn load_snapshot(source: &SnapshotSource) -> Result<StatisticsSnapshot, LoadError> {
    debug!(source = %source.describe(), "loading statistics snapshot");
    let snapshot = match source {
        SnapshotSource::File(path) => {
            let text = read_file(path)?;
            if is_html(path) || text.contains(EMBED_MARKER) {
                parse_embedded(&text).ok_or_else(|| LoadError::MissingEmbedded {
                    path: path.clone(),
                })??
            } else {
                serde_json::from_str(&text)?
            }
        }
        SnapshotSource::Url(url) => serde_json::from_str(&fetch(url)?)?,
        SnapshotSource::Embedded(text) => match parse_embedded(text) {
            Some(parsed) => parsed?,
            None => serde_json::from_str(text)?,
        },
    };
    info!(
        days = snapshot.daily_activity.len(),
        projects = snapshot.project_stats.len(),
        "statistics snapshot loaded"
    );
    Ok(snapshot)
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Parse the first JSON value assigned to the embed marker.
///
/// Returns `None` when the marker is absent.
fn parse_embedded(text: &str) -> Option<Result<StatisticsSnapshot, LoadError>> {
    let start = text.find(EMBED_MARKER)? + EMBED_MARKER.len();
    let rest = text[start..].trim_start();
    let rest = rest.strip_prefix('=')?;
    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<StatisticsSnapshot>();
    stream.next().map(|result| result.map_err(LoadError::from))
}

fn fetch(url: &str) -> Result<String, LoadError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(FETCH_TIMEOUT))
        .build()
        .into();

    let fetch_error = |e: ureq::Error| LoadError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    };
    let response = agent.get(url).call().map_err(fetch_error)?;
    response.into_body().read_to_string().map_err(fetch_error)
}
