//! Statistics snapshot data model
//!
//! Mirrors the camelCase JSON document written by the stats generator. Every
//! optional section is deserialized leniently: a missing, null or malformed
//! sub-object becomes `None` (or an empty collection) instead of failing the
//! whole document.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a value, falling back to `T::default()` when it has the wrong shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a sequence, dropping elements that have the wrong shape
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Records that carry a calendar date (`YYYY-MM-DD`)
pub(crate) trait Dated {
    fn date(&self) -> &str;
}

macro_rules! impl_dated {
    ($($ty:ty),* $(,)?) => {
        $(impl Dated for $ty {
            fn date(&self) -> &str {
                &self.date
            }
        })*
    };
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DailyActivity {
    pub(crate) date: String,
    pub(crate) message_count: u64,
    pub(crate) session_count: u64,
    pub(crate) tool_call_count: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DailyModelTokens {
    pub(crate) date: String,
    pub(crate) tokens_by_model: IndexMap<String, u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ModelUsage {
    pub(crate) model: String,
    pub(crate) input_tokens: u64,
    pub(crate) output_tokens: u64,
    pub(crate) cache_read_tokens: u64,
    pub(crate) cache_creation_tokens: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct LongestSession {
    pub(crate) session_id: String,
    pub(crate) duration_ms: u64,
    pub(crate) message_count: u64,
    pub(crate) timestamp: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ProjectStats {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) session_count: u64,
    pub(crate) message_count: u64,
    pub(crate) first_session: Option<String>,
    pub(crate) last_session: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ToolUsage {
    pub(crate) name: String,
    pub(crate) count: u64,
    /// "builtin", "mcp" or "subagent"
    pub(crate) category: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SlashCommandUsage {
    pub(crate) command: String,
    pub(crate) count: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DailyCost {
    pub(crate) date: String,
    pub(crate) cost: f64,
    /// Absent in snapshots written before per-model daily costs existed
    pub(crate) cost_by_model: IndexMap<String, f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CostEstimate {
    pub(crate) total_cost_usd: f64,
    pub(crate) cost_by_model: IndexMap<String, f64>,
    #[serde(deserialize_with = "lenient_seq")]
    pub(crate) cost_by_day: Vec<DailyCost>,
    pub(crate) cache_savings_usd: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CacheMetrics {
    pub(crate) total_cache_read_tokens: u64,
    pub(crate) total_cache_write_tokens: u64,
    /// Snapshot-wide ratio, not broken down per day
    pub(crate) cache_hit_ratio: f64,
    pub(crate) tokens_saved: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TurnDuration {
    pub(crate) date: String,
    pub(crate) avg_duration_ms: f64,
    pub(crate) p50_ms: f64,
    pub(crate) p95_ms: f64,
    pub(crate) p99_ms: f64,
    pub(crate) count: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ApiError {
    pub(crate) date: String,
    pub(crate) error_type: String,
    pub(crate) count: u64,
    pub(crate) avg_retry_ms: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TaskStats {
    pub(crate) total_created: u64,
    pub(crate) total_completed: u64,
    pub(crate) completion_rate: f64,
    pub(crate) by_status: IndexMap<String, u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct FileEditStats {
    pub(crate) total_files_edited: u64,
    pub(crate) total_versions: u64,
    pub(crate) by_session: IndexMap<String, u64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ThinkingUsage {
    pub(crate) sessions_with_thinking: u64,
    pub(crate) total_thinking_blocks: u64,
    pub(crate) total_thinking_tokens: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct DatedCount {
    pub(crate) date: String,
    pub(crate) count: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct PlanStats {
    pub(crate) total_plans: u64,
    #[serde(deserialize_with = "lenient_seq")]
    pub(crate) by_date: Vec<DatedCount>,
    pub(crate) avg_plan_lines: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SessionDepth {
    pub(crate) max_depth: u64,
    pub(crate) avg_depth: f64,
    pub(crate) sessions_with_children: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ToolSuccessRate {
    pub(crate) tool_name: String,
    pub(crate) total_calls: u64,
    pub(crate) success_count: u64,
    pub(crate) error_count: u64,
    pub(crate) success_rate: f64,
}

impl_dated!(
    DailyActivity,
    DailyModelTokens,
    DailyCost,
    TurnDuration,
    ApiError,
    DatedCount,
);

/// The full, unfiltered statistics document.
///
/// A derived view has the same shape, so the recalculator returns this type too.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatisticsSnapshot {
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) generated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) claude_folder_path: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) first_session_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) last_computed_date: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub(crate) total_sessions: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) total_messages: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) total_tool_calls: u64,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) total_projects: u64,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) daily_activity: Vec<DailyActivity>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) daily_model_tokens: Vec<DailyModelTokens>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) model_usage: Vec<ModelUsage>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) longest_session: Option<LongestSession>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) hour_counts: IndexMap<String, u64>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) project_stats: Vec<ProjectStats>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) tool_usage: Vec<ToolUsage>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) slash_command_usage: Vec<SlashCommandUsage>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) enabled_plugins: Vec<String>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) installed_plugins: Vec<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub(crate) cost_estimate: Option<CostEstimate>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) cache_metrics: Option<CacheMetrics>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) turn_durations: Vec<TurnDuration>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) api_errors: Vec<ApiError>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) task_stats: Option<TaskStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) file_edit_stats: Option<FileEditStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) thinking_usage: Option<ThinkingUsage>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) plan_stats: Option<PlanStats>,
    #[serde(default, deserialize_with = "lenient")]
    pub(crate) session_depth: Option<SessionDepth>,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub(crate) tool_success_rates: Vec<ToolSuccessRate>,

    /// Keys this model does not know about, carried through untouched
    #[serde(flatten)]
    pub(crate) extra: IndexMap<String, serde_json::Value>,
}
