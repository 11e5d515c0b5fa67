//! Chart slots: the named placeholders of the dashboard layout

use serde::Serialize;

use crate::chart::binders;
use crate::chart::spec::SlotSpec;
use crate::snapshot::StatisticsSnapshot;

/// A binder maps a derived view to the spec for one slot
pub(crate) type Binder = fn(&StatisticsSnapshot) -> SlotSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Slot {
    Overview,
    Activity,
    ModelTokens,
    Hourly,
    TokensOverTime,
    Projects,
    Subagents,
    Tools,
    McpTools,
    McpServers,
    Commands,
    CostByModel,
    CostOverTime,
    Cache,
    Durations,
    Errors,
    Tasks,
    Plans,
    ToolSuccess,
    FileEdits,
    Thinking,
    Depth,
}

impl Slot {
    /// Every slot, in render order
    pub(crate) const ALL: [Slot; 22] = [
        Slot::Overview,
        Slot::Activity,
        Slot::ModelTokens,
        Slot::Hourly,
        Slot::TokensOverTime,
        Slot::Projects,
        Slot::Subagents,
        Slot::Tools,
        Slot::McpTools,
        Slot::McpServers,
        Slot::Commands,
        Slot::CostByModel,
        Slot::CostOverTime,
        Slot::Cache,
        Slot::Durations,
        Slot::Errors,
        Slot::Tasks,
        Slot::Plans,
        Slot::ToolSuccess,
        Slot::FileEdits,
        Slot::Thinking,
        Slot::Depth,
    ];

    pub(crate) fn id(self) -> &'static str {
        match self {
            Slot::Overview => "overview",
            Slot::Activity => "activity",
            Slot::ModelTokens => "model-tokens",
            Slot::Hourly => "hourly",
            Slot::TokensOverTime => "tokens-over-time",
            Slot::Projects => "projects",
            Slot::Subagents => "subagents",
            Slot::Tools => "tools",
            Slot::McpTools => "mcp-tools",
            Slot::McpServers => "mcp-servers",
            Slot::Commands => "commands",
            Slot::CostByModel => "cost-by-model",
            Slot::CostOverTime => "cost-over-time",
            Slot::Cache => "cache",
            Slot::Durations => "durations",
            Slot::Errors => "errors",
            Slot::Tasks => "tasks",
            Slot::Plans => "plans",
            Slot::ToolSuccess => "tool-success",
            Slot::FileEdits => "file-edits",
            Slot::Thinking => "thinking",
            Slot::Depth => "depth",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Slot::Overview => "Overview",
            Slot::Activity => "Daily Activity",
            Slot::ModelTokens => "Tokens by Model",
            Slot::Hourly => "Activity by Hour",
            Slot::TokensOverTime => "Token Usage Over Time",
            Slot::Projects => "Top Projects",
            Slot::Subagents => "Subagent Usage",
            Slot::Tools => "Top Tools",
            Slot::McpTools => "MCP Tools",
            Slot::McpServers => "MCP Servers",
            Slot::Commands => "Slash Commands",
            Slot::CostByModel => "Cost by Model",
            Slot::CostOverTime => "Cost Over Time",
            Slot::Cache => "Cache Efficiency",
            Slot::Durations => "Turn Durations",
            Slot::Errors => "API Errors",
            Slot::Tasks => "Task Status",
            Slot::Plans => "Plan Activity",
            Slot::ToolSuccess => "Tool Success Rates",
            Slot::FileEdits => "File Edits",
            Slot::Thinking => "Extended Thinking",
            Slot::Depth => "Conversation Depth",
        }
    }

    pub(crate) fn binder(self) -> Binder {
        match self {
            Slot::Overview => binders::overview,
            Slot::Activity => binders::activity,
            Slot::ModelTokens => binders::model_tokens,
            Slot::Hourly => binders::hourly,
            Slot::TokensOverTime => binders::tokens_over_time,
            Slot::Projects => binders::projects,
            Slot::Subagents => binders::subagents,
            Slot::Tools => binders::tools,
            Slot::McpTools => binders::mcp_tools,
            Slot::McpServers => binders::mcp_servers,
            Slot::Commands => binders::commands,
            Slot::CostByModel => binders::cost_by_model,
            Slot::CostOverTime => binders::cost_over_time,
            Slot::Cache => binders::cache,
            Slot::Durations => binders::durations,
            Slot::Errors => binders::errors,
            Slot::Tasks => binders::tasks,
            Slot::Plans => binders::plans,
            Slot::ToolSuccess => binders::tool_success,
            Slot::FileEdits => binders::file_edits,
            Slot::Thinking => binders::thinking,
            Slot::Depth => binders::depth,
        }
    }

    pub(crate) fn bind(self, view: &StatisticsSnapshot) -> SlotSpec {
        (self.binder())(view)
    }
}
