use indexmap::IndexMap;

use crate::chart::format::ValueFormat;
use crate::chart::names::McpToolName;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec};
use crate::snapshot::{StatisticsSnapshot, ToolUsage};

const TOP_TOOLS: usize = 10;
const TOP_MCP_SERVERS: usize = 8;

const CATEGORY_BUILTIN: &str = "builtin";
const CATEGORY_MCP: &str = "mcp";
const CATEGORY_SUBAGENT: &str = "subagent";

fn in_category<'a>(
    view: &'a StatisticsSnapshot,
    category: &'a str,
) -> impl Iterator<Item = &'a ToolUsage> + 'a {
    view.tool_usage.iter().filter(move |t| t.category == category)
}

pub(crate) fn subagents(view: &StatisticsSnapshot) -> SlotSpec {
    let (labels, values): (Vec<String>, Vec<f64>) = in_category(view, CATEGORY_SUBAGENT)
        .take(TOP_TOOLS)
        .map(|t| (t.name.clone(), t.count as f64))
        .unzip();
    let spec = ChartSpec::doughnut(
        Slot::Subagents.title(),
        labels,
        values,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No subagent usage found")
}

pub(crate) fn tools(view: &StatisticsSnapshot) -> SlotSpec {
    let (labels, values): (Vec<String>, Vec<f64>) = in_category(view, CATEGORY_BUILTIN)
        .take(TOP_TOOLS)
        .map(|t| (t.name.clone(), t.count as f64))
        .unzip();
    let spec = ChartSpec::single(
        ChartKind::HorizontalBar,
        Slot::Tools.title(),
        labels,
        values,
        ValueFormat::Compact,
    )
    .with_tooltip_format(ValueFormat::Integer);
    SlotSpec::chart_or_empty(spec, "No tool usage found")
}

pub(crate) fn mcp_tools(view: &StatisticsSnapshot) -> SlotSpec {
    let (labels, values): (Vec<String>, Vec<f64>) = in_category(view, CATEGORY_MCP)
        .take(TOP_TOOLS)
        .map(|t| (McpToolName::parse(&t.name).tool, t.count as f64))
        .unzip();
    let spec = ChartSpec::single(
        ChartKind::HorizontalBar,
        Slot::McpTools.title(),
        labels,
        values,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No MCP tool usage found")
}

/// Grouped by server, summed, sorted descending, then truncated
pub(crate) fn mcp_servers(view: &StatisticsSnapshot) -> SlotSpec {
    let mut grouped: IndexMap<String, u64> = IndexMap::new();
    for tool in in_category(view, CATEGORY_MCP) {
        let total = grouped
            .entry(McpToolName::parse(&tool.name).server)
            .or_insert(0);
        *total = total.saturating_add(tool.count);
    }
    let mut servers: Vec<(String, u64)> = grouped.into_iter().collect();
    servers.sort_by(|a, b| b.1.cmp(&a.1));
    let (labels, values): (Vec<String>, Vec<f64>) = servers
        .into_iter()
        .take(TOP_MCP_SERVERS)
        .map(|(server, count)| (server, count as f64))
        .unzip();
    let spec = ChartSpec::doughnut(
        Slot::McpServers.title(),
        labels,
        values,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No MCP server usage found")
}

pub(crate) fn tool_success(view: &StatisticsSnapshot) -> SlotSpec {
    let top: Vec<_> = view.tool_success_rates.iter().take(TOP_TOOLS).collect();
    let labels = top.iter().map(|t| t.tool_name.clone()).collect();
    let series = vec![
        (
            "Success".to_string(),
            top.iter().map(|t| t.success_count as f64).collect(),
        ),
        (
            "Errors".to_string(),
            top.iter().map(|t| t.error_count as f64).collect(),
        ),
    ];
    let spec = ChartSpec::multi(
        ChartKind::StackedBar,
        Slot::ToolSuccess.title(),
        labels,
        series,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No tool result data")
}
