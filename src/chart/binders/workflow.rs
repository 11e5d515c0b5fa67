use crate::chart::format::ValueFormat;
use crate::chart::names::humanize;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec, StatsSpec};
use crate::snapshot::StatisticsSnapshot;

/// Known task statuses, in display order. Others follow in encountered order.
const TASK_STATUS_ORDER: [&str; 4] = ["completed", "in_progress", "pending", "cancelled"];

pub(crate) fn tasks(view: &StatisticsSnapshot) -> SlotSpec {
    let title = Slot::Tasks.title();
    let Some(stats) = &view.task_stats else {
        return SlotSpec::empty(title, "No task data");
    };
    let known = TASK_STATUS_ORDER
        .iter()
        .filter_map(|status| stats.by_status.get_key_value(*status));
    let unknown = stats
        .by_status
        .iter()
        .filter(|(status, _)| !TASK_STATUS_ORDER.contains(&status.as_str()));
    let (labels, values): (Vec<String>, Vec<f64>) = known
        .chain(unknown)
        .filter(|(_, count)| **count > 0)
        .map(|(status, count)| (humanize(status), *count as f64))
        .unzip();
    let spec = ChartSpec::doughnut(title, labels, values, ValueFormat::Integer);
    SlotSpec::chart_or_empty(spec, "No task data")
}

pub(crate) fn plans(view: &StatisticsSnapshot) -> SlotSpec {
    let days = view
        .plan_stats
        .as_ref()
        .map(|p| p.by_date.as_slice())
        .unwrap_or_default();
    let labels = days.iter().map(|d| d.date.clone()).collect();
    let values = days.iter().map(|d| d.count as f64).collect();
    let spec = ChartSpec::single(
        ChartKind::Bar,
        Slot::Plans.title(),
        labels,
        values,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No plans created in the selected range")
}

pub(crate) fn file_edits(view: &StatisticsSnapshot) -> SlotSpec {
    let title = Slot::FileEdits.title();
    let Some(edits) = view
        .file_edit_stats
        .as_ref()
        .filter(|e| e.total_files_edited > 0)
    else {
        return SlotSpec::empty(title, "No file edit history found");
    };
    let per_file = edits.total_versions as f64 / edits.total_files_edited as f64;
    SlotSpec::Stats(
        StatsSpec::new(title)
            .item("Files Edited", edits.total_files_edited as f64, ValueFormat::Integer)
            .item("Versions", edits.total_versions as f64, ValueFormat::Integer)
            .item("Sessions", edits.by_session.len() as f64, ValueFormat::Integer)
            .item("Avg Versions per File", per_file, ValueFormat::Decimal),
    )
}

pub(crate) fn thinking(view: &StatisticsSnapshot) -> SlotSpec {
    let title = Slot::Thinking.title();
    let Some(usage) = view
        .thinking_usage
        .as_ref()
        .filter(|t| t.sessions_with_thinking > 0 || t.total_thinking_blocks > 0)
    else {
        return SlotSpec::empty(title, "No extended thinking usage");
    };
    SlotSpec::Stats(
        StatsSpec::new(title)
            .item(
                "Sessions With Thinking",
                usage.sessions_with_thinking as f64,
                ValueFormat::Integer,
            )
            .item(
                "Thinking Blocks",
                usage.total_thinking_blocks as f64,
                ValueFormat::Compact,
            )
            .item(
                "Thinking Tokens",
                usage.total_thinking_tokens as f64,
                ValueFormat::Compact,
            ),
    )
}

pub(crate) fn depth(view: &StatisticsSnapshot) -> SlotSpec {
    let title = Slot::Depth.title();
    let Some(depth) = view.session_depth.as_ref().filter(|d| d.max_depth > 0) else {
        return SlotSpec::empty(title, "No conversation depth data");
    };
    SlotSpec::Stats(
        StatsSpec::new(title)
            .item("Max Depth", depth.max_depth as f64, ValueFormat::Integer)
            .item("Avg Depth", depth.avg_depth, ValueFormat::Decimal)
            .item(
                "Sessions With Branches",
                depth.sessions_with_children as f64,
                ValueFormat::Integer,
            ),
    )
}
