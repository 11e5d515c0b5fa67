use crate::chart::format::ValueFormat;
use crate::chart::names::path_tail;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec};
use crate::snapshot::StatisticsSnapshot;

const TOP_PROJECTS: usize = 10;
const TOP_COMMANDS: usize = 10;

/// Projects arrive sorted by activity; keep the first ten as given
pub(crate) fn projects(view: &StatisticsSnapshot) -> SlotSpec {
    let top = view.project_stats.iter().take(TOP_PROJECTS);
    let (labels, values): (Vec<String>, Vec<f64>) = top
        .map(|p| {
            let label = if p.name.is_empty() {
                path_tail(&p.path).to_string()
            } else {
                p.name.clone()
            };
            (label, p.message_count as f64)
        })
        .unzip();
    let spec = ChartSpec::single(
        ChartKind::HorizontalBar,
        Slot::Projects.title(),
        labels,
        values,
        ValueFormat::Compact,
    )
    .with_tooltip_format(ValueFormat::Integer);
    SlotSpec::chart_or_empty(spec, "No project data")
}

pub(crate) fn commands(view: &StatisticsSnapshot) -> SlotSpec {
    let (labels, values): (Vec<String>, Vec<f64>) = view
        .slash_command_usage
        .iter()
        .take(TOP_COMMANDS)
        .map(|c| {
            let label = if c.command.starts_with('/') {
                c.command.clone()
            } else {
                format!("/{}", c.command)
            };
            (label, c.count as f64)
        })
        .unzip();
    let spec = ChartSpec::single(
        ChartKind::HorizontalBar,
        Slot::Commands.title(),
        labels,
        values,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No slash commands used")
}
