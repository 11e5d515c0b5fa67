use crate::chart::format::ValueFormat;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec, StatsSpec};
use crate::snapshot::StatisticsSnapshot;

/// Headline totals. Always rendered, even for an empty range.
pub(crate) fn overview(view: &StatisticsSnapshot) -> SlotSpec {
    let mut spec = StatsSpec::new(Slot::Overview.title())
        .item("Messages", view.total_messages as f64, ValueFormat::Compact)
        .item("Sessions", view.total_sessions as f64, ValueFormat::Compact)
        .item("Tool Calls", view.total_tool_calls as f64, ValueFormat::Compact)
        .item("Projects", view.total_projects as f64, ValueFormat::Integer);
    if let Some(cost) = &view.cost_estimate {
        spec = spec
            .item("Est. Cost", cost.total_cost_usd, ValueFormat::Currency)
            .item("Cache Savings", cost.cache_savings_usd, ValueFormat::Currency);
    }
    if let Some(longest) = &view.longest_session
        && longest.duration_ms > 0
    {
        spec = spec.item(
            "Longest Session",
            longest.duration_ms as f64,
            ValueFormat::Duration,
        );
    }
    SlotSpec::Stats(spec)
}

pub(crate) fn activity(view: &StatisticsSnapshot) -> SlotSpec {
    let days = &view.daily_activity;
    let labels = days.iter().map(|d| d.date.clone()).collect();
    let series = vec![
        (
            "Messages".to_string(),
            days.iter().map(|d| d.message_count as f64).collect(),
        ),
        (
            "Sessions".to_string(),
            days.iter().map(|d| d.session_count as f64).collect(),
        ),
        (
            "Tool Calls".to_string(),
            days.iter().map(|d| d.tool_call_count as f64).collect(),
        ),
    ];
    let spec = ChartSpec::multi(
        ChartKind::Line,
        Slot::Activity.title(),
        labels,
        series,
        ValueFormat::Compact,
    )
    .with_tooltip_format(ValueFormat::Integer);
    SlotSpec::chart_or_empty(spec, "No activity in the selected range")
}

/// 24 buckets, "00:00" through "23:00". Keys that are not hours are ignored.
pub(crate) fn hourly(view: &StatisticsSnapshot) -> SlotSpec {
    let mut buckets = [0.0_f64; 24];
    for (hour, count) in &view.hour_counts {
        if let Ok(h) = hour.trim().parse::<usize>()
            && h < buckets.len()
        {
            buckets[h] += *count as f64;
        }
    }
    let labels = (0..24).map(|h| format!("{h:02}:00")).collect();
    let spec = ChartSpec::single(
        ChartKind::Bar,
        Slot::Hourly.title(),
        labels,
        buckets.to_vec(),
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No hourly activity data")
}
