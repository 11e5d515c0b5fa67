use indexmap::IndexMap;

use crate::chart::format::ValueFormat;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec};
use crate::consts::UNKNOWN;
use crate::snapshot::StatisticsSnapshot;

/// Average, median and p95 turn duration per day
pub(crate) fn durations(view: &StatisticsSnapshot) -> SlotSpec {
    let days = &view.turn_durations;
    let labels = days.iter().map(|d| d.date.clone()).collect();
    let series = vec![
        (
            "Average".to_string(),
            days.iter().map(|d| d.avg_duration_ms).collect(),
        ),
        (
            "Median".to_string(),
            days.iter().map(|d| d.p50_ms).collect(),
        ),
        ("P95".to_string(), days.iter().map(|d| d.p95_ms).collect()),
    ];
    let spec = ChartSpec::multi(
        ChartKind::Line,
        Slot::Durations.title(),
        labels,
        series,
        ValueFormat::DurationFine,
    );
    SlotSpec::chart_or_empty(spec, "No turn duration data")
}

/// Error counts per type, summed across days in first-seen order
pub(crate) fn errors(view: &StatisticsSnapshot) -> SlotSpec {
    let mut by_type: IndexMap<&str, u64> = IndexMap::new();
    for error in &view.api_errors {
        let kind = match error.error_type.trim() {
            "" => UNKNOWN,
            kind => kind,
        };
        let total = by_type.entry(kind).or_insert(0);
        *total = total.saturating_add(error.count);
    }
    let (labels, values): (Vec<String>, Vec<f64>) = by_type
        .into_iter()
        .map(|(kind, count)| (kind.to_string(), count as f64))
        .unzip();
    let spec = ChartSpec::single(
        ChartKind::Bar,
        Slot::Errors.title(),
        labels,
        values,
        ValueFormat::Integer,
    );
    SlotSpec::chart_or_empty(spec, "No API errors recorded")
}
