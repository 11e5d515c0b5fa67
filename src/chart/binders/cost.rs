use super::models::by_display_name;
use crate::chart::format::ValueFormat;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec};
use crate::snapshot::StatisticsSnapshot;

const NO_COST: &str = "No cost data available";

pub(crate) fn cost_by_model(view: &StatisticsSnapshot) -> SlotSpec {
    let Some(cost) = &view.cost_estimate else {
        return SlotSpec::empty(Slot::CostByModel.title(), NO_COST);
    };
    let grouped = by_display_name(
        cost.cost_by_model
            .iter()
            .map(|(model, usd)| (model.as_str(), *usd)),
    );
    let (labels, values): (Vec<String>, Vec<f64>) = grouped.into_iter().unzip();
    let spec = ChartSpec::doughnut(
        Slot::CostByModel.title(),
        labels,
        values,
        ValueFormat::Currency,
    );
    SlotSpec::chart_or_empty(spec, NO_COST)
}

pub(crate) fn cost_over_time(view: &StatisticsSnapshot) -> SlotSpec {
    let days = view
        .cost_estimate
        .as_ref()
        .map(|c| c.cost_by_day.as_slice())
        .unwrap_or_default();
    let labels = days.iter().map(|d| d.date.clone()).collect();
    let values = days.iter().map(|d| d.cost).collect();
    let spec = ChartSpec::single(
        ChartKind::Line,
        Slot::CostOverTime.title(),
        labels,
        values,
        ValueFormat::Currency,
    );
    SlotSpec::chart_or_empty(spec, "No cost data in the selected range")
}

/// Hit/miss split from the snapshot-wide hit ratio
pub(crate) fn cache(view: &StatisticsSnapshot) -> SlotSpec {
    let title = Slot::Cache.title();
    let Some(metrics) = &view.cache_metrics else {
        return SlotSpec::empty(title, "No cache data available");
    };
    if metrics
        .total_cache_read_tokens
        .saturating_add(metrics.total_cache_write_tokens)
        == 0
    {
        return SlotSpec::empty(title, "No cache data available");
    }
    let hit = metrics.cache_hit_ratio.clamp(0.0, 1.0) * 100.0;
    let spec = ChartSpec::doughnut(
        title,
        vec!["Cache Hits".to_string(), "Cache Misses".to_string()],
        vec![hit, 100.0 - hit],
        ValueFormat::Percent,
    );
    SlotSpec::chart_or_empty(spec, "No cache data available")
}
