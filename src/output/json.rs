//! JSON emission of the rendered dashboard and of a derived view

use indexmap::IndexMap;
use serde::Serialize;

use crate::chart::{Slot, SlotSpec};
use crate::core::{DateBounds, DateRange};
use crate::snapshot::StatisticsSnapshot;

#[derive(Serialize)]
struct DashboardOutput<'a> {
    range: DateRange,
    bounds: Option<DateBounds>,
    slots: IndexMap<&'static str, &'a SlotSpec>,
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
}

/// Every live slot spec keyed by slot id, in slot order
pub(crate) fn output_dashboard_json(
    live: &[(Slot, &SlotSpec)],
    range: DateRange,
    bounds: Option<DateBounds>,
    compact: bool,
) -> Result<String, serde_json::Error> {
    let output = DashboardOutput {
        range,
        bounds,
        slots: live.iter().map(|(slot, spec)| (slot.id(), *spec)).collect(),
    };
    to_json(&output, compact)
}

/// The derived view in the snapshot's own camelCase shape
pub(crate) fn output_view_json(
    view: &StatisticsSnapshot,
    compact: bool,
) -> Result<String, serde_json::Error> {
    to_json(view, compact)
}
