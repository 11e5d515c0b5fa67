//! Declarative chart specifications handed to the rendering capability

use serde::Serialize;

use crate::chart::format::ValueFormat;
use crate::chart::palette::{color_at, colors_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum ChartKind {
    Line,
    Bar,
    HorizontalBar,
    StackedBar,
    Doughnut,
}

/// One numeric series, aligned with the chart's labels
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Series {
    pub(crate) label: String,
    pub(crate) data: Vec<f64>,
    pub(crate) color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartSpec {
    pub(crate) kind: ChartKind,
    pub(crate) title: String,
    pub(crate) labels: Vec<String>,
    pub(crate) series: Vec<Series>,
    /// Per-category colors (doughnut slices); empty when colors follow the series
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) colors: Vec<String>,
    pub(crate) axis_format: ValueFormat,
    pub(crate) tooltip_format: ValueFormat,
    pub(crate) legend: bool,
}

impl ChartSpec {
    /// Multi-series chart over shared labels; series colors follow position
    pub(crate) fn multi(
        kind: ChartKind,
        title: &str,
        labels: Vec<String>,
        series: Vec<(String, Vec<f64>)>,
        format: ValueFormat,
    ) -> Self {
        let legend = series.len() > 1;
        let series = series
            .into_iter()
            .enumerate()
            .map(|(i, (label, data))| Series {
                label,
                data,
                color: color_at(i).to_string(),
            })
            .collect();
        ChartSpec {
            kind,
            title: title.to_string(),
            labels,
            series,
            colors: Vec::new(),
            axis_format: format,
            tooltip_format: format,
            legend,
        }
    }

    /// One unlabelled series of any non-doughnut kind
    pub(crate) fn single(
        kind: ChartKind,
        title: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        format: ValueFormat,
    ) -> Self {
        let mut spec = Self::multi(kind, title, labels, vec![(title.to_string(), values)], format);
        spec.legend = false;
        spec
    }

    /// Doughnut with one palette color per slice
    pub(crate) fn doughnut(
        title: &str,
        labels: Vec<String>,
        values: Vec<f64>,
        format: ValueFormat,
    ) -> Self {
        let colors = colors_for(labels.len());
        let mut spec = Self::multi(
            ChartKind::Doughnut,
            title,
            labels,
            vec![(title.to_string(), values)],
            format,
        );
        spec.colors = colors;
        spec.legend = true;
        spec
    }

    /// Axis ticks use compact numbers while tooltips keep full precision
    pub(crate) fn with_tooltip_format(mut self, format: ValueFormat) -> Self {
        self.tooltip_format = format;
        self
    }

    /// No categories, no series, or every series sums to zero
    pub(crate) fn is_degenerate(&self) -> bool {
        self.labels.is_empty()
            || self.series.is_empty()
            || self
                .series
                .iter()
                .all(|s| s.data.is_empty() || s.data.iter().sum::<f64>() == 0.0)
    }

    pub(crate) fn point_count(&self) -> usize {
        self.labels.len()
    }
}

/// Placeholder for a slot with nothing to show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmptySpec {
    pub(crate) title: String,
    pub(crate) message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatItem {
    pub(crate) label: String,
    pub(crate) value: String,
}

/// Plain numeric summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatsSpec {
    pub(crate) title: String,
    pub(crate) items: Vec<StatItem>,
}

impl StatsSpec {
    pub(crate) fn new(title: &str) -> Self {
        StatsSpec {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    pub(crate) fn item(mut self, label: &str, value: f64, format: ValueFormat) -> Self {
        self.items.push(StatItem {
            label: label.to_string(),
            value: format.apply(value),
        });
        self
    }
}

/// What a binder produces for one slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub(crate) enum SlotSpec {
    Chart(ChartSpec),
    Stats(StatsSpec),
    Empty(EmptySpec),
}

impl SlotSpec {
    pub(crate) fn empty(title: &str, message: &str) -> Self {
        SlotSpec::Empty(EmptySpec {
            title: title.to_string(),
            message: message.to_string(),
        })
    }

    /// Wrap a chart, substituting the empty placeholder for a degenerate one
    pub(crate) fn chart_or_empty(spec: ChartSpec, message: &str) -> Self {
        if spec.is_degenerate() {
            let title = spec.title;
            SlotSpec::Empty(EmptySpec {
                title,
                message: message.to_string(),
            })
        } else {
            SlotSpec::Chart(spec)
        }
    }

    pub(crate) fn title(&self) -> &str {
        match self {
            SlotSpec::Chart(c) => &c.title,
            SlotSpec::Stats(s) => &s.title,
            SlotSpec::Empty(e) => &e.title,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, SlotSpec::Empty(_))
    }

    pub(crate) fn as_chart(&self) -> Option<&ChartSpec> {
        match self {
            SlotSpec::Chart(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn as_stats(&self) -> Option<&StatsSpec> {
        match self {
            SlotSpec::Stats(s) => Some(s),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn empty_message(&self) -> Option<&str> {
        match self {
            SlotSpec::Empty(e) => Some(&e.message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::PALETTE;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("l{i}")).collect()
    }

    #[test]
    fn doughnut_colors_per_slice() {
        let spec = ChartSpec::doughnut("T", labels(3), vec![1.0, 2.0, 3.0], ValueFormat::Integer);
        assert_eq!(spec.colors, vec![PALETTE[0], PALETTE[1], PALETTE[2]]);
        assert!(spec.legend);
    }

    #[test]
    fn multi_series_colors_by_position() {
        let spec = ChartSpec::multi(
            ChartKind::Line,
            "T",
            labels(2),
            vec![
                ("a".to_string(), vec![1.0, 2.0]),
                ("b".to_string(), vec![3.0, 4.0]),
            ],
            ValueFormat::Compact,
        );
        assert_eq!(spec.series[0].color, PALETTE[0]);
        assert_eq!(spec.series[1].color, PALETTE[1]);
        assert!(spec.colors.is_empty());
        assert!(spec.legend);
    }

    #[test]
    fn single_series_keeps_requested_kind() {
        let spec = ChartSpec::single(ChartKind::Line, "Cost", labels(2), vec![1.0, 2.0], ValueFormat::Currency);
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.series.len(), 1);
        assert!(!spec.legend);
    }

    #[test]
    fn degenerate_detection() {
        let zero = ChartSpec::single(ChartKind::Bar, "T", labels(2), vec![0.0, 0.0], ValueFormat::Integer);
        assert!(zero.is_degenerate());
        let none = ChartSpec::single(ChartKind::Bar, "T", vec![], vec![], ValueFormat::Integer);
        assert!(none.is_degenerate());
        let some = ChartSpec::single(ChartKind::Bar, "T", labels(2), vec![0.0, 1.0], ValueFormat::Integer);
        assert!(!some.is_degenerate());
    }

    #[test]
    fn chart_or_empty_replaces_degenerate() {
        let zero = ChartSpec::doughnut("Cost", labels(1), vec![0.0], ValueFormat::Currency);
        let slot = SlotSpec::chart_or_empty(zero, "No cost data");
        assert_eq!(slot, SlotSpec::empty("Cost", "No cost data"));
    }

    #[test]
    fn serializes_with_type_tag() {
        let v = serde_json::to_value(SlotSpec::empty("Tools", "none")).unwrap();
        assert_eq!(v["type"], "empty");
        assert_eq!(v["message"], "none");

        let spec = ChartSpec::single(ChartKind::HorizontalBar, "T", labels(1), vec![1.0], ValueFormat::Integer);
        let v = serde_json::to_value(SlotSpec::Chart(spec)).unwrap();
        assert_eq!(v["type"], "chart");
        assert_eq!(v["kind"], "horizontalBar");
        assert_eq!(v["axisFormat"], "integer");
        assert!(v.get("colors").is_none());
    }

    #[test]
    fn stats_items_are_formatted() {
        let s = StatsSpec::new("Thinking").item("Tokens", 12_500.0, ValueFormat::Compact);
        assert_eq!(s.items[0].value, "12.5K");
    }
}
