use indexmap::IndexMap;

use crate::chart::format::ValueFormat;
use crate::chart::names::model_display_name;
use crate::chart::slot::Slot;
use crate::chart::spec::{ChartKind, ChartSpec, SlotSpec};
use crate::snapshot::StatisticsSnapshot;

/// Sum values under each model's display name, in first-seen order
pub(super) fn by_display_name<'a>(
    entries: impl IntoIterator<Item = (&'a str, f64)>,
) -> IndexMap<String, f64> {
    let mut grouped: IndexMap<String, f64> = IndexMap::new();
    for (model, value) in entries {
        *grouped.entry(model_display_name(model)).or_insert(0.0) += value;
    }
    grouped
}

/// Input plus output tokens per model family
pub(crate) fn model_tokens(view: &StatisticsSnapshot) -> SlotSpec {
    let grouped = by_display_name(view.model_usage.iter().map(|m| {
        (
            m.model.as_str(),
            m.input_tokens.saturating_add(m.output_tokens) as f64,
        )
    }));
    let (labels, values): (Vec<String>, Vec<f64>) = grouped.into_iter().unzip();
    let spec = ChartSpec::doughnut(
        Slot::ModelTokens.title(),
        labels,
        values,
        ValueFormat::Compact,
    );
    SlotSpec::chart_or_empty(spec, "No model usage data")
}

/// One stacked series per model family over the days of the view
pub(crate) fn tokens_over_time(view: &StatisticsSnapshot) -> SlotSpec {
    let days = &view.daily_model_tokens;
    let mut series: IndexMap<String, Vec<f64>> = IndexMap::new();
    for (i, day) in days.iter().enumerate() {
        for (model, tokens) in &day.tokens_by_model {
            let data = series
                .entry(model_display_name(model))
                .or_insert_with(|| vec![0.0; days.len()]);
            data[i] += *tokens as f64;
        }
    }
    let labels = days.iter().map(|d| d.date.clone()).collect();
    let spec = ChartSpec::multi(
        ChartKind::StackedBar,
        Slot::TokensOverTime.title(),
        labels,
        series.into_iter().collect(),
        ValueFormat::Compact,
    );
    SlotSpec::chart_or_empty(spec, "No token usage in the selected range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::palette::PALETTE;
    use crate::snapshot::{DailyModelTokens, ModelUsage};

    fn usage(model: &str, input: u64, output: u64) -> ModelUsage {
        ModelUsage {
            model: model.to_string(),
            input_tokens: input,
            output_tokens: output,
            cache_read_tokens: 1_000_000,
            ..Default::default()
        }
    }

    fn tokens(date: &str, models: &[(&str, u64)]) -> DailyModelTokens {
        DailyModelTokens {
            date: date.to_string(),
            tokens_by_model: models.iter().map(|(m, t)| (m.to_string(), *t)).collect(),
        }
    }

    #[test]
    fn model_tokens_grouped_by_family() {
        let view = StatisticsSnapshot {
            model_usage: vec![
                usage("claude-3-5-sonnet-20241022", 100, 50),
                usage("claude-opus-4-20250514", 10, 10),
                usage("claude-sonnet-4-20250514", 20, 30),
            ],
            ..Default::default()
        };
        let spec = model_tokens(&view);
        let chart = spec.as_chart().unwrap();
        assert_eq!(chart.labels, vec!["Sonnet", "Opus"]);
        assert_eq!(chart.series[0].data, vec![200.0, 20.0]);
        assert_eq!(chart.colors, vec![PALETTE[0], PALETTE[1]]);
    }

    #[test]
    fn model_tokens_saturate_instead_of_overflowing() {
        let view = StatisticsSnapshot {
            model_usage: vec![usage("claude-opus-4", u64::MAX, 1)],
            ..Default::default()
        };
        let spec = model_tokens(&view);
        assert_eq!(spec.as_chart().unwrap().series[0].data, vec![u64::MAX as f64]);
    }

    #[test]
    fn model_tokens_zero_is_empty() {
        let view = StatisticsSnapshot {
            model_usage: vec![usage("claude-haiku", 0, 0)],
            ..Default::default()
        };
        assert_eq!(model_tokens(&view).empty_message(), Some("No model usage data"));
    }

    #[test]
    fn tokens_over_time_fills_missing_days_with_zero() {
        let view = StatisticsSnapshot {
            daily_model_tokens: vec![
                tokens("2024-01-01", &[("claude-sonnet-4", 100)]),
                tokens("2024-01-02", &[("claude-opus-4", 300), ("claude-sonnet-4", 5)]),
            ],
            ..Default::default()
        };
        let spec = tokens_over_time(&view);
        let chart = spec.as_chart().unwrap();
        assert_eq!(chart.kind, ChartKind::StackedBar);
        assert_eq!(chart.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(chart.series[0].label, "Sonnet");
        assert_eq!(chart.series[0].data, vec![100.0, 5.0]);
        assert_eq!(chart.series[1].label, "Opus");
        assert_eq!(chart.series[1].data, vec![0.0, 300.0]);
    }

    #[test]
    fn tokens_over_time_no_days_is_empty() {
        assert!(tokens_over_time(&StatisticsSnapshot::default()).is_empty());
    }
}
