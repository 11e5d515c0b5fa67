//! Date-range recalculator
//!
//! Derives a bounded view of a snapshot: every date-bearing series is filtered
//! to the range, and every aggregate that depends on one of those series is
//! re-derived from the filtered series rather than copied.
//!
//! Aggregates with no per-day breakdown (cache token totals, cache savings)
//! cannot be recomputed exactly. They follow the [`DayRatio`] approximation:
//! the unfiltered value scaled by the fraction of days retained in a companion
//! series. Tests assert that policy, not an exact figure.

use indexmap::IndexMap;
use tracing::debug;

use crate::core::range::{DateRange, calendar_date};
use crate::snapshot::{
    CacheMetrics, CostEstimate, Dated, PlanStats, ProjectStats, StatisticsSnapshot,
};

/// Fraction of days retained by a filter (0 when there were no days at all)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DayRatio(f64);

impl DayRatio {
    pub(crate) fn of(kept: usize, total: usize) -> Self {
        if total == 0 {
            DayRatio(0.0)
        } else {
            DayRatio(kept as f64 / total as f64)
        }
    }

    pub(crate) fn value(self) -> f64 {
        self.0
    }

    pub(crate) fn scale_usd(self, amount: f64) -> f64 {
        amount * self.0
    }

    /// Scaled token counts are rounded to whole tokens
    pub(crate) fn scale_tokens(self, tokens: u64) -> u64 {
        (tokens as f64 * self.0).round() as u64
    }
}

/// Order-preserving filter over a date-keyed series
fn filter_dated<T: Dated + Clone>(items: &[T], range: DateRange) -> Vec<T> {
    items
        .iter()
        .filter(|item| range.contains_str(item.date()))
        .cloned()
        .collect()
}

/// Counts come straight from the document, so sums saturate
fn saturating_sum(counts: impl Iterator<Item = u64>) -> u64 {
    counts.fold(0, u64::saturating_add)
}

/// Exact recomputation from filtered buckets, or the unfiltered total when the
/// filtered buckets sum to zero (no buckets, or only empty ones)
fn sum_or_unfiltered(filtered_sum: u64, unfiltered: u64) -> u64 {
    if filtered_sum == 0 {
        unfiltered
    } else {
        filtered_sum
    }
}

fn project_in_range(project: &ProjectStats, range: DateRange) -> bool {
    let first = project.first_session.as_deref().and_then(calendar_date);
    let last = project.last_session.as_deref().and_then(calendar_date);
    range.overlaps(first, last)
}

fn recalc_cost(cost: &CostEstimate, range: DateRange) -> CostEstimate {
    let cost_by_day = filter_dated(&cost.cost_by_day, range);
    let total_cost_usd = cost_by_day.iter().map(|day| day.cost).sum();

    let mut cost_by_model: IndexMap<String, f64> = IndexMap::new();
    for day in &cost_by_day {
        for (model, amount) in &day.cost_by_model {
            *cost_by_model.entry(model.clone()).or_insert(0.0) += amount;
        }
    }
    // Older snapshots have no per-model daily split; show the unfiltered split instead
    let has_breakdown = cost_by_day.iter().any(|day| !day.cost_by_model.is_empty());
    if !has_breakdown {
        cost_by_model = cost.cost_by_model.clone();
    }

    let ratio = DayRatio::of(cost_by_day.len(), cost.cost_by_day.len());
    CostEstimate {
        total_cost_usd,
        cost_by_model,
        cache_savings_usd: ratio.scale_usd(cost.cache_savings_usd),
        cost_by_day,
    }
}

fn recalc_cache(cache: &CacheMetrics, ratio: DayRatio) -> CacheMetrics {
    CacheMetrics {
        total_cache_read_tokens: ratio.scale_tokens(cache.total_cache_read_tokens),
        total_cache_write_tokens: ratio.scale_tokens(cache.total_cache_write_tokens),
        tokens_saved: ratio.scale_tokens(cache.tokens_saved),
        // a ratio is invariant under day-count scaling
        cache_hit_ratio: cache.cache_hit_ratio,
    }
}

fn recalc_plans(plans: &PlanStats, range: DateRange) -> PlanStats {
    let by_date = filter_dated(&plans.by_date, range);
    PlanStats {
        total_plans: saturating_sum(by_date.iter().map(|d| d.count)),
        avg_plan_lines: plans.avg_plan_lines,
        by_date,
    }
}

/// Derive the view of `snapshot` bounded by `range`.
///
/// The full range returns an identical copy. Fields that are not date-keyed
/// (`modelUsage`, `hourCounts`, `toolUsage`, `taskStats`, ...) pass through
/// unchanged.
pub(crate) fn recalculate(snapshot: &StatisticsSnapshot, range: DateRange) -> StatisticsSnapshot {
    if range.is_full() {
        return snapshot.clone();
    }

    let daily_activity = filter_dated(&snapshot.daily_activity, range);
    let daily_model_tokens = filter_dated(&snapshot.daily_model_tokens, range);
    let project_stats: Vec<ProjectStats> = snapshot
        .project_stats
        .iter()
        .filter(|p| project_in_range(p, range))
        .cloned()
        .collect();

    let messages = saturating_sum(daily_activity.iter().map(|d| d.message_count));
    let sessions = saturating_sum(daily_activity.iter().map(|d| d.session_count));
    let tool_calls = saturating_sum(daily_activity.iter().map(|d| d.tool_call_count));

    let token_ratio = DayRatio::of(daily_model_tokens.len(), snapshot.daily_model_tokens.len());

    debug!(
        start = ?range.start,
        end = ?range.end,
        days = daily_activity.len(),
        projects = project_stats.len(),
        token_ratio = token_ratio.value(),
        "recalculated view"
    );

    StatisticsSnapshot {
        total_messages: sum_or_unfiltered(messages, snapshot.total_messages),
        total_sessions: sum_or_unfiltered(sessions, snapshot.total_sessions),
        total_tool_calls: sum_or_unfiltered(tool_calls, snapshot.total_tool_calls),
        total_projects: project_stats.len() as u64,
        daily_activity,
        daily_model_tokens,
        project_stats,
        cost_estimate: snapshot
            .cost_estimate
            .as_ref()
            .map(|c| recalc_cost(c, range)),
        cache_metrics: snapshot
            .cache_metrics
            .as_ref()
            .map(|c| recalc_cache(c, token_ratio)),
        turn_durations: filter_dated(&snapshot.turn_durations, range),
        api_errors: filter_dated(&snapshot.api_errors, range),
        plan_stats: snapshot
            .plan_stats
            .as_ref()
            .map(|p| recalc_plans(p, range)),
        ..snapshot.clone()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::snapshot::{
        ApiError, DailyActivity, DailyCost, DailyModelTokens, DatedCount, TurnDuration,
    };
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn d(s: &str) -> NaiveDate {
        calendar_date(s).unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(Some(d(start)), Some(d(end)))
    }

    fn activity(date: &str, messages: u64, sessions: u64, tools: u64) -> DailyActivity {
        DailyActivity {
            date: date.to_string(),
            message_count: messages,
            session_count: sessions,
            tool_call_count: tools,
        }
    }

    fn project(name: &str, first: Option<&str>, last: Option<&str>) -> ProjectStats {
        ProjectStats {
            name: name.to_string(),
            first_session: first.map(str::to_string),
            last_session: last.map(str::to_string),
            ..Default::default()
        }
    }

    fn day_cost(date: &str, cost: f64, models: &[(&str, f64)]) -> DailyCost {
        DailyCost {
            date: date.to_string(),
            cost,
            cost_by_model: models.iter().map(|(m, c)| (m.to_string(), *c)).collect(),
        }
    }

    fn sample() -> StatisticsSnapshot {
        StatisticsSnapshot {
            total_messages: 30,
            total_sessions: 5,
            total_tool_calls: 13,
            total_projects: 3,
            daily_activity: vec![
                activity("2024-01-01", 10, 2, 5),
                activity("2024-01-02", 20, 3, 8),
            ],
            daily_model_tokens: vec![
                DailyModelTokens {
                    date: "2024-01-01".to_string(),
                    tokens_by_model: [("claude-sonnet-4".to_string(), 100)].into_iter().collect(),
                },
                DailyModelTokens {
                    date: "2024-01-02".to_string(),
                    tokens_by_model: [("claude-opus-4".to_string(), 300)].into_iter().collect(),
                },
            ],
            project_stats: vec![
                project("alpha", Some("2024-01-01T09:00:00Z"), Some("2024-01-01T18:00:00Z")),
                project("beta", Some("2024-01-02"), Some("2024-01-05")),
                project("gamma", None, None),
            ],
            cost_estimate: Some(CostEstimate {
                total_cost_usd: 3.0,
                cost_by_model: [("sonnet".to_string(), 1.0), ("opus".to_string(), 2.0)]
                    .into_iter()
                    .collect(),
                cost_by_day: vec![
                    day_cost("2024-01-01", 1.0, &[("sonnet", 1.0)]),
                    day_cost("2024-01-02", 2.0, &[("opus", 2.0)]),
                ],
                cache_savings_usd: 10.0,
            }),
            cache_metrics: Some(CacheMetrics {
                total_cache_read_tokens: 1001,
                total_cache_write_tokens: 400,
                cache_hit_ratio: 0.82,
                tokens_saved: 901,
            }),
            turn_durations: vec![
                TurnDuration {
                    date: "2024-01-01".to_string(),
                    avg_duration_ms: 1000.0,
                    ..Default::default()
                },
                TurnDuration {
                    date: "2024-01-02".to_string(),
                    avg_duration_ms: 2000.0,
                    ..Default::default()
                },
            ],
            api_errors: vec![ApiError {
                date: "2024-01-02".to_string(),
                error_type: "overloaded".to_string(),
                count: 2,
                avg_retry_ms: 500.0,
            }],
            plan_stats: Some(PlanStats {
                total_plans: 5,
                by_date: vec![
                    DatedCount {
                        date: "2024-01-01".to_string(),
                        count: 2,
                    },
                    DatedCount {
                        date: "2024-01-02".to_string(),
                        count: 3,
                    },
                ],
                avg_plan_lines: 42.5,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn full_range_is_identity() {
        let s = sample();
        assert_eq!(recalculate(&s, DateRange::full()), s);
    }

    #[test]
    fn single_day_recomputes_totals() {
        let v = recalculate(&sample(), range("2024-01-02", "2024-01-02"));
        assert_eq!(v.total_messages, 20);
        assert_eq!(v.total_sessions, 3);
        assert_eq!(v.total_tool_calls, 8);
        assert_eq!(v.daily_activity.len(), 1);
    }

    #[test]
    fn cost_by_model_resummed_from_days() {
        let v = recalculate(&sample(), range("2024-01-01", "2024-01-01"));
        let cost = v.cost_estimate.unwrap();
        assert_eq!(cost.total_cost_usd, 1.0);
        assert_eq!(cost.cost_by_model.len(), 1);
        assert_eq!(cost.cost_by_model["sonnet"], 1.0);
        assert!(!cost.cost_by_model.contains_key("opus"));
    }

    #[test]
    fn cost_by_model_falls_back_without_daily_breakdown() {
        let mut s = sample();
        let cost = s.cost_estimate.as_mut().unwrap();
        for day in &mut cost.cost_by_day {
            day.cost_by_model.clear();
        }
        let v = recalculate(&s, range("2024-01-01", "2024-01-01"));
        let cost = v.cost_estimate.unwrap();
        assert_eq!(cost.total_cost_usd, 1.0);
        assert_eq!(cost.cost_by_model, s.cost_estimate.unwrap().cost_by_model);
    }

    #[test]
    fn cache_savings_scaled_by_retained_days() {
        let v = recalculate(&sample(), range("2024-01-01", "2024-01-01"));
        assert_eq!(v.cost_estimate.unwrap().cache_savings_usd, 5.0);
    }

    #[test]
    fn cache_tokens_scaled_and_rounded() {
        let v = recalculate(&sample(), range("2024-01-02", "2024-01-02"));
        let cache = v.cache_metrics.unwrap();
        assert_eq!(cache.total_cache_read_tokens, 501); // 500.5 rounds away from zero
        assert_eq!(cache.total_cache_write_tokens, 200);
        assert_eq!(cache.tokens_saved, 451);
    }

    #[test]
    fn cache_hit_ratio_never_scaled() {
        for r in [
            range("2024-01-01", "2024-01-01"),
            range("2030-01-01", "2030-12-31"),
            DateRange::new(None, Some(d("2024-01-02"))),
        ] {
            let v = recalculate(&sample(), r);
            assert_eq!(v.cache_metrics.unwrap().cache_hit_ratio, 0.82);
        }
    }

    #[test]
    fn empty_cost_series_gives_zero_ratio() {
        let mut s = sample();
        s.cost_estimate.as_mut().unwrap().cost_by_day.clear();
        let v = recalculate(&s, range("2024-01-01", "2024-01-01"));
        let cost = v.cost_estimate.unwrap();
        assert_eq!(cost.cache_savings_usd, 0.0);
        assert_eq!(cost.total_cost_usd, 0.0);
    }

    #[test]
    fn plans_resummed_average_kept() {
        let v = recalculate(&sample(), range("2024-01-02", "2024-01-09"));
        let plans = v.plan_stats.unwrap();
        assert_eq!(plans.total_plans, 3);
        assert_eq!(plans.by_date.len(), 1);
        assert_eq!(plans.avg_plan_lines, 42.5);
    }

    #[test]
    fn empty_range_falls_back_for_totals_but_not_projects() {
        let mut s = sample();
        s.project_stats.pop(); // drop the undated project
        let v = recalculate(&s, range("2030-01-01", "2030-01-31"));
        assert!(v.daily_activity.is_empty());
        assert_eq!(v.total_messages, 30);
        assert_eq!(v.total_sessions, 5);
        assert_eq!(v.total_tool_calls, 13);
        assert_eq!(v.total_projects, 0);
    }

    #[test]
    fn zero_count_days_fall_back() {
        let mut s = sample();
        s.daily_activity.push(activity("2024-01-03", 0, 0, 0));
        let v = recalculate(&s, range("2024-01-03", "2024-01-03"));
        assert_eq!(v.daily_activity.len(), 1);
        assert_eq!(v.total_messages, 30);
    }

    #[test]
    fn projects_use_interval_overlap() {
        let v = recalculate(&sample(), range("2024-01-03", "2024-01-04"));
        let names: Vec<&str> = v.project_stats.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "gamma"]);
        assert_eq!(v.total_projects, 2);
    }

    #[test]
    fn series_stay_in_date_order() {
        let v = recalculate(&sample(), DateRange::new(Some(d("2024-01-01")), None));
        let dates: Vec<&str> = v.turn_durations.iter().map(|t| t.date()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(v.api_errors.len(), 1);
    }

    #[test]
    fn pass_through_fields_untouched() {
        let mut s = sample();
        s.hour_counts.insert("9".to_string(), 4);
        s.enabled_plugins.push("linear".to_string());
        let v = recalculate(&s, range("2024-01-01", "2024-01-01"));
        assert_eq!(v.hour_counts, s.hour_counts);
        assert_eq!(v.enabled_plugins, s.enabled_plugins);
    }

    #[test]
    fn missing_sections_stay_missing() {
        let s = StatisticsSnapshot::default();
        let v = recalculate(&s, range("2024-01-01", "2024-01-01"));
        assert!(v.cost_estimate.is_none());
        assert!(v.cache_metrics.is_none());
        assert!(v.plan_stats.is_none());
    }

    #[test]
    fn snapshot_not_mutated() {
        let s = sample();
        let before = s.clone();
        let _ = recalculate(&s, range("2024-01-02", "2024-01-02"));
        assert_eq!(s, before);
    }

    #[test]
    fn day_ratio_policy() {
        assert_eq!(DayRatio::of(0, 0).value(), 0.0);
        assert_eq!(DayRatio::of(1, 4).value(), 0.25);
        assert_eq!(DayRatio::of(1, 4).scale_tokens(10), 3); // 2.5 -> 3
        assert_eq!(DayRatio::of(3, 3).scale_usd(1.5), 1.5);
    }

    // --- properties ---

    fn day_offset(n: u32) -> String {
        (d("2024-01-01") + chrono::Duration::days(i64::from(n)))
            .format("%Y-%m-%d")
            .to_string()
    }

    fn arb_dated_sections() -> impl Strategy<
        Value = (
            Vec<DailyModelTokens>,
            Option<CacheMetrics>,
            Option<PlanStats>,
            Vec<TurnDuration>,
            Vec<ApiError>,
        ),
    > {
        let tokens = prop::collection::btree_map(0u32..60, (0u64..5000, 0u64..5000), 0..20);
        let cache = prop::option::of((0u64..1_000_000, 0u64..1_000_000, 0.0f64..1.0, 0u64..1_000_000));
        let plans = prop::option::of(prop::collection::btree_map(0u32..60, 0u64..5, 0..10));
        let durations = prop::collection::btree_map(0u32..60, 0u32..60_000, 0..10);
        let errors = prop::collection::btree_map(0u32..60, 1u64..20, 0..10);
        (tokens, cache, plans, durations, errors).prop_map(
            |(tokens, cache, plans, durations, errors)| {
                let tokens = tokens
                    .into_iter()
                    .map(|(n, (sonnet, opus))| DailyModelTokens {
                        date: day_offset(n),
                        tokens_by_model: [
                            ("claude-sonnet-4".to_string(), sonnet),
                            ("claude-opus-4".to_string(), opus),
                        ]
                        .into_iter()
                        .collect(),
                    })
                    .collect();
                let cache = cache.map(|(read, write, ratio, saved)| CacheMetrics {
                    total_cache_read_tokens: read,
                    total_cache_write_tokens: write,
                    cache_hit_ratio: ratio,
                    tokens_saved: saved,
                });
                let plans = plans.map(|by_date| PlanStats {
                    total_plans: by_date.values().sum(),
                    avg_plan_lines: 42.0,
                    by_date: by_date
                        .into_iter()
                        .map(|(n, count)| DatedCount {
                            date: day_offset(n),
                            count,
                        })
                        .collect(),
                });
                let durations = durations
                    .into_iter()
                    .map(|(n, ms)| TurnDuration {
                        date: day_offset(n),
                        avg_duration_ms: f64::from(ms),
                        ..Default::default()
                    })
                    .collect();
                let errors = errors
                    .into_iter()
                    .map(|(n, count)| ApiError {
                        date: day_offset(n),
                        error_type: "overloaded".to_string(),
                        count,
                        ..Default::default()
                    })
                    .collect();
                (tokens, cache, plans, durations, errors)
            },
        )
    }

    fn arb_snapshot() -> impl Strategy<Value = StatisticsSnapshot> {
        let days = prop::collection::btree_map(0u32..60, (0u64..50, 0u64..10, 0u64..30), 0..20);
        let costs = prop::collection::btree_map(0u32..60, 0u32..1000, 0..20);
        let projects = prop::collection::vec(
            (prop::option::of(0u32..60), prop::option::of(0u32..60)),
            0..8,
        );
        (days, costs, projects, 0u32..10_000, arb_dated_sections()).prop_map(
            |(days, costs, projects, savings_cents, (tokens, cache, plans, durations, errors))| {
                StatisticsSnapshot {
                    total_messages: days.values().map(|v| v.0).sum::<u64>() + 1,
                    daily_activity: days
                        .into_iter()
                        .map(|(n, (m, s, t))| activity(&day_offset(n), m, s, t))
                        .collect(),
                    project_stats: projects
                        .into_iter()
                        .map(|(a, b)| {
                            let first = a.map(day_offset);
                            let last = b.map(day_offset);
                            project("p", first.as_deref(), last.as_deref())
                        })
                        .collect(),
                    cost_estimate: Some(CostEstimate {
                        cost_by_day: costs
                            .into_iter()
                            .map(|(n, cents)| {
                                let c = f64::from(cents) / 100.0;
                                day_cost(&day_offset(n), c, &[("sonnet", c)])
                            })
                            .collect(),
                        cache_savings_usd: f64::from(savings_cents) / 100.0,
                        ..Default::default()
                    }),
                    daily_model_tokens: tokens,
                    cache_metrics: cache,
                    plan_stats: plans,
                    turn_durations: durations,
                    api_errors: errors,
                    ..Default::default()
                }
            },
        )
    }

    fn arb_range() -> impl Strategy<Value = (u32, u32)> {
        (0u32..70, 0u32..70).prop_map(|(a, b)| (a.min(b), a.max(b)))
    }

    fn to_range((a, b): (u32, u32)) -> DateRange {
        range(&day_offset(a), &day_offset(b))
    }

    proptest! {
        #[test]
        fn narrower_range_never_has_more_projects(
            s in arb_snapshot(),
            (a, b) in arb_range(),
            shrink in (0u32..20, 0u32..20),
        ) {
            let inner_a = (a + shrink.0).min(b);
            let inner_b = b.saturating_sub(shrink.1).max(inner_a);
            let wide = recalculate(&s, to_range((a, b)));
            let narrow = recalculate(&s, to_range((inner_a, inner_b)));
            prop_assert!(narrow.total_projects <= wide.total_projects);
        }

        #[test]
        fn any_snapshot_is_unchanged_by_full_range(s in arb_snapshot()) {
            prop_assert_eq!(recalculate(&s, DateRange::full()), s);
        }

        #[test]
        fn cache_hit_ratio_survives_any_range(s in arb_snapshot(), r in arb_range()) {
            let v = recalculate(&s, to_range(r));
            prop_assert_eq!(
                v.cache_metrics.map(|c| c.cache_hit_ratio),
                s.cache_metrics.map(|c| c.cache_hit_ratio)
            );
        }

        #[test]
        fn recalculation_is_idempotent(s in arb_snapshot(), r in arb_range()) {
            let once = recalculate(&s, to_range(r));
            let twice = recalculate(&once, to_range(r));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn total_cost_matches_filtered_days(s in arb_snapshot(), r in arb_range()) {
            let v = recalculate(&s, to_range(r));
            let cost = v.cost_estimate.unwrap();
            let sum: f64 = cost.cost_by_day.iter().map(|day| day.cost).sum();
            prop_assert!((sum - cost.total_cost_usd).abs() < 1e-9);
        }

        #[test]
        fn filtered_days_are_in_range_and_ordered(s in arb_snapshot(), r in arb_range()) {
            let dr = to_range(r);
            let v = recalculate(&s, dr);
            prop_assert!(v.daily_activity.iter().all(|day| dr.contains_str(&day.date)));
            prop_assert!(v.daily_activity.windows(2).all(|w| w[0].date <= w[1].date));
        }
    }
}
