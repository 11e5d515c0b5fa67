//! Value formatting rules carried by chart specs

use serde::Serialize;

/// How a numeric value is rendered on axes, tooltips and summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum ValueFormat {
    Integer,
    /// 1.2K / 3.4M
    Compact,
    Currency,
    /// Value is already in percentage points
    Percent,
    /// Milliseconds, coarse: "2h 5m" / "42m"
    Duration,
    /// Milliseconds, fine: "4.2s" / "3m 12s"
    DurationFine,
    /// One decimal place
    Decimal,
}

impl ValueFormat {
    pub(crate) fn apply(self, value: f64) -> String {
        match self {
            ValueFormat::Integer => format_integer(value),
            ValueFormat::Compact => format_compact(value),
            ValueFormat::Currency => format_currency(value),
            ValueFormat::Percent => format_percent(value),
            ValueFormat::Duration => format_duration(value),
            ValueFormat::DurationFine => format_duration_fine(value),
            ValueFormat::Decimal => format!("{value:.1}"),
        }
    }
}

pub(crate) fn format_integer(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Format number in compact form (K, M suffixes)
pub(crate) fn format_compact(value: f64) -> String {
    let (sign, n) = if value < 0.0 { ("-", -value) } else { ("", value) };
    if n >= 1_000_000.0 {
        format!("{sign}{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{sign}{:.1}K", n / 1_000.0)
    } else {
        format!("{sign}{}", n.round() as i64)
    }
}

/// Dollar amounts with threshold-based precision
pub(crate) fn format_currency(usd: f64) -> String {
    if usd.is_nan() {
        "N/A".to_string()
    } else if usd >= 1000.0 {
        format!("${:.2}K", usd / 1000.0)
    } else if usd >= 1.0 {
        format!("${usd:.2}")
    } else {
        format!("${usd:.3}")
    }
}

pub(crate) fn format_percent(points: f64) -> String {
    format!("{points:.1}%")
}

/// "{h}h {m}m" from one hour upward, "{m}m" below
pub(crate) fn format_duration(ms: f64) -> String {
    let total_minutes = (ms.max(0.0) / 60_000.0).floor() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Sub-minute durations in seconds, minute-scale as "{m}m {s}s"
pub(crate) fn format_duration_fine(ms: f64) -> String {
    let ms = ms.max(0.0);
    if ms < 60_000.0 {
        format!("{:.1}s", ms / 1000.0)
    } else if ms < 3_600_000.0 {
        let total_seconds = (ms / 1000.0).floor() as u64;
        format!("{}m {}s", total_seconds / 60, total_seconds % 60)
    } else {
        format_duration(ms)
    }
}
