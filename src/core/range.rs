//! Calendar-date ranges used to bound a derived view

use chrono::NaiveDate;
use serde::Serialize;

use crate::consts::DATE_FORMAT;
use crate::snapshot::DailyActivity;

/// Parse the calendar date at the start of a date or timestamp string.
///
/// "2024-01-05" and "2024-01-05T23:10:00Z" both yield 2024-01-05; time of day
/// never takes part in range tests.
pub(crate) fn calendar_date(s: &str) -> Option<NaiveDate> {
    let head = s.trim().get(..10)?;
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

/// Inclusive date range; an absent bound is unbounded on that side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct DateRange {
    pub(crate) start: Option<NaiveDate>,
    pub(crate) end: Option<NaiveDate>,
}

impl DateRange {
    pub(crate) fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Both bounds absent
    pub(crate) fn full() -> Self {
        Self::default()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub(crate) fn contains(&self, date: NaiveDate) -> bool {
        if let Some(s) = self.start
            && date < s
        {
            return false;
        }
        if let Some(e) = self.end
            && date > e
        {
            return false;
        }
        true
    }

    /// Test a record's date string. An unreadable date is only in the full range.
    pub(crate) fn contains_str(&self, date: &str) -> bool {
        match calendar_date(date) {
            Some(d) => self.contains(d),
            None => self.is_full(),
        }
    }

    /// Interval-overlap test for entities spanning `[first, last]`.
    ///
    /// A missing endpoint collapses the interval onto the other one; with both
    /// missing the entity is always in range.
    pub(crate) fn overlaps(&self, first: Option<NaiveDate>, last: Option<NaiveDate>) -> bool {
        let (lo, hi) = match (first, last) {
            (None, None) => return true,
            (Some(f), None) => (f, f),
            (None, Some(l)) => (l, l),
            (Some(f), Some(l)) => (f.min(l), f.max(l)),
        };
        self.start.is_none_or(|s| hi >= s) && self.end.is_none_or(|e| lo <= e)
    }
}

/// Earliest and latest day in the daily-activity series; the limits of the date inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct DateBounds {
    pub(crate) min: NaiveDate,
    pub(crate) max: NaiveDate,
}

impl DateBounds {
    pub(crate) fn from_activity(days: &[DailyActivity]) -> Option<Self> {
        let mut dates = days.iter().filter_map(|d| calendar_date(&d.date));
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
        Some(Self { min, max })
    }

    /// Whether every bounded side of `range` lies within the available days
    pub(crate) fn covers(&self, range: DateRange) -> bool {
        range.start.is_none_or(|d| d >= self.min) && range.end.is_none_or(|d| d <= self.max)
    }
}
