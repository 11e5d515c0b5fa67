use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::core::DateRange;
use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Build a range from optional `--since` / `--until` arguments
pub(crate) fn parse_range(since: Option<&str>, until: Option<&str>) -> Result<DateRange, AppError> {
    let start = since.map(parse_date).transpose()?;
    let end = until.map(parse_date).transpose()?;
    if let (Some(s), Some(e)) = (start, end)
        && s > e
    {
        return Err(AppError::InvalidRange {
            start: s.to_string(),
            end: e.to_string(),
        });
    }
    Ok(DateRange::new(start, end))
}
