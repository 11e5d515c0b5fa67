//! Core module - date ranges and the date-range recalculator

mod range;
mod recalc;

pub(crate) use range::{DateBounds, DateRange};
pub(crate) use recalc::recalculate;
