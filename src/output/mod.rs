mod format;
mod json;
mod table;

pub(crate) use json::{output_dashboard_json, output_view_json};
pub(crate) use table::{SummaryOptions, print_summary};
