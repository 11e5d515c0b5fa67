use comfy_table::{Cell, Color, Table};

use crate::chart::{ChartKind, Slot, SlotSpec};
use crate::core::{DateBounds, DateRange};
use crate::output::format::{
    create_styled_table, format_number, format_range, header_cell, right_cell, styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SummaryOptions {
    pub(crate) use_color: bool,
    /// Drop the detail column
    pub(crate) compact: bool,
}

fn kind_label(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
        ChartKind::HorizontalBar => "hbar",
        ChartKind::StackedBar => "stacked",
        ChartKind::Doughnut => "doughnut",
    }
}

/// Overview card as a two-column table
fn overview_table(overview: Option<&SlotSpec>, opts: SummaryOptions) -> Option<Table> {
    let stats = overview?.as_stats()?;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Metric", opts.use_color),
        header_cell("Value", opts.use_color),
    ]);
    let cyan = opts.use_color.then_some(Color::Cyan);
    for item in &stats.items {
        table.add_row(vec![
            Cell::new(&item.label),
            right_cell(&item.value, cyan, false),
        ]);
    }
    Some(table)
}

/// One row per slot: what was rendered and how much of it
fn slot_table(live: &[(Slot, &SlotSpec)], opts: SummaryOptions) -> Table {
    let mut table = create_styled_table();
    let mut header = vec![
        header_cell("Slot", opts.use_color),
        header_cell("Status", opts.use_color),
    ];
    if !opts.compact {
        header.push(header_cell("Detail", opts.use_color));
    }
    table.set_header(header);

    let dim = opts.use_color.then_some(Color::DarkGrey);
    let green = opts.use_color.then_some(Color::Green);
    for (_, spec) in live {
        let (status, detail, color) = match spec {
            SlotSpec::Chart(chart) => (
                kind_label(chart.kind),
                format!(
                    "{} points, {} series",
                    format_number(chart.point_count() as i64),
                    chart.series.len()
                ),
                green,
            ),
            SlotSpec::Stats(stats) => (
                "stats",
                stats
                    .items
                    .iter()
                    .map(|i| format!("{} {}", i.label, i.value))
                    .collect::<Vec<_>>()
                    .join(", "),
                green,
            ),
            SlotSpec::Empty(empty) => ("empty", empty.message.clone(), dim),
        };
        let mut row = vec![Cell::new(spec.title()), styled_cell(status, color, false)];
        if !opts.compact {
            row.push(styled_cell(&detail, color, false));
        }
        table.add_row(row);
    }
    table
}

pub(crate) fn print_summary(
    live: &[(Slot, &SlotSpec)],
    range: DateRange,
    bounds: Option<DateBounds>,
    opts: SummaryOptions,
) {
    let overview = live
        .iter()
        .find(|(slot, _)| *slot == Slot::Overview)
        .map(|(_, spec)| *spec);

    println!("\n  Usage Dashboard ({})\n", format_range(range));
    if let Some(table) = overview_table(overview, opts) {
        println!("{table}");
    }
    println!("{}", slot_table(live, opts));

    let charts = live.iter().filter(|(_, spec)| !spec.is_empty()).count();
    let available = match bounds {
        Some(b) => format!(", data from {} to {}", b.min, b.max),
        None => String::new(),
    };
    println!(
        "\n  {} of {} slots with data{}\n",
        charts,
        live.len(),
        available
    );
}
