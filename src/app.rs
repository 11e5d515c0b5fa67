use std::io::Write;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::dashboard::{Canvas, Dashboard};
use crate::error::AppError;
use crate::output::{SummaryOptions, output_dashboard_json, output_view_json, print_summary};
use crate::snapshot::{STDIN_PATH, SnapshotSource, load_snapshot};
use crate::utils::parse_range;

fn print_json(json: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn load_dashboard(location: &str) -> Result<Dashboard<Canvas>, AppError> {
    let source = if location == STDIN_PATH {
        SnapshotSource::from_stdin()
    } else {
        Ok(SnapshotSource::resolve(location))
    };
    let mut dashboard = Dashboard::new(Canvas::new());
    if let Err(e) = dashboard.load(source.and_then(|s| load_snapshot(&s))) {
        if let Some(message) = dashboard.renderer().failure() {
            eprintln!("{message}");
        }
        return Err(e.into());
    }
    Ok(dashboard)
}

/// Load, apply the requested range, and print the requested output
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let requested = parse_range(cli.since.as_deref(), cli.until.as_deref())?;
    let mut dashboard = load_dashboard(cli.stats_location())?;
    if !requested.is_full() {
        dashboard.set_range(requested);
    }

    let canvas = dashboard.renderer();
    debug!(
        live = canvas.live_count(),
        created = canvas.created(),
        destroyed = canvas.destroyed(),
        "dashboard rendered"
    );

    let range = dashboard.range().unwrap_or_default();
    let bounds = dashboard.bounds();
    let live = canvas.live();

    match cli.command() {
        Commands::View => {
            if let Some(view) = dashboard.view() {
                print_json(&output_view_json(view, cli.compact)?)?;
            }
        }
        Commands::Summary if !cli.json => print_summary(
            &live,
            range,
            bounds,
            SummaryOptions {
                use_color: cli.use_color(),
                compact: cli.compact,
            },
        ),
        Commands::Charts | Commands::Summary => {
            print_json(&output_dashboard_json(&live, range, bounds, cli.compact)?)?;
        }
    }
    Ok(())
}
