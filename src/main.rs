mod app;
mod chart;
mod cli;
mod config;
mod consts;
mod core;
mod dashboard;
mod error;
mod logging;
mod output;
mod snapshot;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use error::AppError;

fn main() {
    let (config, events) = Config::load();
    let cli = Cli::parse().with_config(&config);

    logging::init(cli.debug, cli.use_color());
    for event in &events {
        event.log();
    }

    if let Err(e) = app::run(&cli) {
        // The load failure notice was already printed by the dashboard
        if !matches!(e, AppError::Load(_)) {
            eprintln!("{e}");
        }
        std::process::exit(1);
    }
}
