use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
fn default_directives(debug: bool) -> &'static str {
    if debug { "warn,ccdash=debug" } else { "warn" }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `--debug`.
pub(crate) fn init(debug: bool, use_color: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(debug).into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .init();
}
