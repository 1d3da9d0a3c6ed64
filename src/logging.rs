use env_logger::Env;

/// Filter used when `RUST_LOG` is unset; keeps stderr quiet on normal runs.
const DEFAULT_FILTER: &str = "warn";

/// Diagnostics go to stderr so stdout only ever carries the timings.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .init();
}
