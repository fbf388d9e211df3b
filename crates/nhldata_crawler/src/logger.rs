// This module setup the logger level.

use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["nhldata_app", "nhldata_crawler", "nhldata_infrastructure"];

// Dependencies stay at warn, our crates log at `logger_level`.
fn directives(logger_level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|name| format!("{name}={logger_level}")));
    directives.join(",")
}

// RUST_LOG, when set, wins over the configured level.
pub fn setup(logger_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(logger_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
