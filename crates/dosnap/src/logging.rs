use std::env;

use tracing_subscriber::EnvFilter;

/// Install the global stderr logging subscriber.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

/// `DOSNAP_LOG` wins over `RUST_LOG`; both absent means `info`.
fn build_filter() -> EnvFilter {
    if let Ok(spec) = env::var("DOSNAP_LOG") {
        if !spec.trim().is_empty() {
            if let Ok(filter) = EnvFilter::try_new(spec) {
                return filter;
            }
        }
    }

    match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("info"),
    }
}
