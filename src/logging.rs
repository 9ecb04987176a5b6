//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter() -> &'static str {
    if cfg!(debug_assertions) { "profile_space=debug,tower_http=debug,info" } else { "profile_space=info,warn" }
}

/// Install the global fmt subscriber, honoring `RUST_LOG` when present.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}
