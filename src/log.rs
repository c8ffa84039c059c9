// src/log.rs
//
// Thin facade over `tracing`. The library only emits events; the binary
// decides where they go (see `init`).

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

/// Map a `-v` count to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Lines carry the time elapsed since start,
/// e.g. `0.412s  INFO icon_seed::runner: ...`.
///
/// `RUST_LOG` wins over `verbosity` when set.
#[cfg(feature = "cli")]
pub fn init(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    // A second init (tests, embedding) is harmless; keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_writer(std::io::stderr)
        .try_init();
}
