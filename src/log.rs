// src/log.rs
//
// Logging front door. The crate logs through `logf!`/`logd!`/`logw!`/`loge!`,
// which forward to `tracing`; `init` decides where the lines end up.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Terminal frontends.
    Stderr,
    /// `.store/debug.log`, for the GUI (no console on Windows).
    File,
}

fn filter(verbose: u8) -> EnvFilter {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(verbose: u8, sink: Sink) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_timer(Uptime::default())
        .with_target(false);

    let result = match sink {
        Sink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        Sink::File => {
            let _ = fs::create_dir_all(STORE_DIR);
            match OpenOptions::new()
                .create(true)
                .append(true)
                .open(Path::new(STORE_DIR).join(LOG_FILE))
            {
                Ok(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
                Err(_) => builder.with_writer(std::io::stderr).try_init(),
            }
        }
    };
    // Err only means a subscriber is already installed (tests, repeated init).
    let _ = result;
}

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
