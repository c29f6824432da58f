//! Logging setup for the vkeys binary
//!
//! Every run appends to `~/.config/vkeys/logs/vkeys.log` (rotated daily) at
//! debug level. Console output goes to stderr so it never mixes with command
//! output. Its level comes from RUST_LOG when set (for example
//! `RUST_LOG=vkeys::keymap=debug`), otherwise from the `-v` count.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{ensure_logs_dir, LOG_FILE_NAME};

/// Console level for a `-v` count
fn console_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the subscriber
///
/// With `console` off only the log file is written.
pub fn init(verbosity: u8, console: bool) {
    let console_layer = console.then(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(console_level(verbosity)));
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .with_filter(filter)
    });

    let file_layer = match ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            if console {
                eprintln!("Warning: Could not initialize file logging: {}", e);
            }
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
