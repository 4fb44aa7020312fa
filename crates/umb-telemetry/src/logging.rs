// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Diagnostics stream for the toolkit.
//!
//! Informational lines go to stdout behind a `HH:mm:ss` wall-clock prefix;
//! error lines go to stderr, unprefixed. Built on `env_logger`, so the
//! usual `RUST_LOG` filtering applies (default `info`).

use std::io::Write;
use std::sync::Once;

use chrono::Local;
use env_logger::{Builder, Env, Target};
use log::{Level, SetLoggerError};

/// Format of the wall-clock prefix on informational lines.
const CLOCK_FORMAT: &str = "%H:%M:%S";

/// The horizontal rule used to group related output.
const DIVIDER: &str = "----------------------------------------";

static BANNER: Once = Once::new();

/// Renders the current wall-clock time as `HH:mm:ss`.
pub fn timestamp() -> String {
    Local::now().format(CLOCK_FORMAT).to_string()
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .target(Target::Stdout)
        .format(|buf, record| {
            if record.level() == Level::Error {
                // Errors bypass the stdout pipeline: stderr, no prefix.
                eprintln!("{}", record.args());
                Ok(())
            } else {
                writeln!(
                    buf,
                    "{} {}",
                    Local::now().format(CLOCK_FORMAT),
                    record.args()
                )
            }
        });
    builder
}

/// Initializes the toolkit logger and prints the library banner.
///
/// Panics if a global logger is already installed; use
/// [`try_init`] when another component may have gotten there first.
pub fn init() {
    builder().init();
    banner();
}

/// Initializes the toolkit logger unless one is already installed.
pub fn try_init() -> Result<(), SetLoggerError> {
    builder().try_init()?;
    banner();
    Ok(())
}

/// Logs the horizontal divider line.
pub fn log_divider() {
    log::info!("{DIVIDER}");
}

/// Logs a divider carrying a label.
pub fn log_divider_labeled(label: &str) {
    log::info!("{DIVIDER} {label}");
}

/// One-time library banner, emitted on first logger initialization.
fn banner() {
    BANNER.call_once(|| {
        log_divider_labeled(&format!("UMB toolkit {}", umb_core::VERSION));
        log_divider();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_is_wall_clock_shaped() {
        let ts = timestamp();
        assert_eq!(ts.len(), 8);
        let bytes = ts.as_bytes();
        assert_eq!(bytes[2], b':');
        assert_eq!(bytes[5], b':');
        assert!(ts
            .chars()
            .enumerate()
            .all(|(i, c)| if i == 2 || i == 5 { c == ':' } else { c.is_ascii_digit() }));
    }

    #[test]
    fn try_init_is_safe_to_repeat() {
        // First call may win or lose against other tests; the second call
        // must simply report the conflict instead of panicking.
        let _ = try_init();
        assert!(try_init().is_err());
    }
}
