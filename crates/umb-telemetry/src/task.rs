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

//! Progress reporting for long-running named tasks, with throttled output.

use std::time::{Duration, Instant};

use umb_core::text::fmt_float;

/// Minimum quiet time between progress report lines.
const REPORT_INTERVAL: Duration = Duration::from_millis(1000);

/// Tracks at most one named in-flight operation and reports its progress.
///
/// Tight loops can call [`update`](TaskTimer::update) every iteration: a
/// report line only goes out when at least a second has passed since the
/// previous one. Starting a new task discards whatever was tracked before;
/// [`done`](TaskTimer::done) closes the task and is a no-op after that.
///
/// Report lines:
///
/// ```text
/// mesh relax: 42% - 3.4 sec
/// mesh relax: Done - 8.1 sec
/// ```
#[derive(Debug)]
pub struct TaskTimer {
    name: Option<String>,
    started: Instant,
    last_report: Instant,
}

impl TaskTimer {
    /// Creates a reporter with no task active.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            name: None,
            started: now,
            last_report: now,
        }
    }

    /// Starts tracking `name`, resetting the clock and discarding any
    /// previously active task.
    pub fn start(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self.started = Instant::now();
        self.last_report = self.started;
        self
    }

    /// Name of the task in flight, if any.
    pub fn active(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Total time since the active task started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Reports progress for the active task, returning whether a line was
    /// actually emitted.
    ///
    /// `progress` is either a `0..1` fraction or an already scaled percent;
    /// fractions are scaled up before printing. Output is throttled to one
    /// line per second, and nothing happens without an active task.
    pub fn update(&mut self, progress: f32) -> bool {
        let Some(name) = self.name.as_deref() else {
            return false;
        };
        if self.last_report.elapsed() < REPORT_INTERVAL {
            return false;
        }

        let percent = if progress < 1.0 {
            progress * 100.0
        } else {
            progress
        };
        log::info!(
            "{}: {}% - {} sec",
            name,
            percent as i32,
            fmt_float(self.started.elapsed().as_secs_f32(), 1, 1)
        );
        self.last_report = Instant::now();
        true
    }

    /// Emits the completion line and clears the active task.
    ///
    /// Returns whether a line was emitted; with no task active this is a
    /// no-op, so calling it twice is harmless.
    pub fn done(&mut self) -> bool {
        match self.name.take() {
            Some(name) => {
                log::info!(
                    "{}: Done - {} sec",
                    name,
                    fmt_float(self.started.elapsed().as_secs_f32(), 1, 1)
                );
                true
            }
            None => false,
        }
    }
}

impl Default for TaskTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn updates_are_throttled_to_one_per_second() {
        let mut task = TaskTimer::new();
        task.start("throttle check");

        // Two calls straight after starting: still inside the quiet window.
        assert!(!task.update(0.1));
        assert!(!task.update(0.2));

        thread::sleep(Duration::from_millis(1050));
        assert!(task.update(0.5));
        // Immediately after a report the window is closed again.
        assert!(!task.update(0.6));
    }

    #[test]
    fn done_reports_once_and_clears() {
        let mut task = TaskTimer::new();
        task.start("finishing");
        assert_eq!(task.active(), Some("finishing"));

        assert!(task.done());
        assert_eq!(task.active(), None);
        assert!(!task.done(), "second done must be a no-op");
        assert!(!task.update(0.5), "updates after done are no-ops");
    }

    #[test]
    fn starting_replaces_the_previous_task() {
        let mut task = TaskTimer::new();
        task.start("first");
        task.start("second");
        assert_eq!(task.active(), Some("second"));
        assert!(task.done());
        assert!(!task.done());
    }

    #[test]
    fn update_without_a_task_is_a_no_op() {
        let mut task = TaskTimer::new();
        assert!(!task.update(50.0));
    }

    #[test]
    fn fractions_and_percents_are_both_accepted() {
        // Both forms must pass through the same scaling branch without
        // emitting (still throttled), exercising the normalization path.
        let mut task = TaskTimer::new();
        task.start("scaling");
        assert!(!task.update(0.25));
        assert!(!task.update(25.0));
    }
}
