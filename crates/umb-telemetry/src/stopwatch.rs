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

//! A monotonic stopwatch, the primitive under both timer flavors.

use std::time::{Duration, Instant};

/// Measures elapsed wall time from its creation or last restart.
///
/// Creation starts the clock; there is no stopped state. Reading never
/// mutates, so repeated reads observe the same start point.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Creates a stopwatch already running.
    #[inline]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Moves the start point to now.
    #[inline]
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Elapsed time since start.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed whole milliseconds since start.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    /// Elapsed seconds since start, fractional.
    #[inline]
    pub fn elapsed_secs_f32(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const SLEEP_MS: u64 = 50;
    const MARGIN_MS: u64 = 200;

    #[test]
    fn starts_near_zero() {
        let watch = Stopwatch::new();
        assert!(watch.elapsed_ms() < MARGIN_MS);
    }

    #[test]
    fn tracks_a_sleep() {
        let watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(SLEEP_MS));
        let ms = watch.elapsed_ms();
        assert!(ms >= SLEEP_MS, "elapsed {ms}ms should cover the sleep");
        assert!(ms < SLEEP_MS + MARGIN_MS);
    }

    #[test]
    fn reading_does_not_move_the_start_point() {
        let watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(SLEEP_MS));
        let first = watch.elapsed_ms();
        let second = watch.elapsed_ms();
        assert!(second >= first);
    }

    #[test]
    fn restart_resets_the_clock() {
        let mut watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(SLEEP_MS));
        watch.restart();
        assert!(watch.elapsed_ms() < SLEEP_MS);
    }
}
