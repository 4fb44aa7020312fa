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

//! Fixed-capacity indexed timer slots for ad hoc profiling.

use std::time::Instant;

/// Number of timer ids a bank holds.
pub const TIMER_COUNT: usize = 100;

/// Cells per timer id: start, end, elapsed.
const STRIDE: usize = 3;

/// Indexed start/end/elapsed records over a flat millisecond cell array.
///
/// Each id owns three contiguous cells at a fixed stride: the recorded
/// start, the recorded end, and the elapsed difference. Slots are simply
/// overwritten on reuse; there is no deletion. The elapsed cell is only
/// meaningful once both [`start`](TimerBank::start) and
/// [`end`](TimerBank::end) have run for that id.
///
/// Capacity is fixed at [`TIMER_COUNT`]; an id at or beyond it panics on
/// use. That is the documented constraint, not a checked error — profiling
/// ids are chosen by the programmer, not by data.
///
/// Cell values are milliseconds since the bank was created, kept as plain
/// integers so a slot can be printed or diffed without touching the clock.
#[derive(Debug)]
pub struct TimerBank {
    epoch: Instant,
    cells: [u64; TIMER_COUNT * STRIDE],
}

impl TimerBank {
    /// Creates a bank with all cells zeroed.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            cells: [0; TIMER_COUNT * STRIDE],
        }
    }

    /// Milliseconds since the bank was created.
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Records the current time as `id`'s start and returns it.
    pub fn start(&mut self, id: usize) -> u64 {
        let t = self.now_ms();
        self.cells[id * STRIDE] = t;
        t
    }

    /// Milliseconds since `id`'s recorded start.
    ///
    /// A non-destructive peek: neither the start nor the end cell moves, so
    /// calling this repeatedly keeps measuring from the same start.
    pub fn elapsed(&self, id: usize) -> u64 {
        self.now_ms() - self.cells[id * STRIDE]
    }

    /// Records the current time as `id`'s end, stores and returns the
    /// elapsed difference.
    pub fn end(&mut self, id: usize) -> u64 {
        let t = self.now_ms();
        let base = id * STRIDE;
        self.cells[base + 1] = t;
        self.cells[base + 2] = t - self.cells[base];
        self.cells[base + 2]
    }

    /// The elapsed cell recorded by the last [`end`](TimerBank::end) for
    /// `id`.
    pub fn recorded(&self, id: usize) -> u64 {
        self.cells[id * STRIDE + 2]
    }
}

impl Default for TimerBank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn elapsed_covers_a_sleep_without_mutating() {
        let mut bank = TimerBank::new();
        bank.start(5);
        thread::sleep(Duration::from_millis(50));
        let first = bank.elapsed(5);
        assert!(first >= 50, "elapsed {first}ms should cover the sleep");

        // Peeking again measures from the same start.
        let second = bank.elapsed(5);
        assert!(second >= first);
        assert_eq!(bank.recorded(5), 0, "peek must not touch the end cells");
    }

    #[test]
    fn end_stores_the_difference() {
        let mut bank = TimerBank::new();
        bank.start(0);
        thread::sleep(Duration::from_millis(30));
        let elapsed = bank.end(0);
        assert!(elapsed >= 30);
        assert_eq!(bank.recorded(0), elapsed);
    }

    #[test]
    fn slots_are_reused_by_overwriting() {
        let mut bank = TimerBank::new();
        bank.start(7);
        thread::sleep(Duration::from_millis(20));
        let first = bank.end(7);

        bank.start(7);
        let second = bank.end(7);
        assert!(second <= first);
        assert_eq!(bank.recorded(7), second);
    }

    #[test]
    fn ids_are_independent() {
        let mut bank = TimerBank::new();
        bank.start(1);
        thread::sleep(Duration::from_millis(20));
        bank.start(2);
        thread::sleep(Duration::from_millis(20));
        let one = bank.end(1);
        let two = bank.end(2);
        assert!(one > two);
    }

    #[test]
    #[should_panic]
    fn ids_beyond_capacity_panic() {
        let mut bank = TimerBank::new();
        bank.start(TIMER_COUNT);
    }

    #[test]
    fn highest_valid_id_works() {
        let mut bank = TimerBank::new();
        bank.start(TIMER_COUNT - 1);
        bank.end(TIMER_COUNT - 1);
    }
}
