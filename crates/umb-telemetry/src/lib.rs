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

//! # UMB Telemetry
//!
//! Timing and task instrumentation for the UMB toolkit: indexed timer slots
//! for ad hoc profiling, a throttled progress reporter for long-running
//! named tasks, and the diagnostics logger the rest of the toolkit writes
//! through.

#![warn(missing_docs)]

pub mod logging;
pub mod stopwatch;
pub mod task;
pub mod timer_bank;

pub use stopwatch::Stopwatch;
pub use task::TaskTimer;
pub use timer_bank::{TimerBank, TIMER_COUNT};
