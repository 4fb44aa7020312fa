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

//! Reusable string builders for allocation-light formatting.

/// A free list of `String` buffers shared by the text-producing utilities.
///
/// [`acquire`](StrPool::acquire) hands out an empty buffer, reusing an idle
/// one only while more than one is idle so a spare always stays ready.
/// Every acquired buffer must come back through exactly one
/// [`dispose`](StrPool::dispose), which yields the built text and recycles
/// the allocation with its capacity intact. Buffers are scoped to a single
/// formatting operation, never held across calls.
///
/// Not thread-safe; the owning scope drives it from one call stack.
/// Disposing a buffer that did not come from this pool is not detected —
/// a documented misuse rather than a checked error.
#[derive(Debug, Default)]
pub struct StrPool {
    free: Vec<String>,
    in_flight: usize,
}

impl StrPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out an empty buffer, recycling an idle one when possible.
    pub fn acquire(&mut self) -> String {
        self.in_flight += 1;
        if self.free.len() > 1 {
            if let Some(mut buf) = self.free.pop() {
                buf.clear();
                return buf;
            }
        }
        String::new()
    }

    /// Takes a buffer back, returning its final content.
    ///
    /// The buffer itself goes on the free list for later reuse; the content
    /// is materialized exactly once, here.
    pub fn dispose(&mut self, mut buf: String) -> String {
        self.in_flight = self.in_flight.saturating_sub(1);
        let out = buf.as_str().to_owned();
        buf.clear();
        self.free.push(buf);
        out
    }

    /// Number of buffers waiting on the free list.
    pub fn idle(&self) -> usize {
        self.free.len()
    }

    /// Number of buffers currently handed out.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}
