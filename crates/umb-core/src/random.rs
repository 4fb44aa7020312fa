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

//! Convenience facade over a seeded random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random helper with the bounded and signed conveniences the
/// geometry code reaches for.
///
/// This wraps a [`StdRng`]; generation itself belongs to the `rand` crate.
/// Seed explicitly for reproducible runs, or use
/// [`from_entropy`](Random::from_entropy) when reproducibility doesn't
/// matter.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Creates a facade from an explicit seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a facade seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Wraps a generator constructed elsewhere.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// A uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// A uniform value in `[0, max)`.
    pub fn upto(&mut self, max: f32) -> f32 {
        self.unit() * max
    }

    /// A uniform value in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    /// A uniform integer in `[0, max)`. Non-positive `max` yields zero.
    pub fn int_upto(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        (self.unit() * max as f32) as i32
    }

    /// A uniform integer in `[min, max)`.
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        min + self.int_upto(max - min)
    }

    /// A fair coin flip.
    pub fn flip(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// `true` with a `percent` in 100 chance; `percent` is capped at 100.
    pub fn prob(&mut self, percent: f32) -> bool {
        self.upto(100.0) < percent.min(100.0)
    }

    /// `-1.0` or `1.0` with equal odds.
    pub fn rnd_sign(&mut self) -> f32 {
        if self.flip() {
            1.0
        } else {
            -1.0
        }
    }

    /// A value in `[0, max)` with a randomly chosen sign.
    pub fn signed(&mut self, max: f32) -> f32 {
        self.upto(max) * self.rnd_sign()
    }

    /// A value drawn from `[min, max)` or `[-max, -min)` with equal odds.
    ///
    /// Unlike `range(-max, max)`, this never produces values inside
    /// `(-min, min)`, which matters when magnitudes near zero are useless.
    pub fn signed_range(&mut self, min: f32, max: f32) -> f32 {
        let val = self.range(min, max);
        if self.flip() {
            val
        } else {
            -val
        }
    }

    /// Integer form of [`signed_range`](Random::signed_range).
    pub fn int_signed_range(&mut self, min: i32, max: i32) -> i32 {
        let val = self.int_range(min, max);
        if self.flip() {
            val
        } else {
            -val
        }
    }
}
