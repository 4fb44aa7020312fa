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

//! Per-object capability flags for geometry containers.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Named capability bits carried by geometry-owning objects.
///
/// Each flag is a disjoint power of two; a flag counts as enabled only when
/// all of its bits are set. The mask belongs to its owning object and is
/// never shared between objects. Mutating calls return `&mut Self` and the
/// value-producing forms return new masks, so both styles chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode)]
pub struct GeoOptions {
    bits: u32,
}

impl GeoOptions {
    /// No capabilities.
    pub const EMPTY: Self = Self { bits: 0 };
    /// Skip vertices already present when appending geometry.
    pub const NO_DUPLICATES: Self = Self { bits: 1 << 0 };
    /// Share vertex data on assignment instead of deep-copying it.
    pub const NO_COPY: Self = Self { bits: 1 << 1 };
    /// Carry one color per face.
    pub const COLOR_FACE: Self = Self { bits: 1 << 2 };
    /// Carry one color per vertex.
    pub const COLOR_VERTEX: Self = Self { bits: 1 << 3 };

    /// Display names for the known flags, in report priority order.
    const LABELS: [(Self, &'static str); 4] = [
        (Self::NO_DUPLICATES, "NODUPL"),
        (Self::NO_COPY, "NOCOPY"),
        (Self::COLOR_FACE, "COLORFACE"),
        (Self::COLOR_VERTEX, "COLORVERTEX"),
    ];

    /// Creates a flag set from raw bits. Bits that match no known flag are
    /// kept but never rendered by [`label_string`](Self::label_string).
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw mask.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Replaces the whole mask.
    #[inline]
    pub fn set(&mut self, options: Self) -> &mut Self {
        self.bits = options.bits;
        self
    }

    /// Enables the given flags. Idempotent.
    #[inline]
    pub fn insert(&mut self, options: Self) -> &mut Self {
        self.bits |= options.bits;
        self
    }

    /// Disables the given flags. Idempotent.
    #[inline]
    pub fn remove(&mut self, options: Self) -> &mut Self {
        self.bits &= !options.bits;
        self
    }

    /// Returns `true` if every bit of `options` is set in `self`.
    #[inline]
    pub const fn contains(&self, options: Self) -> bool {
        (self.bits & options.bits) == options.bits
    }

    /// Mask-level form of [`contains`](Self::contains), for callers holding
    /// a raw mask rather than an owning object.
    #[inline]
    pub const fn enabled_in(mask: u32, options: Self) -> bool {
        (mask & options.bits) == options.bits
    }

    /// Returns a new mask with `options` enabled.
    #[inline]
    #[must_use]
    pub const fn with(mut self, options: Self) -> Self {
        self.bits |= options.bits;
        self
    }

    /// Returns a new mask with `options` disabled.
    #[inline]
    #[must_use]
    pub const fn without(mut self, options: Self) -> Self {
        self.bits &= !options.bits;
        self
    }

    /// Returns `true` when no bits at all are set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Renders the enabled known flags as a deterministic report line.
    ///
    /// Names appear tab-joined in a fixed priority order (duplicate
    /// suppression, copy sharing, face color, vertex color); unknown bits
    /// are ignored. With no recognized flag set the line reads
    /// `"Options: None"`.
    pub fn label_string(&self) -> String {
        let names: Vec<&str> = Self::LABELS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            "Options: None".to_owned()
        } else {
            format!("Options: {}", names.join("\t"))
        }
    }
}

impl std::ops::BitOr for GeoOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.with(rhs)
    }
}

impl std::ops::BitOrAssign for GeoOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl std::fmt::Debug for GeoOptions {
    /// Renders flag names, `UNKNOWN(bits)` for stray bits, `EMPTY` for none.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GeoOptions {{ ")?;

        let mut rest = self.bits;
        let mut first = true;
        for (flag, name) in Self::LABELS {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                rest &= !flag.bits;
                first = false;
            }
        }

        if rest != 0 {
            if !first {
                write!(f, " | ")?;
            }
            write!(f, "UNKNOWN({rest:#x})")?;
            first = false;
        }

        if first {
            write!(f, "EMPTY")?;
        }

        write!(f, " }}")
    }
}
