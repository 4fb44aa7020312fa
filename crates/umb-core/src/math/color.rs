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

//! Defines the packed [`Argb`] color type and its hexadecimal text form.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use super::constrain;

/// A color packed into a single `u32` with byte layout
/// `[alpha:8][red:8][green:8][blue:8]`.
///
/// This is the interchange representation handed to the render surface and
/// the only color form persisted as text (see [`Argb::to_hex`]). Values are
/// immutable; every "modification" produces a new `Argb`.
///
/// `#[repr(transparent)]` keeps the layout identical to the raw `u32`, which
/// matters when color data is passed on to graphics APIs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Opaque red.
    pub const RED: Self = Self(0xFFFF_0000);
    /// Opaque green.
    pub const GREEN: Self = Self(0xFF00_FF00);
    /// Opaque blue.
    pub const BLUE: Self = Self(0xFF00_00FF);

    /// Value produced by [`Argb::parse`] for malformed input: opaque pure
    /// red, chosen to be loud on screen without stopping the session.
    pub const SENTINEL: Self = Self::RED;

    /// Creates a color from raw packed bits.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw packed bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Packs three components into an opaque color.
    ///
    /// Components are truncated to 8 bits by integer cast, not rounded;
    /// `255.9` becomes `255`, `-1.0` becomes `0`.
    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(0xFF00_0000 | ((r as u32 & 0xFF) << 16) | ((g as u32 & 0xFF) << 8) | (b as u32 & 0xFF))
    }

    /// Packs four components, honoring the alpha channel.
    #[inline]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::rgb(r, g, b).with_alpha(a as u32)
    }

    /// Packs a single brightness value into an opaque gray.
    #[inline]
    pub fn gray(v: f32) -> Self {
        Self::rgb(v, v, v)
    }

    /// The alpha channel, `0..=255`.
    #[inline]
    pub const fn alpha(self) -> u32 {
        (self.0 >> 24) & 0xFF
    }

    /// The red channel, `0..=255`.
    #[inline]
    pub const fn red(self) -> u32 {
        (self.0 >> 16) & 0xFF
    }

    /// The green channel, `0..=255`.
    #[inline]
    pub const fn green(self) -> u32 {
        (self.0 >> 8) & 0xFF
    }

    /// The blue channel, `0..=255`.
    #[inline]
    pub const fn blue(self) -> u32 {
        self.0 & 0xFF
    }

    /// Returns the same color with a different alpha byte.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u32) -> Self {
        Self(((a & 0xFF) << 24) | (self.0 & 0x00FF_FFFF))
    }

    /// Renders the color as uppercase hexadecimal text.
    ///
    /// Fully opaque colors print as 6 digits (`"FF5733"`); anything with
    /// alpha below 255 gains a 2-digit alpha prefix (`"80FF5733"`).
    pub fn to_hex(self) -> String {
        let a = self.alpha();
        if a < 255 {
            format!("{:02X}{:06X}", a, self.0 & 0x00FF_FFFF)
        } else {
            format!("{:06X}", self.0 & 0x00FF_FFFF)
        }
    }

    /// Parses hexadecimal color text.
    ///
    /// An 8-character input is read as a 2-digit alpha byte followed by the
    /// RGB value; any other length is read as RGB with full alpha. Parsing
    /// never fails to the caller: malformed input (a non-alphanumeric
    /// character, digits that don't parse) logs a diagnostic and yields
    /// [`Argb::SENTINEL`]. Interactive sessions keep running on a bad color
    /// string.
    pub fn parse(hex: &str) -> Self {
        if !hex.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            log::warn!("Argb::parse('{hex}') failed.");
            return Self::SENTINEL;
        }

        let (alpha, rgb) = if hex.len() == 8 {
            (u32::from_str_radix(&hex[..2], 16), &hex[2..])
        } else {
            (Ok(0xFF), hex)
        };

        match (alpha, u32::from_str_radix(rgb, 16)) {
            (Ok(a), Ok(c)) => Self((a << 24) | c),
            _ => {
                log::warn!("Argb::parse('{hex}') failed.");
                Self::SENTINEL
            }
        }
    }

    /// Linearly interpolates between two packed colors, channel by channel.
    /// The factor `t` is clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        let t = constrain(t, 0.0, 1.0);
        let channel = |s: u32, e: u32| s as f32 + (e as f32 - s as f32) * t;
        Self::rgba(
            channel(start.red(), end.red()),
            channel(start.green(), end.green()),
            channel(start.blue(), end.blue()),
            channel(start.alpha(), end.alpha()),
        )
    }
}

impl Default for Argb {
    /// Returns opaque white by default.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for Argb {
    /// Displays the hexadecimal text form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
