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

//! The vertex carrier type consumed by the drawing forwarder.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A single point with spatial and texture coordinates.
///
/// This is the argument type the [`Draw`](crate::Draw) forwarder consumes;
/// mesh construction and vector math live in the geometry layer, so this
/// type deliberately carries no operations beyond construction.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vertex {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
    /// The z coordinate; zero on planar geometry.
    pub z: f32,
    /// The horizontal texture coordinate.
    pub u: f32,
    /// The vertical texture coordinate.
    pub v: f32,
}

impl Vertex {
    /// The origin, with zeroed texture coordinates.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        u: 0.0,
        v: 0.0,
    };

    /// Creates a spatial vertex with zeroed texture coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            u: 0.0,
            v: 0.0,
        }
    }

    /// Creates a planar vertex (`z = 0`).
    #[inline]
    pub const fn xy(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Returns the same position with the given texture coordinates.
    #[inline]
    #[must_use]
    pub const fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.u = u;
        self.v = v;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let v = Vertex::new(1.0, 2.0, 3.0);
        assert_eq!((v.x, v.y, v.z), (1.0, 2.0, 3.0));
        assert_eq!((v.u, v.v), (0.0, 0.0));

        let p = Vertex::xy(4.0, 5.0);
        assert_eq!(p.z, 0.0);

        let t = p.with_uv(0.25, 0.75);
        assert_eq!((t.u, t.v), (0.25, 0.75));
        assert_eq!((t.x, t.y), (p.x, p.y));
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(Vertex::ZERO, Vertex::default());
    }
}
