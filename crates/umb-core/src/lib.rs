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

//! # UMB Core
//!
//! Foundational crate of the UMB toolkit: the cross-cutting services the
//! geometry and rendering layers lean on — capability flags, packed colors,
//! locale-independent number formatting, pooled string building, a seeded
//! randomness facade, and the drawing forwarder that translates vertex-level
//! arguments into primitive calls on an externally owned render surface.
//!
//! Everything here is synchronous and single-threaded by design: services
//! are plain owned objects driven from one call stack, typically the render
//! loop.

#![warn(missing_docs)]

pub mod draw;
pub mod math;
pub mod options;
pub mod random;
pub mod text;

pub use draw::{Draw, RenderSurface, ShapeMode};
pub use math::color::Argb;
pub use math::vertex::Vertex;
pub use options::GeoOptions;
pub use random::Random;
pub use text::pool::StrPool;

/// Library version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
