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

//! Drawing forwarder and the render-surface contract.
//!
//! The toolkit draws by delegation: geometry code hands vertex-level
//! arguments to a [`Draw`] forwarder, which translates them into primitive
//! calls on whatever [`RenderSurface`] the host application has bound.
//! No surface bound means calls are skipped with a throttled diagnostic,
//! never an error to the caller.

pub mod forward;
pub mod surface;

pub use self::forward::Draw;
pub use self::surface::{RenderSurface, ShapeMode};
