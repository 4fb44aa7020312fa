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

//! The contract an externally owned drawing context fulfills.

use crate::math::color::Argb;

/// How a run of streamed vertices is assembled into geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// A single filled polygon in vertex order.
    Polygon,
    /// Isolated points.
    Points,
    /// Independent line segments, two vertices each.
    Lines,
    /// Independent triangles, three vertices each.
    Triangles,
    /// A strip of triangles sharing edges.
    TriangleStrip,
    /// Independent quads, four vertices each.
    Quads,
    /// A strip of quads sharing edges.
    QuadStrip,
}

/// The externally owned surface that receives primitive drawing commands.
///
/// The toolkit never renders anything itself; a [`Draw`](crate::Draw)
/// forwarder translates vertex-level arguments into these calls, choosing
/// the spatial (`*3`) entry points only when [`is_3d`](RenderSurface::is_3d)
/// says the surface understands depth. The spatial methods default to their
/// planar forms, so a 2-D surface implements just the planar subset.
///
/// Transform and style state are the surface's own; [`push`](RenderSurface::push)
/// and [`pop`](RenderSurface::pop) must save and restore both together.
pub trait RenderSurface {
    /// Whether the surface accepts z coordinates.
    fn is_3d(&self) -> bool;

    /// Moves the origin by `(x, y)`.
    fn translate(&mut self, x: f32, y: f32);

    /// Moves the origin by `(x, y, z)`.
    fn translate3(&mut self, x: f32, y: f32, z: f32) {
        let _ = z;
        self.translate(x, y);
    }

    /// Scales subsequent drawing per axis.
    fn scale(&mut self, x: f32, y: f32, z: f32);

    /// Rotates about the x axis, in radians.
    fn rotate_x(&mut self, angle: f32);

    /// Rotates about the y axis, in radians.
    fn rotate_y(&mut self, angle: f32);

    /// Rotates about the z axis, in radians.
    fn rotate_z(&mut self, angle: f32);

    /// Draws a line segment in the plane.
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Draws a line segment in space.
    fn line3(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) {
        let _ = (z1, z2);
        self.line(x1, y1, x2, y2);
    }

    /// Draws a rectangle with its corner at `(x, y)`.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Draws an ellipse centered at `(x, y)`.
    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Opens a vertex run.
    fn begin_shape(&mut self, mode: ShapeMode);

    /// Closes the current vertex run.
    fn end_shape(&mut self);

    /// Streams a planar vertex into the current run.
    fn vertex(&mut self, x: f32, y: f32);

    /// Streams a spatial vertex into the current run.
    fn vertex3(&mut self, x: f32, y: f32, z: f32) {
        let _ = z;
        self.vertex(x, y);
    }

    /// Streams a planar vertex with texture coordinates.
    fn vertex_uv(&mut self, x: f32, y: f32, u: f32, v: f32) {
        let _ = (u, v);
        self.vertex(x, y);
    }

    /// Streams a spatial vertex with texture coordinates.
    fn vertex3_uv(&mut self, x: f32, y: f32, z: f32, u: f32, v: f32) {
        let _ = z;
        self.vertex_uv(x, y, u, v);
    }

    /// Saves the transform and style state as a pair.
    fn push(&mut self);

    /// Restores the most recently saved transform and style state.
    fn pop(&mut self);

    /// Sets the fill color for subsequent shapes.
    fn fill(&mut self, color: Argb);

    /// Disables filling.
    fn no_fill(&mut self);

    /// Sets the stroke color for subsequent shapes.
    fn stroke(&mut self, color: Argb);

    /// Sets the stroke width.
    fn stroke_weight(&mut self, weight: f32);

    /// Disables stroking.
    fn no_stroke(&mut self);
}
