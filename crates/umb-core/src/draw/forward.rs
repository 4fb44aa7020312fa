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

//! Fluent forwarding of geometry arguments onto a bound render surface.

use super::surface::{RenderSurface, ShapeMode};
use crate::math::color::Argb;
use crate::math::vertex::Vertex;

/// A missing-surface diagnostic is emitted on every Nth skipped call.
const MISSING_SURFACE_LOG_STRIDE: u32 = 100;

/// Forwards drawing calls to a bound [`RenderSurface`].
///
/// The forwarder owns the drawing-side state the toolkit shares: the
/// optional surface, its derived 3-D capability, and the missing-surface
/// error counter. Every operation checks the surface first; with none
/// bound the call is skipped, the counter ticks, and a throttled
/// diagnostic goes to the error stream — callers never fail.
///
/// All operations return `&mut Self` so calls chain:
///
/// ```
/// use umb_core::{Draw, Vertex};
/// let mut draw = Draw::new();
/// // No surface bound yet: both calls skip without failing.
/// draw.push().cross(Vertex::xy(10.0, 10.0), 4.0).pop();
/// ```
#[derive(Default)]
pub struct Draw {
    surface: Option<Box<dyn RenderSurface>>,
    surface_name: &'static str,
    is_3d: bool,
    error_count: u32,
}

/// Trailing segment of a type path, mirroring how surfaces identify
/// themselves in the bind log.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

impl Draw {
    /// Creates a forwarder with no surface bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the drawing surface, deriving its 3-D capability, and logs
    /// the binding.
    pub fn set_surface<S: RenderSurface + 'static>(&mut self, surface: S) -> &mut Self {
        self.is_3d = surface.is_3d();
        self.surface_name = short_type_name::<S>();
        self.surface = Some(Box::new(surface));
        log::info!("UMB.setGraphics: {} (is3D={})", self.surface_name, self.is_3d);
        self
    }

    /// Releases the bound surface; subsequent calls skip-and-log again.
    pub fn clear_surface(&mut self) -> &mut Self {
        self.surface = None;
        self.surface_name = "";
        self.is_3d = false;
        self
    }

    /// Whether a surface is currently bound.
    pub fn is_surface_set(&self) -> bool {
        self.surface.is_some()
    }

    /// Whether the bound surface understands depth.
    pub fn is_3d(&self) -> bool {
        self.is_3d
    }

    /// Number of operations skipped for want of a surface.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Runs `op` against the surface, or records the skip.
    fn with_surface(&mut self, op: impl FnOnce(&mut dyn RenderSurface, bool)) -> &mut Self {
        match self.surface.as_deref_mut() {
            Some(surface) => op(surface, self.is_3d),
            None => {
                if self.error_count % MISSING_SURFACE_LOG_STRIDE == 0 {
                    log::error!("UMB: no render surface bound. Call Draw::set_surface first.");
                }
                self.error_count += 1;
            }
        }
        self
    }

    // --- Transforms ---

    /// Translates by the vertex's coordinates, z included on 3-D surfaces.
    pub fn translate(&mut self, v: Vertex) -> &mut Self {
        self.translate_xyz(v.x, v.y, v.z)
    }

    /// Translates by explicit coordinates, z included on 3-D surfaces.
    pub fn translate_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.with_surface(|s, is_3d| {
            if is_3d {
                s.translate3(x, y, z);
            } else {
                s.translate(x, y);
            }
        })
    }

    /// Uniform scale on all axes.
    pub fn scale_uniform(&mut self, m: f32) -> &mut Self {
        self.scale(m, m, m)
    }

    /// Per-axis scale.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.with_surface(|s, _| s.scale(x, y, z))
    }

    /// Rotation about the x axis, in radians.
    pub fn rotate_x(&mut self, angle: f32) -> &mut Self {
        self.with_surface(|s, _| s.rotate_x(angle))
    }

    /// Rotation about the y axis, in radians.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.with_surface(|s, _| s.rotate_y(angle))
    }

    /// Rotation about the z axis, in radians.
    pub fn rotate_z(&mut self, angle: f32) -> &mut Self {
        self.with_surface(|s, _| s.rotate_z(angle))
    }

    /// Saves the surface's transform and style state as a pair.
    pub fn push(&mut self) -> &mut Self {
        self.with_surface(|s, _| s.push())
    }

    /// Restores the surface's transform and style state.
    pub fn pop(&mut self) -> &mut Self {
        self.with_surface(|s, _| s.pop())
    }

    // --- Primitives ---

    /// Line between two vertices, spatial on 3-D surfaces.
    pub fn line(&mut self, a: Vertex, b: Vertex) -> &mut Self {
        self.with_surface(|s, is_3d| {
            if is_3d {
                s.line3(a.x, a.y, a.z, b.x, b.y, b.z);
            } else {
                s.line(a.x, a.y, b.x, b.y);
            }
        })
    }

    /// Line from the origin to a vertex.
    pub fn line_from_origin(&mut self, v: Vertex) -> &mut Self {
        self.line(Vertex::ZERO, v)
    }

    /// Planar line between explicit coordinates.
    pub fn line_xy(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        self.with_surface(|s, _| s.line(x1, y1, x2, y2))
    }

    /// Rectangle with its corner at `(x, y)`.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.with_surface(|s, _| s.rect(x, y, w, h))
    }

    /// Rectangle centered on the current origin.
    pub fn rect_centered(&mut self, w: f32, h: f32) -> &mut Self {
        self.rect(-w * 0.5, -h * 0.5, w, h)
    }

    /// Ellipse centered at `(x, y)`.
    pub fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.with_surface(|s, _| s.ellipse(x, y, w, h))
    }

    /// Opens a vertex run on the surface.
    pub fn begin_shape(&mut self, mode: ShapeMode) -> &mut Self {
        self.with_surface(|s, _| s.begin_shape(mode))
    }

    /// Closes the current vertex run.
    pub fn end_shape(&mut self) -> &mut Self {
        self.with_surface(|s, _| s.end_shape())
    }

    /// Streams one vertex, spatial on 3-D surfaces.
    pub fn vertex(&mut self, v: Vertex) -> &mut Self {
        self.with_surface(|s, is_3d| {
            if is_3d {
                s.vertex3(v.x, v.y, v.z);
            } else {
                s.vertex(v.x, v.y);
            }
        })
    }

    /// Streams a run of vertices, optionally with their U/V texture
    /// coordinates.
    pub fn vertices(&mut self, verts: &[Vertex], textured: bool) -> &mut Self {
        self.with_surface(|s, is_3d| {
            for v in verts {
                match (is_3d, textured) {
                    (true, true) => s.vertex3_uv(v.x, v.y, v.z, v.u, v.v),
                    (true, false) => s.vertex3(v.x, v.y, v.z),
                    (false, true) => s.vertex_uv(v.x, v.y, v.u, v.v),
                    (false, false) => s.vertex(v.x, v.y),
                }
            }
        })
    }

    // --- Style ---

    /// Sets the fill color.
    pub fn fill(&mut self, color: Argb) -> &mut Self {
        self.with_surface(|s, _| s.fill(color))
    }

    /// Packs and sets an opaque fill color.
    pub fn fill_rgb(&mut self, r: f32, g: f32, b: f32) -> &mut Self {
        self.fill(Argb::rgb(r, g, b))
    }

    /// Disables filling.
    pub fn no_fill(&mut self) -> &mut Self {
        self.with_surface(|s, _| s.no_fill())
    }

    /// Sets the stroke color.
    pub fn stroke(&mut self, color: Argb) -> &mut Self {
        self.with_surface(|s, _| s.stroke(color))
    }

    /// Sets stroke width (when positive) and color together.
    pub fn stroke_weighted(&mut self, color: Argb, weight: f32) -> &mut Self {
        self.with_surface(|s, _| {
            if weight > 0.0 {
                s.stroke_weight(weight);
            }
            s.stroke(color);
        })
    }

    /// Disables stroking.
    pub fn no_stroke(&mut self) -> &mut Self {
        self.with_surface(|s, _| s.no_stroke())
    }

    // --- Composites ---
    //
    // Each wraps its primitive in push/translate ... pop so the surface's
    // transform stack is left exactly as found.

    /// Axis-aligned cross of half-width `w` centered on `loc`.
    pub fn cross(&mut self, loc: Vertex, w: f32) -> &mut Self {
        self.push()
            .translate(loc)
            .line_xy(-w, 0.0, w, 0.0)
            .line_xy(0.0, -w, 0.0, w)
            .pop()
    }

    /// Rectangle drawn at a vertex location.
    pub fn rect_at(&mut self, loc: Vertex, w: f32, h: f32) -> &mut Self {
        self.push().translate(loc).rect(0.0, 0.0, w, h).pop()
    }

    /// Ellipse drawn at a vertex location.
    pub fn ellipse_at(&mut self, loc: Vertex, w: f32, h: f32) -> &mut Self {
        self.push().translate(loc).ellipse(0.0, 0.0, w, h).pop()
    }

    /// Four corners streamed as a quad.
    pub fn quad(&mut self, corners: &[Vertex; 4]) -> &mut Self {
        self.begin_shape(ShapeMode::Quads)
            .vertices(corners, false)
            .end_shape()
    }
}

impl std::fmt::Debug for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draw")
            .field("surface", &self.is_surface_set().then_some(self.surface_name))
            .field("is_3d", &self.is_3d)
            .field("error_count", &self.error_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records every call it receives as one line.
    struct Recorder {
        three_d: bool,
        ops: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn new(three_d: bool) -> (Self, std::rc::Rc<std::cell::RefCell<Vec<String>>>) {
            let ops = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
            (
                Self {
                    three_d,
                    ops: ops.clone(),
                },
                ops,
            )
        }

        fn log(&self, entry: String) {
            self.ops.borrow_mut().push(entry);
        }
    }

    impl RenderSurface for Recorder {
        fn is_3d(&self) -> bool {
            self.three_d
        }
        fn translate(&mut self, x: f32, y: f32) {
            self.log(format!("translate({x},{y})"));
        }
        fn translate3(&mut self, x: f32, y: f32, z: f32) {
            self.log(format!("translate3({x},{y},{z})"));
        }
        fn scale(&mut self, x: f32, y: f32, z: f32) {
            self.log(format!("scale({x},{y},{z})"));
        }
        fn rotate_x(&mut self, angle: f32) {
            self.log(format!("rotate_x({angle})"));
        }
        fn rotate_y(&mut self, angle: f32) {
            self.log(format!("rotate_y({angle})"));
        }
        fn rotate_z(&mut self, angle: f32) {
            self.log(format!("rotate_z({angle})"));
        }
        fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
            self.log(format!("line({x1},{y1},{x2},{y2})"));
        }
        fn line3(&mut self, x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) {
            self.log(format!("line3({x1},{y1},{z1},{x2},{y2},{z2})"));
        }
        fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.log(format!("rect({x},{y},{w},{h})"));
        }
        fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.log(format!("ellipse({x},{y},{w},{h})"));
        }
        fn begin_shape(&mut self, mode: ShapeMode) {
            self.log(format!("begin_shape({mode:?})"));
        }
        fn end_shape(&mut self) {
            self.log("end_shape".to_owned());
        }
        fn vertex(&mut self, x: f32, y: f32) {
            self.log(format!("vertex({x},{y})"));
        }
        fn vertex3(&mut self, x: f32, y: f32, z: f32) {
            self.log(format!("vertex3({x},{y},{z})"));
        }
        fn vertex_uv(&mut self, x: f32, y: f32, u: f32, v: f32) {
            self.log(format!("vertex_uv({x},{y},{u},{v})"));
        }
        fn vertex3_uv(&mut self, x: f32, y: f32, z: f32, u: f32, v: f32) {
            self.log(format!("vertex3_uv({x},{y},{z},{u},{v})"));
        }
        fn push(&mut self) {
            self.log("push".to_owned());
        }
        fn pop(&mut self) {
            self.log("pop".to_owned());
        }
        fn fill(&mut self, color: Argb) {
            self.log(format!("fill({color})"));
        }
        fn no_fill(&mut self) {
            self.log("no_fill".to_owned());
        }
        fn stroke(&mut self, color: Argb) {
            self.log(format!("stroke({color})"));
        }
        fn stroke_weight(&mut self, weight: f32) {
            self.log(format!("stroke_weight({weight})"));
        }
        fn no_stroke(&mut self) {
            self.log("no_stroke".to_owned());
        }
    }

    #[test]
    fn missing_surface_skips_and_counts() {
        let mut draw = Draw::new();
        draw.line_xy(0.0, 0.0, 1.0, 1.0).rect(0.0, 0.0, 2.0, 2.0);
        assert!(!draw.is_surface_set());
        assert_eq!(draw.error_count(), 2);

        for _ in 0..148 {
            draw.no_fill();
        }
        assert_eq!(draw.error_count(), 150);
    }

    #[test]
    fn binding_derives_capability() {
        let (surface, _) = Recorder::new(true);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        assert!(draw.is_surface_set());
        assert!(draw.is_3d());

        draw.clear_surface();
        assert!(!draw.is_surface_set());
        assert!(!draw.is_3d());
    }

    #[test]
    fn planar_surfaces_get_planar_coordinates() {
        let (surface, ops) = Recorder::new(false);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        draw.translate(Vertex::new(1.0, 2.0, 3.0))
            .line(Vertex::new(0.0, 0.0, 9.0), Vertex::new(1.0, 1.0, 9.0))
            .vertex(Vertex::new(4.0, 5.0, 6.0));
        assert_eq!(
            *ops.borrow(),
            vec!["translate(1,2)", "line(0,0,1,1)", "vertex(4,5)"]
        );
    }

    #[test]
    fn spatial_surfaces_get_depth() {
        let (surface, ops) = Recorder::new(true);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        draw.translate(Vertex::new(1.0, 2.0, 3.0))
            .line(Vertex::new(0.0, 0.0, 9.0), Vertex::new(1.0, 1.0, 8.0))
            .vertex(Vertex::new(4.0, 5.0, 6.0));
        assert_eq!(
            *ops.borrow(),
            vec![
                "translate3(1,2,3)",
                "line3(0,0,9,1,1,8)",
                "vertex3(4,5,6)"
            ]
        );
    }

    #[test]
    fn vertex_runs_can_stream_texture_coordinates() {
        let (surface, ops) = Recorder::new(true);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        let verts = [
            Vertex::new(0.0, 0.0, 0.0).with_uv(0.0, 0.0),
            Vertex::new(1.0, 0.0, 0.0).with_uv(1.0, 0.0),
        ];
        draw.vertices(&verts, true);
        draw.vertices(&verts, false);
        assert_eq!(
            *ops.borrow(),
            vec![
                "vertex3_uv(0,0,0,0,0)",
                "vertex3_uv(1,0,0,1,0)",
                "vertex3(0,0,0)",
                "vertex3(1,0,0)"
            ]
        );
    }

    #[test]
    fn composites_restore_the_transform_stack() {
        let (surface, ops) = Recorder::new(false);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        draw.cross(Vertex::xy(10.0, 20.0), 5.0);
        assert_eq!(
            *ops.borrow(),
            vec![
                "push",
                "translate(10,20)",
                "line(-5,0,5,0)",
                "line(0,-5,0,5)",
                "pop"
            ]
        );

        ops.borrow_mut().clear();
        draw.ellipse_at(Vertex::xy(1.0, 1.0), 4.0, 4.0);
        let recorded = ops.borrow();
        assert_eq!(recorded.first().map(String::as_str), Some("push"));
        assert_eq!(recorded.last().map(String::as_str), Some("pop"));
    }

    #[test]
    fn quad_streams_four_corners() {
        let (surface, ops) = Recorder::new(false);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        let corners = [
            Vertex::xy(0.0, 0.0),
            Vertex::xy(1.0, 0.0),
            Vertex::xy(1.0, 1.0),
            Vertex::xy(0.0, 1.0),
        ];
        draw.quad(&corners);
        let recorded = ops.borrow();
        assert_eq!(recorded.first().map(String::as_str), Some("begin_shape(Quads)"));
        assert_eq!(recorded.last().map(String::as_str), Some("end_shape"));
        assert_eq!(recorded.len(), 6);
    }

    #[test]
    fn style_calls_forward_colors() {
        let (surface, ops) = Recorder::new(false);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        draw.fill(Argb::RED)
            .stroke_weighted(Argb::BLUE, 2.0)
            .stroke_weighted(Argb::GREEN, 0.0)
            .no_fill()
            .no_stroke();
        assert_eq!(
            *ops.borrow(),
            vec![
                "fill(FF0000)",
                "stroke_weight(2)",
                "stroke(0000FF)",
                "stroke(00FF00)",
                "no_fill",
                "no_stroke"
            ]
        );
    }

    #[test]
    fn rect_centered_offsets_by_half() {
        let (surface, ops) = Recorder::new(false);
        let mut draw = Draw::new();
        draw.set_surface(surface);
        draw.rect_centered(4.0, 2.0);
        assert_eq!(*ops.borrow(), vec!["rect(-2,-1,4,2)"]);
    }
}
