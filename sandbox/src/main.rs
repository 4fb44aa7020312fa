//! Small driver exercising the UMB support layer end to end: logging,
//! options, colors, formatting, timers, and the drawing forwarder against
//! a surface that traces every primitive it receives.

use umb_core::text::{self, fmt_float};
use umb_core::{Argb, Draw, GeoOptions, Random, RenderSurface, ShapeMode, StrPool, Vertex};
use umb_telemetry::{logging, TaskTimer, TimerBank};

/// Planar surface that logs each primitive call at debug level.
struct TraceSurface;

impl RenderSurface for TraceSurface {
    fn is_3d(&self) -> bool {
        false
    }
    fn translate(&mut self, x: f32, y: f32) {
        log::debug!("translate({x}, {y})");
    }
    fn scale(&mut self, x: f32, y: f32, z: f32) {
        log::debug!("scale({x}, {y}, {z})");
    }
    fn rotate_x(&mut self, angle: f32) {
        log::debug!("rotate_x({angle})");
    }
    fn rotate_y(&mut self, angle: f32) {
        log::debug!("rotate_y({angle})");
    }
    fn rotate_z(&mut self, angle: f32) {
        log::debug!("rotate_z({angle})");
    }
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        log::debug!("line({x1}, {y1}, {x2}, {y2})");
    }
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        log::debug!("rect({x}, {y}, {w}, {h})");
    }
    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        log::debug!("ellipse({x}, {y}, {w}, {h})");
    }
    fn begin_shape(&mut self, mode: ShapeMode) {
        log::debug!("begin_shape({mode:?})");
    }
    fn end_shape(&mut self) {
        log::debug!("end_shape()");
    }
    fn vertex(&mut self, x: f32, y: f32) {
        log::debug!("vertex({x}, {y})");
    }
    fn push(&mut self) {
        log::debug!("push()");
    }
    fn pop(&mut self) {
        log::debug!("pop()");
    }
    fn fill(&mut self, color: Argb) {
        log::debug!("fill({color})");
    }
    fn no_fill(&mut self) {
        log::debug!("no_fill()");
    }
    fn stroke(&mut self, color: Argb) {
        log::debug!("stroke({color})");
    }
    fn stroke_weight(&mut self, weight: f32) {
        log::debug!("stroke_weight({weight})");
    }
    fn no_stroke(&mut self) {
        log::debug!("no_stroke()");
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut opts = GeoOptions::EMPTY;
    opts.insert(GeoOptions::NO_DUPLICATES)
        .insert(GeoOptions::COLOR_VERTEX);
    log::info!("{}", opts.label_string());

    let accent = Argb::parse("80FF5733");
    log::info!("accent color {} (alpha {})", accent, accent.alpha());

    let mut pool = StrPool::new();
    let sizes = [0.5f32, 1.25, 2.0];
    log::info!("sizes {}", text::bracket_list(&mut pool, &sizes));

    // A short mock workload under full instrumentation.
    let mut bank = TimerBank::new();
    let mut task = TaskTimer::new();
    let mut rnd = Random::seeded(2025);
    let mut draw = Draw::new();
    draw.set_surface(TraceSurface);

    bank.start(0);
    task.start("scatter");
    const MARKS: u32 = 40;
    for i in 0..MARKS {
        let loc = Vertex::xy(rnd.upto(640.0), rnd.upto(480.0));
        draw.stroke_weighted(Argb::lerp(Argb::BLUE, accent, rnd.unit()), 1.5)
            .cross(loc, 3.0);
        task.update(i as f32 / MARKS as f32);
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    task.done();

    let elapsed = bank.end(0);
    log::info!(
        "scatter pass: {} marks in {} sec",
        MARKS,
        fmt_float(elapsed as f32 / 1000.0, 1, 2)
    );

    Ok(())
}
