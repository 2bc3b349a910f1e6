//! Draws the polar grid, stars and constellation edges.
//!
//! Rendering is a pure function of the merged catalogue, the projection state
//! and the surface size. It goes through the [`Surface`] trait so the canvas
//! binding stays thin and the drawing order can be checked without a browser.

use web_sys::CanvasRenderingContext2d;

use crate::model::{Constellation, Constellations, StarKey};
use crate::projection::{Point, ProjectionState, reference_radius, star_radius};

const BACKGROUND: &str = "#05070d";
const GRID_STROKE: &str = "rgba(140,170,255,0.12)";
const EDGE_STROKE: &str = "rgba(160,190,255,0.45)";
const STAR_CLAIMED: &str = "#ffe9a8";
const STAR_UNCLAIMED: &str = "rgba(200,210,255,0.55)";
const HOVER_HALO: &str = "#ffd166";
const LABEL_FILL: &str = "rgba(230,237,243,0.55)";
const LABEL_HOVER_FILL: &str = "#e6edf3";

/// Declination rings every 15 degrees, from the rim to just short of the pole.
const DEC_RING_STEP: usize = 15;
/// Right-ascension spokes every 30 degrees.
const RA_SPOKE_STEP: usize = 30;
const RING_SEGMENTS: usize = 72;

/// A 2D drawing target. Mirrors the subset of the canvas API we use.
pub trait Surface {
    /// Pixel width and height.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self, background: &str);
    fn set_stroke_style(&mut self, style: &str, width: f64);
    fn set_fill_style(&mut self, style: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn stroke(&mut self);
    fn fill_circle(&mut self, center: Point, radius: f64);
    fn stroke_circle(&mut self, center: Point, radius: f64);
    fn fill_text(&mut self, text: &str, at: Point);
}

/// Per-frame extras that are not part of the catalogue or the transform.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions<'a> {
    pub hovered: Option<&'a StarKey>,
    pub show_labels: bool,
}

pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    catalogue: &Constellations,
    view: &ProjectionState,
    opts: RenderOptions<'_>,
) {
    let (w, h) = surface.size();
    let radius = reference_radius(w, h);
    surface.clear(BACKGROUND);
    draw_grid(surface, view, radius);
    for (name, constellation) in catalogue {
        draw_constellation(surface, name, constellation, view, radius, opts);
    }
}

/// Concentric declination rings and radial right-ascension spokes.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, view: &ProjectionState, radius: f64) {
    surface.set_stroke_style(GRID_STROKE, 1.0);
    for dec in (0..90).step_by(DEC_RING_STEP) {
        let dec = dec as f64;
        surface.begin_path();
        surface.move_to(view.project(0.0, dec, radius));
        for i in 1..=RING_SEGMENTS {
            let ra = 360.0 * i as f64 / RING_SEGMENTS as f64;
            surface.line_to(view.project(ra, dec, radius));
        }
        surface.stroke();
    }
    for ra in (0..360).step_by(RA_SPOKE_STEP) {
        let ra = ra as f64;
        surface.begin_path();
        surface.move_to(view.project(ra, 90.0, radius));
        surface.line_to(view.project(ra, 0.0, radius));
        surface.stroke();
    }
}

/// Stars first, then the edges between them. Edges naming an unknown star are skipped.
pub fn draw_constellation<S: Surface + ?Sized>(
    surface: &mut S,
    name: &str,
    constellation: &Constellation,
    view: &ProjectionState,
    radius: f64,
    opts: RenderOptions<'_>,
) {
    for (key, star) in &constellation.stars {
        let at = view.project(star.ra, star.dec, radius);
        let r = star_radius(star.magnitude, view.scale);
        surface.set_fill_style(if star.clickable {
            STAR_CLAIMED
        } else {
            STAR_UNCLAIMED
        });
        surface.fill_circle(at, r);

        let hovered = opts.hovered.is_some_and(|k| k.matches(name, key));
        if hovered {
            surface.set_stroke_style(HOVER_HALO, 1.5);
            surface.stroke_circle(at, r + 4.0);
        }
        if hovered || (opts.show_labels && star.clickable) {
            surface.set_fill_style(if hovered { LABEL_HOVER_FILL } else { LABEL_FILL });
            surface.fill_text(star.display_name(key), Point::new(at.x + r + 6.0, at.y + 4.0));
        }
    }

    surface.set_stroke_style(EDGE_STROKE, 1.0);
    for (from, to) in &constellation.lines {
        let (Some(a), Some(b)) = (constellation.stars.get(from), constellation.stars.get(to))
        else {
            continue;
        };
        surface.begin_path();
        surface.move_to(view.project(a.ra, a.dec, radius));
        surface.line_to(view.project(b.ra, b.dec, radius));
        surface.stroke();
    }
}

/// Canvas binding for [`Surface`].
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, background: &str) {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(background);
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_font("12px sans-serif");
    }

    fn set_stroke_style(&mut self, style: &str, width: f64) {
        self.ctx.set_stroke_style_str(style);
        self.ctx.set_line_width(width);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)
            .ok();
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.ctx.fill_text(text, at.x, at.y).ok();
    }
}
