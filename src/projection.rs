//! Celestial projection: catalogue coordinates to canvas pixels.
//!
//! This is a stylized azimuthal layout, not a real sky projection: right
//! ascension is the angle around the pole and declination the radial distance
//! from it. The view transform is applied in a fixed order (place, rotate about
//! the pan center, scale about the pan center).

use std::f64::consts::{PI, TAU};

/// Scale the view starts at when mounted.
pub const DEFAULT_SCALE: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Lower/upper bound applied after every zoom step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    pub min: f64,
    pub max: f64,
}

impl ScaleBounds {
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

/// The view transform. Owned by the interaction controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionState {
    pub scale: f64,
    /// Pan center in canvas pixels.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Radians, kept in `[-PI, PI)`.
    pub rotation: f64,
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl ProjectionState {
    /// Centered on a `width` x `height` surface.
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            scale,
            offset_x: width * 0.5,
            offset_y: height * 0.5,
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Maps `(ra, dec)` in degrees to canvas pixels.
    pub fn project(&self, ra: f64, dec: f64, radius: f64) -> Point {
        let ra_rad = ra.to_radians();
        let dec_rad = dec.to_radians();
        let cx = self.offset_x;
        let cy = self.offset_y;

        let x0 = cx + radius * dec_rad.cos() * ra_rad.sin();
        let y0 = cy - radius * dec_rad.cos() * ra_rad.cos();

        let (sin_r, cos_r) = self.rotation.sin_cos();
        let dx = x0 - cx;
        let dy = y0 - cy;
        let x1 = cx + dx * cos_r - dy * sin_r;
        let y1 = cy + dx * sin_r + dy * cos_r;

        Point::new(
            cx + (x1 - cx) * self.scale,
            cy + (y1 - cy) * self.scale,
        )
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Advances rotation by `delta` radians, wrapping into `[-PI, PI)`.
    pub fn rotate(&mut self, delta: f64) {
        self.rotation = wrap_angle(self.rotation + delta);
    }

    /// Wheel zoom. Negative `delta_y` zooms in.
    pub fn zoom(&mut self, delta_y: f64, zoom_speed: f64, bounds: ScaleBounds) {
        self.zoom_by((-delta_y * zoom_speed).exp(), bounds);
    }

    pub fn zoom_by(&mut self, factor: f64, bounds: ScaleBounds) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.scale = bounds.clamp(self.scale * factor);
    }

    /// Moves the pan center to the middle of a resized surface. Scale and
    /// rotation are left alone.
    pub fn recenter(&mut self, width: f64, height: f64) {
        self.offset_x = width * 0.5;
        self.offset_y = height * 0.5;
    }
}

fn wrap_angle(a: f64) -> f64 {
    (a + PI).rem_euclid(TAU) - PI
}

/// Half of the surface's shorter side.
pub fn reference_radius(width: f64, height: f64) -> f64 {
    width.min(height).max(0.0) * 0.5
}

/// Disc radius for a star; brighter (lower magnitude) stars are bigger.
pub fn star_radius(magnitude: f64, scale: f64) -> f64 {
    (5.0 - magnitude).max(1.0) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BOUNDS: ScaleBounds = ScaleBounds {
        min: 0.2,
        max: 8.0,
    };

    fn state() -> ProjectionState {
        ProjectionState::new(800.0, 600.0, DEFAULT_SCALE)
    }

    #[test]
    fn test_pole_maps_to_center() {
        let s = state();
        let p = s.project(123.0, 90.0, 300.0);
        assert_relative_eq!(p.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unrotated_unit_scale_layout() {
        let mut s = state();
        s.scale = 1.0;
        // ra = 0 points straight up, ra = 90 to the right.
        let up = s.project(0.0, 0.0, 100.0);
        assert_relative_eq!(up.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(up.y, 200.0, epsilon = 1e-9);
        let right = s.project(90.0, 0.0, 100.0);
        assert_relative_eq!(right.x, 500.0, epsilon = 1e-9);
        assert_relative_eq!(right.y, 300.0, epsilon = 1e-9);
        let half = s.project(0.0, 60.0, 100.0);
        assert_relative_eq!(half.y, 250.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_is_deterministic() {
        let mut s = state();
        s.rotate(0.7);
        s.pan(13.0, -4.0);
        for &(ra, dec) in &[(0.0, 0.0), (10.0, 20.0), (359.9, -45.0), (181.0, 89.0)] {
            assert_eq!(s.project(ra, dec, 250.0), s.project(ra, dec, 250.0));
        }
    }

    #[test]
    fn test_scale_increases_separation() {
        let a = (10.0, 20.0);
        let b = (80.0, 35.0);
        let mut prev = 0.0;
        for scale in [0.3, 0.8, 1.0, 2.5, 6.0] {
            let mut s = state();
            s.scale = scale;
            let d = s
                .project(a.0, a.1, 300.0)
                .distance(s.project(b.0, b.1, 300.0));
            assert!(d > prev, "scale {scale}: {d} <= {prev}");
            prev = d;
        }
    }

    #[test]
    fn test_rotation_is_periodic() {
        let mut a = state();
        a.rotation = 0.9;
        let mut b = a;
        b.rotation = 0.9 + TAU;
        let pa = a.project(47.0, 12.0, 300.0);
        let pb = b.project(47.0, 12.0, 300.0);
        assert_relative_eq!(pa.x, pb.x, epsilon = 1e-9);
        assert_relative_eq!(pa.y, pb.y, epsilon = 1e-9);
    }

    #[test]
    fn test_quarter_turn_rotates_about_center() {
        let mut s = state();
        s.scale = 1.0;
        s.rotate(PI / 2.0);
        // Straight up turns to the right.
        let p = s.project(0.0, 0.0, 100.0);
        assert_relative_eq!(p.x, 500.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut s = state();
        for _ in 0..1000 {
            s.rotate(0.37);
        }
        assert!(s.rotation >= -PI && s.rotation < PI);
    }

    #[test]
    fn test_zoom_in_then_out_restores_scale() {
        let mut s = state();
        let start = s.scale;
        s.zoom(-120.0, 0.001, BOUNDS);
        assert!(s.scale > start);
        s.zoom(120.0, 0.001, BOUNDS);
        assert_relative_eq!(s.scale, start, epsilon = 1e-12);
    }

    #[test]
    fn test_zoom_compounds_and_clamps() {
        let mut s = state();
        for _ in 0..10_000 {
            s.zoom(100.0, 0.001, BOUNDS);
        }
        assert_relative_eq!(s.scale, BOUNDS.min);
        for _ in 0..10_000 {
            s.zoom(-100.0, 0.001, BOUNDS);
        }
        assert_relative_eq!(s.scale, BOUNDS.max);
    }

    #[test]
    fn test_zoom_ignores_degenerate_factor() {
        let mut s = state();
        s.zoom_by(0.0, BOUNDS);
        s.zoom_by(f64::NAN, BOUNDS);
        assert_relative_eq!(s.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_recenter_keeps_orientation() {
        let mut s = state();
        s.rotate(1.1);
        s.zoom(-300.0, 0.001, BOUNDS);
        s.pan(40.0, 40.0);
        let (rotation, scale) = (s.rotation, s.scale);
        s.recenter(1024.0, 768.0);
        assert_eq!(s.center(), Point::new(512.0, 384.0));
        assert_eq!(s.rotation, rotation);
        assert_eq!(s.scale, scale);
    }

    #[test]
    fn test_star_radius() {
        assert_relative_eq!(star_radius(1.0, 1.0), 4.0);
        assert_relative_eq!(star_radius(4.5, 1.0), 1.0);
        assert_relative_eq!(star_radius(9.0, 2.0), 2.0);
        assert_relative_eq!(star_radius(-1.0, 0.5), 3.0);
    }

    #[test]
    fn test_reference_radius_uses_shorter_side() {
        assert_relative_eq!(reference_radius(800.0, 600.0), 300.0);
        assert_relative_eq!(reference_radius(300.0, 900.0), 150.0);
    }
}
