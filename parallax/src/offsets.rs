//! Geometry: pointer position + viewport → the four styling values.

use serde::Serialize;

/// Pixel offset at the viewport edge.
pub const PARALLAX_MAGNITUDE: f64 = 28.0;

/// Styling variable names, in write order.
pub const VAR_CENTER_X: &str = "--mx";
pub const VAR_CENTER_Y: &str = "--my";
pub const VAR_DELTA_X: &str = "--dx";
pub const VAR_DELTA_Y: &str = "--dy";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Dimensions used for math; never below one pixel.
    fn effective(&self) -> (f64, f64) {
        (at_least_one(self.width), at_least_one(self.height))
    }
}

fn at_least_one(v: f64) -> f64 {
    // NaN compares false everywhere, so it lands on the floor too.
    if v >= 1.0 { v } else { 1.0 }
}

fn clamp_into(v: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, max) }
}

/// Nearest integer, halves rounding toward positive infinity.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParallaxOffsets {
    /// Pointer x clamped into the viewport
    pub center_x: f64,
    /// Pointer y clamped into the viewport
    pub center_y: f64,
    pub delta_x: i64,
    pub delta_y: i64,
}

impl ParallaxOffsets {
    pub fn compute(x: f64, y: f64, viewport: Viewport) -> Self {
        let (w, h) = viewport.effective();
        let cx = clamp_into(x, w);
        let cy = clamp_into(y, h);

        let dx = (cx - w / 2.0) / w;
        let dy = (cy - h / 2.0) / h;

        Self {
            center_x: cx,
            center_y: cy,
            delta_x: round_half_up(dx * PARALLAX_MAGNITUDE),
            delta_y: round_half_up(dy * PARALLAX_MAGNITUDE),
        }
    }

    /// Values centered in `viewport`, i.e. zero deltas.
    pub fn centered(viewport: Viewport) -> Self {
        let (x, y) = viewport.center();
        Self::compute(x, y, viewport)
    }

    /// `(name, value)` pairs as written to the styling layer.
    pub fn style_vars(&self) -> [(&'static str, String); 4] {
        [
            (VAR_CENTER_X, format!("{}px", self.center_x)),
            (VAR_CENTER_Y, format!("{}px", self.center_y)),
            (VAR_DELTA_X, format!("{}px", self.delta_x)),
            (VAR_DELTA_Y, format!("{}px", self.delta_y)),
        ]
    }
}
