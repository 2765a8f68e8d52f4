// File: crates/bench-chart/src/geometry.rs
// Summary: Plot-area rectangle and data-to-pixel mapping.

use crate::axis::Axis;
use crate::types::Insets;

/// Pixel rectangle the series are drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotArea {
    /// Surface minus insets. Never collapses below one pixel per side.
    pub fn from_insets(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width as f32 - insets.right as f32).max(left + 1.0);
        let bottom = (height as f32 - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    #[inline]
    pub fn x_to_px(&self, axis: &Axis, x: f64) -> f32 {
        self.left + axis.fraction(x) as f32 * self.width()
    }

    #[inline]
    pub fn y_to_px(&self, axis: &Axis, y: f64) -> f32 {
        self.bottom - axis.fraction(y) as f32 * self.height()
    }
}
