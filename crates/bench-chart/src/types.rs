// File: crates/bench-chart/src/types.rs
// Summary: Shared types and constants (sizes, paddings, tick density).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Approximate number of ticks laid out along the X axis.
pub const X_TICK_TARGET: usize = 8;
/// Approximate number of ticks laid out along the Y axis.
pub const Y_TICK_TARGET: usize = 6;

/// Screen margins around the plot area, in pixels.
/// Room for the title above, tick and axis labels below and to the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(96, 32, 48, 64)
    }
}
