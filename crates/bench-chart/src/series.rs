// File: crates/bench-chart/src/series.rs
// Summary: Labelled line series drawn in insertion order.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Series {
    /// Legend text.
    pub label: String,
    /// Points in drawing order. Not required to be sorted by x.
    pub data_xy: Vec<(f64, f64)>,
    /// Explicit stroke colour; `None` takes the next theme palette colour.
    pub color: Option<skia::Color>,
    pub stroke_width: f32,
}

impl Series {
    pub fn line(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, color: None, stroke_width: 2.0 }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.5);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (x_min, x_max, y_min, y_max) over finite points, if any.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut b: Option<(f64, f64, f64, f64)> = None;
        for &(x, y) in self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            b = Some(match b {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        b
    }
}
