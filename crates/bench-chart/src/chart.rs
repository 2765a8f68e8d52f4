// File: crates/bench-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Write;
use std::path::Path;

use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::PlotArea;
use crate::grid::{format_tick, nice_step};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH, X_TICK_TARGET, Y_TICK_TARGET};
use crate::Axis;

const TITLE_SIZE: f32 = 16.0;
const LABEL_SIZE: f32 = 14.0;
const TICK_SIZE: f32 = 12.0;
const TICK_LEN: f32 = 5.0;
const LEGEND_PAD: f32 = 8.0;
const LEGEND_ROW: f32 = 20.0;
const LEGEND_SWATCH: f32 = 24.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, axis/tick labels, legend text). Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: Option<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            show_grid: true,
            show_legend: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// (x_min, x_max, y_min, y_max) over every finite point of every series.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
    }

    /// Fit both axes to the data, padding each side by `margin` of the span.
    /// Without data the axes fall back to 0..1; a flat range is widened by one unit.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let Some((mut x_min, mut x_max, mut y_min, mut y_max)) = self.data_bounds() else {
            self.x_axis.min = 0.0;
            self.x_axis.max = 1.0;
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        };
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let m = margin.max(0.0);
        let xm = (x_max - x_min) * m;
        let ym = (y_max - y_min) * m;
        self.x_axis.min = x_min - xm;
        self.x_axis.max = x_max + xm;
        self.y_axis.min = y_min - ym;
        self.y_axis.max = y_max + ym;
    }

    /// Render the chart and return the encoded PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let surface_err = RenderError::Surface { width: opts.width, height: opts.height };
        if opts.width <= 0 || opts.height <= 0 {
            return Err(surface_err);
        }
        tracing::debug!(
            width = opts.width,
            height = opts.height,
            series = self.series.len(),
            theme = opts.theme.name,
            "rendering chart"
        );

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(surface_err)?;
        self.draw(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// Encoding finishes before the file is touched; the target is replaced in one rename.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        let write_err = |source: std::io::Error| RenderError::Write { path: path.to_path_buf(), source };
        let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                std::fs::create_dir_all(parent).map_err(write_err)?;
                parent
            }
            None => Path::new("."),
        };
        // Sibling temp file renamed over the target: readers see the old PNG or the new one
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(&bytes).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote PNG");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let area = PlotArea::from_insets(opts.width, opts.height, &opts.insets);
        let shaper = opts.draw_labels.then(TextShaper::new);

        canvas.clear(theme.background);
        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(plot_rect(&area), &fill);

        if self.show_grid {
            draw_grid(canvas, &area, &self.x_axis, &self.y_axis, theme);
        }
        draw_axes(canvas, &area, &self.x_axis, &self.y_axis, theme, shaper.as_ref());

        // Series are clipped to the plot area
        canvas.save();
        canvas.clip_rect(plot_rect(&area), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, &area, &self.x_axis, &self.y_axis, s, color);
        }
        canvas.restore();

        if let (Some(shaper), Some(title)) = (shaper.as_ref(), self.title.as_deref()) {
            shaper.draw_centered(canvas, title, area.center_x(), area.top - 18.0, TITLE_SIZE, theme.title, false);
        }
        if self.show_legend && !self.series.is_empty() {
            draw_legend(canvas, &area, &self.series, theme, shaper.as_ref());
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn plot_rect(area: &PlotArea) -> skia::Rect {
    skia::Rect::from_ltrb(area.left, area.top, area.right, area.bottom)
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, x: &Axis, y: &Axis, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for t in x.ticks(X_TICK_TARGET) {
        let px = area.x_to_px(x, t);
        canvas.draw_line((px, area.top), (px, area.bottom), &paint);
    }
    // horizontals
    for t in y.ticks(Y_TICK_TARGET) {
        let py = area.y_to_px(y, t);
        canvas.draw_line((area.left, py), (area.right, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    area: &PlotArea,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);
    axis_paint.set_style(skia::paint::Style::Stroke);

    // Frame around the plot area
    canvas.draw_rect(plot_rect(area), &axis_paint);

    let x_step = nice_step(x.max - x.min, X_TICK_TARGET);
    for t in x.ticks(X_TICK_TARGET) {
        let px = area.x_to_px(x, t);
        canvas.draw_line((px, area.bottom), (px, area.bottom + TICK_LEN), &axis_paint);
        if let Some(shaper) = shaper {
            let label = format_tick(t, x_step);
            shaper.draw_centered(canvas, &label, px, area.bottom + TICK_LEN + 16.0, TICK_SIZE, theme.tick, true);
        }
    }

    let y_step = nice_step(y.max - y.min, Y_TICK_TARGET);
    for t in y.ticks(Y_TICK_TARGET) {
        let py = area.y_to_px(y, t);
        canvas.draw_line((area.left - TICK_LEN, py), (area.left, py), &axis_paint);
        if let Some(shaper) = shaper {
            let label = format_tick(t, y_step);
            shaper.draw_right(canvas, &label, area.left - TICK_LEN - 4.0, py + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, true);
        }
    }

    let Some(shaper) = shaper else { return };
    shaper.draw_centered(canvas, &x.label, area.center_x(), area.bottom + 48.0, LABEL_SIZE, theme.axis_label, false);

    // Y label reads bottom-to-top
    canvas.save();
    canvas.translate((area.left - 76.0, area.center_y()));
    canvas.rotate(-90.0, None);
    shaper.draw_centered(canvas, &y.label, 0.0, LABEL_SIZE * 0.4, LABEL_SIZE, theme.axis_label, false);
    canvas.restore();
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(color);
    stroke
}

fn draw_line_series(
    canvas: &skia::Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    if series.data_xy.len() < 2 {
        return;
    }

    // File order, no sorting: a polyline through the points as given
    let points: Vec<skia::Point> = series
        .data_xy
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|&(x, y)| skia::Point::new(area.x_to_px(x_axis, x), area.y_to_px(y_axis, y)))
        .collect();
    if points.len() < 2 {
        return;
    }

    let stroke = stroke_paint(color, series.stroke_width);
    canvas.draw_points(skia::canvas::PointMode::Polygon, &points, &stroke);
}

fn draw_legend(
    canvas: &skia::Canvas,
    area: &PlotArea,
    series: &[Series],
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let text_w = shaper
        .map(|sh| {
            series
                .iter()
                .map(|s| sh.measure_width(&s.label, TICK_SIZE, false))
                .fold(0.0f32, f32::max)
        })
        .unwrap_or(0.0);
    let gap = if shaper.is_some() { 6.0 } else { 0.0 };
    let w = LEGEND_PAD * 2.0 + LEGEND_SWATCH + gap + text_w;
    let h = LEGEND_PAD * 2.0 + LEGEND_ROW * series.len() as f32;

    // Upper-left corner of the plot area
    let left = area.left + 10.0;
    let top = area.top + 10.0;
    let rect = skia::Rect::from_xywh(left, top, w, h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.legend_background);
    canvas.draw_round_rect(rect, 4.0, 4.0, &bg);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_round_rect(rect, 4.0, 4.0, &border);

    for (i, s) in series.iter().enumerate() {
        let row_mid = top + LEGEND_PAD + LEGEND_ROW * (i as f32 + 0.5);
        let x0 = left + LEGEND_PAD;
        let color = s.color.unwrap_or_else(|| theme.series_color(i));
        let swatch = stroke_paint(color, s.stroke_width);
        canvas.draw_line((x0, row_mid), (x0 + LEGEND_SWATCH, row_mid), &swatch);
        if let Some(shaper) = shaper {
            shaper.draw_left(canvas, &s.label, x0 + LEGEND_SWATCH + gap, row_mid + TICK_SIZE * 0.35, TICK_SIZE, theme.axis_label, false);
        }
    }
}
