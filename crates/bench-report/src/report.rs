// File: crates/bench-report/src/report.rs
// Summary: Turns loaded timings into a three-line chart and writes it as a PNG.

use std::path::PathBuf;

use bench_chart::{theme, Axis, Chart, Series as ChartSeries};

use crate::config::Config;
use crate::dataset::BenchResults;
use crate::error::ReportError;

/// Fraction of the data span added on each side of both axes.
pub const AXIS_MARGIN: f64 = 0.05;

/// One line per operation in find, insert, delete order, raw points in file order.
pub fn build_chart(results: &BenchResults, config: &Config) -> Chart {
    let mut chart = Chart::new().with_title(config.title.clone());
    chart.x_axis = Axis::new(config.x_label.clone(), 0.0, 1.0);
    chart.y_axis = Axis::new(config.y_label.clone(), 0.0, 1.0);
    chart.show_grid = true;
    chart.show_legend = true;
    for (op, series) in results.iter() {
        chart.add_series(ChartSeries::line(op.label(), series.points()));
    }
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}

/// Load, plot and save. Nothing is written unless every input parsed.
pub fn run(config: &Config) -> Result<PathBuf, ReportError> {
    let results = BenchResults::load(&config.results_dir)?;

    if config.print_series {
        for (op, series) in results.iter() {
            println!("{op}: {series}");
        }
    }

    if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&config.theme)) {
        tracing::warn!(theme = %config.theme, "unknown theme, using light");
    }

    let chart = build_chart(&results, config);
    let out = config.output_path();
    chart.render_to_png(&config.render_options(), &out)?;
    tracing::info!(path = %out.display(), records = results.total_records(), "wrote report");
    Ok(out)
}
