// File: crates/bench-report/src/config.rs
// Summary: Command-line configuration. Every flag is optional; defaults read `result/*.csv`
// and write `result/plot.png`.

use std::path::PathBuf;

use bench_chart::types::{HEIGHT, WIDTH};
use bench_chart::{theme, RenderOptions};
use clap::Parser;

pub const DEFAULT_RESULTS_DIR: &str = "result";
pub const DEFAULT_OUTPUT_NAME: &str = "plot.png";
pub const DEFAULT_TITLE: &str = "Operation timings in a 2-3 tree";
pub const DEFAULT_X_LABEL: &str = "Element count";
pub const DEFAULT_Y_LABEL: &str = "Time, ns";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bench-report")]
#[command(version, about = "Plot find/insert/delete timings of a 2-3 tree benchmark")]
pub struct Config {
    /// Directory containing find.csv, insert.csv and delete.csv.
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Output PNG path [default: <results-dir>/plot.png].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, default_value = DEFAULT_X_LABEL)]
    pub x_label: String,

    #[arg(long, default_value = DEFAULT_Y_LABEL)]
    pub y_label: String,

    /// Image width in pixels.
    #[arg(long, default_value_t = WIDTH)]
    pub width: i32,

    /// Image height in pixels.
    #[arg(long, default_value_t = HEIGHT)]
    pub height: i32,

    /// Colour theme (light, dark).
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Print the parsed series to stdout.
    #[arg(long)]
    pub print_series: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            output: None,
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            width: WIDTH,
            height: HEIGHT,
            theme: "light".to_string(),
            print_series: false,
        }
    }
}

impl Config {
    /// Defaults rooted at `dir` instead of `./result`.
    pub fn for_results_dir(dir: impl Into<PathBuf>) -> Self {
        Self { results_dir: dir.into(), ..Self::default() }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.results_dir.join(DEFAULT_OUTPUT_NAME))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }
}
