// File: crates/bench-chart/tests/theme.rs
// Purpose: Theme lookup and palette assignment.

use bench_chart::theme::{find, presets};
use bench_chart::Theme;

#[test]
fn lookup_is_case_insensitive_with_light_fallback() {
    assert_eq!(find("DARK").name, "dark");
    assert_eq!(find("light").name, "light");
    assert_eq!(find("no-such-theme").name, "light");
    assert_eq!(presets().len(), 2);
}

#[test]
fn palette_wraps() {
    let t = Theme::light();
    assert_eq!(t.series_color(0), t.series_color(t.palette.len()));
    assert_ne!(t.series_color(0), t.series_color(1));
}
