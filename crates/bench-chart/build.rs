// File: crates/bench-chart/build.rs
// Summary: Link the Windows system libraries Skia/ICU expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, ... used by Skia's font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
