// File: crates/splot-core/build.rs
// Summary: Link the Windows system libraries Skia's font and ICU code expects.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW from Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
