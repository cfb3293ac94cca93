// File: crates/splot-core/src/display.rs
// Summary: Delivers rendered PNG bytes inline (notebook display block) or as a standalone file.

use std::io::Write;
use std::path::{Path, PathBuf};

use base64::Engine as _;
use tracing::info;

use crate::error::Result;

/// MIME type announced in inline display blocks.
pub const INLINE_MIME: &str = "image/png";

/// Where a rendered figure goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Embed in the surrounding notebook/REPL output stream.
    #[default]
    Inline,
    /// Write a standalone file.
    Standalone { path: PathBuf },
}

impl DisplayMode {
    pub fn standalone(path: impl Into<PathBuf>) -> Self {
        DisplayMode::Standalone { path: path.into() }
    }
}

/// What a plot call produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlotOutput {
    /// PNG bytes that were written inline.
    Inline { bytes: Vec<u8> },
    /// File the PNG was written to.
    File { path: PathBuf },
}

/// Write a display block for `png` that notebook kernels (evcxr) render as an image.
pub fn write_inline<W: Write>(out: &mut W, png: &[u8]) -> Result<()> {
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    writeln!(out, "EVCXR_BEGIN_CONTENT {INLINE_MIME}")?;
    writeln!(out, "{encoded}")?;
    writeln!(out, "EVCXR_END_CONTENT")?;
    out.flush()?;
    Ok(())
}

fn write_file(path: &Path, png: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, png)?;
    info!(path = %path.display(), bytes = png.len(), "wrote standalone plot");
    Ok(())
}

/// Deliver `png` per `mode`; inline output goes to `out`.
pub fn show<W: Write>(png: Vec<u8>, mode: &DisplayMode, out: &mut W) -> Result<PlotOutput> {
    match mode {
        DisplayMode::Inline => {
            write_inline(out, &png)?;
            Ok(PlotOutput::Inline { bytes: png })
        }
        DisplayMode::Standalone { path } => {
            write_file(path, &png)?;
            Ok(PlotOutput::File { path: path.clone() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_block_is_framed_base64() {
        let mut buf = Vec::new();
        write_inline(&mut buf, &[1, 2, 3]).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "EVCXR_BEGIN_CONTENT image/png\nAQID\nEVCXR_END_CONTENT\n");
    }

    #[test]
    fn inline_show_returns_bytes() {
        let mut buf = Vec::new();
        let out = show(vec![9, 9], &DisplayMode::Inline, &mut buf).unwrap();
        assert_eq!(out, PlotOutput::Inline { bytes: vec![9, 9] });
        assert!(!buf.is_empty());
    }
}
