// File: crates/splot-core/src/grid.rs
// Summary: Range helpers for sampling and tick layout.

use crate::error::{Result, SplotError};

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Check that `[min, max)` is a usable sampling range with `bins` samples.
pub fn validate_range(min: f64, max: f64, bins: usize) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(SplotError::InvalidRange { min, max });
    }
    if bins == 0 {
        return Err(SplotError::ZeroBins);
    }
    Ok(())
}

/// Left edges of `bins` equal-width bins over `[min, max)`; `max` is never included.
pub fn bin_starts(min: f64, max: f64, bins: usize) -> Result<Vec<f64>> {
    validate_range(min, max, bins)?;
    let step = (max - min) / bins as f64;
    Ok((0..bins).map(|i| min + step * i as f64).collect())
}
