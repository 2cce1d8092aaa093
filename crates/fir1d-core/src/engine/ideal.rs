// crates/fir1d-core/src/engine/ideal.rs

use crate::config::ConvMode;
use crate::engine::geometry;
use crate::error::{FirError, Result};
use crate::signal::normalize::NormalizedSamples;

/// Taps beyond this magnitude are treated as caller errors: they cannot
/// correspond to any sensible filter design.
pub const MAX_ABS_COEFF: f64 = 1e6;

fn validate_taps(h: &[f64]) -> Result<()> {
    if h.is_empty() {
        return Err(FirError::EmptyFilter);
    }
    for (index, &value) in h.iter().enumerate() {
        if !value.is_finite() {
            return Err(FirError::NonFiniteCoefficient { index, value });
        }
        if value.abs() > MAX_ABS_COEFF {
            return Err(FirError::CoefficientOutOfRange {
                index,
                value,
                min: -MAX_ABS_COEFF,
                max: MAX_ABS_COEFF,
            });
        }
    }
    Ok(())
}

fn convolve_f64(x: &[f64], h: &[f64], mode: ConvMode) -> Vec<f64> {
    let n = x.len();
    let l = h.len();
    let (out_len, center) = geometry(mode, n, l);

    let mut y = Vec::with_capacity(out_len);
    for out_idx in 0..out_len {
        let mut acc = 0.0f64;
        for (k, &coeff) in h.iter().enumerate() {
            let idx = out_idx as i64 - k as i64 + center;
            if idx >= 0 && (idx as usize) < n {
                acc += coeff * x[idx as usize];
            }
        }
        y.push(acc);
    }
    y
}

/// Unrounded real-valued convolution over normalized samples: the error
/// baseline the fixed engine is measured against. Same index geometry and
/// zero-padding as the fixed path; no quantization, rescale, or saturation
/// of the output.
pub fn convolve(x: &NormalizedSamples, h: &[f64], mode: ConvMode) -> Result<Vec<f64>> {
    validate_taps(h)?;
    let xf: Vec<f64> = x.values.iter().map(|&v| v as f64).collect();
    Ok(convolve_f64(&xf, h, mode))
}

/// Legacy baseline over raw real samples (finite-checked, un-clamped),
/// kept for the earlier model revision that convolved before any pixel
/// conditioning.
pub fn convolve_real(x: &[f64], h: &[f64], mode: ConvMode) -> Result<Vec<f64>> {
    validate_taps(h)?;
    for (index, &value) in x.iter().enumerate() {
        if !value.is_finite() {
            return Err(FirError::NonFiniteSample { index, value });
        }
    }
    Ok(convolve_f64(x, h, mode))
}
