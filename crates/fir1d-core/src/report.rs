// crates/fir1d-core/src/report.rs

use crate::error::{FirError, Result};

/// One sample in the ranked worst-case list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorstSample {
    pub index: usize,
    pub ideal: f64,
    pub fixed: u64,
    pub abs_err: f64,
}

/// Aggregate error statistics between an ideal (real) and a fixed (integer)
/// output array of equal length. Pure function of its two inputs; has no
/// knowledge of engine internals.
#[derive(Clone, Debug, PartialEq)]
pub struct CompareReport {
    pub num_samples: usize,
    pub max_abs_err: f64,
    pub mae: f64,
    pub rmse: f64,
    pub mean_err: f64,
    /// Fraction of fixed samples pinned at 0.
    pub sat_low_ratio: f64,
    /// Fraction of fixed samples pinned at full scale.
    pub sat_high_ratio: f64,
    pub sat_ratio: f64,
    /// Fraction of ideal samples outside [0, 2^data_bits - 1].
    pub clip_needed_ratio: f64,
    /// Top-k samples by absolute error, ties broken by ascending index.
    pub worst: Vec<WorstSample>,
}

/// Build a comparison report. `ideal` and `fixed` must have equal length
/// (`ShapeMismatch` otherwise); `data_bits` defines full scale for the
/// saturation and clip ratios.
pub fn compare(ideal: &[f64], fixed: &[u64], data_bits: u32, top_k: usize) -> Result<CompareReport> {
    if data_bits == 0 || data_bits > 32 {
        return Err(FirError::InvalidBitWidth {
            name: "data_bits",
            bits: data_bits,
        });
    }
    if ideal.len() != fixed.len() {
        return Err(FirError::ShapeMismatch {
            left: ideal.len(),
            right: fixed.len(),
        });
    }

    let n = ideal.len();
    let full_scale = (1u64 << data_bits) - 1;

    if n == 0 {
        return Ok(CompareReport {
            num_samples: 0,
            max_abs_err: 0.0,
            mae: 0.0,
            rmse: 0.0,
            mean_err: 0.0,
            sat_low_ratio: 0.0,
            sat_high_ratio: 0.0,
            sat_ratio: 0.0,
            clip_needed_ratio: 0.0,
            worst: Vec::new(),
        });
    }

    let mut sum_abs = 0.0f64;
    let mut sum_sq = 0.0f64;
    let mut sum_err = 0.0f64;
    let mut max_abs = 0.0f64;
    let mut sat_low = 0usize;
    let mut sat_high = 0usize;
    let mut clip_needed = 0usize;
    let mut ranked: Vec<WorstSample> = Vec::with_capacity(n);

    for (index, (&yi, &yf)) in ideal.iter().zip(fixed.iter()).enumerate() {
        let err = yf as f64 - yi;
        let abs = err.abs();
        sum_abs += abs;
        sum_sq += err * err;
        sum_err += err;
        max_abs = max_abs.max(abs);
        if yf == 0 {
            sat_low += 1;
        }
        if yf == full_scale {
            sat_high += 1;
        }
        if yi < 0.0 || yi > full_scale as f64 {
            clip_needed += 1;
        }
        ranked.push(WorstSample {
            index,
            ideal: yi,
            fixed: yf,
            abs_err: abs,
        });
    }

    ranked.sort_by(|a, b| {
        b.abs_err
            .partial_cmp(&a.abs_err)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    ranked.truncate(top_k);

    let nf = n as f64;
    Ok(CompareReport {
        num_samples: n,
        max_abs_err: max_abs,
        mae: sum_abs / nf,
        rmse: (sum_sq / nf).sqrt(),
        mean_err: sum_err / nf,
        sat_low_ratio: sat_low as f64 / nf,
        sat_high_ratio: sat_high as f64 / nf,
        sat_ratio: (sat_low + sat_high) as f64 / nf,
        clip_needed_ratio: clip_needed as f64 / nf,
        worst: ranked,
    })
}
