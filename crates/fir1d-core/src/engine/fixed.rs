// crates/fir1d-core/src/engine/fixed.rs

use crate::config::{FirConfig, MaskGranularity};
use crate::engine::geometry;
use crate::error::{FirError, Result};
use crate::fixed::{round, wrap};
use crate::signal::normalize::{self, NormalizedSamples};
use crate::signal::quantize::{self, QuantizedTaps};
use crate::validate::validate_config;

/// Bit-width-limited MAC convolution: the hardware-matching path.
///
/// For each output index the accumulator starts at zero, collects the exact
/// signed products, is wrapped to `acc_bits` (end-of-sum, the canonical
/// granularity), rescaled by `frac_bits` with the round-half-up bias, and
/// saturated into the pixel range. Pure function of `(x, h, cfg)`.
pub fn convolve(x: &NormalizedSamples, h: &QuantizedTaps, cfg: &FirConfig) -> Result<Vec<u64>> {
    convolve_with_masking(x, h, cfg, MaskGranularity::EndOfSum)
}

/// Same as [`convolve`] with an explicit overflow-masking granularity.
///
/// Per-step masking wraps the running sum after every MAC, the way a
/// register-limited pipeline does on each cycle. For widths up to 64 bits
/// with realistic tap counts the two granularities agree bit-for-bit
/// because the unmasked partial sums stay well inside i128; the agreement
/// is asserted by tests rather than assumed universal.
pub fn convolve_with_masking(
    x: &NormalizedSamples,
    h: &QuantizedTaps,
    cfg: &FirConfig,
    granularity: MaskGranularity,
) -> Result<Vec<u64>> {
    validate_config(cfg)?;
    if h.values.is_empty() {
        return Err(FirError::EmptyFilter);
    }

    let n = x.len();
    let l = h.len();
    let (out_len, center) = geometry(cfg.mode, n, l);
    let pixel_max = cfg.pixel_max() as i128;

    let mut y = Vec::with_capacity(out_len);
    for out_idx in 0..out_len {
        let mut acc: i128 = 0;
        for (k, &coeff) in h.values.iter().enumerate() {
            let idx = out_idx as i64 - k as i64 + center;
            if idx >= 0 && (idx as usize) < n {
                // x fits data_bits, coeff fits coeff_bits: the product is
                // exact in i128 for every supported width combination.
                acc += coeff as i128 * x.values[idx as usize] as i128;
                if granularity == MaskGranularity::PerStep {
                    acc = wrap::wrap_to_width(acc, cfg.acc_bits);
                }
            }
        }
        let wrapped = wrap::wrap_to_width(acc, cfg.acc_bits);
        let rescaled = round::rescale(wrapped, cfg.frac_bits);
        y.push(rescaled.clamp(0, pixel_max) as u64);
    }

    Ok(y)
}

/// Convenience path: normalize raw samples, quantize raw taps (strict range
/// validation, per `cfg.rounding`), then convolve. Quantization errors such
/// as `CoefficientOutOfRange` or `UnsupportedCoeffWidth` propagate.
pub fn convolve_real(x: &[f64], h: &[f64], cfg: &FirConfig) -> Result<Vec<u64>> {
    validate_config(cfg)?;
    let taps = quantize::quantize(h, cfg.coeff_bits, cfg.frac_bits, cfg.rounding, true)?;
    let samples = normalize::normalize(x, cfg.data_bits)?;
    convolve(&samples, &taps, cfg)
}
