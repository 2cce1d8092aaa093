// crates/fir1d-core/src/signal/normalize.rs

use crate::error::{FirError, Result};
use crate::fixed::round;

/// Samples rounded and clamped into the unsigned pixel domain
/// [0, 2^data_bits - 1]. Values are stored widened; data_bits is carried so
/// downstream saturation uses the same range the samples were clamped to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedSamples {
    pub data_bits: u32,
    pub values: Vec<u64>,
}

impl NormalizedSamples {
    /// Wrap already-integer pixel data without re-rounding. Values are
    /// still clamped into the pixel range.
    pub fn from_ints(samples: &[u64], data_bits: u32) -> NormalizedSamples {
        let max = (1u64 << data_bits) - 1;
        NormalizedSamples {
            data_bits,
            values: samples.iter().map(|&v| v.min(max)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert raw real samples into the hardware pixel domain.
///
/// Finiteness is checked on the whole vector before any rounding; the first
/// non-finite element aborts with no partial result. Rounding is half-up
/// (`floor(x + 0.5)`), then clamp into [0, 2^data_bits - 1].
pub fn normalize(samples: &[f64], data_bits: u32) -> Result<NormalizedSamples> {
    // Same pixel-width bound validate_config enforces, repeated here so the
    // standalone entry point errors instead of overflowing the range shift.
    if data_bits == 0 || data_bits > 32 {
        return Err(FirError::InvalidBitWidth {
            name: "data_bits",
            bits: data_bits,
        });
    }
    for (index, &value) in samples.iter().enumerate() {
        if !value.is_finite() {
            return Err(FirError::NonFiniteSample { index, value });
        }
    }

    let max = ((1u64 << data_bits) - 1) as i64;
    let values = samples
        .iter()
        .map(|&v| round::half_up(v).clamp(0, max) as u64)
        .collect();

    Ok(NormalizedSamples { data_bits, values })
}
