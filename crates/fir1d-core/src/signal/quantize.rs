// crates/fir1d-core/src/signal/quantize.rs

use crate::config::RoundMode;
use crate::error::{FirError, Result};
use crate::fixed::qformat::{QFormat, SUPPORTED_COEFF_WIDTHS};
use crate::fixed::round;

/// Filter taps quantized to signed Q-format integer codes.
///
/// Derived once per filter configuration (taps + Q-format only, never
/// samples), so callers may cache and reuse it across many sample vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantizedTaps {
    pub coeff_bits: u32,
    pub frac_bits: u32,
    pub values: Vec<i64>,
}

impl QuantizedTaps {
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn qformat(&self) -> QFormat {
        QFormat::new(self.coeff_bits, self.frac_bits)
    }
}

/// Quantize real taps into the coefficient Q-format.
///
/// Strict mode rejects taps whose real value falls outside the
/// representable range instead of clamping them silently; the clamp after
/// rounding stays in place either way, so the integer codes are always
/// in range.
pub fn quantize(
    taps: &[f64],
    coeff_bits: u32,
    frac_bits: u32,
    rounding: RoundMode,
    strict: bool,
) -> Result<QuantizedTaps> {
    if taps.is_empty() {
        return Err(FirError::EmptyFilter);
    }
    if !SUPPORTED_COEFF_WIDTHS.contains(&coeff_bits) {
        return Err(FirError::UnsupportedCoeffWidth { bits: coeff_bits });
    }
    // 63 is the widest fraction the u64 scale shift supports.
    if frac_bits == 0 || frac_bits > 63 {
        return Err(FirError::InvalidBitWidth {
            name: "frac_bits",
            bits: frac_bits,
        });
    }

    let q = QFormat::new(coeff_bits, frac_bits);

    for (index, &value) in taps.iter().enumerate() {
        if !value.is_finite() {
            return Err(FirError::NonFiniteCoefficient { index, value });
        }
        if strict && (value < q.real_min() || value > q.real_max()) {
            return Err(FirError::CoefficientOutOfRange {
                index,
                value,
                min: q.real_min(),
                max: q.real_max(),
            });
        }
    }

    let scale = q.scale();
    let values = taps
        .iter()
        .map(|&t| {
            let scaled = t * scale;
            let code = match rounding {
                RoundMode::HalfAwayFromZero => round::half_away_from_zero(scaled),
                RoundMode::HalfToEven => round::half_to_even(scaled),
            };
            code.clamp(q.int_min(), q.int_max())
        })
        .collect();

    Ok(QuantizedTaps {
        coeff_bits,
        frac_bits,
        values,
    })
}
