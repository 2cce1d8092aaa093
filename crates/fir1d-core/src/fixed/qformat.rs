// crates/fir1d-core/src/fixed/qformat.rs

/// Coefficient word widths with a native hardware datapath.
pub const SUPPORTED_COEFF_WIDTHS: [u32; 3] = [8, 16, 32];

/// Signed fixed-point format descriptor: `total_bits` including sign,
/// `frac_bits` of fraction. Real value = integer code / 2^frac_bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QFormat {
    pub total_bits: u32,
    pub frac_bits: u32,
}

impl QFormat {
    #[inline]
    pub fn new(total_bits: u32, frac_bits: u32) -> QFormat {
        QFormat {
            total_bits,
            frac_bits,
        }
    }

    /// Smallest representable integer code: -2^(W-1).
    #[inline]
    pub fn int_min(&self) -> i64 {
        -(1i64 << (self.total_bits - 1))
    }

    /// Largest representable integer code: 2^(W-1) - 1.
    #[inline]
    pub fn int_max(&self) -> i64 {
        (1i64 << (self.total_bits - 1)) - 1
    }

    /// 2^frac_bits.
    #[inline]
    pub fn scale(&self) -> f64 {
        (1u64 << self.frac_bits) as f64
    }

    /// Smallest representable real value.
    #[inline]
    pub fn real_min(&self) -> f64 {
        self.int_min() as f64 / self.scale()
    }

    /// Largest representable real value (e.g. 0.9921875 for Q1.7).
    #[inline]
    pub fn real_max(&self) -> f64 {
        self.int_max() as f64 / self.scale()
    }
}
