// crates/fir1d-core/src/config.rs

/// Convolution index geometry.
///
/// `Centered` is the hardware-matching convention: output length equals
/// input length, kernel centered at `L/2`, boundaries zero-padded.
/// `Linear` is the historical full-length (`N+L-1`) convention kept for
/// regression against the earlier model revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConvMode {
    Centered,
    Linear,
}

/// Tie-break policy for coefficient quantization.
///
/// `HalfAwayFromZero` matches the most validated model revision and is
/// canonical. `HalfToEven` exists for compatibility with a different
/// revision; the two are never silently mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundMode {
    HalfAwayFromZero,
    HalfToEven,
}

/// Where the accumulator is reduced modulo `2^acc_bits`.
///
/// `EndOfSum` (once, after the complete tap sum) is canonical. `PerStep`
/// (after every MAC) is kept as a named strategy so the bit-for-bit
/// equivalence of the two can be verified for the widths we exercise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskGranularity {
    EndOfSum,
    PerStep,
}

/// Bit-width and strategy configuration for one filter setup.
///
/// Always passed explicitly into engine calls; engines hold no state, so a
/// config can be shared freely across parallel workers.
#[derive(Clone, Copy, Debug)]
pub struct FirConfig {
    /// Pixel/sample bit width. Output range is [0, 2^data_bits - 1].
    pub data_bits: u32,
    /// Fractional bits of the coefficient Q-format (also the rescale shift).
    pub frac_bits: u32,
    /// Accumulator register width. May be intentionally narrower than the
    /// true sum needs; the engine wraps faithfully instead of guarding.
    pub acc_bits: u32,
    /// Coefficient word width. Supported: 8, 16, 32.
    pub coeff_bits: u32,
    pub mode: ConvMode,
    pub rounding: RoundMode,
}

impl Default for FirConfig {
    /// Canonical golden-model configuration: Q4.12 coefficients in a
    /// 16-bit word, 32-bit accumulator, 8-bit pixels, centered convolution.
    fn default() -> Self {
        Self {
            data_bits: 8,
            frac_bits: 12,
            acc_bits: 32,
            coeff_bits: 16,
            mode: ConvMode::Centered,
            rounding: RoundMode::HalfAwayFromZero,
        }
    }
}

impl FirConfig {
    /// Legacy Q1.7 configuration (8-bit coefficients, 16-bit accumulator)
    /// from the first hardware revision; selectable for regression coverage.
    pub fn legacy_q1_7() -> Self {
        Self {
            data_bits: 8,
            frac_bits: 7,
            acc_bits: 16,
            coeff_bits: 8,
            ..Self::default()
        }
    }

    /// Inclusive maximum output sample value.
    #[inline]
    pub fn pixel_max(&self) -> u64 {
        (1u64 << self.data_bits) - 1
    }
}
