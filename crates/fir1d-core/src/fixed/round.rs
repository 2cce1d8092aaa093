// crates/fir1d-core/src/fixed/round.rs

/// Round to nearest, ties away from zero. Canonical coefficient tie-break.
#[inline]
pub fn half_away_from_zero(x: f64) -> i64 {
    if x >= 0.0 {
        (x + 0.5).floor() as i64
    } else {
        (x - 0.5).ceil() as i64
    }
}

/// Round to nearest, ties to even. Compatibility tie-break for the model
/// revision that quantized with banker's rounding.
#[inline]
pub fn half_to_even(x: f64) -> i64 {
    x.round_ties_even() as i64
}

/// Round half up to the nearest integer: floor(x + 0.5).
/// This is the sample-normalization rule; note -0.5 rounds to 0.
#[inline]
pub fn half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Fixed-point rescale: add bias 2^(frac_bits-1), then arithmetic right
/// shift by frac_bits. Rounds half up and truncates toward negative
/// infinity, not toward zero.
#[inline]
pub fn rescale(sum: i128, frac_bits: u32) -> i128 {
    debug_assert!(frac_bits >= 1);
    (sum + (1i128 << (frac_bits - 1))) >> frac_bits
}
