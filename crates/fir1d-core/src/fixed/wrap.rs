// crates/fir1d-core/src/fixed/wrap.rs

/// Reduce `sum` modulo 2^acc_bits and reinterpret the remainder as an
/// acc_bits-wide two's-complement value.
///
/// This models hardware register overflow: high-order bits are lost, never
/// recovered. Width-specialized fast paths cover the native register sizes;
/// the generic mask path handles every width in 1..=64 and is the
/// portability reference the fast paths are tested against.
#[inline]
pub fn wrap_to_width(sum: i128, acc_bits: u32) -> i128 {
    debug_assert!(acc_bits >= 1 && acc_bits <= 64);
    match acc_bits {
        16 => (sum as i16) as i128,
        32 => (sum as i32) as i128,
        64 => (sum as i64) as i128,
        _ => wrap_generic(sum, acc_bits),
    }
}

/// Generic path: keep the low acc_bits, then subtract 2^acc_bits when the
/// sign bit (bit acc_bits-1) is set.
#[inline]
pub fn wrap_generic(sum: i128, acc_bits: u32) -> i128 {
    let mask = if acc_bits == 128 {
        u128::MAX
    } else {
        (1u128 << acc_bits) - 1
    };
    let low = (sum as u128) & mask;
    if low >> (acc_bits - 1) & 1 == 1 {
        low as i128 - (1i128 << acc_bits)
    } else {
        low as i128
    }
}
