// crates/fir1d-core/src/engine/mod.rs

pub mod fixed;
pub mod ideal;

use crate::config::ConvMode;

/// Output length and kernel center for one geometry.
///
/// Centered: N outputs, kernel centered at L/2, boundaries zero-padded.
/// Linear: full N+L-1 outputs, no centering. Index wraparound is never
/// circular in either mode.
#[inline]
pub(crate) fn geometry(mode: ConvMode, n: usize, l: usize) -> (usize, i64) {
    match mode {
        ConvMode::Centered => (n, (l / 2) as i64),
        ConvMode::Linear => (n + l - 1, 0),
    }
}
