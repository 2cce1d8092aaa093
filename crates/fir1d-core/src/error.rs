use thiserror::Error;

pub type Result<T> = std::result::Result<T, FirError>;

/// Everything detectable before numeric work starts is detected there;
/// sample validation is fail-fast with no partial result.
#[derive(Debug, Error)]
pub enum FirError {
    #[error("filter taps must not be empty")]
    EmptyFilter,

    #[error("h[{index}]={value} must be finite (no NaN/Inf)")]
    NonFiniteCoefficient { index: usize, value: f64 },

    #[error("h[{index}]={value} out of Q-format real range [{min}, {max}]")]
    CoefficientOutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("x[{index}]={value} must be finite (no NaN/Inf)")]
    NonFiniteSample { index: usize, value: f64 },

    #[error("invalid bit width: {name}={bits}")]
    InvalidBitWidth { name: &'static str, bits: u32 },

    #[error("unsupported coeff_bits={bits}; supported widths are 8, 16, 32")]
    UnsupportedCoeffWidth { bits: u32 },

    #[error("shape mismatch: left={left}, right={right}")]
    ShapeMismatch { left: usize, right: usize },
}
