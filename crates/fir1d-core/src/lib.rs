//! Software golden model of a fixed-point hardware FIR filter.
//!
//! The fixed engine reproduces the hardware MAC pipeline bit-for-bit:
//! coefficient quantization, accumulator wraparound at a configurable
//! register width, biased rescale, and output saturation. The ideal engine
//! is the unquantized floating-point baseline the fixed path is measured
//! against. Every operation is a pure function of its inputs.

pub mod error;
pub mod validate;

pub mod config;
pub mod engine;
pub mod fixed;
pub mod report;
pub mod signal;
pub mod stats;

pub use crate::config::{ConvMode, FirConfig, MaskGranularity, RoundMode};
pub use crate::error::{FirError, Result};
pub use crate::signal::normalize::NormalizedSamples;
pub use crate::signal::quantize::QuantizedTaps;
