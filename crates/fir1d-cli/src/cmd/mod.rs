// crates/fir1d-cli/src/cmd/mod.rs

pub mod compare;
pub mod filter;
pub mod gen;
pub mod inspect;
pub mod quantize;
pub mod restore;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use fir1d_core::{ConvMode, FirConfig, RoundMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeOpt {
    /// Same-length convolution, kernel centered (hardware-matching).
    Centered,
    /// Full-length N+L-1 convolution (legacy revision).
    Linear,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoundingOpt {
    /// Round half away from zero (canonical).
    Away,
    /// Round half to even (compatibility revision).
    Even,
}

/// Bit-width configuration shared by the engine-facing subcommands.
/// Defaults are the canonical golden-model configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Pixel bit width
    #[arg(long, default_value_t = 8)]
    pub data_bits: u32,

    /// Coefficient fraction bits (also the rescale shift)
    #[arg(long, default_value_t = 12)]
    pub frac_bits: u32,

    /// Accumulator register width
    #[arg(long, default_value_t = 32)]
    pub acc_bits: u32,

    /// Coefficient word width (8|16|32)
    #[arg(long, default_value_t = 16)]
    pub coeff_bits: u32,

    /// Convolution geometry
    #[arg(long, value_enum, default_value_t = ModeOpt::Centered)]
    pub mode: ModeOpt,

    /// Coefficient quantization tie-break
    #[arg(long, value_enum, default_value_t = RoundingOpt::Away)]
    pub rounding: RoundingOpt,

    /// Shorthand for the legacy (8,7,16,8) hardware revision
    #[arg(long)]
    pub legacy: bool,
}

impl ConfigArgs {
    pub fn to_config(&self) -> FirConfig {
        let mut cfg = if self.legacy {
            FirConfig::legacy_q1_7()
        } else {
            FirConfig {
                data_bits: self.data_bits,
                frac_bits: self.frac_bits,
                acc_bits: self.acc_bits,
                coeff_bits: self.coeff_bits,
                ..FirConfig::default()
            }
        };
        cfg.mode = match self.mode {
            ModeOpt::Centered => ConvMode::Centered,
            ModeOpt::Linear => ConvMode::Linear,
        };
        cfg.rounding = match self.rounding {
            RoundingOpt::Away => RoundMode::HalfAwayFromZero,
            RoundingOpt::Even => RoundMode::HalfToEven,
        };
        cfg
    }
}

/// Parse a comma-separated list of real numbers.
pub fn parse_f64_list(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            t.trim()
                .parse::<f64>()
                .with_context(|| format!("not a number: {t:?}"))
        })
        .collect()
}

/// Resolve taps from either an inline list or a built-in set name.
pub fn resolve_taps(h: &Option<String>, set: &Option<String>, taps: u32) -> Result<Vec<f64>> {
    match (h, set) {
        (Some(list), None) => parse_f64_list(list),
        (None, Some(name)) => crate::coeffs::find(taps, name)
            .with_context(|| format!("unknown coefficient set {name} for {taps} taps")),
        (Some(_), Some(_)) => bail!("--h and --set are mutually exclusive"),
        (None, None) => bail!("one of --h or --set is required"),
    }
}
