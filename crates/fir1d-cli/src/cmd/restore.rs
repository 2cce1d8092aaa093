// crates/fir1d-cli/src/cmd/restore.rs

use clap::{Args, ValueEnum};
use fir1d_core::fixed::round;

use crate::io::pgm;
use crate::io::vector_file::{self, Payload};

/// How an ideal (real-valued, unbounded) array becomes displayable pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IdealPolicy {
    /// Round and clamp into [0, 255].
    Clip,
    /// Scale min..max onto the full 0..255 range.
    Normalize,
}

#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Input vector file (.fv)
    #[arg(long)]
    pub r#in: String,

    /// Output PGM path
    #[arg(long)]
    pub out: String,

    /// Policy for f64 (ideal) arrays; u8 arrays pass through unchanged
    #[arg(long, value_enum, default_value_t = IdealPolicy::Clip)]
    pub ideal_policy: IdealPolicy,
}

fn clip_u8(data: &[f64]) -> Vec<u8> {
    data.iter()
        .map(|&v| round::half_up(v).clamp(0, 255) as u8)
        .collect()
}

fn normalize_u8(data: &[f64]) -> Vec<u8> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max > min) {
        return vec![0; data.len()];
    }
    let scale = 255.0 / (max - min);
    data.iter()
        .map(|&v| round::half_up((v - min) * scale).clamp(0, 255) as u8)
        .collect()
}

pub fn run(args: RestoreArgs) -> anyhow::Result<()> {
    let v = vector_file::load(&args.r#in)?;
    let pixels = match &v.payload {
        Payload::U8(data) => data.clone(),
        Payload::F64(data) => match args.ideal_policy {
            IdealPolicy::Clip => clip_u8(data),
            IdealPolicy::Normalize => normalize_u8(data),
        },
    };
    pgm::write_pgm(&args.out, v.rows, v.cols, &pixels)?;
    eprintln!(
        "[OK] restore {}x{} {} -> {}",
        v.rows,
        v.cols,
        v.payload.dtype_tag(),
        args.out
    );
    Ok(())
}
