// crates/fir1d-cli/src/cmd/filter.rs

use anyhow::{bail, Context};
use clap::{Args, ValueEnum};
use fir1d_core::engine::{fixed, ideal};
use fir1d_core::signal::normalize;
use fir1d_core::validate;

use crate::cmd::{parse_f64_list, resolve_taps, ConfigArgs};
use crate::io::vector_file::{self, Payload, VectorFile};
use crate::io::jsonl;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Bit-width-limited hardware-matching engine (integer output).
    Fixed,
    /// Floating-point error baseline (real output).
    Ideal,
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Engine to run
    #[arg(long, value_enum, default_value_t = Kind::Fixed)]
    pub kind: Kind,

    /// Inline comma-separated samples (one row)
    #[arg(long)]
    pub x: Option<String>,

    /// Input vector file (.fv); processed row-wise for 2-D arrays
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output vector file; JSONL to stdout when omitted
    #[arg(long)]
    pub out: Option<String>,

    /// Comma-separated real taps
    #[arg(long)]
    pub h: Option<String>,

    /// Built-in coefficient set name (with --taps)
    #[arg(long)]
    pub set: Option<String>,

    /// Tap count for --set lookup
    #[arg(long, default_value_t = 3)]
    pub taps: u32,

    #[command(flatten)]
    pub cfg: ConfigArgs,
}

fn input_rows(args: &FilterArgs) -> anyhow::Result<Vec<Vec<f64>>> {
    match (&args.x, &args.r#in) {
        (Some(inline), None) => Ok(vec![parse_f64_list(inline)?]),
        (None, Some(path)) => {
            let v = vector_file::load(path)?;
            let w = v.cols as usize;
            if w == 0 {
                return Ok(Vec::new());
            }
            let rows = match v.payload {
                Payload::U8(data) => data
                    .chunks(w)
                    .map(|r| r.iter().map(|&p| p as f64).collect())
                    .collect(),
                Payload::F64(data) => data.chunks(w).map(|r| r.to_vec()).collect(),
            };
            Ok(rows)
        }
        (Some(_), Some(_)) => bail!("--x and --in are mutually exclusive"),
        (None, None) => bail!("one of --x or --in is required"),
    }
}

pub fn run(args: FilterArgs) -> anyhow::Result<()> {
    let cfg = args.cfg.to_config();
    validate::validate_config(&cfg)?;
    let taps = resolve_taps(&args.h, &args.set, args.taps)?;
    let rows = input_rows(&args)?;

    match args.kind {
        Kind::Fixed => {
            let mut out_rows: Vec<Vec<u64>> = Vec::with_capacity(rows.len());
            for row in &rows {
                out_rows.push(fixed::convolve_real(row, &taps, &cfg)?);
            }
            match &args.out {
                Some(path) => {
                    if cfg.data_bits > 8 {
                        bail!("u8 vector files require data_bits <= 8");
                    }
                    let out_w = out_rows.first().map(|r| r.len()).unwrap_or(0);
                    let mut flat = Vec::with_capacity(out_rows.len() * out_w);
                    for r in &out_rows {
                        flat.extend(r.iter().map(|&v| v as u8));
                    }
                    let v = VectorFile::new(out_rows.len() as u32, out_w as u32, Payload::U8(flat))?;
                    vector_file::save(path, &v)
                        .with_context(|| format!("write fixed output {path}"))?;
                }
                None => jsonl::write_u64_rows_stdout(&out_rows)?,
            }
        }
        Kind::Ideal => {
            let mut out_rows: Vec<Vec<f64>> = Vec::with_capacity(rows.len());
            for row in &rows {
                let x = normalize::normalize(row, cfg.data_bits)?;
                out_rows.push(ideal::convolve(&x, &taps, cfg.mode)?);
            }
            match &args.out {
                Some(path) => {
                    let out_w = out_rows.first().map(|r| r.len()).unwrap_or(0);
                    let mut flat = Vec::with_capacity(out_rows.len() * out_w);
                    for r in &out_rows {
                        flat.extend_from_slice(r);
                    }
                    let v =
                        VectorFile::new(out_rows.len() as u32, out_w as u32, Payload::F64(flat))?;
                    vector_file::save(path, &v)
                        .with_context(|| format!("write ideal output {path}"))?;
                }
                None => jsonl::write_f64_rows_stdout(&out_rows)?,
            }
        }
    }

    Ok(())
}
