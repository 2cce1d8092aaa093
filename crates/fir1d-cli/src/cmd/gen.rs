// crates/fir1d-cli/src/cmd/gen.rs

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, ValueEnum};
use fir1d_core::engine::{fixed, ideal};
use fir1d_core::signal::normalize::NormalizedSamples;
use fir1d_core::signal::quantize;
use fir1d_core::validate;

use crate::cmd::ConfigArgs;
use crate::coeffs;
use crate::io::naming::{self, VectorName};
use crate::io::vector_file::{self, Payload, VectorFile};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TapSel {
    All,
    #[value(name = "3")]
    Three,
    #[value(name = "5")]
    Five,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindSel {
    All,
    Fixed,
    Ideal,
}

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Directory of input case files ({case}_x_u8.fv)
    #[arg(long)]
    pub input_dir: String,

    /// Output root; vectors land under {kind}_{N}tap/ subdirectories
    #[arg(long)]
    pub output_dir: String,

    /// Tap family to sweep
    #[arg(long, value_enum, default_value_t = TapSel::All)]
    pub tap: TapSel,

    /// Engine(s) to run
    #[arg(long, value_enum, default_value_t = KindSel::All)]
    pub kind: KindSel,

    /// Overwrite existing output vectors instead of skipping them
    #[arg(long)]
    pub overwrite: bool,

    /// Abort the whole batch on the first failing case (default: skip it)
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub cfg: ConfigArgs,
}

fn input_cases(dir: &Path) -> anyhow::Result<Vec<(String, PathBuf)>> {
    let mut cases = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("read input dir {dir:?}"))? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(stem) = naming::input_case_stem(&name) {
            cases.push((stem.to_string(), entry.path()));
        }
    }
    cases.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
    Ok(cases)
}

struct BatchCounts {
    generated: u64,
    skipped: u64,
    failed: u64,
}

fn run_case(
    x: &VectorFile,
    case_stem: &str,
    tap_count: u32,
    kind: &str,
    out_root: &Path,
    args: &GenArgs,
) -> anyhow::Result<(u64, u64)> {
    let cfg = args.cfg.to_config();
    validate::validate_config(&cfg)?;
    if kind == "fixed" {
        anyhow::ensure!(cfg.data_bits <= 8, "u8 vector files require data_bits <= 8");
    }
    let width = x.cols as usize;
    let mut generated = 0u64;
    let mut skipped = 0u64;

    let subdir = out_root.join(format!("{kind}_{tap_count}tap"));
    std::fs::create_dir_all(&subdir).with_context(|| format!("create {subdir:?}"))?;

    for (coeff_name, taps) in coeffs::all(tap_count) {
        let dtype = if kind == "fixed" { "u8" } else { "f64" };
        let name = VectorName {
            case_stem: case_stem.to_string(),
            coeff_name: coeff_name.to_string(),
            kind: kind.to_string(),
            taps: tap_count,
            dtype: dtype.to_string(),
        };
        let out_path = subdir.join(name.file_name());
        if out_path.exists() && !args.overwrite {
            skipped += 1;
            continue;
        }

        let out = match kind {
            "fixed" => {
                let q =
                    quantize::quantize(&taps, cfg.coeff_bits, cfg.frac_bits, cfg.rounding, true)?;
                let mut flat = Vec::with_capacity(x.payload.len());
                for r in 0..x.rows as usize {
                    let row = x.row_u8(r).context("fixed gen requires u8 input")?;
                    let samples =
                        NormalizedSamples::from_ints(
                            &row.iter().map(|&p| p as u64).collect::<Vec<_>>(),
                            cfg.data_bits,
                        );
                    let y = fixed::convolve(&samples, &q, &cfg)?;
                    anyhow::ensure!(
                        y.len() == width,
                        "row {r}: output length {} != width {width}",
                        y.len()
                    );
                    flat.extend(y.iter().map(|&v| v as u8));
                }
                VectorFile::new(x.rows, x.cols, Payload::U8(flat))?
            }
            _ => {
                let mut flat = Vec::with_capacity(x.payload.len());
                for r in 0..x.rows as usize {
                    let row = x.row_u8(r).context("ideal gen requires u8 input")?;
                    let samples =
                        NormalizedSamples::from_ints(
                            &row.iter().map(|&p| p as u64).collect::<Vec<_>>(),
                            cfg.data_bits,
                        );
                    let y = ideal::convolve(&samples, &taps, cfg.mode)?;
                    flat.extend_from_slice(&y);
                }
                VectorFile::new(x.rows, x.cols, Payload::F64(flat))?
            }
        };

        vector_file::save(&out_path.to_string_lossy(), &out)?;
        generated += 1;
    }

    Ok((generated, skipped))
}

pub fn run(args: GenArgs) -> anyhow::Result<()> {
    let input_dir = Path::new(&args.input_dir);
    let out_root = Path::new(&args.output_dir);
    let cases = input_cases(input_dir)?;
    anyhow::ensure!(!cases.is_empty(), "no input case files in {input_dir:?}");

    let tap_counts: &[u32] = match args.tap {
        TapSel::All => &[3, 5],
        TapSel::Three => &[3],
        TapSel::Five => &[5],
    };
    let kinds: &[&str] = match args.kind {
        KindSel::All => &["ideal", "fixed"],
        KindSel::Fixed => &["fixed"],
        KindSel::Ideal => &["ideal"],
    };

    let mut counts = BatchCounts {
        generated: 0,
        skipped: 0,
        failed: 0,
    };

    for (case_stem, path) in &cases {
        let x = vector_file::load(&path.to_string_lossy())?;
        for &tap_count in tap_counts {
            for &kind in kinds {
                match run_case(&x, case_stem, tap_count, kind, out_root, &args) {
                    Ok((g, s)) => {
                        counts.generated += g;
                        counts.skipped += s;
                    }
                    Err(e) if args.strict => return Err(e),
                    Err(e) => {
                        counts.failed += 1;
                        eprintln!("[skip] {case_stem} {kind}_{tap_count}tap: {e:#}");
                    }
                }
            }
        }
    }

    eprintln!(
        "[OK] gen generated={} skipped={} failed={} out={}",
        counts.generated, counts.skipped, counts.failed, args.output_dir
    );
    Ok(())
}
