// crates/fir1d-cli/src/cmd/compare.rs

use anyhow::bail;
use clap::{Args, ValueEnum};
use fir1d_core::report;

use crate::io::jsonl;
use crate::io::vector_file::{self, Payload};

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ReportFmt {
    Text,
    Jsonl,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Ideal baseline vector file (f64)
    #[arg(long)]
    pub ideal: String,

    /// Fixed-engine vector file (u8)
    #[arg(long)]
    pub fixed: String,

    /// Pixel bit width defining full scale for saturation/clip ratios
    #[arg(long, default_value_t = 8)]
    pub data_bits: u32,

    /// Worst-case samples to list
    #[arg(long, default_value_t = 10)]
    pub top_k: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFmt::Text)]
    pub fmt: ReportFmt,

    /// Also write the report as JSONL to this path
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let ideal_v = vector_file::load(&args.ideal)?;
    let fixed_v = vector_file::load(&args.fixed)?;

    if (ideal_v.rows, ideal_v.cols) != (fixed_v.rows, fixed_v.cols) {
        bail!(
            "shape mismatch: ideal={}x{} fixed={}x{}",
            ideal_v.rows,
            ideal_v.cols,
            fixed_v.rows,
            fixed_v.cols
        );
    }

    let Payload::F64(ideal) = &ideal_v.payload else {
        bail!("--ideal must be an f64 vector file");
    };
    let Payload::U8(fixed) = &fixed_v.payload else {
        bail!("--fixed must be a u8 vector file");
    };
    let fixed_u64: Vec<u64> = fixed.iter().map(|&v| v as u64).collect();

    let r = report::compare(ideal, &fixed_u64, args.data_bits, args.top_k)?;

    match args.fmt {
        ReportFmt::Jsonl => println!("{}", jsonl::report_to_json(&r)),
        ReportFmt::Text => {
            eprintln!("--- compare ---");
            eprintln!("ideal             = {}", args.ideal);
            eprintln!("fixed             = {}", args.fixed);
            eprintln!("num_samples       = {}", r.num_samples);
            eprintln!("max_abs_err       = {:.6}", r.max_abs_err);
            eprintln!("mae               = {:.6}", r.mae);
            eprintln!("rmse              = {:.6}", r.rmse);
            eprintln!("mean_err          = {:+.6}", r.mean_err);
            eprintln!("sat_low_ratio     = {:.6}", r.sat_low_ratio);
            eprintln!("sat_high_ratio    = {:.6}", r.sat_high_ratio);
            eprintln!("sat_ratio         = {:.6}", r.sat_ratio);
            eprintln!("clip_needed_ratio = {:.6}", r.clip_needed_ratio);
            eprintln!("--- top {} worst ---", r.worst.len());
            for w in &r.worst {
                eprintln!(
                    "idx={:>8} ideal={:<14.6} fixed={:>5} abs_err={:.6}",
                    w.index, w.ideal, w.fixed, w.abs_err
                );
            }
        }
    }

    if let Some(path) = &args.out {
        jsonl::write_report_file(path, &r)?;
    }
    Ok(())
}
