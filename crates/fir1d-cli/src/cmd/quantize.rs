// crates/fir1d-cli/src/cmd/quantize.rs

use clap::Args;
use fir1d_core::signal::quantize;

use crate::cmd::{resolve_taps, ConfigArgs};

#[derive(Args, Debug)]
pub struct QuantizeArgs {
    /// Comma-separated real taps, e.g. "0.25,0.5,0.25"
    #[arg(long)]
    pub h: Option<String>,

    /// Built-in coefficient set name (with --taps)
    #[arg(long)]
    pub set: Option<String>,

    /// Tap count for --set lookup
    #[arg(long, default_value_t = 3)]
    pub taps: u32,

    /// Clamp out-of-range taps into the Q-format instead of failing
    #[arg(long)]
    pub clamp: bool,

    #[command(flatten)]
    pub cfg: ConfigArgs,
}

pub fn run(args: QuantizeArgs) -> anyhow::Result<()> {
    let cfg = args.cfg.to_config();
    let taps = resolve_taps(&args.h, &args.set, args.taps)?;

    let q = quantize::quantize(
        &taps,
        cfg.coeff_bits,
        cfg.frac_bits,
        cfg.rounding,
        !args.clamp,
    )?;
    let fmt = q.qformat();
    let scale = fmt.scale();

    eprintln!("--- quantize ---");
    eprintln!(
        "format          = Q{}.{} ({} bits)",
        cfg.coeff_bits as i64 - cfg.frac_bits as i64,
        cfg.frac_bits,
        cfg.coeff_bits
    );
    eprintln!("int_range       = [{}, {}]", fmt.int_min(), fmt.int_max());
    eprintln!("real_range      = [{}, {}]", fmt.real_min(), fmt.real_max());
    for (i, (&t, &code)) in taps.iter().zip(q.values.iter()).enumerate() {
        let back = code as f64 / scale;
        eprintln!(
            "h[{i}] = {t:<22} -> {code:>8}  (= {back}, err {:+e})",
            back - t
        );
    }
    Ok(())
}
