// crates/fir1d-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod coeffs;
mod io;

#[derive(Parser)]
#[command(name = "fir1d-cli")]
#[command(about = "FIR 1D golden model tools (vectors/reports/images)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Quantize real taps into the coefficient Q-format
    Quantize(cmd::quantize::QuantizeArgs),

    /// Run the fixed or ideal engine over samples or a vector file
    Filter(cmd::filter::FilterArgs),

    /// Batch-generate output vectors for every input case x coefficient set
    Gen(cmd::gen::GenArgs),

    /// Error report between an ideal (f64) and a fixed (u8) vector file
    Compare(cmd::compare::CompareArgs),

    /// Restore a vector file to a grayscale PGM image
    Restore(cmd::restore::RestoreArgs),

    /// Inspect a vector file (header, crc, digest)
    Inspect(cmd::inspect::InspectArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Quantize(args) => cmd::quantize::run(args),
        Commands::Filter(args) => cmd::filter::run(args),
        Commands::Gen(args) => cmd::gen::run(args),
        Commands::Compare(args) => cmd::compare::run(args),
        Commands::Restore(args) => cmd::restore::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
    }
}
