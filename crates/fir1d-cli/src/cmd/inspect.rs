// crates/fir1d-cli/src/cmd/inspect.rs

use std::path::Path;

use clap::Args;
use fir1d_core::stats::digest;

use crate::io::{naming, vector_file};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Vector file (.fv) to inspect
    #[arg(long)]
    pub r#in: String,
}

fn hex16(bytes: &[u8; 16]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let raw = std::fs::read(&args.r#in)?;
    // load() re-reads but also re-checks the crc; keep the raw bytes for
    // the whole-file digest.
    let v = vector_file::load(&args.r#in)?;

    eprintln!("--- inspect ---");
    eprintln!("file       = {}", args.r#in);
    eprintln!("bytes      = {}", raw.len());
    eprintln!("shape      = {}x{}", v.rows, v.cols);
    eprintln!("dtype      = {}", v.payload.dtype_tag());
    eprintln!("crc        = ok");
    eprintln!("digest16   = {}", hex16(&digest::digest16(&raw)));

    // Decode the naming convention when the file follows it.
    let file_name = Path::new(&args.r#in)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Ok(name) = naming::parse(&file_name) {
        eprintln!(
            "case       = {} coeffset={} kind={} taps={}",
            name.case_stem, name.coeff_name, name.kind, name.taps
        );
    }
    Ok(())
}
