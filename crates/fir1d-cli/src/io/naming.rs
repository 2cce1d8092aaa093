// crates/fir1d-cli/src/io/naming.rs

use anyhow::{bail, Result};

pub const EXT: &str = ".fv";

/// Output vector file naming convention:
/// `{case}__{coeffset}_{kind}_{taps}tap_y_{dtype}.fv`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorName {
    pub case_stem: String,
    pub coeff_name: String,
    /// "fixed" or "ideal".
    pub kind: String,
    pub taps: u32,
    /// "u8" or "f64".
    pub dtype: String,
}

impl VectorName {
    pub fn file_name(&self) -> String {
        format!(
            "{}__{}_{}_{}tap_y_{}{}",
            self.case_stem, self.coeff_name, self.kind, self.taps, self.dtype, EXT
        )
    }
}

/// Input case files are named `{case}_x_u8.fv`.
pub fn input_case_stem(file_name: &str) -> Option<&str> {
    file_name.strip_suffix("_x_u8.fv")
}

pub fn parse(file_name: &str) -> Result<VectorName> {
    let Some(stem) = file_name.strip_suffix(EXT) else {
        bail!("not a vector file name: {file_name}");
    };
    let Some((case_stem, rest)) = stem.split_once("__") else {
        bail!("missing case separator in {file_name}");
    };

    // rest = {coeffset}_{kind}_{N}tap_y_{dtype}, parsed from the right so
    // the coeffset may itself contain underscores.
    let mut parts = rest.rsplitn(4, '_');
    let dtype = parts.next().unwrap_or_default();
    let y = parts.next().unwrap_or_default();
    let tap = parts.next().unwrap_or_default();
    let head = parts.next().unwrap_or_default();

    if y != "y" {
        bail!("malformed vector name {file_name}");
    }
    if dtype != "u8" && dtype != "f64" {
        bail!("unknown dtype tag {dtype} in {file_name}");
    }
    let Some(tap_n) = tap.strip_suffix("tap") else {
        bail!("missing tap label in {file_name}");
    };
    let taps: u32 = tap_n.parse()?;

    let Some((coeff_name, kind)) = head.rsplit_once('_') else {
        bail!("missing kind in {file_name}");
    };
    if kind != "fixed" && kind != "ideal" {
        bail!("unknown kind {kind} in {file_name}");
    }

    Ok(VectorName {
        case_stem: case_stem.to_string(),
        coeff_name: coeff_name.to_string(),
        kind: kind.to_string(),
        taps,
        dtype: dtype.to_string(),
    })
}
