// crates/fir1d-cli/src/io/pgm.rs

use anyhow::{bail, Context, Result};

/// Write a grayscale raster as binary PGM (P5, maxval 255).
pub fn write_pgm(path: &str, rows: u32, cols: u32, pixels: &[u8]) -> Result<()> {
    if pixels.len() != rows as usize * cols as usize {
        bail!(
            "pixel count {} does not match {}x{}",
            pixels.len(),
            rows,
            cols
        );
    }
    let mut out = Vec::with_capacity(32 + pixels.len());
    out.extend_from_slice(format!("P5\n{cols} {rows}\n255\n").as_bytes());
    out.extend_from_slice(pixels);
    std::fs::write(path, out).with_context(|| format!("write pgm: {path}"))?;
    Ok(())
}
