use crate::config::FirConfig;
use crate::error::{FirError, Result};
use crate::fixed::qformat::SUPPORTED_COEFF_WIDTHS;

/// All width checks happen here, before any numeric work.
pub fn validate_config(cfg: &FirConfig) -> Result<()> {
    if cfg.data_bits == 0 || cfg.data_bits > 32 {
        return Err(FirError::InvalidBitWidth {
            name: "data_bits",
            bits: cfg.data_bits,
        });
    }
    // The rescale bias and the Q-format scale are built with u64/i128
    // shifts; 63 fraction bits is the widest shift that stays defined.
    if cfg.frac_bits == 0 || cfg.frac_bits > 63 {
        return Err(FirError::InvalidBitWidth {
            name: "frac_bits",
            bits: cfg.frac_bits,
        });
    }
    // The generic wrap path accumulates in i128; 64 is the widest register
    // the model supports.
    if cfg.acc_bits == 0 || cfg.acc_bits > 64 {
        return Err(FirError::InvalidBitWidth {
            name: "acc_bits",
            bits: cfg.acc_bits,
        });
    }
    if !SUPPORTED_COEFF_WIDTHS.contains(&cfg.coeff_bits) {
        return Err(FirError::UnsupportedCoeffWidth {
            bits: cfg.coeff_bits,
        });
    }
    Ok(())
}
