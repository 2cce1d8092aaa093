use fir1d_core::config::{ConvMode, FirConfig, RoundMode};
use fir1d_core::engine::fixed;
use fir1d_core::error::FirError;
use fir1d_core::fixed::qformat::QFormat;
use fir1d_core::signal::{normalize, quantize};
use fir1d_core::validate::validate_config;

#[test]
fn canonical_defaults() {
    let cfg = FirConfig::default();
    assert_eq!(cfg.data_bits, 8);
    assert_eq!(cfg.frac_bits, 12);
    assert_eq!(cfg.acc_bits, 32);
    assert_eq!(cfg.coeff_bits, 16);
    assert_eq!(cfg.mode, ConvMode::Centered);
    assert_eq!(cfg.rounding, RoundMode::HalfAwayFromZero);
    assert!(validate_config(&cfg).is_ok());
}

#[test]
fn legacy_preset_remains_selectable() {
    let cfg = FirConfig::legacy_q1_7();
    assert_eq!(
        (cfg.data_bits, cfg.frac_bits, cfg.acc_bits, cfg.coeff_bits),
        (8, 7, 16, 8)
    );
    assert!(validate_config(&cfg).is_ok());
}

#[test]
fn zero_widths_rejected() {
    for (name, cfg) in [
        (
            "data_bits",
            FirConfig {
                data_bits: 0,
                ..FirConfig::default()
            },
        ),
        (
            "frac_bits",
            FirConfig {
                frac_bits: 0,
                ..FirConfig::default()
            },
        ),
        (
            "acc_bits",
            FirConfig {
                acc_bits: 0,
                ..FirConfig::default()
            },
        ),
    ] {
        match validate_config(&cfg).unwrap_err() {
            FirError::InvalidBitWidth { name: got, bits } => {
                assert_eq!(got, name);
                assert_eq!(bits, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn accumulator_wider_than_64_rejected() {
    let cfg = FirConfig {
        acc_bits: 128,
        ..FirConfig::default()
    };
    assert!(matches!(
        validate_config(&cfg).unwrap_err(),
        FirError::InvalidBitWidth { name: "acc_bits", .. }
    ));
}

#[test]
fn frac_bits_wider_than_63_rejected() {
    let cfg = FirConfig {
        frac_bits: 200,
        ..FirConfig::default()
    };
    assert!(matches!(
        validate_config(&cfg).unwrap_err(),
        FirError::InvalidBitWidth {
            name: "frac_bits",
            bits: 200
        }
    ));

    // The engine entry point reports the same error instead of reaching
    // the rescale shift.
    assert!(matches!(
        fixed::convolve_real(&[10.0, 20.0], &[0.5], &cfg).unwrap_err(),
        FirError::InvalidBitWidth {
            name: "frac_bits",
            bits: 200
        }
    ));
}

#[test]
fn quantize_rejects_frac_bits_64() {
    let err = quantize::quantize(&[0.5], 32, 64, RoundMode::HalfAwayFromZero, true).unwrap_err();
    assert!(matches!(
        err,
        FirError::InvalidBitWidth {
            name: "frac_bits",
            bits: 64
        }
    ));
}

#[test]
fn normalize_rejects_data_bits_64() {
    let err = normalize::normalize(&[1.0, 2.0], 64).unwrap_err();
    assert!(matches!(
        err,
        FirError::InvalidBitWidth {
            name: "data_bits",
            bits: 64
        }
    ));
}

#[test]
fn unsupported_coeff_width_rejected() {
    let cfg = FirConfig {
        coeff_bits: 12,
        ..FirConfig::default()
    };
    assert!(matches!(
        validate_config(&cfg).unwrap_err(),
        FirError::UnsupportedCoeffWidth { bits: 12 }
    ));
}

#[test]
fn qformat_ranges() {
    let q17 = QFormat::new(8, 7);
    assert_eq!(q17.int_min(), -128);
    assert_eq!(q17.int_max(), 127);
    assert_eq!(q17.real_min(), -1.0);
    assert_eq!(q17.real_max(), 0.9921875);

    let q412 = QFormat::new(16, 12);
    assert_eq!(q412.int_min(), -32768);
    assert_eq!(q412.int_max(), 32767);
    assert_eq!(q412.real_max(), 32767.0 / 4096.0);
}
