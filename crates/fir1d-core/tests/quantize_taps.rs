use fir1d_core::config::RoundMode;
use fir1d_core::error::FirError;
use fir1d_core::signal::quantize::quantize;

#[test]
fn q4_12_simple_lowpass() {
    let q = quantize(
        &[0.25, 0.5, 0.25],
        16,
        12,
        RoundMode::HalfAwayFromZero,
        true,
    )
    .unwrap();
    assert_eq!(q.values, vec![1024, 2048, 1024]);
}

#[test]
fn empty_taps_rejected() {
    let err = quantize(&[], 16, 12, RoundMode::HalfAwayFromZero, true).unwrap_err();
    assert!(matches!(err, FirError::EmptyFilter));
}

#[test]
fn non_finite_tap_rejected_with_index() {
    let err = quantize(
        &[0.5, f64::INFINITY],
        16,
        12,
        RoundMode::HalfAwayFromZero,
        true,
    )
    .unwrap_err();
    match err {
        FirError::NonFiniteCoefficient { index, value } => {
            assert_eq!(index, 1);
            assert!(value.is_infinite());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn q1_7_rejects_unity_gain_in_strict_mode() {
    // Q1.7 max is 127/128 = 0.9921875; 1.0 is not representable.
    let err = quantize(&[1.0], 8, 7, RoundMode::HalfAwayFromZero, true).unwrap_err();
    match err {
        FirError::CoefficientOutOfRange { index, max, .. } => {
            assert_eq!(index, 0);
            assert_eq!(max, 0.9921875);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_strict_clamps_instead_of_failing() {
    // 1.25 * 128 = 160 rounds past the Q1.7 ceiling and clamps to 127.
    let q = quantize(
        &[-0.125, 1.25, -0.125],
        8,
        7,
        RoundMode::HalfAwayFromZero,
        false,
    )
    .unwrap();
    assert_eq!(q.values, vec![-16, 127, -16]);
}

#[test]
fn unsupported_coeff_width() {
    let err = quantize(&[0.5], 24, 12, RoundMode::HalfAwayFromZero, true).unwrap_err();
    assert!(matches!(err, FirError::UnsupportedCoeffWidth { bits: 24 }));
}

#[test]
fn tie_break_policies_differ_only_on_ties() {
    // 2.5/4096 scales to exactly 2.5: away-from-zero gives 3, to-even gives 2.
    let t = 2.5 / 4096.0;
    let away = quantize(&[t, -t], 16, 12, RoundMode::HalfAwayFromZero, true).unwrap();
    let even = quantize(&[t, -t], 16, 12, RoundMode::HalfToEven, true).unwrap();
    assert_eq!(away.values, vec![3, -3]);
    assert_eq!(even.values, vec![2, -2]);

    // Off a tie, the two policies agree.
    let away = quantize(&[0.3, -0.7], 16, 12, RoundMode::HalfAwayFromZero, true).unwrap();
    let even = quantize(&[0.3, -0.7], 16, 12, RoundMode::HalfToEven, true).unwrap();
    assert_eq!(away.values, even.values);
}

#[test]
fn quantization_error_within_half_lsb() {
    let taps = [0.1, -0.37, 0.999, -0.51, 1.0 / 3.0, 0.0001];
    for frac_bits in [7u32, 12, 15] {
        let q = quantize(&taps, 32, frac_bits, RoundMode::HalfAwayFromZero, true).unwrap();
        let scale = (1u64 << frac_bits) as f64;
        let half_lsb = 0.5 / scale;
        for (t, code) in taps.iter().zip(q.values.iter()) {
            let err = (t - *code as f64 / scale).abs();
            assert!(
                err <= half_lsb + 1e-15,
                "frac_bits={frac_bits} tap={t} code={code} err={err}"
            );
        }
    }
}
