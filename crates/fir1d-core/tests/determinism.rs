use fir1d_core::config::FirConfig;
use fir1d_core::engine::{fixed, ideal};
use fir1d_core::signal::normalize::normalize;
use fir1d_core::signal::quantize::quantize;
use fir1d_core::stats::digest;
use fir1d_core::ConvMode;

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i * 7 % 256) as f64).collect()
}

#[test]
fn fixed_engine_is_a_pure_function() {
    let cfg = FirConfig::default();
    let x = ramp(512);
    let h = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

    let y1 = fixed::convolve_real(&x, &h, &cfg).unwrap();
    let y2 = fixed::convolve_real(&x, &h, &cfg).unwrap();
    assert_eq!(
        digest::fixed_vector_digest16(&y1),
        digest::fixed_vector_digest16(&y2)
    );
    assert_eq!(y1, y2);
}

#[test]
fn cached_taps_give_the_same_vectors_as_fresh_ones() {
    // QuantizedTaps depends only on taps + Q-format, so one quantization
    // may serve many rows.
    let cfg = FirConfig::default();
    let h = [-0.125, 1.25, -0.125];
    let cached = quantize(&h, cfg.coeff_bits, cfg.frac_bits, cfg.rounding, false).unwrap();

    for row in 0..8 {
        let x_raw: Vec<f64> = (0..64).map(|i| ((i * (row + 3)) % 256) as f64).collect();
        let x = normalize(&x_raw, cfg.data_bits).unwrap();
        let fresh = quantize(&h, cfg.coeff_bits, cfg.frac_bits, cfg.rounding, false).unwrap();
        assert_eq!(
            fixed::convolve(&x, &cached, &cfg).unwrap(),
            fixed::convolve(&x, &fresh, &cfg).unwrap()
        );
    }
}

#[test]
fn ideal_engine_is_deterministic() {
    let x = normalize(&ramp(256), 8).unwrap();
    let h = [0.25, 0.5, 0.25];
    let y1 = ideal::convolve(&x, &h, ConvMode::Centered).unwrap();
    let y2 = ideal::convolve(&x, &h, ConvMode::Centered).unwrap();
    assert_eq!(
        digest::ideal_vector_digest16(&y1),
        digest::ideal_vector_digest16(&y2)
    );
}

#[test]
fn digest_distinguishes_different_vectors() {
    assert_ne!(
        digest::fixed_vector_digest16(&[1, 2, 3]),
        digest::fixed_vector_digest16(&[1, 2, 4])
    );
    assert_ne!(
        digest::fixed_vector_digest16(&[]),
        digest::fixed_vector_digest16(&[0])
    );
}
