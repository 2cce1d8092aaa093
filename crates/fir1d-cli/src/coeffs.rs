// crates/fir1d-cli/src/coeffs.rs

/// Built-in coefficient sets used by the batch generators, one family per
/// tap count. These are the sets the hardware testbench sweeps.
pub const SETS_3TAP: [(&str, [f64; 3]); 4] = [
    ("moving_avg", [1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0]),
    ("simple_lp", [0.25, 0.5, 0.25]),
    ("edge", [-1.0, 0.0, 1.0]),
    ("sharpen", [-0.125, 1.25, -0.125]),
];

pub const SETS_5TAP: [(&str, [f64; 5]); 4] = [
    ("moving_avg", [0.2, 0.2, 0.2, 0.2, 0.2]),
    (
        "simple_lp",
        [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0],
    ),
    (
        "edge",
        [-1.0 / 8.0, -2.0 / 8.0, 0.0, 2.0 / 8.0, 1.0 / 8.0],
    ),
    (
        "sharpen",
        [-1.0 / 16.0, -4.0 / 16.0, 26.0 / 16.0, -4.0 / 16.0, -1.0 / 16.0],
    ),
];

/// Look up a named set for a tap count.
pub fn find(taps: u32, name: &str) -> Option<Vec<f64>> {
    match taps {
        3 => SETS_3TAP
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, h)| h.to_vec()),
        5 => SETS_5TAP
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, h)| h.to_vec()),
        _ => None,
    }
}

/// All sets for a tap count, in sweep order.
pub fn all(taps: u32) -> Vec<(&'static str, Vec<f64>)> {
    match taps {
        3 => SETS_3TAP.iter().map(|(n, h)| (*n, h.to_vec())).collect(),
        5 => SETS_5TAP.iter().map(|(n, h)| (*n, h.to_vec())).collect(),
        _ => Vec::new(),
    }
}
