// crates/fir1d-core/src/signal/mod.rs

pub mod normalize;
pub mod quantize;
