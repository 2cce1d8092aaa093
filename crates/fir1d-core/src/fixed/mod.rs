pub mod qformat;
pub mod round;
pub mod wrap;
