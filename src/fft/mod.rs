pub mod bitrev;
mod core;

pub use self::core::{Direction, Fft, DEFAULT_ACCURACY};
pub use self::bitrev::{ilog2, permute_in_place, reverse_bits};
