//! Random number sources for password generation.

mod source;

pub use source::Source;

/// Estimated password entropy in bits for `length` draws from `pool_size` characters.
pub fn estimate_bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

/// Strength label for an entropy estimate.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}
