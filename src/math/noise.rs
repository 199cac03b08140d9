//! Seeded scalar noise
//!
//! The classic shader hash `fract(sin(x) * 10000)`. It is neither uniform nor
//! cryptographic, but equal inputs always produce bit-identical outputs,
//! which is all the builders rely on.

const SINE_SCALE: f64 = 10_000.0;

/// Map a real seed to a reproducible value in `[0, 1)`
///
/// Non-finite input yields `0.0`.
pub fn noise(x: f64) -> f64 {
    let scaled = x.sin() * SINE_SCALE;
    if !scaled.is_finite() {
        return 0.0;
    }

    let fractional = scaled - scaled.floor();
    // Tiny negative products can round the fractional part up to exactly 1.0
    if fractional >= 1.0 { 0.0 } else { fractional }
}

/// Noise recentred to `[-0.5, 0.5)`
pub fn centered_noise(x: f64) -> f64 {
    noise(x) - 0.5
}
