//! Seed and parameter update policies
//!
//! `fresh_seed` reshuffles a pattern completely while `nudged_seed` keeps it
//! recognisable. The remaining policies rewrite several parameters at once.

use crate::color::{ColorMode, Hsl, Palette, Rgb};
use crate::geometry::parameters::{PatternParameters, Symmetry, auto_line_width};
use crate::io::configuration::{
    MUTATION_AMOUNT, MUTATION_AMPLITUDE_RANGE, MUTATION_COMPLEXITY_RANGE, MUTATION_FREQUENCY_RANGE,
    MUTATION_ROTATION_SPAN, RANDOM_AMPLITUDE_RANGE, RANDOM_BLACK_PROBABILITY,
    RANDOM_COMPLEXITY_RANGE, RANDOM_FREQUENCY_RANGE, ROTATION_RANGE, VARIATION_SEED_STEP,
};
use rand::Rng;

/// Uniform seed in `[0, 1)`
pub fn fresh_seed(rng: &mut impl Rng) -> f64 {
    rng.random::<f64>()
}

/// Seed one small step away from `seed`
pub const fn nudged_seed(seed: f64) -> f64 {
    seed + VARIATION_SEED_STEP
}

/// Factory defaults with a fresh seed
pub fn reset(rng: &mut impl Rng) -> PatternParameters {
    PatternParameters {
        seed: fresh_seed(rng),
        ..PatternParameters::default()
    }
}

/// Every parameter rerolled except the pattern kind
///
/// Amplitude may come out negative, which mirrors the displacement. Colors
/// are black with probability 0.3, otherwise a custom gradient between two
/// contrasting random hues. The single custom color survives.
pub fn randomized(current: &PatternParameters, rng: &mut impl Rng) -> PatternParameters {
    let complexity = rng.random_range(RANDOM_COMPLEXITY_RANGE.0..=RANDOM_COMPLEXITY_RANGE.1);
    let frequency = rng.random_range(RANDOM_FREQUENCY_RANGE.0..=RANDOM_FREQUENCY_RANGE.1);
    let amplitude = rng
        .random_range(RANDOM_AMPLITUDE_RANGE.0..=RANDOM_AMPLITUDE_RANGE.1)
        .round();
    let rotation = rng.random_range(ROTATION_RANGE.0..=ROTATION_RANGE.1).round();
    let fold = rng.random_range(0..=Symmetry::FOLDS.len());
    let symmetry = Symmetry::FOLDS
        .get(fold)
        .map_or(Symmetry::None, |&n| Symmetry::Fold(n));

    let (color_mode, palette) = if rng.random_bool(RANDOM_BLACK_PROBABILITY) {
        (ColorMode::Black, current.palette)
    } else {
        let (gradient_start, gradient_end) = contrasting_pair(rng);
        (
            ColorMode::CustomGradient,
            Palette {
                gradient_start,
                gradient_end,
                ..current.palette
            },
        )
    };

    PatternParameters {
        kind: current.kind,
        complexity,
        line_width: auto_line_width(complexity),
        frequency,
        amplitude,
        rotation,
        color_mode,
        palette,
        symmetry,
        seed: fresh_seed(rng),
    }
}

/// Two vivid colors either complementary or 90 to 270 degrees apart in hue
pub fn contrasting_pair(rng: &mut impl Rng) -> (Rgb, Rgb) {
    let first_hue = f64::from(rng.random_range(0..360_u16));
    let offset = if rng.random_bool(0.5) {
        180.0
    } else {
        f64::from(rng.random_range(90..270_u16))
    };
    (vivid(first_hue, rng), vivid(first_hue + offset, rng))
}

fn vivid(hue: f64, rng: &mut impl Rng) -> Rgb {
    let saturation = rng.random_range(75.0..100.0);
    let lightness = rng.random_range(45.0..60.0);
    Hsl::new(hue, saturation, lightness).to_rgb()
}

/// Small multiplicative jitter of the numeric parameters with a fresh seed
///
/// Complexity, frequency and amplitude scale by up to 20% either way;
/// rotation shifts by up to 45 degrees. Kind, colors, symmetry and line
/// width are kept.
pub fn mutated(current: &PatternParameters, rng: &mut impl Rng) -> PatternParameters {
    let mut scale = || 1.0 + rng.random_range(-MUTATION_AMOUNT..=MUTATION_AMOUNT);

    let complexity = (f64::from(current.complexity) * scale()).round().clamp(
        f64::from(MUTATION_COMPLEXITY_RANGE.0),
        f64::from(MUTATION_COMPLEXITY_RANGE.1),
    ) as u32;
    let frequency = (f64::from(current.frequency) * scale()).round().clamp(
        f64::from(MUTATION_FREQUENCY_RANGE.0),
        f64::from(MUTATION_FREQUENCY_RANGE.1),
    ) as u32;
    let amplitude = (current.amplitude * scale())
        .round()
        .clamp(MUTATION_AMPLITUDE_RANGE.0, MUTATION_AMPLITUDE_RANGE.1);

    let half_span = MUTATION_ROTATION_SPAN / 2.0;
    let rotation = (current.rotation + rng.random_range(-half_span..=half_span))
        .round()
        .clamp(ROTATION_RANGE.0, ROTATION_RANGE.1);

    PatternParameters {
        complexity,
        frequency,
        amplitude,
        rotation,
        seed: fresh_seed(rng),
        ..*current
    }
}
