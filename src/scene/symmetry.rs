use crate::geometry::parameters::Symmetry;
use crate::geometry::primitive::Primitive;
use crate::math::transform::Point;

/// Repeat `primitives` once per fold, copy `k` turned by `360 * k / n` degrees
///
/// Copies are emitted fold by fold, each in builder order, and the first
/// copy is the untouched input. `Symmetry::None` returns the input as is.
pub fn apply_symmetry(
    primitives: Vec<Primitive>,
    symmetry: Symmetry,
    pivot: Point,
) -> Vec<Primitive> {
    let copies = symmetry.copies();
    if copies <= 1 {
        return primitives;
    }

    let step = 360.0 / copies as f64;
    let mut mirrored = Vec::with_capacity(primitives.len() * copies);
    for k in 1..copies {
        let angle = step * k as f64;
        mirrored.extend(
            primitives
                .iter()
                .cloned()
                .map(|primitive| primitive.with_rotation(angle, pivot)),
        );
    }

    let mut all = primitives;
    all.extend(mirrored);
    all
}
