//! Mathematical utilities shared by the pattern builders

/// Seeded scalar noise used as the only jitter source
pub mod noise;
/// Planar points, rotations and distance helpers
pub mod transform;
