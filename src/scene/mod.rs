/// Scene assembly, engine state and single-flight generation
pub mod assembler;
/// Canvas sizing from aspect-ratio selectors
pub mod extent;
/// Rotational copies of a primitive list
pub mod symmetry;
/// Seed and parameter update policies
pub mod variation;

pub use assembler::{Engine, EngineState, GenerationJob, GenerationRequest, Scene};
pub use extent::{AspectRatio, CanvasExtent, CanvasSelection};
