/// Command-line front-end
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation, export and persistence
pub mod error;
/// Auto-dismissing user messages
pub mod notification;
/// Named pattern records in a keyed store
pub mod persistence;
/// Progress display for batch exports
pub mod progress;
/// Raster export to PNG and JPEG
pub mod raster;
/// SVG document writer
pub mod svg;
