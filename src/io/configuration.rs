//! Engine constants and runtime configuration defaults

use crate::color::Rgb;
use std::time::Duration;

// Canvas sizing
/// Display pixels per physical unit (millimetres at 96 DPI)
pub const PIXELS_PER_UNIT: f64 = 3.78;
/// Default base size in physical units for the larger canvas side
pub const DEFAULT_BASE_SIZE: f64 = 350.0;

// Raster export: wallpaper-quality output at 8 pixels per physical unit
/// Raster export scale factor
pub const RASTER_SCALE_FACTOR: u32 = 2;
/// Raster export oversampling on top of the scale factor
pub const RASTER_OVERSAMPLE: u32 = 4;
/// JPEG encoder quality (0-100)
pub const JPEG_QUALITY: u8 = 95;
/// Largest raster side accepted before export is refused
pub const MAX_RASTER_DIMENSION: u32 = 16_384;

// Export naming
/// Prefix shared by every exported filename
pub const FILENAME_PREFIX: &str = "optical-art";
/// Timestamp layout for filenames (ISO-8601 seconds, colons replaced)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

// Color mapping
/// Golden angle in degrees, used for rainbow hue steps
pub const GOLDEN_ANGLE_DEGREES: f64 = 137.507_764_050_037_85;

// Builder sampling resolution
/// Segments per wave displacement scan-line
pub const WAVE_SEGMENTS: usize = 200;
/// Segments per circular displacement scan-line
pub const CIRCULAR_SEGMENTS: usize = 150;
/// Segments per spiral ray
pub const SPIRAL_SEGMENTS: usize = 60;
/// Horizontal sample spacing of eye scan-lines, in physical units
pub const EYE_SAMPLE_STEP: f64 = 1.0;
/// Peak vertical displacement of the eye field, in physical units
pub const EYE_FIELD_STRENGTH: f64 = 40.0;

// Default parameter values
/// Default complexity (rings, lines or rays)
pub const DEFAULT_COMPLEXITY: u32 = 50;
/// Default wave frequency
pub const DEFAULT_FREQUENCY: u32 = 4;
/// Default displacement amplitude
pub const DEFAULT_AMPLITUDE: f64 = 20.0;
/// Seed increment applied by a variation nudge
pub const VARIATION_SEED_STEP: f64 = 0.1;

// Randomisation ranges
/// Complexity range for a full randomisation
pub const RANDOM_COMPLEXITY_RANGE: (u32, u32) = (10, 250);
/// Frequency range for a full randomisation
pub const RANDOM_FREQUENCY_RANGE: (u32, u32) = (5, 95);
/// Amplitude range for a full randomisation
pub const RANDOM_AMPLITUDE_RANGE: (f64, f64) = (-800.0, 800.0);
/// Rotation range for randomisation and mutation clamping
pub const ROTATION_RANGE: (f64, f64) = (-180.0, 180.0);
/// Probability that a full randomisation picks black lines
pub const RANDOM_BLACK_PROBABILITY: f64 = 0.3;
/// Relative jitter applied by a mutation
pub const MUTATION_AMOUNT: f64 = 0.2;
/// Complexity clamp for mutations
pub const MUTATION_COMPLEXITY_RANGE: (u32, u32) = (5, 300);
/// Frequency clamp for mutations
pub const MUTATION_FREQUENCY_RANGE: (u32, u32) = (1, 100);
/// Amplitude clamp for mutations
pub const MUTATION_AMPLITUDE_RANGE: (f64, f64) = (-1000.0, 1000.0);
/// Rotation jitter span for mutations, in degrees
pub const MUTATION_ROTATION_SPAN: f64 = 90.0;

// Artistic palettes
/// Yellow, blue, red, white and black after Stanczak's vibrations
pub const STANCZAK_VIBRATIONS: [Rgb; 5] = [
    Rgb::new(0xff, 0xc7, 0x00),
    Rgb::new(0x00, 0xa1, 0xe4),
    Rgb::new(0xe5, 0x00, 0x00),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x00, 0x00, 0x00),
];
/// Black, white and greys after Riley
pub const RILEY_COOL: [Rgb; 5] = [
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x7c, 0x7c, 0x7c),
    Rgb::new(0xa5, 0xa5, 0xa5),
    Rgb::new(0x59, 0x59, 0x59),
];
/// Grey into warm oranges after Albers' homages to the square
pub const ALBERS_HOMAGE: [Rgb; 5] = [
    Rgb::new(0xd9, 0xd9, 0xd9),
    Rgb::new(0xf2, 0xb7, 0x05),
    Rgb::new(0xf2, 0x9f, 0x05),
    Rgb::new(0xf2, 0x87, 0x05),
    Rgb::new(0xf2, 0x5c, 0x05),
];
/// Black and white after Vasarely's zebras
pub const VASARELY_ZEBRA: [Rgb; 2] = [Rgb::new(0x00, 0x00, 0x00), Rgb::new(0xff, 0xff, 0xff)];
/// Palettes the artistic color mode picks from by seed
pub const ARTISTIC_PALETTES: [&[Rgb]; 4] = [
    &STANCZAK_VIBRATIONS,
    &RILEY_COOL,
    &ALBERS_HOMAGE,
    &VASARELY_ZEBRA,
];

// Persistence
/// Default file backing the saved pattern store
pub const DEFAULT_STORE_FILE: &str = "optical-art-patterns.json";

// Notifications
/// How long a success message stays visible
pub const SUCCESS_DISPLAY_TIME: Duration = Duration::from_secs(3);
/// How long an error message stays visible
pub const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(5);

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
