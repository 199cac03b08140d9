//! Command-line front-end: configure a pattern, generate it and its
//! variations, then export and optionally save

use crate::color::{ColorMode, Palette, Rgb};
use crate::geometry::parameters::{PatternKind, PatternParameters, Symmetry, auto_line_width};
use crate::io::configuration::{
    DEFAULT_AMPLITUDE, DEFAULT_BASE_SIZE, DEFAULT_COMPLEXITY, DEFAULT_FREQUENCY,
    DEFAULT_STORE_FILE,
};
use crate::io::error::{
    EngineError, PersistenceFailure, Result, file_system_error, persistence_error,
};
use crate::io::notification::Notifier;
use crate::io::persistence::{JsonFileStore, PatternStore};
use crate::io::progress::ExportProgress;
use crate::io::raster::{RasterFormat, export_raster};
use crate::io::svg::export_svg;
use crate::scene::variation::fresh_seed;
use crate::scene::{AspectRatio, CanvasSelection, Engine, Scene};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output file kinds accepted by `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Vector document
    Svg,
    /// Raster image
    Raster(RasterFormat),
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => f.write_str("svg"),
            Self::Raster(format) => write!(f, "{format}"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "svg" {
            Ok(Self::Svg)
        } else {
            s.parse().map(Self::Raster)
        }
    }
}

#[derive(Parser)]
#[command(name = "op-art")]
#[command(
    author,
    version,
    about = "Generate optical-art line patterns and export them as SVG, PNG or JPEG"
)]
/// Command-line arguments for the pattern generator
// Mode switches are independent user choices
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern to draw
    #[arg(short, long, default_value_t = PatternKind::default())]
    pub pattern: PatternKind,

    /// Number of rings, lines or rays
    #[arg(short, long, default_value_t = DEFAULT_COMPLEXITY)]
    pub complexity: u32,

    /// Stroke width in millimetres (default: derived from complexity)
    #[arg(short, long)]
    pub line_width: Option<f64>,

    /// Wave cycles
    #[arg(short, long, default_value_t = DEFAULT_FREQUENCY)]
    pub frequency: u32,

    /// Displacement strength in millimetres
    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    pub amplitude: f64,

    /// Group rotation in degrees
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rotation: f64,

    /// Line coloring: black, single, gradient, rainbow, hue-shift, custom-gradient or artistic
    #[arg(short = 'm', long, default_value_t = ColorMode::default())]
    pub color_mode: ColorMode,

    /// Line color for the single color mode
    #[arg(long, default_value_t = Palette::default().custom)]
    pub color: Rgb,

    /// First color of the custom gradient
    #[arg(long, default_value_t = Palette::default().gradient_start)]
    pub gradient_start: Rgb,

    /// Last color of the custom gradient
    #[arg(long, default_value_t = Palette::default().gradient_end)]
    pub gradient_end: Rgb,

    /// Rotational symmetry: none, 2, 4, 6, 8 or 12
    #[arg(long, default_value_t = Symmetry::default())]
    pub symmetry: Symmetry,

    /// Canvas aspect ratio: 1:1, 16:9, 9:16, 3:4, 4:3, 2:3, 3:2 or custom
    #[arg(long, default_value_t = AspectRatio::default())]
    pub ratio: AspectRatio,

    /// Larger canvas side in millimetres
    #[arg(long, default_value_t = DEFAULT_BASE_SIZE)]
    pub size: f64,

    /// Noise seed (default: random)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// Extra scenes, each one seed step further
    #[arg(short, long, default_value_t = 0)]
    pub variations: usize,

    /// Reroll every parameter except the pattern before generating
    #[arg(long)]
    pub randomize: bool,

    /// Jitter the numeric parameters before generating
    #[arg(long)]
    pub mutate: bool,

    /// Output format: svg, png, jpeg or transparent-png (repeatable)
    #[arg(short = 'F', long = "format")]
    pub formats: Vec<ExportFormat>,

    /// Directory receiving the exported files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Save the first generated pattern under this name
    #[arg(long)]
    pub save: Option<String>,

    /// Regenerate a saved pattern instead of using the pattern flags
    #[arg(long, conflicts_with = "random_saved")]
    pub load: Option<String>,

    /// Regenerate a randomly chosen saved pattern
    #[arg(long)]
    pub random_saved: bool,

    /// File holding saved patterns
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Print saved pattern names and exit
    #[arg(long)]
    pub list: bool,

    /// Delete a saved pattern and exit
    #[arg(long)]
    pub delete: Option<String>,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parameters described by the pattern flags, with a seed drawn if none was given
    pub fn parameters(&self, rng: &mut impl rand::Rng) -> PatternParameters {
        PatternParameters {
            kind: self.pattern,
            complexity: self.complexity,
            line_width: self
                .line_width
                .unwrap_or_else(|| auto_line_width(self.complexity)),
            frequency: self.frequency,
            amplitude: self.amplitude,
            rotation: self.rotation,
            color_mode: self.color_mode,
            palette: Palette {
                custom: self.color,
                gradient_start: self.gradient_start,
                gradient_end: self.gradient_end,
            },
            symmetry: self.symmetry,
            seed: self.seed.unwrap_or_else(|| fresh_seed(rng)),
        }
    }

    /// Canvas described by `--ratio` and `--size`
    pub const fn canvas(&self) -> CanvasSelection {
        CanvasSelection {
            ratio: self.ratio,
            base_size: self.size,
        }
    }

    /// Requested formats, SVG when none was given
    pub fn export_formats(&self) -> Vec<ExportFormat> {
        if self.formats.is_empty() {
            vec![ExportFormat::Svg]
        } else {
            self.formats.clone()
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one command-line invocation against an engine and a pattern store
pub struct PatternRunner {
    cli: Cli,
    store: JsonFileStore,
}

impl PatternRunner {
    /// Runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        let store = JsonFileStore::new(&cli.store);
        Self { cli, store }
    }

    /// Carry out the invocation, reporting each completed step
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output path exists but is not a directory
    /// - A parameter or the canvas is invalid
    /// - A saved pattern is missing or the store is unreadable
    /// - An export or file write fails
    pub fn run(&mut self, notifier: &mut Notifier) -> Result<()> {
        if self.cli.list {
            return self.list_saved();
        }
        if let Some(name) = self.cli.delete.clone() {
            self.store.delete(&name)?;
            notifier.success(format!("Deleted pattern '{}'", name.trim()));
            return Ok(());
        }

        self.check_output_directory()?;
        let mut rng = rand::rng();
        let mut engine = Engine::new(self.cli.parameters(&mut rng), self.cli.canvas())?;
        self.prepare(&mut engine, &mut rng, notifier)?;

        let first = *engine.parameters();
        let mut scenes = vec![engine.exportable_scene()?.clone()];
        for _ in 0..self.cli.variations {
            scenes.push(engine.nudge_variation()?.clone());
        }

        self.export_all(&scenes, notifier)?;

        // The first scene is the one saved, variations are export-only
        if let (Some(name), Some(scene)) = (&self.cli.save, scenes.first()) {
            self.store.save(name, &first, engine.canvas(), scene)?;
            notifier.success(format!("Saved pattern '{}'", name.trim()));
        }
        Ok(())
    }

    /// Generate the first scene from flags, a saved record or a policy
    fn prepare(
        &self,
        engine: &mut Engine,
        rng: &mut impl rand::Rng,
        notifier: &mut Notifier,
    ) -> Result<()> {
        if let Some(name) = &self.cli.load {
            let record = self.store.load(name)?;
            engine.restore(record.parameters, record.canvas)?;
            notifier.success(format!("Loaded pattern '{}'", record.name));
        } else if self.cli.random_saved {
            let record = self.store.load_random(rng)?.ok_or_else(|| {
                persistence_error(
                    &self.store.path().display().to_string(),
                    PersistenceFailure::NotFound,
                )
            })?;
            engine.restore(record.parameters, record.canvas)?;
            notifier.success(format!("Loaded random pattern '{}'", record.name));
        } else if self.cli.randomize {
            engine.randomize_all(rng)?;
        } else {
            engine.generate()?;
        }

        if self.cli.mutate {
            engine.mutate(rng)?;
        }
        Ok(())
    }

    fn export_all(&self, scenes: &[Scene], notifier: &mut Notifier) -> Result<()> {
        let formats = self.cli.export_formats();
        let total = scenes.len() * formats.len();
        let progress = if self.cli.should_show_progress() {
            ExportProgress::new(total)
        } else {
            ExportProgress::hidden()
        };

        let timestamp = Utc::now();
        for (index, scene) in scenes.iter().enumerate() {
            for &format in &formats {
                let (filename, bytes) = export(scene, format, timestamp)?;
                let filename = numbered(&filename, index);
                progress.start(&filename);
                write_export(&self.cli.output, &filename, &bytes)?;
                progress.complete();
            }
        }
        progress.finish();

        notifier.success(format!(
            "Exported {total} file(s) to {}",
            self.cli.output.display()
        ));
        Ok(())
    }

    // Listing is the command's output, not a log line
    #[allow(clippy::print_stdout)]
    fn list_saved(&self) -> Result<()> {
        for name in self.store.list_names()? {
            println!("{name}");
        }
        Ok(())
    }

    fn check_output_directory(&self) -> Result<()> {
        let output = &self.cli.output;
        if output.exists() && !output.is_dir() {
            return Err(EngineError::Initialization {
                reason: format!("output path '{}' is not a directory", output.display()),
            });
        }
        Ok(())
    }
}

/// File name and encoded contents of one export
///
/// # Errors
///
/// Returns the exporter's error
pub fn export(
    scene: &Scene,
    format: ExportFormat,
    timestamp: DateTime<Utc>,
) -> Result<(String, Vec<u8>)> {
    match format {
        ExportFormat::Svg => {
            let document = export_svg(scene, timestamp)?;
            Ok((document.filename, document.contents.into_bytes()))
        }
        ExportFormat::Raster(raster_format) => {
            let image = export_raster(scene, raster_format, timestamp)?;
            Ok((image.filename, image.bytes))
        }
    }
}

/// Tag a variation's file name with its index; the first scene keeps its name
pub fn numbered(filename: &str, index: usize) -> String {
    if index == 0 {
        return filename.to_string();
    }
    match filename.rsplit_once('.') {
        Some((stem, extension)) => format!("{stem}-v{index}.{extension}"),
        None => format!("{filename}-v{index}"),
    }
}

/// Write `bytes` to `directory/filename`, creating the directory if needed
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created or the file written
pub fn write_export(directory: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .map_err(file_system_error(directory, "create output directory"))?;
    let path = directory.join(filename);
    std::fs::write(&path, bytes).map_err(file_system_error(&path, "write export"))?;
    Ok(path)
}
