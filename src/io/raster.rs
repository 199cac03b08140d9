//! Raster export: the SVG document is loaded back as an image resource with
//! `resvg`, then encoded as PNG or JPEG
//!
//! Loading the document is the single step that can fail before any bytes
//! are produced; encoding only starts once it has succeeded.

use crate::color::Rgb;
use crate::color::model::trim_float;
use crate::io::configuration::{
    FILENAME_PREFIX, JPEG_QUALITY, MAX_RASTER_DIMENSION, RASTER_OVERSAMPLE, RASTER_SCALE_FACTOR,
    TIMESTAMP_FORMAT,
};
use crate::io::error::{EngineError, Result, export_precondition, resource_load};
use crate::io::svg::render_svg;
use crate::scene::{CanvasExtent, Scene};
use chrono::{DateTime, Utc};
use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};
use resvg::tiny_skia::{self, Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Raster output flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    /// PNG on a white background
    Png,
    /// JPEG on a white background
    Jpeg,
    /// PNG with no background fill
    TransparentPng,
}

impl RasterFormat {
    /// Every format
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpeg, Self::TransparentPng];

    /// Selector name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::TransparentPng => "transparent-png",
        }
    }

    /// File extension
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png | Self::TransparentPng => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Background painted before the primitives, `None` for transparent
    pub const fn background(self) -> Option<Rgb> {
        match self {
            Self::Png | Self::Jpeg => Some(Rgb::WHITE),
            Self::TransparentPng => None,
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RasterFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "transparent-png" => Ok(Self::TransparentPng),
            other => Err(export_precondition(&format!(
                "unsupported raster format '{other}'"
            ))),
        }
    }
}

/// Encoded raster export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Suggested file name
    pub filename: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// Encoded file contents
    pub bytes: Vec<u8>,
}

/// Pixels per physical unit of raster exports
pub const fn raster_scale() -> f64 {
    (RASTER_SCALE_FACTOR * RASTER_OVERSAMPLE) as f64
}

/// Pixel size of a raster export of `extent`
pub fn raster_dimensions(extent: &CanvasExtent) -> (u32, u32) {
    let scale = raster_scale();
    (
        (extent.width * scale).round() as u32,
        (extent.height * scale).round() as u32,
    )
}

/// `optical-art-{kind}-{mode}-{w}x{h}mm-[transparent-]{timestamp}.{ext}`
pub fn raster_filename(scene: &Scene, format: RasterFormat, timestamp: DateTime<Utc>) -> String {
    let variant = if format == RasterFormat::TransparentPng {
        "transparent-"
    } else {
        ""
    };
    format!(
        "{FILENAME_PREFIX}-{}-{}-{}x{}mm-{variant}{}.{}",
        scene.kind,
        scene.color_mode,
        trim_float(scene.extent.width),
        trim_float(scene.extent.height),
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// Rasterize and encode a scene
///
/// # Errors
///
/// Returns an error if:
/// - The scene has no primitives (`ExportPrecondition`)
/// - The scene cannot be loaded as an image (`ResourceLoad`)
/// - The encoder fails (`ImageEncode`)
pub fn export_raster(
    scene: &Scene,
    format: RasterFormat,
    timestamp: DateTime<Utc>,
) -> Result<RasterImage> {
    let scene = scene.ensure_exportable()?;
    let image = load_scene_image(scene, format.background())?;
    let bytes = encode(&image, format)?;

    let raster = RasterImage {
        filename: raster_filename(scene, format, timestamp),
        width: image.width(),
        height: image.height(),
        bytes,
    };
    info!(
        filename = %raster.filename,
        width = raster.width,
        height = raster.height,
        bytes = raster.bytes.len(),
        "Exported raster image"
    );
    Ok(raster)
}

/// Load a scene as an image at the export scale
///
/// The scene is serialized with the SVG writer and that document is what
/// gets rasterized, so raster and vector exports always agree.
///
/// # Errors
///
/// Returns `ResourceLoad` if the pixel size is zero or exceeds the raster
/// limit, or the document cannot be loaded
pub fn load_scene_image(scene: &Scene, background: Option<Rgb>) -> Result<RgbaImage> {
    let (width, height) = raster_dimensions(&scene.extent);
    if width == 0 || height == 0 {
        return Err(resource_load(&format!(
            "scene rasterizes to an empty {width}x{height} image"
        )));
    }
    if width > MAX_RASTER_DIMENSION || height > MAX_RASTER_DIMENSION {
        return Err(resource_load(&format!(
            "{width}x{height} pixels exceeds the {MAX_RASTER_DIMENSION} pixel limit"
        )));
    }

    let image = load_svg_image(&render_svg(scene), width, height, background)?;
    debug!(width, height, primitives = scene.len(), "Rasterized scene");
    Ok(image)
}

/// Rasterize an SVG document stretched to `width` x `height` pixels
///
/// `background` is painted first; `None` leaves the canvas transparent.
///
/// # Errors
///
/// Returns `ResourceLoad` if the document does not parse or the pixel
/// buffer cannot be allocated
pub fn load_svg_image(
    document: &str,
    width: u32,
    height: u32,
    background: Option<Rgb>,
) -> Result<RgbaImage> {
    let tree = Tree::from_str(document, &Options::default())
        .map_err(|err| resource_load(&format!("scene document did not load: {err}")))?;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| resource_load(&format!("cannot allocate a {width}x{height} pixmap")))?;

    if let Some(rgb) = background {
        pixmap.fill(tiny_skia::Color::from_rgba8(rgb.r, rgb.g, rgb.b, 255));
    }
    let size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // Pixmaps hold premultiplied alpha, image buffers straight alpha
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();
    RgbaImage::from_raw(width, height, pixels)
        .ok_or_else(|| resource_load(&format!("pixel buffer does not fit {width}x{height}")))
}

fn encode(image: &RgbaImage, format: RasterFormat) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let written = match format {
        RasterFormat::Png | RasterFormat::TransparentPng => PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        ),
        RasterFormat::Jpeg => {
            let opaque: RgbImage = image.convert();
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY).write_image(
                opaque.as_raw(),
                opaque.width(),
                opaque.height(),
                ExtendedColorType::Rgb8,
            )
        }
    };
    written.map_err(|source| EngineError::ImageEncode {
        format: format.as_str(),
        source,
    })?;
    Ok(bytes)
}
