//! SVG document writer
//!
//! The document is sized in millimetres with a viewBox in the same physical
//! units, so one user unit is one millimetre when printed or cut.

use crate::color::model::trim_float;
use crate::geometry::primitive::{Primitive, Shape};
use crate::io::configuration::{FILENAME_PREFIX, TIMESTAMP_FORMAT};
use crate::io::error::Result;
use crate::scene::Scene;
use chrono::{DateTime, Utc};
use std::fmt::Write;
use tracing::info;

/// A serialized vector document ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    /// Suggested file name
    pub filename: String,
    /// Document text
    pub contents: String,
}

/// Serialize a scene as a standalone SVG document
///
/// # Errors
///
/// Returns `ExportPrecondition` if the scene has no primitives
pub fn export_svg(scene: &Scene, timestamp: DateTime<Utc>) -> Result<SvgDocument> {
    let scene = scene.ensure_exportable()?;
    let document = SvgDocument {
        filename: svg_filename(scene, timestamp),
        contents: render_svg(scene),
    };
    info!(
        filename = %document.filename,
        bytes = document.contents.len(),
        "Exported SVG"
    );
    Ok(document)
}

/// `optical-art-{kind}-{w}x{h}mm-{timestamp}.svg`
pub fn svg_filename(scene: &Scene, timestamp: DateTime<Utc>) -> String {
    format!(
        "{FILENAME_PREFIX}-{}-{}x{}mm-{}.svg",
        scene.kind,
        trim_float(scene.extent.width),
        trim_float(scene.extent.height),
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Document text for a scene, primitives in drawing order
pub fn render_svg(scene: &Scene) -> String {
    let width = trim_float(scene.extent.width);
    let height = trim_float(scene.extent.height);

    let mut body = String::new();
    for primitive in &scene.primitives {
        body.push_str("  ");
        body.push_str(&primitive_element(primitive));
        body.push('\n');
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{width}mm" height="{height}mm" viewBox="0 0 {width} {height}">
{body}</svg>
"#
    )
}

/// One self-closing element with geometry, paint and transform attributes
pub fn primitive_element(primitive: &Primitive) -> String {
    let mut element = format!("<{}", primitive.shape.tag());
    match &primitive.shape {
        Shape::Circle { cx, cy, r } => {
            push_attributes(&mut element, &[("cx", *cx), ("cy", *cy), ("r", *r)]);
        }
        Shape::Ellipse { cx, cy, rx, ry } => push_attributes(
            &mut element,
            &[("cx", *cx), ("cy", *cy), ("rx", *rx), ("ry", *ry)],
        ),
        Shape::Line { x1, y1, x2, y2 } => push_attributes(
            &mut element,
            &[("x1", *x1), ("y1", *y1), ("x2", *x2), ("y2", *y2)],
        ),
        Shape::Rect { x, y, w, h } => push_attributes(
            &mut element,
            &[("x", *x), ("y", *y), ("width", *w), ("height", *h)],
        ),
        Shape::Path { points, closed } => {
            let mut data = points
                .iter()
                .enumerate()
                .map(|(i, point)| {
                    let command = if i == 0 { 'M' } else { 'L' };
                    format!("{command} {} {}", trim_float(point.x), trim_float(point.y))
                })
                .collect::<Vec<_>>()
                .join(" ");
            if *closed {
                data.push_str(" Z");
            }
            let _ = write!(element, r#" d="{data}""#);
        }
    }

    let fill = primitive
        .fill
        .map_or_else(|| "none".to_string(), |color| color.svg_paint());
    let _ = write!(element, r#" fill="{fill}""#);

    match primitive.stroke {
        Some(color) => {
            let _ = write!(
                element,
                r#" stroke="{}" stroke-width="{}""#,
                color.svg_paint(),
                trim_float(primitive.stroke_width)
            );
        }
        None => element.push_str(r#" stroke="none""#),
    }

    if let Some(rotation) = primitive.rotation {
        let _ = write!(
            element,
            r#" transform="rotate({} {} {})""#,
            trim_float(rotation.degrees),
            trim_float(rotation.pivot.x),
            trim_float(rotation.pivot.y)
        );
    }

    element.push_str("/>");
    element
}

fn push_attributes(element: &mut String, attributes: &[(&str, f64)]) {
    for (name, value) in attributes {
        let _ = write!(element, r#" {name}="{}""#, trim_float(*value));
    }
}
