//! Immutable vector primitives
//!
//! Builders emit these and nothing else. A primitive is never mutated after
//! construction; derived copies (for symmetry) are built with the `with_*`
//! methods, which consume and return by value.

use crate::color::Color;
use crate::math::transform::Point;
use serde::{Deserialize, Serialize};

/// Geometric outline of a primitive, in physical canvas units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Circle by center and radius
    Circle {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Radius
        r: f64,
    },
    /// Axis-aligned ellipse by center and radii
    Ellipse {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
    },
    /// Straight segment
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
    },
    /// Axis-aligned rectangle by top-left corner and size
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        w: f64,
        /// Height
        h: f64,
    },
    /// Polyline through ordered vertices
    Path {
        /// Vertices in drawing order
        points: Vec<Point>,
        /// Whether the last vertex connects back to the first
        closed: bool,
    },
}

impl Shape {
    /// Line between two points
    pub const fn line(from: Point, to: Point) -> Self {
        Self::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }

    /// Rectangle centred on `center`
    pub fn centered_square(center: Point, side: f64) -> Self {
        Self::Rect {
            x: center.x - side / 2.0,
            y: center.y - side / 2.0,
            w: side,
            h: side,
        }
    }

    /// Open polyline
    pub const fn polyline(points: Vec<Point>) -> Self {
        Self::Path {
            points,
            closed: false,
        }
    }

    /// Every coordinate of the shape, for tolerance comparisons
    pub fn coordinates(&self) -> Vec<f64> {
        match self {
            Self::Circle { cx, cy, r } => vec![*cx, *cy, *r],
            Self::Ellipse { cx, cy, rx, ry } => vec![*cx, *cy, *rx, *ry],
            Self::Line { x1, y1, x2, y2 } => vec![*x1, *y1, *x2, *y2],
            Self::Rect { x, y, w, h } => vec![*x, *y, *w, *h],
            Self::Path { points, .. } => points.iter().flat_map(|p| [p.x, p.y]).collect(),
        }
    }

    /// Short element name, matching the SVG tag it exports to
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Line { .. } => "line",
            Self::Rect { .. } => "rect",
            Self::Path { .. } => "path",
        }
    }
}

/// Rotation transform applied around a pivot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Angle in degrees, clockwise on screen
    pub degrees: f64,
    /// Pivot point
    pub pivot: Point,
}

/// A stroked and optionally filled shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    /// Outline geometry
    pub shape: Shape,
    /// Stroke color, `None` for no stroke
    pub stroke: Option<Color>,
    /// Stroke width in physical units
    pub stroke_width: f64,
    /// Fill color, `None` for no fill
    pub fill: Option<Color>,
    /// Optional rotation transform
    pub rotation: Option<Rotation>,
}

impl Primitive {
    /// Stroked, unfilled, unrotated primitive
    pub const fn stroked(shape: Shape, stroke: Color, stroke_width: f64) -> Self {
        Self {
            shape,
            stroke: Some(stroke),
            stroke_width,
            fill: None,
            rotation: None,
        }
    }

    /// Filled primitive without stroke
    pub const fn filled(shape: Shape, fill: Color) -> Self {
        Self {
            shape,
            stroke: None,
            stroke_width: 0.0,
            fill: Some(fill),
            rotation: None,
        }
    }

    /// Same primitive rotated by `degrees` about `pivot`
    ///
    /// A zero angle leaves the primitive unrotated. Angles add up when the
    /// primitive is already rotated; builders only pivot on the canvas center.
    #[must_use]
    pub fn with_rotation(mut self, degrees: f64, pivot: Point) -> Self {
        let total = self.rotation.map_or(0.0, |r| r.degrees) + degrees;
        self.rotation = if crate::math::transform::is_zero_angle(total) {
            None
        } else {
            Some(Rotation {
                degrees: total,
                pivot,
            })
        };
        self
    }

    /// Same primitive with a different stroke width
    #[must_use]
    pub const fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}
