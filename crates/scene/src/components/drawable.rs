use foundation::math::Vec3;

use super::Color;

/// Opaque drawable handed to the scene; the render loop decides how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// Small sphere centered at `position`.
    Marker {
        position: Vec3,
        size: f64,
        color: Color,
    },
    /// Polyline through `vertices` in order.
    Line { vertices: Vec<Vec3>, color: Color },
    /// Globe mesh centered at the origin.
    Globe { radius: f64 },
}

impl Drawable {
    pub fn marker(position: Vec3, size: f64, color: Color) -> Self {
        Self::Marker {
            position,
            size,
            color,
        }
    }

    pub fn line(vertices: Vec<Vec3>, color: Color) -> Self {
        Self::Line { vertices, color }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Drawable::Marker { color, .. } | Drawable::Line { color, .. } => Some(*color),
            Drawable::Globe { .. } => None,
        }
    }
}
