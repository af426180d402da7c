use scene::components::Color;

/// Route arcs sit above the globe mesh to avoid z-fighting.
pub const ROUTE_RADIUS: f64 = 1.01;
/// Cluster markers sit above route arcs so the two never overlap.
pub const CLUSTER_RADIUS: f64 = 1.02;

pub const CITY_MARKER_SIZE: f64 = 0.01;
pub const CLUSTER_MARKER_SIZE: f64 = 0.02;

pub const DIJKSTRA_COLOR: Color = Color::GREEN;
pub const TSP_COLOR: Color = Color::MAGENTA;

pub const DEFAULT_PALETTE: [Color; 10] = [
    Color(0xff0000),
    Color(0x00ff00),
    Color(0x0000ff),
    Color(0xffff00),
    Color(0xff00ff),
    Color(0x00ffff),
    Color(0xffa500),
    Color(0x800080),
    Color(0x008000),
    Color(0x000080),
];

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub size: f64,
    /// Projection radius; 1.0 is the globe surface.
    pub radius: f64,
}

impl MarkerStyle {
    pub const fn new(color: Color, size: f64, radius: f64) -> Self {
        Self {
            color,
            size,
            radius,
        }
    }

    pub const fn city() -> Self {
        Self::new(Color::RED, CITY_MARKER_SIZE, ROUTE_RADIUS)
    }

    pub const fn cluster() -> Self {
        Self::new(Color::WHITE, CLUSTER_MARKER_SIZE, CLUSTER_RADIUS)
    }
}

/// Cyclic palette lookup: `palette[index mod len]`, `None` for an empty palette.
pub fn palette_color(palette: &[Color], index: usize) -> Option<Color> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()])
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PALETTE, palette_color};
    use scene::components::Color;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(&DEFAULT_PALETTE, 0), Some(Color(0xff0000)));
        assert_eq!(palette_color(&DEFAULT_PALETTE, 9), Some(Color(0x000080)));
        assert_eq!(palette_color(&DEFAULT_PALETTE, 10), Some(Color(0xff0000)));
        assert_eq!(palette_color(&DEFAULT_PALETTE, 22), Some(Color(0x0000ff)));
        assert_eq!(palette_color(&DEFAULT_PALETTE, 23), Some(Color(0xffff00)));
    }

    #[test]
    fn empty_palette_has_no_color() {
        assert_eq!(palette_color(&[], 3), None);
    }
}
