use foundation::math::project;
use routing::ClusterAssignment;
use scene::SceneSink;
use scene::components::{Color, Drawable};

use crate::overlay::{OverlayKind, OverlayRegistry};
use crate::symbology::{MarkerStyle, palette_color};

/// Highlights cluster members with one colored marker each.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClusterRenderer {
    /// `color` is only used when the palette is empty.
    pub style: MarkerStyle,
}

impl Default for ClusterRenderer {
    fn default() -> Self {
        Self {
            style: MarkerStyle::cluster(),
        }
    }
}

impl ClusterRenderer {
    pub fn new(style: MarkerStyle) -> Self {
        Self { style }
    }

    /// Returns the number of markers registered.
    pub fn render_clusters(
        &self,
        assignment: &ClusterAssignment,
        palette: &[Color],
        scene: &mut impl SceneSink,
        registry: &mut OverlayRegistry,
    ) -> usize {
        let mut markers = 0;
        for (position, cluster) in assignment.clusters.iter().enumerate() {
            let color = palette_color(palette, position).unwrap_or(self.style.color);
            for city in &cluster.cities {
                let at = project(city.coordinate(), self.style.radius);
                registry.attach(
                    scene,
                    OverlayKind::Marker,
                    Drawable::marker(at, self.style.size, color),
                );
                markers += 1;
            }
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::ClusterRenderer;
    use crate::overlay::{OverlayKind, OverlayRegistry};
    use crate::symbology::DEFAULT_PALETTE;
    use routing::{City, Cluster, ClusterAssignment};
    use scene::World;
    use scene::components::{Color, Drawable};

    fn city(id: i64, latitude: f64, longitude: f64) -> City {
        City {
            id,
            name: format!("city-{id}"),
            latitude,
            longitude,
        }
    }

    fn cluster(key: &str, cities: Vec<City>) -> Cluster {
        Cluster {
            key: key.to_string(),
            cities,
        }
    }

    fn marker_colors(world: &World) -> Vec<Color> {
        world
            .drawables()
            .into_iter()
            .filter_map(|(_, d)| match d {
                Drawable::Marker { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn two_clusters_of_two() {
        let assignment = ClusterAssignment::new(vec![
            cluster("0", vec![city(1, 10.0, 10.0), city(2, 12.0, 11.0)]),
            cluster("1", vec![city(3, -40.0, 150.0), city(4, -38.0, 145.0)]),
        ]);
        let mut world = World::new();
        let mut registry = OverlayRegistry::new();
        let n = ClusterRenderer::default().render_clusters(
            &assignment,
            &DEFAULT_PALETTE,
            &mut world,
            &mut registry,
        );

        assert_eq!(n, 4);
        assert_eq!(registry.count(OverlayKind::Marker), 4);
        let colors = marker_colors(&world);
        assert_eq!(
            colors,
            vec![
                DEFAULT_PALETTE[0],
                DEFAULT_PALETTE[0],
                DEFAULT_PALETTE[1],
                DEFAULT_PALETTE[1]
            ]
        );
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn markers_sit_at_cluster_radius() {
        let assignment = ClusterAssignment::new(vec![cluster("0", vec![city(1, 90.0, 0.0)])]);
        let mut world = World::new();
        let mut registry = OverlayRegistry::new();
        ClusterRenderer::default().render_clusters(
            &assignment,
            &DEFAULT_PALETTE,
            &mut world,
            &mut registry,
        );

        let drawables = world.drawables();
        let Drawable::Marker { position, size, .. } = drawables[0].1 else {
            panic!("expected a marker");
        };
        assert!((position.y - 1.02).abs() < 1e-9);
        assert_eq!(*size, 0.02);
    }

    #[test]
    fn palette_wraps_after_its_length() {
        let clusters = (0..12)
            .map(|i| cluster(&i.to_string(), vec![city(i, 0.0, i as f64)]))
            .collect();
        let mut world = World::new();
        let mut registry = OverlayRegistry::new();
        ClusterRenderer::default().render_clusters(
            &ClusterAssignment::new(clusters),
            &DEFAULT_PALETTE,
            &mut world,
            &mut registry,
        );
        let colors = marker_colors(&world);
        assert_eq!(colors[10], DEFAULT_PALETTE[0]);
        assert_eq!(colors[11], DEFAULT_PALETTE[1]);
    }

    #[test]
    fn empty_cluster_is_tolerated() {
        let assignment = ClusterAssignment::new(vec![
            cluster("0", vec![]),
            cluster("1", vec![city(9, 0.0, 0.0)]),
        ]);
        let mut world = World::new();
        let mut registry = OverlayRegistry::new();
        let n = ClusterRenderer::default().render_clusters(
            &assignment,
            &DEFAULT_PALETTE,
            &mut world,
            &mut registry,
        );
        assert_eq!(n, 1);
        // Palette position follows cluster order, including empty clusters.
        assert_eq!(marker_colors(&world), vec![DEFAULT_PALETTE[1]]);
    }

    #[test]
    fn empty_palette_uses_style_color() {
        let assignment = ClusterAssignment::new(vec![cluster("0", vec![city(1, 0.0, 0.0)])]);
        let mut world = World::new();
        let mut registry = OverlayRegistry::new();
        ClusterRenderer::default().render_clusters(&assignment, &[], &mut world, &mut registry);
        assert_eq!(marker_colors(&world), vec![Color::WHITE]);
    }
}
