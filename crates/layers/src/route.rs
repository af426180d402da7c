use foundation::math::{ArcParams, project};
use routing::City;
use scene::SceneSink;
use scene::components::{Color, Drawable};

use crate::overlay::{OverlayKind, OverlayRegistry};
use crate::symbology::ROUTE_RADIUS;

/// Draws a path as a chain of elevated arcs, one per consecutive city pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RouteRenderer {
    pub radius: f64,
    pub arc: ArcParams,
}

impl Default for RouteRenderer {
    fn default() -> Self {
        Self {
            radius: ROUTE_RADIUS,
            arc: ArcParams::default(),
        }
    }
}

impl RouteRenderer {
    pub fn new(radius: f64, arc: ArcParams) -> Self {
        Self { radius, arc }
    }

    /// Returns the number of arcs registered: `max(0, path.len() - 1)`.
    ///
    /// The caller clears the registry first.
    pub fn render_route(
        &self,
        path: &[City],
        color: Color,
        scene: &mut impl SceneSink,
        registry: &mut OverlayRegistry,
    ) -> usize {
        let mut arcs = 0;
        for pair in path.windows(2) {
            let from = project(pair[0].coordinate(), self.radius);
            let to = project(pair[1].coordinate(), self.radius);
            let vertices = self.arc.build(from, to);
            registry.attach(scene, OverlayKind::Arc, Drawable::line(vertices, color));
            arcs += 1;
        }
        arcs
    }
}

#[cfg(test)]
mod tests {
    use super::RouteRenderer;
    use crate::overlay::{OverlayKind, OverlayRegistry};
    use foundation::math::Vec3;
    use routing::City;
    use scene::World;
    use scene::components::{Color, Drawable};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn city(id: i64, latitude: f64, longitude: f64) -> City {
        City {
            id,
            name: format!("city-{id}"),
            latitude,
            longitude,
        }
    }

    fn render(path: &[City]) -> (World, OverlayRegistry, usize) {
        let mut world = World::new();
        let mut registry = OverlayRegistry::new();
        let n =
            RouteRenderer::default().render_route(path, Color::GREEN, &mut world, &mut registry);
        (world, registry, n)
    }

    #[test]
    fn one_arc_per_consecutive_pair() {
        let path: Vec<City> = (0..5).map(|i| city(i, 10.0 * i as f64, 20.0 * i as f64)).collect();
        let (world, registry, n) = render(&path);
        assert_eq!(n, 4);
        assert_eq!(registry.count(OverlayKind::Arc), 4);
        assert_eq!(world.lines(), 4);
    }

    #[test]
    fn short_paths_draw_nothing() {
        for path in [vec![], vec![city(1, 0.0, 0.0)]] {
            let (world, registry, n) = render(&path);
            assert_eq!(n, 0);
            assert!(registry.is_empty());
            assert!(world.is_empty());
        }
    }

    #[test]
    fn arc_endpoints_follow_projection() {
        let path = vec![city(1, 0.0, 0.0), city(2, 0.0, 90.0)];
        let (world, _registry, n) = render(&path);
        assert_eq!(n, 1);

        let drawables = world.drawables();
        let Drawable::Line { vertices, color } = drawables[0].1 else {
            panic!("expected a line");
        };
        assert_eq!(*color, Color::GREEN);
        assert_eq!(vertices.len(), 51);

        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        assert_close(first.distance(Vec3::new(1.01, 0.0, 0.0)), 0.0, 1e-9);
        assert_close(last.distance(Vec3::new(0.0, 0.0, -1.01)), 0.0, 1e-9);
    }

    #[test]
    fn repeated_city_draws_a_degenerate_arc() {
        let path = vec![city(1, 5.0, 5.0), city(1, 5.0, 5.0)];
        let (_world, registry, n) = render(&path);
        assert_eq!(n, 1);
        assert_eq!(registry.len(), 1);
    }
}
