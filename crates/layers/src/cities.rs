use foundation::math::project;
use routing::City;
use scene::SceneSink;
use scene::components::Drawable;
use scene::entity::EntityId;

use crate::symbology::MarkerStyle;

/// Permanent markers for every known city.
///
/// These are scene content, not overlays: the overlay registry never sees
/// them, so clearing results leaves them in place.
#[derive(Debug, Default)]
pub struct CityMarkers {
    entities: Vec<EntityId>,
}

impl CityMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously spawned markers.
    pub fn spawn(&mut self, cities: &[City], style: MarkerStyle, scene: &mut impl SceneSink) {
        self.despawn(scene);
        self.entities.reserve(cities.len());
        for city in cities {
            let at = project(city.coordinate(), style.radius);
            self.entities
                .push(scene.add(Drawable::marker(at, style.size, style.color)));
        }
    }

    pub fn despawn(&mut self, scene: &mut impl SceneSink) {
        for entity in self.entities.drain(..) {
            scene.remove(entity);
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
