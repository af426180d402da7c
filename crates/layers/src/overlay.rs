use scene::SceneSink;
use scene::components::Drawable;
use scene::entity::EntityId;
use tracing::{debug, warn};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Arc,
    Marker,
}

/// A transient drawable attached to the scene on behalf of a result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Overlay {
    pub entity: EntityId,
    pub kind: OverlayKind,
}

/// Owns every transient overlay currently attached to the scene.
///
/// Lifecycle contract:
/// - Overlays stay tracked from `register` until the next `clear`.
/// - `clear` is the only path that detaches them from the scene.
/// - `clear` on an empty registry is a no-op.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    overlays: Vec<Overlay>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends without deduplication.
    pub fn register(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    pub fn attach(
        &mut self,
        scene: &mut impl SceneSink,
        kind: OverlayKind,
        drawable: Drawable,
    ) -> EntityId {
        let entity = scene.add(drawable);
        self.register(Overlay { entity, kind });
        entity
    }

    /// Detaches every tracked overlay and returns how many were tracked.
    pub fn clear(&mut self, scene: &mut impl SceneSink) -> usize {
        let count = self.overlays.len();
        for overlay in self.overlays.drain(..) {
            if !scene.remove(overlay.entity) {
                warn!("overlay {:?} was already detached from the scene", overlay.entity);
            }
        }
        if count > 0 {
            debug!("cleared {count} overlays");
        }
        count
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn count(&self, kind: OverlayKind) -> usize {
        self.overlays.iter().filter(|o| o.kind == kind).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Overlay> {
        self.overlays.iter()
    }
}
