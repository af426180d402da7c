use crate::components::Drawable;
use crate::entity::EntityId;
use crate::sink::SceneSink;
use foundation::handles::Handle;

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    drawable: Option<Drawable>,
}

/// In-memory scene graph.
///
/// Freed slots are reused with a bumped generation, so a stale `EntityId`
/// never resolves to a newer drawable.
#[derive(Debug, Default)]
pub struct World {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, drawable: Drawable) -> EntityId {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                (self.slots.len() - 1) as u32
            }
        };
        let slot = &mut self.slots[index as usize];
        slot.drawable = Some(drawable);
        self.live += 1;
        EntityId(Handle::new(index, slot.generation))
    }

    pub fn despawn(&mut self, entity: EntityId) -> bool {
        let Some(slot) = self.slots.get_mut(entity.index() as usize) else {
            return false;
        };
        if slot.generation != entity.generation() || slot.drawable.is_none() {
            return false;
        }
        slot.drawable = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(entity.index());
        self.live -= 1;
        true
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.get(entity).is_some()
    }

    pub fn get(&self, entity: EntityId) -> Option<&Drawable> {
        self.slots
            .get(entity.index() as usize)
            .filter(|s| s.generation == entity.generation())
            .and_then(|s| s.drawable.as_ref())
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live drawables in ascending slot order.
    pub fn drawables(&self) -> Vec<(EntityId, &Drawable)> {
        let mut out = Vec::with_capacity(self.live);
        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(drawable) = &slot.drawable else {
                continue;
            };
            out.push((EntityId(Handle::new(idx as u32, slot.generation)), drawable));
        }
        out
    }

    pub fn markers(&self) -> usize {
        self.drawables()
            .iter()
            .filter(|(_, d)| matches!(d, Drawable::Marker { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.drawables()
            .iter()
            .filter(|(_, d)| matches!(d, Drawable::Line { .. }))
            .count()
    }
}

impl SceneSink for World {
    fn add(&mut self, drawable: Drawable) -> EntityId {
        self.spawn(drawable)
    }

    fn remove(&mut self, entity: EntityId) -> bool {
        self.despawn(entity)
    }
}
