use foundation::math::GLOBE_RADIUS;

use crate::World;
use crate::components::Drawable;
use crate::entity::EntityId;

pub fn spawn_unit_globe(world: &mut World) -> EntityId {
    world.spawn(Drawable::Globe {
        radius: GLOBE_RADIUS,
    })
}
