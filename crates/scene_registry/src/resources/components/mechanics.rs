//! Mechanics component (physics)

use crate::config::SceneConfig;
use crate::foundation::collections::{GeometryId, MechanicsId};
use crate::registry::Registry;
use crate::resources::sealed::Internal;
use crate::resources::{ComponentRef, Resource, ResourceId, ResourceKind};
use crate::world::World;

/// Physics component; the simulation state itself lives in the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mechanics {
    owner: GeometryId,
}

impl Mechanics {
    /// Create a mechanics component for `owner`
    pub fn new(owner: GeometryId) -> Self {
        Self { owner }
    }

    /// Owning geometry
    pub fn geometry(&self) -> GeometryId {
        self.owner
    }
}

impl Resource for Mechanics {
    const KIND: ResourceKind = ResourceKind::Mechanics;
    type Id = MechanicsId;
    type Desc = GeometryId;

    fn build(owner: GeometryId, _config: &SceneConfig) -> Self {
        Self::new(owner)
    }

    fn owner(&self) -> Option<GeometryId> {
        Some(self.owner)
    }

    fn restore_owner(&mut self, owner: GeometryId, _token: Internal) {
        self.owner = owner;
    }

    fn erase(id: MechanicsId) -> ResourceId {
        ResourceId::Component(ComponentRef::Mechanics(id))
    }

    fn registry(world: &World) -> &Registry<MechanicsId, Self> {
        &world.mechanics
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<MechanicsId, Self> {
        &mut world.mechanics
    }
}
