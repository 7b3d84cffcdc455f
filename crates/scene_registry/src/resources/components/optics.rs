//! Optics component (rendering)

use crate::config::SceneConfig;
use crate::foundation::collections::{GeometryId, OpticsId};
use crate::registry::Registry;
use crate::resources::sealed::Internal;
use crate::resources::{ComponentRef, Resource, ResourceId, ResourceKind};
use crate::world::World;

/// Rendering component; the render state itself lives in the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optics {
    owner: GeometryId,
}

impl Optics {
    /// Create an optics component for `owner`
    pub fn new(owner: GeometryId) -> Self {
        Self { owner }
    }

    /// Owning geometry
    pub fn geometry(&self) -> GeometryId {
        self.owner
    }
}

impl Resource for Optics {
    const KIND: ResourceKind = ResourceKind::Optics;
    type Id = OpticsId;
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

    fn erase(id: OpticsId) -> ResourceId {
        ResourceId::Component(ComponentRef::Optics(id))
    }

    fn registry(world: &World) -> &Registry<OpticsId, Self> {
        &world.optics
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<OpticsId, Self> {
        &mut world.optics
    }
}
