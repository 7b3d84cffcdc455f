//! Acoustics component (audio)

use crate::config::SceneConfig;
use crate::foundation::collections::{AcousticsId, GeometryId};
use crate::registry::Registry;
use crate::resources::sealed::Internal;
use crate::resources::{ComponentRef, Resource, ResourceId, ResourceKind};
use crate::world::World;

/// Audio component
#[derive(Debug, Clone, PartialEq)]
pub struct Acoustics {
    owner: GeometryId,
    volume: f32,
}

impl Acoustics {
    /// Create an acoustics component for `owner` at full volume
    pub fn new(owner: GeometryId) -> Self {
        Self { owner, volume: 1.0 }
    }

    /// Owning geometry
    pub fn geometry(&self) -> GeometryId {
        self.owner
    }

    /// Current volume
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set volume; negative values clamp to silence
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.max(0.0);
    }

    /// Silence this source
    pub fn mute(&mut self) {
        self.volume = 0.0;
    }
}

impl Resource for Acoustics {
    const KIND: ResourceKind = ResourceKind::Acoustics;
    type Id = AcousticsId;
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

    fn erase(id: AcousticsId) -> ResourceId {
        ResourceId::Component(ComponentRef::Acoustics(id))
    }

    fn registry(world: &World) -> &Registry<AcousticsId, Self> {
        &world.acoustics
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<AcousticsId, Self> {
        &mut world.acoustics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamps_at_zero() {
        let mut source = Acoustics::new(GeometryId::default());
        assert_eq!(source.volume(), 1.0);

        source.set_volume(-0.5);
        assert_eq!(source.volume(), 0.0);

        source.set_volume(0.7);
        source.mute();
        assert_eq!(source.volume(), 0.0);
    }
}
