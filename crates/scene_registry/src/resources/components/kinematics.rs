//! Kinematics component (animation)
//!
//! Tracks which animation clip is selected and the playback state the command
//! surface last set. Playback itself happens in the engine; `advance` only
//! keeps the elapsed time the editor displays in sync.

use crate::config::SceneConfig;
use crate::foundation::collections::{GeometryId, KinematicsId};
use crate::registry::Registry;
use crate::resources::sealed::Internal;
use crate::resources::{ComponentRef, Resource, ResourceId, ResourceKind};
use crate::world::World;

/// Animation component
#[derive(Debug, Clone, PartialEq)]
pub struct Kinematics {
    owner: GeometryId,
    animation_index: usize,
    playing: bool,
    speed: f32,
    elapsed: f32,
}

impl Kinematics {
    /// Create a stopped kinematics component for `owner` on clip 0
    pub fn new(owner: GeometryId) -> Self {
        Self {
            owner,
            animation_index: 0,
            playing: false,
            speed: 1.0,
            elapsed: 0.0,
        }
    }

    /// Owning geometry
    pub fn geometry(&self) -> GeometryId {
        self.owner
    }

    /// Select an animation clip; restarts its clock
    pub fn set_animation(&mut self, animation_index: usize) {
        self.animation_index = animation_index;
        self.elapsed = 0.0;
    }

    /// Selected animation clip
    pub fn animation_index(&self) -> usize {
        self.animation_index
    }

    /// Start playback at `speed`
    pub fn play(&mut self, speed: f32) {
        self.playing = true;
        self.speed = speed;
    }

    /// Stop playback, keeping the current time
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Whether the clip is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Playback speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Time into the current clip in seconds
    pub fn current_time(&self) -> f32 {
        self.elapsed
    }

    /// Advance the clip clock by `delta_time` scaled by speed, if playing
    pub fn advance(&mut self, delta_time: f32) {
        if self.playing {
            self.elapsed += delta_time * self.speed;
        }
    }
}

impl Resource for Kinematics {
    const KIND: ResourceKind = ResourceKind::Kinematics;
    type Id = KinematicsId;
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

    fn erase(id: KinematicsId) -> ResourceId {
        ResourceId::Component(ComponentRef::Kinematics(id))
    }

    fn registry(world: &World) -> &Registry<KinematicsId, Self> {
        &world.kinematics
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<KinematicsId, Self> {
        &mut world.kinematics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_only_runs_while_playing() {
        let mut kine = Kinematics::new(GeometryId::default());
        kine.advance(1.0);
        assert_relative_eq!(kine.current_time(), 0.0);

        kine.play(2.0);
        kine.advance(0.5);
        assert!(kine.is_playing());
        assert_relative_eq!(kine.current_time(), 1.0);

        kine.stop();
        kine.advance(0.5);
        assert_relative_eq!(kine.current_time(), 1.0);
    }

    #[test]
    fn test_set_animation_restarts_clock() {
        let mut kine = Kinematics::new(GeometryId::default());
        kine.play(1.0);
        kine.advance(3.0);

        kine.set_animation(2);
        assert_eq!(kine.animation_index(), 2);
        assert_relative_eq!(kine.current_time(), 0.0);
        assert!(kine.is_playing());
    }
}
