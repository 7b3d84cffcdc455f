//! Whole-registry edits used by editor commands

use super::World;
use crate::foundation::math::Vec3;
use crate::resources::Geometry;

impl World {
    /// Named geometry whose model path contains `pattern`
    pub fn filter_geometry_by_path(&self, pattern: &str) -> Vec<(&str, &Geometry)> {
        self.geometries
            .iter()
            .filter(|(_, geometry)| geometry.model_path().contains(pattern))
            .collect()
    }

    /// Offset every geometry, named or not, by `delta`
    pub fn move_all_geometry(&mut self, delta: Vec3) -> usize {
        let mut moved = 0;
        for geometry in self.geometries.values_mut() {
            geometry.transform.translate(delta);
            moved += 1;
        }
        moved
    }

    /// Start every animation at `speed`
    pub fn play_all(&mut self, speed: f32) {
        for kinematics in self.kinematics.values_mut() {
            kinematics.play(speed);
        }
    }

    /// Stop every animation
    pub fn stop_all(&mut self) {
        for kinematics in self.kinematics.values_mut() {
            kinematics.stop();
        }
    }

    /// Advance every playing animation clock
    pub fn advance_animations(&mut self, delta_time: f32) {
        for kinematics in self.kinematics.values_mut() {
            kinematics.advance(delta_time);
        }
    }

    /// Set the volume of every audio source
    pub fn set_all_volume(&mut self, volume: f32) {
        for acoustics in self.acoustics.values_mut() {
            acoustics.set_volume(volume);
        }
    }

    /// Silence every audio source
    pub fn mute_all(&mut self) {
        self.set_all_volume(0.0);
    }

    /// Resize every viewport
    pub fn resize_all(&mut self, width: u32, height: u32) {
        for viewport in self.viewports.values_mut() {
            viewport.set_size(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Acoustics, GeometryDesc, Kinematics, Viewport, ViewportDesc};
    use approx::assert_relative_eq;

    #[test]
    fn test_filter_by_path() {
        let mut world = World::new();
        world.create::<Geometry>("ship", GeometryDesc::new("assets/models/ship.obj")).unwrap();
        world.create::<Geometry>("rock", GeometryDesc::new("assets/props/rock.obj")).unwrap();
        world.spawn_anonymous_geometry(GeometryDesc::new("assets/models/temp.obj"));

        let names: Vec<_> = world.filter_geometry_by_path("models").into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["ship"]);
    }

    #[test]
    fn test_move_all_includes_anonymous() {
        let mut world = World::new();
        world.create::<Geometry>("a", GeometryDesc::new("a.obj")).unwrap();
        let hidden = world.spawn_anonymous_geometry(GeometryDesc::new("b.obj"));

        assert_eq!(world.move_all_geometry(Vec3::new(1.0, 0.0, -1.0)), 2);
        assert_relative_eq!(world.get::<Geometry>("a").unwrap().position(), Vec3::new(1.0, 0.0, -1.0));
        assert_relative_eq!(world.get_by_id::<Geometry>(hidden).unwrap().position(), Vec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_animation_and_audio_bulk_edits() {
        let mut world = World::new();
        let geo = world.create::<Geometry>("g", GeometryDesc::new("g.obj")).unwrap();
        world.create::<Kinematics>("k", geo).unwrap();
        world.create::<Acoustics>("a", geo).unwrap();

        world.play_all(2.0);
        world.advance_animations(0.25);
        let kine = world.get::<Kinematics>("k").unwrap();
        assert!(kine.is_playing());
        assert_relative_eq!(kine.current_time(), 0.5);

        world.stop_all();
        assert!(!world.get::<Kinematics>("k").unwrap().is_playing());

        world.set_all_volume(0.4);
        assert_relative_eq!(world.get::<Acoustics>("a").unwrap().volume(), 0.4);
        world.mute_all();
        assert_relative_eq!(world.get::<Acoustics>("a").unwrap().volume(), 0.0);
    }

    #[test]
    fn test_resize_all() {
        let mut world = World::new();
        world.create::<Viewport>("a", ViewportDesc::sized(800, 600)).unwrap();
        world.create::<Viewport>("b", ViewportDesc::default()).unwrap();

        world.resize_all(1280, 720);
        for (_, viewport) in world.iter::<Viewport>() {
            assert_eq!((viewport.width(), viewport.height()), (1280, 720));
        }
    }
}
