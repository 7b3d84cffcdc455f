//! Camera resource
//!
//! Cameras are the target side of reference edges: viewports point at them,
//! and removing a camera only clears those viewports' camera slot.

use super::sealed::Internal;
use super::{Resource, ResourceId, ResourceKind};
use crate::config::SceneConfig;
use crate::foundation::collections::{CameraId, NativeHandle};
use crate::foundation::math::Vec3;
use crate::registry::Registry;
use crate::world::World;

/// Camera resource
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    world_up: Vec3,
    fov: f32,
    surface: Option<NativeHandle>,
}

impl Camera {
    /// Create a camera; `fov` is the vertical field of view in degrees
    pub fn new(position: Vec3, forward: Vec3, world_up: Vec3, fov: f32) -> Self {
        Self {
            position,
            forward,
            world_up,
            fov,
            surface: None,
        }
    }

    /// World space position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set world space position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// View direction
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Set view direction
    pub fn set_forward(&mut self, forward: Vec3) {
        self.forward = forward;
    }

    /// World up vector
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Set world up vector
    pub fn set_world_up(&mut self, world_up: Vec3) {
        self.world_up = world_up;
    }

    /// Vertical field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set vertical field of view in degrees
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Set all view parameters at once
    pub fn set(&mut self, position: Vec3, forward: Vec3, world_up: Vec3, fov: f32) {
        self.position = position;
        self.forward = forward;
        self.world_up = world_up;
        self.fov = fov;
    }

    /// Render surface this camera presents to
    pub fn surface(&self) -> Option<NativeHandle> {
        self.surface
    }

    /// Bind a render surface (a native window id)
    pub fn set_surface(&mut self, surface: NativeHandle) {
        self.surface = Some(surface);
    }

    /// Unbind the render surface
    pub fn clear_surface(&mut self) {
        self.surface = None;
    }
}

/// Constructor arguments for [`Camera`]; unset fields take scene defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraDesc {
    /// World space position
    pub position: Option<Vec3>,
    /// View direction
    pub forward: Option<Vec3>,
    /// World up vector
    pub world_up: Option<Vec3>,
    /// Vertical field of view in degrees
    pub fov: Option<f32>,
}

impl CameraDesc {
    /// Fully specified descriptor
    pub fn new(position: Vec3, forward: Vec3, world_up: Vec3, fov: f32) -> Self {
        Self {
            position: Some(position),
            forward: Some(forward),
            world_up: Some(world_up),
            fov: Some(fov),
        }
    }

    /// Builder pattern: Set position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Builder pattern: Set field of view
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = Some(fov);
        self
    }
}

impl Resource for Camera {
    const KIND: ResourceKind = ResourceKind::Camera;
    type Id = CameraId;
    type Desc = CameraDesc;

    fn build(desc: CameraDesc, config: &SceneConfig) -> Self {
        let defaults = &config.camera;
        Self::new(
            desc.position.unwrap_or(defaults.position),
            desc.forward.unwrap_or(defaults.forward),
            desc.world_up.unwrap_or(defaults.world_up),
            desc.fov.unwrap_or(defaults.fov),
        )
    }

    fn erase(id: CameraId) -> ResourceId {
        ResourceId::Camera(id)
    }

    fn registry(world: &World) -> &Registry<CameraId, Self> {
        &world.cameras
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<CameraId, Self> {
        &mut world.cameras
    }
}
