//! Geometry: a transformable model instance
//!
//! Geometry is the owner side of ownership edges. Components attached to it
//! are removed together with it.

use super::sealed::Internal;
use super::{Resource, ResourceId, ResourceKind};
use crate::config::SceneConfig;
use crate::foundation::collections::GeometryId;
use crate::foundation::math::{Transform, Vec3};
use crate::registry::Registry;
use crate::world::World;

/// Geometry resource
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    model_path: String,

    /// Local transform
    pub transform: Transform,
}

impl Geometry {
    /// Create geometry for a model at the identity transform
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
            transform: Transform::identity(),
        }
    }

    /// Opaque model reference this geometry was created from
    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    /// Local position
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Set local position
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Local rotation as Euler angles in radians
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    /// Set local rotation as Euler angles in radians
    pub fn set_rotation(&mut self, euler: Vec3) {
        self.transform.rotation = euler;
    }

    /// Local scale
    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    /// Set local scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }
}

/// Constructor arguments for [`Geometry`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryDesc {
    /// Model reference
    pub model_path: String,
    /// Initial transform
    pub transform: Transform,
}

impl GeometryDesc {
    /// Descriptor for a model at the identity transform
    pub fn new(model_path: impl Into<String>) -> Self {
        Self {
            model_path: model_path.into(),
            transform: Transform::identity(),
        }
    }

    /// Builder pattern: Set initial transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl From<&str> for GeometryDesc {
    fn from(model_path: &str) -> Self {
        Self::new(model_path)
    }
}

impl Resource for Geometry {
    const KIND: ResourceKind = ResourceKind::Geometry;
    type Id = GeometryId;
    type Desc = GeometryDesc;

    fn build(desc: GeometryDesc, _config: &SceneConfig) -> Self {
        Self {
            model_path: desc.model_path,
            transform: desc.transform,
        }
    }

    fn erase(id: GeometryId) -> ResourceId {
        ResourceId::Geometry(id)
    }

    fn registry(world: &World) -> &Registry<GeometryId, Self> {
        &world.geometries
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<GeometryId, Self> {
        &mut world.geometries
    }
}
