//! Resource types tracked by the registries
//!
//! Each type here is the bookkeeping wrapper around an object owned by the
//! external engine. The [`Resource`] trait ties a type to its kind, its arena
//! key and its slot inside the [`World`](crate::world::World).

mod kind;
pub mod geometry;
pub mod components;
pub mod camera;
pub mod viewport;

pub use kind::{ComponentKind, ComponentKinds, ResourceKind};
pub use geometry::{Geometry, GeometryDesc};
pub use components::{Acoustics, Kinematics, Mechanics, Optics};
pub use camera::{Camera, CameraDesc};
pub use viewport::{Viewport, ViewportDesc};

use crate::config::SceneConfig;
use crate::foundation::collections::{
    AcousticsId, CameraId, GeometryId, Key, KinematicsId, MechanicsId, OpticsId, ViewportId,
};
use crate::registry::Registry;
use crate::world::World;

pub(crate) mod sealed {
    /// Capability only this crate can construct
    ///
    /// Methods of [`Resource`](super::Resource) that take it can be neither
    /// called nor implemented outside the crate.
    #[derive(Debug, Clone, Copy)]
    pub struct Internal(pub(crate) ());
}

use sealed::Internal;

/// A resource kind managed by a [`World`]
///
/// Implemented for the seven resource types of this crate only, and sealed:
/// the hidden methods take a token outside code cannot build. The world's
/// generic operations (`create::<Camera>`, `remove::<Geometry>`, ...) are
/// written once against this trait; the kind-specific cascade behaviour is
/// selected through [`ResourceId`].
pub trait Resource: Sized + 'static {
    /// Kind tag
    const KIND: ResourceKind;

    /// Arena key for this kind
    type Id: Key;

    /// Constructor arguments used by `create`
    type Desc;

    /// Construct from a descriptor, falling back to scene defaults
    fn build(desc: Self::Desc, config: &SceneConfig) -> Self;

    /// Geometry that owns this resource, for components
    fn owner(&self) -> Option<GeometryId> {
        None
    }

    /// Tag an id with its kind
    fn erase(id: Self::Id) -> ResourceId;

    /// This kind's registry inside `world`
    fn registry(world: &World) -> &Registry<Self::Id, Self>;

    /// This kind's registry inside `world`, mutably
    #[doc(hidden)]
    fn registry_mut(world: &mut World, token: Internal) -> &mut Registry<Self::Id, Self>;

    /// Put the owning geometry back after a caller edited the value
    #[doc(hidden)]
    fn restore_owner(&mut self, owner: GeometryId, token: Internal) {
        let _ = (owner, token);
    }
}

/// Id of a resource of any kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// Geometry id
    Geometry(GeometryId),
    /// Component id
    Component(ComponentRef),
    /// Camera id
    Camera(CameraId),
    /// Viewport id
    Viewport(ViewportId),
}

impl ResourceId {
    /// Kind of the referenced resource
    pub const fn kind(self) -> ResourceKind {
        match self {
            Self::Geometry(_) => ResourceKind::Geometry,
            Self::Component(component) => component.kind().resource_kind(),
            Self::Camera(_) => ResourceKind::Camera,
            Self::Viewport(_) => ResourceKind::Viewport,
        }
    }
}

/// Id of a component, tagged with its kind
///
/// This is the target of an ownership edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentRef {
    /// Optics component
    Optics(OpticsId),
    /// Mechanics component
    Mechanics(MechanicsId),
    /// Kinematics component
    Kinematics(KinematicsId),
    /// Acoustics component
    Acoustics(AcousticsId),
}

impl ComponentRef {
    /// Kind of the referenced component
    pub const fn kind(self) -> ComponentKind {
        match self {
            Self::Optics(_) => ComponentKind::Optics,
            Self::Mechanics(_) => ComponentKind::Mechanics,
            Self::Kinematics(_) => ComponentKind::Kinematics,
            Self::Acoustics(_) => ComponentKind::Acoustics,
        }
    }
}
