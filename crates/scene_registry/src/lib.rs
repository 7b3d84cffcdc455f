//! # Scene Registry
//!
//! Resource lifecycle core for an interactive 3D scene editor.
//!
//! ## Features
//!
//! - **Named Registries**: One registry per resource kind (geometry, optics,
//!   mechanics, kinematics, acoustics, camera, viewport) with create, lookup,
//!   get-or-create, removal and batch operations
//! - **Ownership Cascades**: Components die with the geometry they are attached to
//! - **Reference Detaching**: Removing a camera clears the viewports bound to it
//!   without removing them
//! - **Stable Identities**: Arena keys for every resource; ledgers never depend
//!   on names
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_registry::prelude::*;
//!
//! fn main() -> Result<(), RegistryError> {
//!     let mut world = World::new();
//!
//!     world.create::<Camera>("Cam", CameraDesc::default())?;
//!     world.create::<Viewport>("Vp", ViewportDesc::sized(800, 600))?;
//!     world.attach_camera("Vp", "Cam")?;
//!     assert_eq!(world.viewports_of("Cam"), vec!["Vp"]);
//!
//!     // The viewport survives; only its binding is cleared
//!     world.remove::<Camera>("Cam");
//!     assert!(world.has::<Viewport>("Vp"));
//!     assert_eq!(world.camera_of("Vp"), None);
//!     Ok(())
//! }
//! ```
//!
//! Everything is single-threaded, in-process state. Callers that edit a
//! [`World`] from several threads must serialize access themselves.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::must_use_candidate)]

pub mod foundation;
pub mod config;
pub mod registry;
pub mod resources;
pub mod ledger;
pub mod factory;
pub mod world;

pub use config::{Config, ConfigError, SceneConfig};
pub use registry::{RegistryError, RegistryResult};
pub use world::World;

/// Common imports for registry users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, SceneConfig},
        factory::{HeadlessFactory, ResourceFactory},
        foundation::{
            collections::{
                AcousticsId, CameraId, GeometryId, KinematicsId, MechanicsId, NativeHandle, OpticsId, ViewportId,
            },
            math::{Transform, Vec3},
        },
        registry::{RegistryError, RegistryResult},
        resources::{
            Acoustics, Camera, CameraDesc, ComponentKind, ComponentKinds, ComponentRef, Geometry, GeometryDesc,
            Kinematics, Mechanics, Optics, Resource, ResourceId, ResourceKind, Viewport, ViewportDesc,
        },
        world::{InvariantViolation, ResourceMut, World},
    };
}
