//! Arena keys and handle types
//!
//! Every resource kind gets its own slotmap key so an id of one kind can never
//! be used to address a registry of another.

use serde::{Deserialize, Serialize};
use std::fmt;

pub use slotmap::{Key, SlotMap};

slotmap::new_key_type! {
    /// Stable identity of a geometry
    pub struct GeometryId;
    /// Stable identity of an optics component
    pub struct OpticsId;
    /// Stable identity of a mechanics component
    pub struct MechanicsId;
    /// Stable identity of a kinematics component
    pub struct KinematicsId;
    /// Stable identity of an acoustics component
    pub struct AcousticsId;
    /// Stable identity of a camera
    pub struct CameraId;
    /// Stable identity of a viewport
    pub struct ViewportId;
}

/// Opaque handle to an object owned by the external engine
///
/// Render surfaces, post-processing configurations and the native objects a
/// [`ResourceFactory`](crate::factory::ResourceFactory) allocates are all
/// referred to through this handle. The registry never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NativeHandle(pub u64);

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "native#{}", self.0)
    }
}
