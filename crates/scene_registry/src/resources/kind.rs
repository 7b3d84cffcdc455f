//! Resource kinds and component kind sets

use bitflags::bitflags;
use std::fmt;

/// Every kind of resource the registries track
///
/// Names are unique within a kind, not across kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Transformable model instance
    Geometry,
    /// Rendering component
    Optics,
    /// Physics component
    Mechanics,
    /// Animation component
    Kinematics,
    /// Audio component
    Acoustics,
    /// Camera
    Camera,
    /// Viewport
    Viewport,
}

impl ResourceKind {
    /// All kinds, in teardown-safe order (dependents before their targets)
    pub const ALL: [Self; 7] = [
        Self::Viewport,
        Self::Camera,
        Self::Optics,
        Self::Mechanics,
        Self::Kinematics,
        Self::Acoustics,
        Self::Geometry,
    ];

    /// Human readable name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geometry => "Geometry",
            Self::Optics => "Optics",
            Self::Mechanics => "Mechanics",
            Self::Kinematics => "Kinematics",
            Self::Acoustics => "Acoustics",
            Self::Camera => "Camera",
            Self::Viewport => "Viewport",
        }
    }

    /// The component kind this resource kind corresponds to, if any
    pub const fn as_component(self) -> Option<ComponentKind> {
        match self {
            Self::Optics => Some(ComponentKind::Optics),
            Self::Mechanics => Some(ComponentKind::Mechanics),
            Self::Kinematics => Some(ComponentKind::Kinematics),
            Self::Acoustics => Some(ComponentKind::Acoustics),
            Self::Geometry | Self::Camera | Self::Viewport => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of component that can be attached to a geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Rendering
    Optics,
    /// Physics
    Mechanics,
    /// Animation
    Kinematics,
    /// Audio
    Acoustics,
}

impl ComponentKind {
    /// All component kinds
    pub const ALL: [Self; 4] = [Self::Optics, Self::Mechanics, Self::Kinematics, Self::Acoustics];

    /// The registry kind holding components of this kind
    pub const fn resource_kind(self) -> ResourceKind {
        match self {
            Self::Optics => ResourceKind::Optics,
            Self::Mechanics => ResourceKind::Mechanics,
            Self::Kinematics => ResourceKind::Kinematics,
            Self::Acoustics => ResourceKind::Acoustics,
        }
    }

    /// Single-bit set for this kind
    pub const fn flag(self) -> ComponentKinds {
        match self {
            Self::Optics => ComponentKinds::OPTICS,
            Self::Mechanics => ComponentKinds::MECHANICS,
            Self::Kinematics => ComponentKinds::KINEMATICS,
            Self::Acoustics => ComponentKinds::ACOUSTICS,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.resource_kind().fmt(f)
    }
}

bitflags! {
    /// Set of component kinds attached to a geometry
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ComponentKinds: u8 {
        /// Rendering component present
        const OPTICS = 1 << 0;
        /// Physics component present
        const MECHANICS = 1 << 1;
        /// Animation component present
        const KINEMATICS = 1 << 2;
        /// Audio component present
        const ACOUSTICS = 1 << 3;
    }
}

impl FromIterator<ComponentKind> for ComponentKinds {
    fn from_iter<I: IntoIterator<Item = ComponentKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, kind| set | kind.flag())
    }
}
