//! Components attached to geometry
//!
//! A component's owning geometry is fixed at construction. Creating one
//! records an ownership edge; removing its geometry removes it.

pub mod optics;
pub mod mechanics;
pub mod kinematics;
pub mod acoustics;

pub use optics::Optics;
pub use mechanics::Mechanics;
pub use kinematics::Kinematics;
pub use acoustics::Acoustics;
