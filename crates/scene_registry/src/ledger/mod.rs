//! Edge ledgers
//!
//! - [`OwnershipLedger`]: geometry to the components it owns (cascade-delete)
//! - [`ReferenceLedger`]: camera to the viewports bound to it (cascade-detach)
//!
//! Both are keyed by arena identity, never by name.

mod ownership;
mod reference;

pub use ownership::OwnershipLedger;
pub use reference::ReferenceLedger;
