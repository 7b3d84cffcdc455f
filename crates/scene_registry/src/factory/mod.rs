//! External resource factory seam
//!
//! The registries only keep bookkeeping wrappers. The native objects behind
//! them (GPU meshes, physics bodies, audio sources, ...) are allocated by the
//! engine through a [`ResourceFactory`]. A resource created through the world
//! gets a handle from the factory; a resource adopted with `register` was
//! built by the caller and carries none.

use crate::foundation::collections::NativeHandle;
use crate::resources::ResourceKind;

/// Allocator for the native objects behind registry resources
pub trait ResourceFactory {
    /// Allocate the native object for a resource being created
    ///
    /// `name` is `None` for identity-only resources.
    fn allocate(&mut self, kind: ResourceKind, name: Option<&str>) -> NativeHandle;

    /// The wrapper for `handle` has been removed from its registry
    fn release(&mut self, kind: ResourceKind, handle: NativeHandle) {
        let _ = (kind, handle);
    }
}

/// Factory used when no native engine is linked
///
/// Hands out sequential handles and keeps no state about them.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    next_handle: u64,
}

impl HeadlessFactory {
    /// Create a factory starting at handle 1
    pub fn new() -> Self {
        Self { next_handle: 1 }
    }
}

impl ResourceFactory for HeadlessFactory {
    fn allocate(&mut self, kind: ResourceKind, name: Option<&str>) -> NativeHandle {
        let handle = NativeHandle(self.next_handle.max(1));
        self.next_handle = handle.0 + 1;
        log::trace!("Headless allocation of {} {:?} -> {}", kind, name, handle);
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_handles_are_unique() {
        let mut factory = HeadlessFactory::default();
        let a = factory.allocate(ResourceKind::Geometry, Some("a"));
        let b = factory.allocate(ResourceKind::Camera, None);

        assert_eq!(a, NativeHandle(1));
        assert_eq!(b, NativeHandle(2));
        factory.release(ResourceKind::Geometry, a);
    }
}
