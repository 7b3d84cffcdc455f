//! Mutable access to a stored resource

use crate::foundation::collections::GeometryId;
use crate::resources::sealed::Internal;
use crate::resources::Resource;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Mutable borrow of a resource held by a [`World`](super::World)
///
/// Every setter of the resource is available through `DerefMut`. Links the
/// world tracks are pinned: a component keeps the geometry it was created
/// for, even if the whole value is overwritten through this guard.
pub struct ResourceMut<'w, R: Resource> {
    value: &'w mut R,
    owner: Option<GeometryId>,
}

impl<'w, R: Resource> ResourceMut<'w, R> {
    pub(super) fn new(value: &'w mut R) -> Self {
        let owner = value.owner();
        Self { value, owner }
    }
}

impl<R: Resource> Deref for ResourceMut<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.value
    }
}

impl<R: Resource> DerefMut for ResourceMut<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.value
    }
}

impl<R: Resource> Drop for ResourceMut<'_, R> {
    fn drop(&mut self) {
        if let Some(owner) = self.owner {
            if self.value.owner() != Some(owner) {
                log::warn!("Owner of {} overwritten through a mutable borrow; restored", R::KIND);
                self.value.restore_owner(owner, Internal(()));
            }
        }
    }
}

impl<R: Resource + fmt::Debug> fmt::Debug for ResourceMut<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.value, f)
    }
}
