//! Generic named registry
//!
//! A [`Registry`] is an arena of resources of one kind plus an
//! insertion-ordered name index. Identity (the arena key) and name are
//! separate: ledgers key everything by identity, callers address things by
//! name, and an entry may exist without a name at all.

mod error;

pub use error::{RegistryError, RegistryResult};

use crate::foundation::collections::{Key, NativeHandle, SlotMap};
use crate::resources::ResourceKind;
use indexmap::IndexMap;

/// A stored resource plus its bookkeeping
#[derive(Debug)]
pub struct Entry<T> {
    name: Option<String>,
    native: Option<NativeHandle>,
    value: T,
}

impl<T> Entry<T> {
    /// Registry name, `None` for identity-only entries
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Handle of the native object allocated for this entry, if any
    pub fn native(&self) -> Option<NativeHandle> {
        self.native
    }

    /// The resource itself
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Arena plus name index for one resource kind
#[derive(Debug)]
pub struct Registry<K: Key, T> {
    kind: ResourceKind,
    entries: SlotMap<K, Entry<T>>,
    names: IndexMap<String, K>,
}

impl<K: Key, T> Registry<K, T> {
    /// Create an empty registry for `kind`
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            entries: SlotMap::with_key(),
            names: IndexMap::new(),
        }
    }

    /// Kind of resource stored here
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Insert a named resource, rejecting a taken name
    pub(crate) fn insert(&mut self, name: &str, value: T, native: Option<NativeHandle>) -> RegistryResult<K> {
        if self.names.contains_key(name) {
            return Err(RegistryError::duplicate(self.kind, name));
        }
        let id = self.entries.insert(Entry {
            name: Some(name.to_owned()),
            native,
            value,
        });
        self.names.insert(name.to_owned(), id);
        Ok(id)
    }

    /// Insert a resource reachable only through its id
    pub(crate) fn insert_anonymous(&mut self, value: T, native: Option<NativeHandle>) -> K {
        self.entries.insert(Entry {
            name: None,
            native,
            value,
        })
    }

    /// Look up by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.id_of(name).and_then(|id| self.get_by_id(id))
    }

    /// Look up by name, mutably
    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        let id = self.id_of(name)?;
        self.get_by_id_mut(id)
    }

    /// Look up by id
    pub fn get_by_id(&self, id: K) -> Option<&T> {
        self.entries.get(id).map(|entry| &entry.value)
    }

    /// Look up by id, mutably
    pub(crate) fn get_by_id_mut(&mut self, id: K) -> Option<&mut T> {
        self.entries.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Full entry for an id
    pub fn entry(&self, id: K) -> Option<&Entry<T>> {
        self.entries.get(id)
    }

    /// Id registered under `name`
    pub fn id_of(&self, name: &str) -> Option<K> {
        self.names.get(name).copied()
    }

    /// Name of the entry with `id`
    pub fn name_of(&self, id: K) -> Option<&str> {
        self.entries.get(id).and_then(Entry::name)
    }

    /// Whether `name` is taken
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Whether `id` refers to a live entry, named or not
    pub fn contains_id(&self, id: K) -> bool {
        self.entries.contains_key(id)
    }

    /// Drop the entry with `id`, releasing its name
    pub(crate) fn remove_by_id(&mut self, id: K) -> Option<Entry<T>> {
        let entry = self.entries.remove(id)?;
        if let Some(name) = entry.name() {
            self.names.shift_remove(name);
        }
        Some(entry)
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.keys().map(String::as_str)
    }

    /// Ids of every entry, named or not
    pub fn ids(&self) -> Vec<K> {
        self.entries.keys().collect()
    }

    /// Named resources in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.names
            .iter()
            .filter_map(|(name, &id)| self.entries.get(id).map(|entry| (name.as_str(), &entry.value)))
    }

    /// Every resource, named or not, mutably
    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.entries.values_mut().map(|entry| &mut entry.value)
    }

    /// Every resource with its id, named or not
    pub fn iter_ids(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.entries.iter().map(|(id, entry)| (id, &entry.value))
    }

    /// Number of named resources
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Number of resources including identity-only ones
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Whether the arena holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::CameraId;

    fn registry() -> Registry<CameraId, u32> {
        Registry::new(ResourceKind::Camera)
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut reg = registry();
        let id = reg.insert("main", 7, None).unwrap();

        assert_eq!(reg.get("main"), Some(&7));
        assert_eq!(reg.get_by_id(id), Some(&7));
        assert_eq!(reg.id_of("main"), Some(id));
        assert_eq!(reg.name_of(id), Some("main"));
        assert!(reg.contains("main"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_duplicate_name_rejected_without_overwrite() {
        let mut reg = registry();
        reg.insert("main", 1, None).unwrap();

        let err = reg.insert("main", 2, None).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { kind: ResourceKind::Camera, .. }));
        assert_eq!(reg.get("main"), Some(&1));
        assert_eq!(reg.total(), 1);
    }

    #[test]
    fn test_anonymous_entries_have_no_name() {
        let mut reg = registry();
        let id = reg.insert_anonymous(3, Some(NativeHandle(9)));

        assert!(reg.contains_id(id));
        assert_eq!(reg.name_of(id), None);
        assert_eq!(reg.len(), 0);
        assert_eq!(reg.total(), 1);
        assert_eq!(reg.entry(id).and_then(Entry::native), Some(NativeHandle(9)));
    }

    #[test]
    fn test_remove_releases_name_and_keeps_order() {
        let mut reg = registry();
        reg.insert("a", 1, None).unwrap();
        let b = reg.insert("b", 2, None).unwrap();
        reg.insert("c", 3, None).unwrap();

        assert!(reg.remove_by_id(b).is_some());
        assert!(reg.remove_by_id(b).is_none());
        assert_eq!(reg.names().collect::<Vec<_>>(), vec!["a", "c"]);

        // Name is free again, but the old id stays dead
        let b2 = reg.insert("b", 4, None).unwrap();
        assert_ne!(b, b2);
        assert!(!reg.contains_id(b));
    }
}
