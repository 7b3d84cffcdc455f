//! # World
//!
//! The single owner of every registry and both ledgers. Cascades are plain
//! method calls between sibling registries inside this type:
//!
//! - removing a geometry removes every component it owns (cascade-delete)
//! - removing a camera clears the camera slot of every viewport bound to it,
//!   leaving the viewports alive (cascade-detach)
//! - removing a viewport drops its own camera binding first
//!
//! All operations are synchronous and single-threaded. A cascade runs to
//! completion before the triggering call returns.
//!
//! ```
//! use scene_registry::prelude::*;
//!
//! let mut world = World::new();
//! let geo = world.create::<Geometry>("G1", GeometryDesc::new("teapot.obj"))?;
//! world.create::<Optics>("O1", geo)?;
//! world.create::<Acoustics>("A1", geo)?;
//! assert_eq!(world.ownership_edge_count(geo), 2);
//!
//! assert!(world.remove::<Geometry>("G1"));
//! assert!(!world.has::<Optics>("O1"));
//! assert!(!world.has::<Acoustics>("A1"));
//! # Ok::<(), RegistryError>(())
//! ```

mod bindings;
mod bulk;
mod cascade;
mod guard;
mod inspect;

pub use guard::ResourceMut;
pub use inspect::InvariantViolation;

use crate::config::SceneConfig;
use crate::factory::{HeadlessFactory, ResourceFactory};
use crate::foundation::collections::{
    AcousticsId, CameraId, GeometryId, KinematicsId, MechanicsId, NativeHandle, OpticsId, ViewportId,
};
use crate::ledger::{OwnershipLedger, ReferenceLedger};
use crate::registry::{Registry, RegistryError, RegistryResult};
use crate::resources::sealed::Internal;
use crate::resources::{
    Acoustics, Camera, Geometry, Kinematics, Mechanics, Optics, Resource, ResourceId, ResourceKind, Viewport,
};

/// Registries for all seven resource kinds plus their edge ledgers
pub struct World {
    pub(crate) geometries: Registry<GeometryId, Geometry>,
    pub(crate) optics: Registry<OpticsId, Optics>,
    pub(crate) mechanics: Registry<MechanicsId, Mechanics>,
    pub(crate) kinematics: Registry<KinematicsId, Kinematics>,
    pub(crate) acoustics: Registry<AcousticsId, Acoustics>,
    pub(crate) cameras: Registry<CameraId, Camera>,
    pub(crate) viewports: Registry<ViewportId, Viewport>,

    ownership: OwnershipLedger,
    references: ReferenceLedger,

    config: SceneConfig,
    factory: Box<dyn ResourceFactory>,
}

impl World {
    /// Create an empty world with default configuration
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create an empty world with custom configuration
    pub fn with_config(config: SceneConfig) -> Self {
        Self::with_factory(config, Box::new(HeadlessFactory::new()))
    }

    /// Create an empty world whose native objects come from `factory`
    pub fn with_factory(config: SceneConfig, factory: Box<dyn ResourceFactory>) -> Self {
        log::debug!("Creating World with config: {:?}", config);
        Self {
            geometries: Registry::new(ResourceKind::Geometry),
            optics: Registry::new(ResourceKind::Optics),
            mechanics: Registry::new(ResourceKind::Mechanics),
            kinematics: Registry::new(ResourceKind::Kinematics),
            acoustics: Registry::new(ResourceKind::Acoustics),
            cameras: Registry::new(ResourceKind::Camera),
            viewports: Registry::new(ResourceKind::Viewport),
            ownership: OwnershipLedger::new(),
            references: ReferenceLedger::new(),
            config,
            factory,
        }
    }

    /// Scene configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    // === Creation ===

    /// Construct a resource and register it under `name`
    ///
    /// Fails with [`RegistryError::DuplicateName`] if the name is taken in this
    /// kind. A component is rejected with [`RegistryError::StaleHandle`] if its
    /// geometry is no longer alive and with [`RegistryError::SlotOccupied`] if
    /// that geometry already has a component of the same kind. Nothing changes
    /// on failure.
    pub fn create<R: Resource>(&mut self, name: &str, desc: R::Desc) -> RegistryResult<R::Id> {
        if R::registry(self).contains(name) {
            log::warn!("Rejected create of {} '{}': name already taken", R::KIND, name);
            return Err(RegistryError::duplicate(R::KIND, name));
        }
        let resource = R::build(desc, &self.config);
        self.check_attachment(&resource)?;

        let native = self.factory.allocate(R::KIND, Some(name));
        self.insert_named(name, resource, Some(native))
    }

    /// Adopt an already-built resource under `name`
    ///
    /// Same checks as [`create`](Self::create). The factory is not involved.
    pub fn register<R: Resource>(&mut self, name: &str, resource: R) -> RegistryResult<R::Id> {
        if R::registry(self).contains(name) {
            log::warn!("Rejected register of {} '{}': name already taken", R::KIND, name);
            return Err(RegistryError::duplicate(R::KIND, name));
        }
        self.check_attachment(&resource)?;
        self.insert_named(name, resource, None)
    }

    /// Return the resource named `name`, creating it from `desc` if absent
    ///
    /// Repeated calls return the same id; `desc` is ignored when the name
    /// already exists.
    pub fn get_or_create<R: Resource>(&mut self, name: &str, desc: R::Desc) -> RegistryResult<R::Id> {
        match self.id_of::<R>(name) {
            Some(id) => Ok(id),
            None => self.create::<R>(name, desc),
        }
    }

    /// Create several resources, stopping at the first failure
    ///
    /// Not transactional: resources created before the failing entry stay.
    /// Returns how many were created.
    pub fn create_batch<R, N>(&mut self, items: impl IntoIterator<Item = (N, R::Desc)>) -> RegistryResult<usize>
    where
        R: Resource,
        N: AsRef<str>,
    {
        let mut created = 0;
        for (name, desc) in items {
            self.create::<R>(name.as_ref(), desc)?;
            created += 1;
        }
        Ok(created)
    }

    /// [`get_or_create`](Self::get_or_create) for several names, in order
    pub fn get_or_create_batch<R, N>(
        &mut self,
        items: impl IntoIterator<Item = (N, R::Desc)>,
    ) -> RegistryResult<Vec<R::Id>>
    where
        R: Resource,
        N: AsRef<str>,
    {
        items
            .into_iter()
            .map(|(name, desc)| self.get_or_create::<R>(name.as_ref(), desc))
            .collect()
    }

    fn check_attachment<R: Resource>(&self, resource: &R) -> RegistryResult<()> {
        let Some(geometry) = resource.owner() else {
            return Ok(());
        };
        if !self.geometries.contains_id(geometry) {
            log::warn!("Rejected {}: owning geometry is no longer alive", R::KIND);
            return Err(RegistryError::StaleHandle {
                kind: ResourceKind::Geometry,
            });
        }
        let occupied = R::KIND
            .as_component()
            .is_some_and(|kind| self.ownership.kinds_of(geometry).contains(kind.flag()));
        if occupied {
            log::warn!("Rejected {}: geometry {:?} already has one", R::KIND, geometry);
            return Err(RegistryError::SlotOccupied { kind: R::KIND });
        }
        Ok(())
    }

    fn insert_named<R: Resource>(
        &mut self,
        name: &str,
        resource: R,
        native: Option<NativeHandle>,
    ) -> RegistryResult<R::Id> {
        let owner = resource.owner();
        let id = R::registry_mut(self, Internal(())).insert(name, resource, native)?;

        if let (Some(geometry), ResourceId::Component(component)) = (owner, R::erase(id)) {
            self.ownership.record(geometry, component);
            log::debug!("Recorded ownership edge {:?} -> {} '{}'", geometry, R::KIND, name);
        }
        log::info!("Created {} '{}'", R::KIND, name);
        Ok(id)
    }

    // === Lookup ===

    /// Resource named `name`
    pub fn get<R: Resource>(&self, name: &str) -> Option<&R> {
        let found = R::registry(self).get(name);
        if found.is_none() {
            log::trace!("Lookup miss for {} '{}'", R::KIND, name);
        }
        found
    }

    /// Resource named `name`, mutably
    ///
    /// The guard exposes every setter. Links to other resources are not part
    /// of what it lets callers change; use the binding and removal methods.
    pub fn get_mut<R: Resource>(&mut self, name: &str) -> Option<ResourceMut<'_, R>> {
        R::registry_mut(self, Internal(())).get_mut(name).map(ResourceMut::new)
    }

    /// Resource with identity `id`, named or not
    pub fn get_by_id<R: Resource>(&self, id: R::Id) -> Option<&R> {
        R::registry(self).get_by_id(id)
    }

    /// Resource with identity `id`, mutably
    pub fn get_by_id_mut<R: Resource>(&mut self, id: R::Id) -> Option<ResourceMut<'_, R>> {
        R::registry_mut(self, Internal(())).get_by_id_mut(id).map(ResourceMut::new)
    }

    /// Identity of the resource named `name`
    pub fn id_of<R: Resource>(&self, name: &str) -> Option<R::Id> {
        R::registry(self).id_of(name)
    }

    /// Name of the resource with identity `id`
    pub fn name_of<R: Resource>(&self, id: R::Id) -> Option<&str> {
        R::registry(self).name_of(id)
    }

    /// Whether `name` is registered
    pub fn has<R: Resource>(&self, name: &str) -> bool {
        R::registry(self).contains(name)
    }

    /// Whether `id` refers to a live resource
    pub fn contains_id<R: Resource>(&self, id: R::Id) -> bool {
        R::registry(self).contains_id(id)
    }

    /// Registered names in creation order
    pub fn list_all<R: Resource>(&self) -> Vec<String> {
        R::registry(self).names().map(str::to_owned).collect()
    }

    /// Number of registered names
    pub fn count<R: Resource>(&self) -> usize {
        R::registry(self).len()
    }

    /// Named resources in creation order
    pub fn iter<R: Resource>(&self) -> impl Iterator<Item = (&str, &R)> + '_ {
        R::registry(self).iter()
    }

    // === Removal ===

    /// Remove the resource named `name`, cascading to its dependents
    ///
    /// Returns `false` if nothing by that name exists.
    pub fn remove<R: Resource>(&mut self, name: &str) -> bool {
        match self.id_of::<R>(name) {
            Some(id) => self.remove_by_id::<R>(id),
            None => {
                log::trace!("Remove of absent {} '{}' ignored", R::KIND, name);
                false
            }
        }
    }

    /// Remove the resource with identity `id`, cascading to its dependents
    ///
    /// This is the removal path for resources without a name.
    pub fn remove_by_id<R: Resource>(&mut self, id: R::Id) -> bool {
        if !R::registry(self).contains_id(id) {
            return false;
        }
        self.unlink(R::erase(id));

        let Some(entry) = R::registry_mut(self, Internal(())).remove_by_id(id) else {
            return false;
        };
        if let Some(handle) = entry.native() {
            self.factory.release(R::KIND, handle);
        }
        log::info!("Removed {} '{}'", R::KIND, entry.name().unwrap_or("<anonymous>"));
        true
    }

    /// Remove several resources by name; returns how many existed
    pub fn remove_batch<R, N>(&mut self, names: impl IntoIterator<Item = N>) -> usize
    where
        R: Resource,
        N: AsRef<str>,
    {
        let mut removed = 0;
        for name in names {
            if self.remove::<R>(name.as_ref()) {
                removed += 1;
            }
        }
        removed
    }

    /// Remove every resource of kind `R`, with the same cascades as `remove`
    ///
    /// Identity-only resources are removed too. Returns how many were removed.
    pub fn clear<R: Resource>(&mut self) -> usize {
        let mut removed = 0;
        for id in R::registry(self).ids() {
            if self.remove_by_id::<R>(id) {
                removed += 1;
            }
        }
        removed
    }

    /// Remove everything, dependents before their targets
    pub fn clear_all(&mut self) -> usize {
        let removed = self.clear::<Viewport>()
            + self.clear::<Camera>()
            + self.clear::<Optics>()
            + self.clear::<Mechanics>()
            + self.clear::<Kinematics>()
            + self.clear::<Acoustics>()
            + self.clear::<Geometry>();
        log::info!("Cleared world: {} resource(s) removed", removed);
        removed
    }

    /// Whether no resource of any kind is alive
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
            && self.optics.is_empty()
            && self.mechanics.is_empty()
            && self.kinematics.is_empty()
            && self.acoustics.is_empty()
            && self.cameras.is_empty()
            && self.viewports.is_empty()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{CameraDesc, GeometryDesc, ViewportDesc};

    #[test]
    fn test_world_creation() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.count::<Geometry>(), 0);
        assert_eq!(world.count::<Viewport>(), 0);
    }

    #[test]
    fn test_create_and_get() {
        let mut world = World::new();
        let id = world.create::<Geometry>("G1", GeometryDesc::new("teapot.obj")).unwrap();

        assert!(world.has::<Geometry>("G1"));
        assert_eq!(world.id_of::<Geometry>("G1"), Some(id));
        assert_eq!(world.name_of::<Geometry>(id), Some("G1"));
        assert_eq!(world.get::<Geometry>("G1").map(Geometry::model_path), Some("teapot.obj"));
        assert!(world.get::<Geometry>("G2").is_none());
    }

    #[test]
    fn test_duplicate_create_is_rejected() {
        let mut world = World::new();
        world.create::<Camera>("Cam", CameraDesc::default().with_fov(30.0)).unwrap();

        let err = world.create::<Camera>("Cam", CameraDesc::default().with_fov(90.0)).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                kind: ResourceKind::Camera,
                name: "Cam".to_owned()
            }
        );
        assert_eq!(world.get::<Camera>("Cam").map(Camera::fov), Some(30.0));
    }

    #[test]
    fn test_names_are_unique_per_kind_only() {
        let mut world = World::new();
        world.create::<Camera>("main", CameraDesc::default()).unwrap();
        world.create::<Viewport>("main", ViewportDesc::default()).unwrap();
        assert!(world.has::<Camera>("main"));
        assert!(world.has::<Viewport>("main"));
    }

    #[test]
    fn test_register_adopts_built_resource() {
        let mut world = World::new();
        let vp = Viewport::new(640, 480, true);
        world.register::<Viewport>("preview", vp).unwrap();

        let err = world.register::<Viewport>("preview", Viewport::new(1, 1, false)).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
        assert_eq!(world.get::<Viewport>("preview").map(Viewport::width), Some(640));
    }

    #[test]
    fn test_get_or_create_returns_same_instance() {
        let mut world = World::new();
        let first = world.get_or_create::<Viewport>("Vp", ViewportDesc::sized(800, 600)).unwrap();
        let second = world.get_or_create::<Viewport>("Vp", ViewportDesc::sized(10, 10)).unwrap();

        assert_eq!(first, second);
        assert_eq!(world.count::<Viewport>(), 1);
        assert_eq!(world.get::<Viewport>("Vp").map(Viewport::width), Some(800));
    }

    #[test]
    fn test_remove_twice() {
        let mut world = World::new();
        world.create::<Camera>("Cam", CameraDesc::default()).unwrap();

        assert!(world.remove::<Camera>("Cam"));
        assert!(!world.remove::<Camera>("Cam"));
        assert!(!world.remove::<Camera>("never-existed"));
    }

    #[test]
    fn test_create_batch_is_not_transactional() {
        let mut world = World::new();
        world.create::<Geometry>("b", GeometryDesc::new("b.obj")).unwrap();

        let result = world.create_batch::<Geometry, _>([
            ("a", GeometryDesc::new("a.obj")),
            ("b", GeometryDesc::new("other.obj")),
            ("c", GeometryDesc::new("c.obj")),
        ]);

        assert!(matches!(result, Err(RegistryError::DuplicateName { .. })));
        assert_eq!(world.list_all::<Geometry>(), vec!["b", "a"]);
        assert_eq!(world.get::<Geometry>("b").map(Geometry::model_path), Some("b.obj"));
    }

    #[test]
    fn test_batch_counts() {
        let mut world = World::new();
        let created = world
            .create_batch::<Camera, _>(["c1", "c2", "c3"].map(|name| (name, CameraDesc::default())))
            .unwrap();
        assert_eq!(created, 3);

        let ids = world
            .get_or_create_batch::<Camera, _>([("c1", CameraDesc::default()), ("c4", CameraDesc::default())])
            .unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(Some(ids[0]), world.id_of::<Camera>("c1"));
        assert_eq!(world.count::<Camera>(), 4);

        assert_eq!(world.remove_batch::<Camera, _>(["c1", "c1", "missing", "c4"]), 2);
        assert_eq!(world.list_all::<Camera>(), vec!["c2", "c3"]);
    }

    #[test]
    fn test_clear_and_clear_all() {
        let mut world = World::new();
        world.create::<Camera>("a", CameraDesc::default()).unwrap();
        world.create::<Camera>("b", CameraDesc::default()).unwrap();
        world.create::<Viewport>("v", ViewportDesc::default()).unwrap();

        assert_eq!(world.clear::<Camera>(), 2);
        assert_eq!(world.count::<Camera>(), 0);
        assert_eq!(world.count::<Viewport>(), 1);

        assert_eq!(world.clear_all(), 1);
        assert!(world.is_empty());
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut world = World::new();
        world.create::<Camera>("Cam", CameraDesc::default()).unwrap();
        if let Some(mut cam) = world.get_mut::<Camera>("Cam") {
            cam.set_fov(75.0);
        }
        assert_eq!(world.get::<Camera>("Cam").map(Camera::fov), Some(75.0));
    }

    #[test]
    fn test_overwriting_a_component_keeps_its_owner() {
        let mut world = World::new();
        let g1 = world.create::<Geometry>("G1", GeometryDesc::new("a.obj")).unwrap();
        let g2 = world.create::<Geometry>("G2", GeometryDesc::new("b.obj")).unwrap();
        world.create::<Optics>("O1", g1).unwrap();

        if let Some(mut optics) = world.get_mut::<Optics>("O1") {
            *optics = Optics::new(g2);
        }
        assert_eq!(world.get::<Optics>("O1").map(Optics::geometry), Some(g1));
        assert!(world.check_invariants().is_ok());

        world.remove::<Geometry>("G2");
        assert!(world.has::<Optics>("O1"));
        world.remove::<Geometry>("G1");
        assert!(!world.has::<Optics>("O1"));
    }

    #[test]
    fn test_overwriting_a_viewport_keeps_its_binding() {
        let mut world = World::new();
        world.create::<Camera>("Cam", CameraDesc::default()).unwrap();
        let vp = world.create::<Viewport>("Vp", ViewportDesc::sized(800, 600)).unwrap();
        world.attach_camera("Vp", "Cam").unwrap();

        if let Some(mut viewport) = world.get_by_id_mut::<Viewport>(vp) {
            *viewport = Viewport::new(10, 10, false);
        }
        assert_eq!(world.get::<Viewport>("Vp").map(Viewport::width), Some(10));
        assert_eq!(world.camera_of("Vp"), Some("Cam"));
        assert_eq!(world.viewports_of("Cam"), vec!["Vp"]);
        assert!(world.check_invariants().is_ok());
    }
}
