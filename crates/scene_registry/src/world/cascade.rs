//! Ownership ledger upkeep and cascade-on-delete

use super::World;
use crate::foundation::collections::GeometryId;
use crate::resources::{
    Acoustics, ComponentKind, ComponentKinds, ComponentRef, Geometry, GeometryDesc, Kinematics, Mechanics, Optics,
    Resource, ResourceId, ResourceKind,
};

impl World {
    /// Create a geometry reachable only through its id
    ///
    /// It is absent from the name registry (`has`, `list_all` and `count`
    /// don't see it) but components can still attach to it, and removing it
    /// with [`remove_by_id`](Self::remove_by_id) cascades as usual.
    pub fn spawn_anonymous_geometry(&mut self, desc: GeometryDesc) -> GeometryId {
        let geometry = Geometry::build(desc, &self.config);
        let native = self.factory.allocate(ResourceKind::Geometry, None);
        let id = self.geometries.insert_anonymous(geometry, Some(native));
        log::info!("Created anonymous Geometry {:?}", id);
        id
    }

    /// Geometry that owns `component`
    pub fn owner_of(&self, component: ComponentRef) -> Option<GeometryId> {
        self.ownership.owner(component)
    }

    /// Owner as stored on the component value itself
    pub(super) fn stored_owner(&self, component: ComponentRef) -> Option<GeometryId> {
        match component {
            ComponentRef::Optics(id) => self.optics.get_by_id(id).map(Optics::geometry),
            ComponentRef::Mechanics(id) => self.mechanics.get_by_id(id).map(Mechanics::geometry),
            ComponentRef::Kinematics(id) => self.kinematics.get_by_id(id).map(Kinematics::geometry),
            ComponentRef::Acoustics(id) => self.acoustics.get_by_id(id).map(Acoustics::geometry),
        }
    }

    /// Name of the component behind an edge
    pub fn component_name(&self, component: ComponentRef) -> Option<&str> {
        match component {
            ComponentRef::Optics(id) => self.optics.name_of(id),
            ComponentRef::Mechanics(id) => self.mechanics.name_of(id),
            ComponentRef::Kinematics(id) => self.kinematics.name_of(id),
            ComponentRef::Acoustics(id) => self.acoustics.name_of(id),
        }
    }

    /// Ownership edges of `geometry` in attachment order
    pub fn edges_of(&self, geometry: GeometryId) -> &[ComponentRef] {
        self.ownership.edges(geometry)
    }

    /// Components attached to `geometry` as (kind, name) pairs
    pub fn components_of(&self, geometry: GeometryId) -> Vec<(ComponentKind, &str)> {
        self.ownership
            .edges(geometry)
            .iter()
            .filter_map(|&edge| self.component_name(edge).map(|name| (edge.kind(), name)))
            .collect()
    }

    /// Component kinds attached to `geometry`
    pub fn attached_kinds(&self, geometry: GeometryId) -> ComponentKinds {
        self.ownership.kinds_of(geometry)
    }

    /// Number of components attached to `geometry`
    pub fn ownership_edge_count(&self, geometry: GeometryId) -> usize {
        self.ownership.edge_count(geometry)
    }

    /// Number of ownership edges in the whole world
    pub fn total_ownership_edges(&self) -> usize {
        self.ownership.total_edges()
    }

    /// Detach `id` from every ledger before its entry is dropped
    pub(super) fn unlink(&mut self, id: ResourceId) {
        match id {
            ResourceId::Geometry(geometry) => self.cascade_delete(geometry),
            ResourceId::Component(component) => self.retract_edge(component),
            ResourceId::Camera(camera) => self.cascade_detach(camera),
            ResourceId::Viewport(viewport) => {
                self.unbind_viewport(viewport);
            }
        }
    }

    fn cascade_delete(&mut self, geometry: GeometryId) {
        let edges = self.ownership.edges(geometry).to_vec();
        if !edges.is_empty() {
            log::debug!(
                "Cascading removal of {} component(s) owned by Geometry {:?}",
                edges.len(),
                geometry
            );
        }

        for edge in edges {
            if !self.remove_component(edge) {
                log::debug!("Skipped stale ownership edge {:?}", edge);
            }
        }
        self.ownership.take(geometry);
    }

    fn remove_component(&mut self, component: ComponentRef) -> bool {
        match component {
            ComponentRef::Optics(id) => self.remove_by_id::<Optics>(id),
            ComponentRef::Mechanics(id) => self.remove_by_id::<Mechanics>(id),
            ComponentRef::Kinematics(id) => self.remove_by_id::<Kinematics>(id),
            ComponentRef::Acoustics(id) => self.remove_by_id::<Acoustics>(id),
        }
    }

    fn retract_edge(&mut self, component: ComponentRef) {
        if let Some(owner) = self.ownership.retract(component) {
            log::debug!("Retracted ownership edge {:?} -> {:?}", owner, component);
        }
    }
}
