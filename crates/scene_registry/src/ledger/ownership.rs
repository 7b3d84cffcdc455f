//! Geometry ownership ledger

use crate::foundation::collections::GeometryId;
use crate::resources::{ComponentKinds, ComponentRef};
use std::collections::HashMap;

/// Ownership edges from geometry to components
///
/// Holds both directions: the per-geometry edge list drives cascades, and
/// the per-component owner index answers "who owns this" without reading the
/// component value.
#[derive(Debug, Default)]
pub struct OwnershipLedger {
    edges: HashMap<GeometryId, Vec<ComponentRef>>,
    owners: HashMap<ComponentRef, GeometryId>,
}

impl OwnershipLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge; recording the same edge twice keeps one copy
    ///
    /// A component has one owner. Recording it under another geometry moves it.
    pub fn record(&mut self, geometry: GeometryId, component: ComponentRef) {
        if let Some(previous) = self.owners.insert(component, geometry) {
            if previous != geometry {
                self.drop_edge(previous, component);
            }
        }
        let edges = self.edges.entry(geometry).or_default();
        if !edges.contains(&component) {
            edges.push(component);
        }
    }

    /// Drop the edge to `component`; returns the geometry that owned it
    pub fn retract(&mut self, component: ComponentRef) -> Option<GeometryId> {
        let owner = self.owners.remove(&component)?;
        self.drop_edge(owner, component);
        Some(owner)
    }

    fn drop_edge(&mut self, geometry: GeometryId, component: ComponentRef) {
        if let Some(edges) = self.edges.get_mut(&geometry) {
            edges.retain(|edge| *edge != component);
            if edges.is_empty() {
                self.edges.remove(&geometry);
            }
        }
    }

    /// Geometry that owns `component`
    pub fn owner(&self, component: ComponentRef) -> Option<GeometryId> {
        self.owners.get(&component).copied()
    }

    /// Edges of `geometry` in attachment order
    pub fn edges(&self, geometry: GeometryId) -> &[ComponentRef] {
        self.edges.get(&geometry).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove and return every edge of `geometry`
    pub fn take(&mut self, geometry: GeometryId) -> Vec<ComponentRef> {
        let edges = self.edges.remove(&geometry).unwrap_or_default();
        for edge in &edges {
            self.owners.remove(edge);
        }
        edges
    }

    /// Number of edges of `geometry`
    pub fn edge_count(&self, geometry: GeometryId) -> usize {
        self.edges(geometry).len()
    }

    /// Number of edges across all geometry
    pub fn total_edges(&self) -> usize {
        self.owners.len()
    }

    /// Component kinds attached to `geometry`
    pub fn kinds_of(&self, geometry: GeometryId) -> ComponentKinds {
        self.edges(geometry).iter().map(|edge| edge.kind()).collect()
    }

    /// Every geometry with at least one edge
    pub fn owners(&self) -> impl Iterator<Item = (GeometryId, &[ComponentRef])> + '_ {
        self.edges.iter().map(|(&geometry, edges)| (geometry, edges.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::{AcousticsId, OpticsId, SlotMap};

    fn ids() -> (GeometryId, GeometryId, ComponentRef, ComponentRef) {
        let mut geometries: SlotMap<GeometryId, ()> = SlotMap::with_key();
        let mut optics: SlotMap<OpticsId, ()> = SlotMap::with_key();
        let mut acoustics: SlotMap<AcousticsId, ()> = SlotMap::with_key();
        (
            geometries.insert(()),
            geometries.insert(()),
            ComponentRef::Optics(optics.insert(())),
            ComponentRef::Acoustics(acoustics.insert(())),
        )
    }

    #[test]
    fn test_record_and_retract() {
        let (geo, _, optics, acoustics) = ids();
        let mut ledger = OwnershipLedger::new();

        ledger.record(geo, optics);
        ledger.record(geo, acoustics);
        ledger.record(geo, optics);
        assert_eq!(ledger.edges(geo), &[optics, acoustics]);
        assert_eq!(ledger.owner(optics), Some(geo));
        assert_eq!(ledger.kinds_of(geo), ComponentKinds::OPTICS | ComponentKinds::ACOUSTICS);

        assert_eq!(ledger.retract(optics), Some(geo));
        assert_eq!(ledger.retract(optics), None);
        assert_eq!(ledger.owner(optics), None);
        assert_eq!(ledger.edge_count(geo), 1);
    }

    #[test]
    fn test_empty_entries_are_dropped() {
        let (geo, _, optics, _) = ids();
        let mut ledger = OwnershipLedger::new();

        ledger.record(geo, optics);
        ledger.retract(optics);
        assert_eq!(ledger.owners().count(), 0);
        assert_eq!(ledger.total_edges(), 0);
    }

    #[test]
    fn test_take_clears_both_directions() {
        let (geo, _, optics, acoustics) = ids();
        let mut ledger = OwnershipLedger::new();
        ledger.record(geo, optics);
        ledger.record(geo, acoustics);

        assert_eq!(ledger.take(geo).len(), 2);
        assert!(ledger.take(geo).is_empty());
        assert_eq!(ledger.owner(acoustics), None);
        assert_eq!(ledger.kinds_of(geo), ComponentKinds::empty());
    }

    #[test]
    fn test_component_has_one_owner() {
        let (first, second, optics, _) = ids();
        let mut ledger = OwnershipLedger::new();

        ledger.record(first, optics);
        ledger.record(second, optics);

        assert_eq!(ledger.edge_count(first), 0);
        assert_eq!(ledger.edges(second), &[optics]);
        assert_eq!(ledger.total_edges(), 1);
    }
}
