//! Camera reference ledger
//!
//! The single home of viewport camera bindings. The forward slot
//! (viewport to camera) and its reverse index (camera to viewports) live in
//! one struct and are only written together.

use crate::foundation::collections::{CameraId, ViewportId};
use std::collections::HashMap;

/// Reference edges between viewports and cameras
#[derive(Debug, Default)]
pub struct ReferenceLedger {
    slots: HashMap<ViewportId, CameraId>,
    viewports: HashMap<CameraId, Vec<ViewportId>>,
}

impl ReferenceLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `viewport` to `camera`, replacing any previous binding
    ///
    /// Returns the camera the viewport was bound to before.
    pub fn bind(&mut self, camera: CameraId, viewport: ViewportId) -> Option<CameraId> {
        let previous = self.slots.insert(viewport, camera);
        if let Some(old) = previous {
            if old != camera {
                self.drop_reverse(old, viewport);
            }
        }
        let bound = self.viewports.entry(camera).or_default();
        if !bound.contains(&viewport) {
            bound.push(viewport);
        }
        previous
    }

    /// Clear the binding of `viewport`; returns the camera it was bound to
    pub fn unbind(&mut self, viewport: ViewportId) -> Option<CameraId> {
        let camera = self.slots.remove(&viewport)?;
        self.drop_reverse(camera, viewport);
        Some(camera)
    }

    fn drop_reverse(&mut self, camera: CameraId, viewport: ViewportId) {
        if let Some(bound) = self.viewports.get_mut(&camera) {
            bound.retain(|vp| *vp != viewport);
            if bound.is_empty() {
                self.viewports.remove(&camera);
            }
        }
    }

    /// Camera bound to `viewport`
    pub fn camera_of(&self, viewport: ViewportId) -> Option<CameraId> {
        self.slots.get(&viewport).copied()
    }

    /// Viewports bound to `camera` in binding order
    pub fn viewports_of(&self, camera: CameraId) -> &[ViewportId] {
        self.viewports.get(&camera).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Unbind and return every viewport bound to `camera`
    pub fn take(&mut self, camera: CameraId) -> Vec<ViewportId> {
        let bound = self.viewports.remove(&camera).unwrap_or_default();
        for viewport in &bound {
            self.slots.remove(viewport);
        }
        bound
    }

    /// Number of bound viewports
    pub fn total_edges(&self) -> usize {
        self.slots.len()
    }

    /// Every camera with at least one viewport bound
    pub fn cameras(&self) -> impl Iterator<Item = (CameraId, &[ViewportId])> + '_ {
        self.viewports.iter().map(|(&camera, bound)| (camera, bound.as_slice()))
    }

    /// Every bound viewport with its camera
    pub fn slots(&self) -> impl Iterator<Item = (ViewportId, CameraId)> + '_ {
        self.slots.iter().map(|(&viewport, &camera)| (viewport, camera))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::collections::SlotMap;

    fn ids(cameras: usize, viewports: usize) -> (Vec<CameraId>, Vec<ViewportId>) {
        let mut camera_keys: SlotMap<CameraId, ()> = SlotMap::with_key();
        let mut viewport_keys: SlotMap<ViewportId, ()> = SlotMap::with_key();
        (
            (0..cameras).map(|_| camera_keys.insert(())).collect(),
            (0..viewports).map(|_| viewport_keys.insert(())).collect(),
        )
    }

    #[test]
    fn test_bind_is_idempotent() {
        let (cams, vps) = ids(1, 1);
        let mut ledger = ReferenceLedger::new();

        assert_eq!(ledger.bind(cams[0], vps[0]), None);
        assert_eq!(ledger.bind(cams[0], vps[0]), Some(cams[0]));
        assert_eq!(ledger.viewports_of(cams[0]), &[vps[0]]);
        assert_eq!(ledger.camera_of(vps[0]), Some(cams[0]));
        assert_eq!(ledger.total_edges(), 1);
    }

    #[test]
    fn test_rebind_moves_reverse_entry() {
        let (cams, vps) = ids(2, 1);
        let mut ledger = ReferenceLedger::new();

        ledger.bind(cams[0], vps[0]);
        assert_eq!(ledger.bind(cams[1], vps[0]), Some(cams[0]));

        assert!(ledger.viewports_of(cams[0]).is_empty());
        assert_eq!(ledger.viewports_of(cams[1]), &[vps[0]]);
        assert_eq!(ledger.cameras().count(), 1);
    }

    #[test]
    fn test_many_viewports_share_a_camera() {
        let (cams, vps) = ids(1, 2);
        let (cam, a, b) = (cams[0], vps[0], vps[1]);
        let mut ledger = ReferenceLedger::new();
        ledger.bind(cam, a);
        ledger.bind(cam, b);

        assert_eq!(ledger.unbind(a), Some(cam));
        assert_eq!(ledger.unbind(a), None);
        assert_eq!(ledger.viewports_of(cam), &[b]);

        assert_eq!(ledger.take(cam), vec![b]);
        assert_eq!(ledger.camera_of(b), None);
        assert_eq!(ledger.cameras().count(), 0);
        assert_eq!(ledger.slots().count(), 0);
    }
}
