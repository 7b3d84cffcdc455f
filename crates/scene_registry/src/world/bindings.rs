//! Camera bindings and cascade-on-detach
//!
//! Bindings live only in the reference ledger, which keeps the viewport slot
//! and the camera's viewport list in step. This file is the only writer.

use super::World;
use crate::foundation::collections::{CameraId, ViewportId};
use crate::registry::{RegistryError, RegistryResult};
use crate::resources::ResourceKind;

impl World {
    /// Bind the camera named `camera` to the viewport named `viewport`
    ///
    /// Fails with [`RegistryError::NotFound`] if either name is unknown. A
    /// previous binding of the viewport to another camera is replaced.
    pub fn attach_camera(&mut self, viewport: &str, camera: &str) -> RegistryResult<()> {
        let Some(viewport_id) = self.viewports.id_of(viewport) else {
            log::warn!("Cannot attach camera '{}': Viewport '{}' not found", camera, viewport);
            return Err(RegistryError::not_found(ResourceKind::Viewport, viewport));
        };
        let Some(camera_id) = self.cameras.id_of(camera) else {
            log::warn!("Cannot attach Camera '{}' to '{}': camera not found", camera, viewport);
            return Err(RegistryError::not_found(ResourceKind::Camera, camera));
        };
        self.attach_camera_by_id(viewport_id, camera_id)
    }

    /// Bind `camera` to `viewport` by identity
    pub fn attach_camera_by_id(&mut self, viewport: ViewportId, camera: CameraId) -> RegistryResult<()> {
        if !self.cameras.contains_id(camera) {
            return Err(RegistryError::StaleHandle {
                kind: ResourceKind::Camera,
            });
        }
        if !self.viewports.contains_id(viewport) {
            return Err(RegistryError::StaleHandle {
                kind: ResourceKind::Viewport,
            });
        }

        match self.references.bind(camera, viewport) {
            Some(previous) if previous != camera => {
                log::debug!("Viewport {:?} rebound from {:?} to {:?}", viewport, previous, camera);
            }
            _ => log::debug!("Viewport {:?} bound to Camera {:?}", viewport, camera),
        }
        Ok(())
    }

    /// Clear the camera slot of the viewport named `viewport`
    ///
    /// Returns `false` if the viewport is unknown or already unbound.
    pub fn detach_camera(&mut self, viewport: &str) -> bool {
        match self.viewports.id_of(viewport) {
            Some(id) => self.unbind_viewport(id),
            None => false,
        }
    }

    /// Clear the camera slot of `viewport` by identity
    pub fn detach_camera_by_id(&mut self, viewport: ViewportId) -> bool {
        self.unbind_viewport(viewport)
    }

    /// Name of the camera bound to the viewport named `viewport`
    pub fn camera_of(&self, viewport: &str) -> Option<&str> {
        let camera = self.camera_of_id(self.viewports.id_of(viewport)?)?;
        self.cameras.name_of(camera)
    }

    /// Camera bound to `viewport` by identity
    pub fn camera_of_id(&self, viewport: ViewportId) -> Option<CameraId> {
        self.references.camera_of(viewport)
    }

    /// Whether the viewport named `viewport` has a camera bound
    pub fn has_camera(&self, viewport: &str) -> bool {
        self.viewports
            .id_of(viewport)
            .is_some_and(|id| self.references.camera_of(id).is_some())
    }

    /// Names of the viewports bound to the camera named `camera`
    pub fn viewports_of(&self, camera: &str) -> Vec<&str> {
        self.cameras
            .id_of(camera)
            .map(|id| {
                self.references
                    .viewports_of(id)
                    .iter()
                    .filter_map(|&viewport| self.viewports.name_of(viewport))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Viewports bound to `camera` by identity
    pub fn viewports_of_id(&self, camera: CameraId) -> &[ViewportId] {
        self.references.viewports_of(camera)
    }

    /// Number of reference edges in the whole world
    pub fn total_reference_edges(&self) -> usize {
        self.references.total_edges()
    }

    pub(super) fn unbind_viewport(&mut self, viewport: ViewportId) -> bool {
        let Some(camera) = self.references.unbind(viewport) else {
            return false;
        };
        log::debug!("Viewport {:?} detached from Camera {:?}", viewport, camera);
        true
    }

    pub(super) fn cascade_detach(&mut self, camera: CameraId) {
        let bound = self.references.take(camera);
        if !bound.is_empty() {
            log::debug!("Detached {} viewport(s) from Camera {:?}", bound.len(), camera);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{Camera, CameraDesc, Viewport, ViewportDesc};

    fn world_with(cameras: &[&str], viewports: &[&str]) -> World {
        let mut world = World::new();
        for name in cameras {
            world.create::<Camera>(name, CameraDesc::default()).unwrap();
        }
        for name in viewports {
            world.create::<Viewport>(name, ViewportDesc::sized(800, 600)).unwrap();
        }
        world
    }

    #[test]
    fn test_attach_records_reference() {
        let mut world = world_with(&["Cam"], &["Vp"]);
        world.attach_camera("Vp", "Cam").unwrap();

        assert_eq!(world.viewports_of("Cam"), vec!["Vp"]);
        assert_eq!(world.camera_of("Vp"), Some("Cam"));
    }

    #[test]
    fn test_attach_unknown_names() {
        let mut world = world_with(&["Cam"], &["Vp"]);

        let err = world.attach_camera("Nope", "Cam").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { kind: ResourceKind::Viewport, .. }));

        let err = world.attach_camera("Vp", "Nope").unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { kind: ResourceKind::Camera, .. }));

        assert_eq!(world.camera_of("Vp"), None);
        assert_eq!(world.total_reference_edges(), 0);
    }

    #[test]
    fn test_rebinding_replaces() {
        let mut world = world_with(&["C1", "C2"], &["V"]);
        world.attach_camera("V", "C1").unwrap();
        world.attach_camera("V", "C2").unwrap();
        world.attach_camera("V", "C2").unwrap();

        assert!(world.viewports_of("C1").is_empty());
        assert_eq!(world.viewports_of("C2"), vec!["V"]);
        assert_eq!(world.total_reference_edges(), 1);
    }

    #[test]
    fn test_detach() {
        let mut world = world_with(&["Cam"], &["Vp"]);
        world.attach_camera("Vp", "Cam").unwrap();

        assert!(world.detach_camera("Vp"));
        assert!(!world.detach_camera("Vp"));
        assert!(!world.detach_camera("missing"));
        assert!(world.viewports_of("Cam").is_empty());
        assert!(world.has::<Camera>("Cam"));
    }

    #[test]
    fn test_camera_removal_detaches_all_viewports() {
        let mut world = world_with(&["Cam"], &["A", "B"]);
        world.attach_camera("A", "Cam").unwrap();
        world.attach_camera("B", "Cam").unwrap();

        assert!(world.remove::<Camera>("Cam"));
        assert!(world.has::<Viewport>("A"));
        assert!(world.has::<Viewport>("B"));
        assert_eq!(world.camera_of("A"), None);
        assert!(!world.has_camera("B"));
        assert_eq!(world.total_reference_edges(), 0);
    }

    #[test]
    fn test_viewport_removal_drops_its_reference() {
        let mut world = world_with(&["CamA"], &["VPA", "VPB"]);
        world.attach_camera("VPA", "CamA").unwrap();
        world.attach_camera("VPB", "CamA").unwrap();

        assert!(world.remove::<Viewport>("VPA"));
        assert!(world.has::<Camera>("CamA"));
        assert_eq!(world.viewports_of("CamA"), vec!["VPB"]);
    }

    #[test]
    fn test_stale_ids_are_rejected() {
        let mut world = world_with(&["Cam"], &["Vp"]);
        let cam = world.id_of::<Camera>("Cam").unwrap();
        let vp = world.id_of::<Viewport>("Vp").unwrap();
        world.remove::<Camera>("Cam");

        let err = world.attach_camera_by_id(vp, cam).unwrap_err();
        assert_eq!(err, RegistryError::StaleHandle { kind: ResourceKind::Camera });
        assert!(!world.detach_camera_by_id(vp));
    }

    #[test]
    fn test_registered_copy_is_unbound() {
        let mut world = world_with(&["Cam"], &["Vp"]);
        world.attach_camera("Vp", "Cam").unwrap();

        let copy = world.get::<Viewport>("Vp").cloned().unwrap();
        world.register::<Viewport>("Vp2", copy).unwrap();

        assert!(!world.has_camera("Vp2"));
        assert_eq!(world.viewports_of("Cam"), vec!["Vp"]);
        assert!(world.check_invariants().is_ok());

        world.remove::<Camera>("Cam");
        assert!(!world.has_camera("Vp"));
        assert!(!world.has_camera("Vp2"));
        assert!(world.check_invariants().is_ok());
    }
}
