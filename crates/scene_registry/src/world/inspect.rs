//! Introspection: invariant checks and debug dumps
//!
//! The dump format is for humans and tests only and may change.

use super::World;
use crate::foundation::collections::{CameraId, GeometryId, ViewportId};
use crate::resources::{Acoustics, ComponentKind, ComponentRef, Kinematics, Mechanics, Optics, Resource};
use std::fmt::Write as _;
use thiserror::Error;

/// First disagreement found by [`World::check_invariants`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Ownership edges are recorded for a geometry that no longer exists
    #[error("ownership edges recorded for dead geometry {geometry:?}")]
    DeadGeometry {
        /// The dead geometry
        geometry: GeometryId,
    },

    /// An ownership edge points at a component that no longer exists
    #[error("edge {component:?} of {geometry:?} points at a dead component")]
    DeadComponent {
        /// Geometry the edge is listed under
        geometry: GeometryId,
        /// The dead component
        component: ComponentRef,
    },

    /// The ledger and the component disagree about who owns it
    #[error("{component:?} is recorded under {recorded:?} but stores owner {stored:?}")]
    OwnerMismatch {
        /// The component
        component: ComponentRef,
        /// Owner according to the ownership ledger
        recorded: Option<GeometryId>,
        /// Owner stored on the component value
        stored: GeometryId,
    },

    /// A geometry owns more than one component of a kind
    #[error("{geometry:?} owns more than one {kind} component")]
    DuplicateKind {
        /// The geometry
        geometry: GeometryId,
        /// The repeated kind
        kind: ComponentKind,
    },

    /// Reference edges are recorded for a camera that no longer exists
    #[error("reference edges recorded for dead camera {camera:?}")]
    DeadCamera {
        /// The dead camera
        camera: CameraId,
    },

    /// A camera binding is recorded for a viewport that no longer exists
    #[error("camera binding recorded for dead viewport {viewport:?}")]
    DeadViewport {
        /// The dead viewport
        viewport: ViewportId,
    },

    /// The forward slot and the reverse index disagree
    #[error("{viewport:?} listed under {camera:?} but bound to {bound:?}")]
    ReferenceMismatch {
        /// The viewport
        viewport: ViewportId,
        /// Camera whose reverse index lists the viewport
        camera: CameraId,
        /// Camera in the viewport's slot
        bound: Option<CameraId>,
    },
}

impl World {
    /// Verify that both ledgers agree with the resources they describe
    ///
    /// - every ownership edge points at a live component that stores that
    ///   geometry as its owner, and a geometry has at most one edge per kind
    /// - every live component is recorded under the owner it stores
    /// - every binding joins a live viewport to a live camera, and the slot
    ///   and the camera's viewport list agree
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for (geometry, edges) in self.ownership.owners() {
            if !self.geometries.contains_id(geometry) {
                return Err(InvariantViolation::DeadGeometry { geometry });
            }
            for (i, &component) in edges.iter().enumerate() {
                let Some(stored) = self.stored_owner(component) else {
                    return Err(InvariantViolation::DeadComponent { geometry, component });
                };
                let recorded = self.ownership.owner(component);
                if stored != geometry || recorded != Some(geometry) {
                    return Err(InvariantViolation::OwnerMismatch {
                        component,
                        recorded,
                        stored,
                    });
                }
                if edges[..i].iter().any(|edge| edge.kind() == component.kind()) {
                    return Err(InvariantViolation::DuplicateKind {
                        geometry,
                        kind: component.kind(),
                    });
                }
            }
        }

        let components = self
            .optics
            .iter_ids()
            .map(|(id, c)| (ComponentRef::Optics(id), c.geometry()))
            .chain(self.mechanics.iter_ids().map(|(id, c)| (ComponentRef::Mechanics(id), c.geometry())))
            .chain(self.kinematics.iter_ids().map(|(id, c)| (ComponentRef::Kinematics(id), c.geometry())))
            .chain(self.acoustics.iter_ids().map(|(id, c)| (ComponentRef::Acoustics(id), c.geometry())));
        for (component, stored) in components {
            let recorded = self.ownership.owner(component);
            if recorded != Some(stored) {
                return Err(InvariantViolation::OwnerMismatch {
                    component,
                    recorded,
                    stored,
                });
            }
        }

        for (camera, viewports) in self.references.cameras() {
            if !self.cameras.contains_id(camera) {
                return Err(InvariantViolation::DeadCamera { camera });
            }
            for &viewport in viewports {
                let bound = self.references.camera_of(viewport);
                if bound != Some(camera) {
                    return Err(InvariantViolation::ReferenceMismatch { viewport, camera, bound });
                }
            }
        }

        for (viewport, camera) in self.references.slots() {
            if !self.viewports.contains_id(viewport) {
                return Err(InvariantViolation::DeadViewport { viewport });
            }
            if !self.references.viewports_of(camera).contains(&viewport) {
                return Err(InvariantViolation::ReferenceMismatch {
                    viewport,
                    camera,
                    bound: Some(camera),
                });
            }
        }

        Ok(())
    }

    /// Human-readable summary of every registry
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(
            out,
            "[Geometry] Total: {} ({} anonymous)",
            self.geometries.len(),
            self.geometries.total() - self.geometries.len()
        );
        for (id, geometry) in self.geometries.iter_ids() {
            let name = self.geometries.name_of(id).unwrap_or("<anonymous>");
            let components: Vec<String> = self
                .components_of(id)
                .into_iter()
                .map(|(kind, component)| format!("{kind}:{component}"))
                .collect();
            let _ = writeln!(
                out,
                "  - {}: {}, pos={:?}, components=[{}]",
                name,
                geometry.model_path(),
                geometry.position().as_slice(),
                components.join(", ")
            );
        }

        self.dump_components::<Optics>(&mut out);
        self.dump_components::<Mechanics>(&mut out);
        self.dump_components::<Kinematics>(&mut out);
        self.dump_components::<Acoustics>(&mut out);

        let _ = writeln!(out, "[Camera] Total: {}", self.cameras.len());
        for (name, camera) in self.cameras.iter() {
            let _ = writeln!(out, "  - {}: fov={}, viewports={:?}", name, camera.fov(), self.viewports_of(name));
        }

        let _ = writeln!(out, "[Viewport] Total: {}", self.viewports.len());
        for (name, viewport) in self.viewports.iter() {
            let _ = writeln!(
                out,
                "  - {}: {}x{}, camera={}",
                name,
                viewport.width(),
                viewport.height(),
                self.camera_of(name).unwrap_or("<none>")
            );
        }

        out
    }

    fn dump_components<R: Resource>(&self, out: &mut String) {
        let _ = writeln!(out, "[{}] Total: {}", R::KIND, self.count::<R>());
        for (name, resource) in self.iter::<R>() {
            let owner = resource
                .owner()
                .map(|geometry| self.geometries.name_of(geometry).unwrap_or("<anonymous>"));
            let _ = writeln!(out, "  - {}: geo={}", name, owner.unwrap_or("<none>"));
        }
    }

    /// Log [`debug_dump`](Self::debug_dump) at debug level
    pub fn log_state(&self) {
        for line in self.debug_dump().lines() {
            log::debug!("{}", line);
        }
    }
}
