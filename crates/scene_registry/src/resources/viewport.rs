//! Viewport resource
//!
//! A viewport refers to at most one camera. That binding is not part of the
//! value: it lives in the world's reference ledger and is edited only through
//! [`World::attach_camera`] and [`World::detach_camera`], so copying or
//! replacing a `Viewport` never carries a binding along.

use super::sealed::Internal;
use super::{Resource, ResourceId, ResourceKind};
use crate::config::SceneConfig;
use crate::foundation::collections::{NativeHandle, ViewportId};
use crate::registry::Registry;
use crate::world::World;

/// Viewport resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
    light_field: bool,
    image_effects: Option<NativeHandle>,
}

impl Viewport {
    /// Create an unbound viewport
    pub fn new(width: u32, height: u32, light_field: bool) -> Self {
        Self {
            width,
            height,
            light_field,
            image_effects: None,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resize
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Whether this viewport renders a light field
    pub fn light_field(&self) -> bool {
        self.light_field
    }

    /// Post-processing configuration
    pub fn image_effects(&self) -> Option<NativeHandle> {
        self.image_effects
    }

    /// Set post-processing configuration
    pub fn set_image_effects(&mut self, effects: NativeHandle) {
        self.image_effects = Some(effects);
    }

    /// Drop post-processing configuration
    pub fn clear_image_effects(&mut self) {
        self.image_effects = None;
    }
}

/// Constructor arguments for [`Viewport`]; unset fields take scene defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportDesc {
    /// Size in pixels
    pub size: Option<(u32, u32)>,
    /// Light field rendering
    pub light_field: Option<bool>,
}

impl ViewportDesc {
    /// Descriptor with an explicit size
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            size: Some((width, height)),
            light_field: None,
        }
    }

    /// Builder pattern: Set light field rendering
    pub fn with_light_field(mut self, light_field: bool) -> Self {
        self.light_field = Some(light_field);
        self
    }
}

impl Resource for Viewport {
    const KIND: ResourceKind = ResourceKind::Viewport;
    type Id = ViewportId;
    type Desc = ViewportDesc;

    fn build(desc: ViewportDesc, config: &SceneConfig) -> Self {
        let defaults = &config.viewport;
        let (width, height) = desc.size.unwrap_or((defaults.width, defaults.height));
        Self::new(width, height, desc.light_field.unwrap_or(defaults.light_field))
    }

    fn erase(id: ViewportId) -> ResourceId {
        ResourceId::Viewport(id)
    }

    fn registry(world: &World) -> &Registry<ViewportId, Self> {
        &world.viewports
    }

    fn registry_mut(world: &mut World, _token: Internal) -> &mut Registry<ViewportId, Self> {
        &mut world.viewports
    }
}
