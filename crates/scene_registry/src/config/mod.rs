//! Configuration system
//!
//! Scene defaults live in a [`SceneConfig`] that can be loaded from TOML or RON.
//! The defaults feed the `get_or_create` paths that have no explicit
//! constructor arguments, such as creating a viewport by name only.

use crate::foundation::math::Vec3;
use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Defaults applied to viewports created without explicit dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportDefaults {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Whether new viewports render a light field
    pub light_field: bool,
}

impl Default for ViewportDefaults {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            light_field: false,
        }
    }
}

/// Defaults applied to cameras created without explicit parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDefaults {
    /// World space position
    pub position: Vec3,
    /// View direction
    pub forward: Vec3,
    /// World up vector
    pub world_up: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            forward: Vec3::new(0.0, 0.0, -1.0),
            world_up: Vec3::new(0.0, 1.0, 0.0),
            fov: 45.0,
        }
    }
}

/// Scene-wide registry configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Viewport defaults
    pub viewport: ViewportDefaults,
    /// Camera defaults
    pub camera: CameraDefaults,
}

impl Config for SceneConfig {}

impl SceneConfig {
    /// Check that the defaults describe constructible resources
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "viewport size must be non-zero, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        if !(self.camera.fov > 0.0 && self.camera.fov < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "camera fov must be within (0, 180) degrees, got {}",
                self.camera.fov
            )));
        }
        Ok(())
    }

    /// Load from file and validate in one step
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
