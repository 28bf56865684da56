//! Playground configuration (shadeplay.toml)

use crate::catalog::ShaderKind;
use crate::error::{Result, ShaderError};
use serde::{Deserialize, Serialize};
use shadeplay_params::SdfRevision;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "shadeplay.toml";

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PlaygroundConfig {
    #[serde(default)]
    pub playground: PlaygroundSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PlaygroundSection {
    /// Kernel name of the shader shown at startup
    #[serde(default = "default_shader")]
    pub default_shader: String,
    #[serde(default = "default_fps")]
    pub preferred_fps: u32,
    #[serde(default = "default_presets_path")]
    pub presets_path: PathBuf,
}

fn default_shader() -> String {
    ShaderKind::Sdf.id().to_string()
}

fn default_fps() -> u32 {
    60
}

fn default_presets_path() -> PathBuf {
    PathBuf::from("shadeplay-presets.json")
}

fn default_true() -> bool {
    true
}

impl Default for PlaygroundSection {
    fn default() -> Self {
        Self {
            default_shader: default_shader(),
            preferred_fps: default_fps(),
            presets_path: default_presets_path(),
        }
    }
}

/// Parameter layout checks
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct LayoutSection {
    /// Check host records against the WGSL declarations before running
    #[serde(default = "default_true")]
    pub verify_on_startup: bool,
    /// SDF record revision the kernels were compiled against
    #[serde(default)]
    pub sdf_revision: SdfRevision,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            verify_on_startup: true,
            sdf_revision: SdfRevision::default(),
        }
    }
}

impl PlaygroundConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ShaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ShaderError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn default_shader_kind(&self) -> Result<ShaderKind> {
        self.playground.default_shader.parse()
    }

    /// Target time between frames (`preferred_fps` of 0 means 60)
    pub fn frame_interval(&self) -> Duration {
        let fps = match self.playground.preferred_fps {
            0 => default_fps(),
            fps => fps,
        };
        Duration::from_secs_f64(1.0 / f64::from(fps))
    }
}
