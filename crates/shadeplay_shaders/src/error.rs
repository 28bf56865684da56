//! Shader definition error types

use shadeplay_params::ParamsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by shader definitions, presets and configuration
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Parameter contract violation
    #[error(transparent)]
    Params(#[from] ParamsError),

    /// No shader with this kernel name
    #[error("unknown shader: {0}")]
    UnknownShader(String),

    /// Control id not offered by the shader
    #[error("{shader} has no control named {control:?}")]
    UnknownControl {
        shader: &'static str,
        control: String,
    },

    /// Control value of the wrong kind (or not finite)
    #[error("control {control:?} expects {expected}")]
    ControlValue {
        control: String,
        expected: &'static str,
    },

    /// Encoded parameter block has the wrong size
    #[error("{function}: encoded {actual} bytes, expected {expected}")]
    ByteLength {
        function: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Preset names must contain something other than whitespace
    #[error("preset name must not be empty")]
    EmptyPresetName,

    #[error("no preset named {0:?}")]
    UnknownPreset(String),

    /// Filesystem access failed
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preset file is not valid JSON for the preset schema
    #[error("invalid preset file {}: {source}", .path.display())]
    PresetFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Config file is not valid TOML for the config schema
    #[error("invalid config {}: {source}", .path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to serialize presets: {0}")]
    PresetSerialize(#[source] serde_json::Error),
}

/// Result type for shader operations
pub type Result<T> = std::result::Result<T, ShaderError>;
