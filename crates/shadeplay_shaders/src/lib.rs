//! Shadeplay shader definitions
//!
//! Host-side descriptions of each compute kernel: which entry point to call,
//! which parameter record to bind, and how time-driven values advance between
//! frames.
//!
//! ```rust
//! use shadeplay_shaders::{ShaderKind, ShaderState};
//!
//! let mut state = ShaderState::new(ShaderKind::Example.definition());
//! state.update_with_delta(0.5);
//!
//! let frame = state.encode()?;
//! assert_eq!(frame.function_name, "exampleShader");
//! assert_eq!(frame.bytes, 0.5f32.to_ne_bytes());
//! # Ok::<(), shadeplay_shaders::ShaderError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod controls;
pub mod definition;
pub mod demo;
pub mod error;
pub mod presets;
pub mod runtime;
pub mod sdf;
pub mod shaping;
pub mod state;

pub use catalog::{ShaderDefinition, ShaderGroup, ShaderKind};
pub use color::ColorPickerShader;
pub use config::{LayoutSection, PlaygroundConfig, PlaygroundSection, CONFIG_FILE_NAME};
pub use controls::{Control, ControlKind, ControlValue, SliderRange};
pub use definition::ComputeShaderDefinition;
pub use demo::{
    DistanceFieldShader, ExampleShader1, ExampleShader2, SineTransitionShader, StaticKernel,
    StaticShader, TimeShader,
};
pub use error::{Result, ShaderError};
pub use presets::PresetStore;
pub use runtime::{AnimationPhases, RuntimeProperties};
pub use sdf::SdfShader;
pub use shaping::ShapingShader;
pub use state::{FrameParameters, ShaderState};
