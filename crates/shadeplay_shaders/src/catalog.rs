//! Catalog of every kernel the playground can drive

use crate::color::ColorPickerShader;
use crate::controls::{Control, ControlValue};
use crate::definition::ComputeShaderDefinition;
use crate::demo::{
    DistanceFieldShader, ExampleShader1, ExampleShader2, SineTransitionShader, StaticKernel,
    StaticShader, TimeShader,
};
use crate::error::{Result, ShaderError};
use crate::runtime::RuntimeProperties;
use crate::sdf::SdfShader;
use crate::shaping::ShapingShader;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Menu section a shader is listed under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderGroup {
    SimpleExamples,
    BookOfShaders,
    Sdf,
}

impl ShaderGroup {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::SimpleExamples => "Simple Examples",
            Self::BookOfShaders => "Book of Shaders",
            Self::Sdf => "SDF",
        }
    }
}

/// Every shader, identified by its kernel name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Example,
    Example1,
    Example2,
    DistanceField,
    HelloWorld,
    Borders,
    ColorGradient,
    PolarColorGradient,
    Coordinates,
    ColorPicker,
    SineTransition,
    Linear,
    Exponential,
    Step,
    SmoothStep,
    Log,
    Sqrt,
    ExpImpulse,
    Sinc,
    Tone,
    CubicPulse,
    Sdf,
}

impl ShaderKind {
    pub const ALL: [ShaderKind; 22] = [
        ShaderKind::Example,
        ShaderKind::Example1,
        ShaderKind::Example2,
        ShaderKind::DistanceField,
        ShaderKind::HelloWorld,
        ShaderKind::Borders,
        ShaderKind::ColorGradient,
        ShaderKind::PolarColorGradient,
        ShaderKind::Coordinates,
        ShaderKind::ColorPicker,
        ShaderKind::SineTransition,
        ShaderKind::Linear,
        ShaderKind::Exponential,
        ShaderKind::Step,
        ShaderKind::SmoothStep,
        ShaderKind::Log,
        ShaderKind::Sqrt,
        ShaderKind::ExpImpulse,
        ShaderKind::Sinc,
        ShaderKind::Tone,
        ShaderKind::CubicPulse,
        ShaderKind::Sdf,
    ];

    /// Stable id, equal to the kernel name
    pub fn id(self) -> &'static str {
        match self {
            Self::Example => "exampleShader",
            Self::Example1 => "exampleComputeShader1",
            Self::Example2 => "exampleComputeShader2",
            Self::DistanceField => "distanceField",
            Self::HelloWorld => "helloWorld",
            Self::Borders => "borders",
            Self::ColorGradient => "colorGradient",
            Self::PolarColorGradient => "polarColorGradient",
            Self::Coordinates => "coordinates",
            Self::ColorPicker => "colorPickerShader",
            Self::SineTransition => "sineTransition",
            Self::Linear => "linearInterpolation",
            Self::Exponential => "exponentialFunction",
            Self::Step => "stepFunction",
            Self::SmoothStep => "smoothStepFunction",
            Self::Log => "logFunction",
            Self::Sqrt => "sqrtFunction",
            Self::ExpImpulse => "expImpulseFunction",
            Self::Sinc => "sincFunction",
            Self::Tone => "toneFunction",
            Self::CubicPulse => "cubicPulseFunction",
            Self::Sdf => "sdfDrawing",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Example => "Basic Cross Platform MetalView",
            Self::Example1 => "example 1",
            Self::Example2 => "example 2",
            Self::DistanceField => "Distance Field",
            Self::HelloWorld => "Hello World",
            Self::Borders => "Borders",
            Self::ColorGradient => "Color Gradient",
            Self::PolarColorGradient => "Polar Color Gradient",
            Self::Coordinates => "Coordinates",
            Self::ColorPicker => "Color Picker",
            Self::SineTransition => "Sine Transition",
            Self::Linear => "lerp",
            Self::Exponential => "expo",
            Self::Step => "step",
            Self::SmoothStep => "smooth",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::ExpImpulse => "expImpulse",
            Self::Sinc => "sinc",
            Self::Tone => "tone",
            Self::CubicPulse => "cubicPulse",
            Self::Sdf => "SDF Drawing",
        }
    }

    pub fn group(self) -> ShaderGroup {
        match self {
            Self::Example | Self::Example1 | Self::Example2 | Self::DistanceField => {
                ShaderGroup::SimpleExamples
            }
            Self::Sdf => ShaderGroup::Sdf,
            _ => ShaderGroup::BookOfShaders,
        }
    }

    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == name)
    }

    /// Default definition for this kind
    pub fn definition(self) -> ShaderDefinition {
        ShaderDefinition::for_kind(self)
    }
}

impl FromStr for ShaderKind {
    type Err = ShaderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_function_name(s.trim()).ok_or_else(|| ShaderError::UnknownShader(s.to_string()))
    }
}

impl Display for ShaderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Any shader definition, as stored in presets and driven by the state manager
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shader", content = "settings", rename_all = "snake_case")]
pub enum ShaderDefinition {
    Static(StaticShader),
    Time(TimeShader),
    Example1(ExampleShader1),
    Example2(ExampleShader2),
    DistanceField(DistanceFieldShader),
    SineTransition(SineTransitionShader),
    ColorPicker(ColorPickerShader),
    Shaping(ShapingShader),
    Sdf(SdfShader),
}

impl ShaderDefinition {
    pub fn for_kind(kind: ShaderKind) -> Self {
        match kind {
            ShaderKind::Example => Self::Time(TimeShader),
            ShaderKind::Example1 => Self::Example1(ExampleShader1::default()),
            ShaderKind::Example2 => Self::Example2(ExampleShader2::default()),
            ShaderKind::DistanceField => Self::DistanceField(DistanceFieldShader::default()),
            ShaderKind::HelloWorld => Self::Static(StaticShader::new(StaticKernel::HelloWorld)),
            ShaderKind::Borders => Self::Static(StaticShader::new(StaticKernel::Borders)),
            ShaderKind::ColorGradient => {
                Self::Static(StaticShader::new(StaticKernel::ColorGradient))
            }
            ShaderKind::PolarColorGradient => {
                Self::Static(StaticShader::new(StaticKernel::PolarColorGradient))
            }
            ShaderKind::Coordinates => Self::Static(StaticShader::new(StaticKernel::Coordinates)),
            ShaderKind::ColorPicker => Self::ColorPicker(ColorPickerShader::default()),
            ShaderKind::SineTransition => Self::SineTransition(SineTransitionShader::default()),
            ShaderKind::Sdf => Self::Sdf(SdfShader::default()),
            shaping => Self::Shaping(
                ShapingShader::from_function_name(shaping.id()).unwrap_or(ShapingShader::Linear),
            ),
        }
    }

    pub fn kind(&self) -> ShaderKind {
        // Every definition's kernel name is in the catalog.
        ShaderKind::from_function_name(self.function_name()).unwrap_or(ShaderKind::Example)
    }

    fn inner(&self) -> &dyn ComputeShaderDefinition {
        match self {
            Self::Static(d) => d,
            Self::Time(d) => d,
            Self::Example1(d) => d,
            Self::Example2(d) => d,
            Self::DistanceField(d) => d,
            Self::SineTransition(d) => d,
            Self::ColorPicker(d) => d,
            Self::Shaping(d) => d,
            Self::Sdf(d) => d,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ComputeShaderDefinition {
        match self {
            Self::Static(d) => d,
            Self::Time(d) => d,
            Self::Example1(d) => d,
            Self::Example2(d) => d,
            Self::DistanceField(d) => d,
            Self::SineTransition(d) => d,
            Self::ColorPicker(d) => d,
            Self::Shaping(d) => d,
            Self::Sdf(d) => d,
        }
    }
}

impl Default for ShaderDefinition {
    fn default() -> Self {
        Self::Sdf(SdfShader::default())
    }
}

impl ComputeShaderDefinition for ShaderDefinition {
    fn function_name(&self) -> &'static str {
        self.inner().function_name()
    }

    fn byte_length(&self) -> usize {
        self.inner().byte_length()
    }

    fn encode_parameters(&self, runtime: &RuntimeProperties) -> Vec<u8> {
        self.inner().encode_parameters(runtime)
    }

    fn update_runtime_properties(&self, runtime: &mut RuntimeProperties, delta_seconds: f64) {
        self.inner().update_runtime_properties(runtime, delta_seconds)
    }

    fn controls(&self) -> Vec<Control> {
        self.inner().controls()
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        self.inner_mut().set_control(id, value)
    }
}
