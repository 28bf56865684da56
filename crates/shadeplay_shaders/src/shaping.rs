//! Shaping-function kernels
//!
//! Every variant plots `y = f(x)` over the unit square. Apart from
//! [`ShapingShader::Linear`], each carries the record its kernel reads.

use crate::controls::{unknown_control, Control, ControlValue, SliderRange};
use crate::definition::{record_bytes, ComputeShaderDefinition};
use crate::error::Result;
use crate::runtime::RuntimeProperties;
use serde::{Deserialize, Serialize};
use shadeplay_params::{
    CubicPulseParams, ExpImpulseParams, ExponentialFunctionParams, GpuRecord, LogFunctionParams,
    SincFunctionParams, SmoothStepFunctionParams, SqrtFunctionParams, StepFunctionParams,
    ToneFunctionParams,
};

const EXPONENT: SliderRange = SliderRange::stepped(0.0, 20.0, 0.1);
const THRESHOLD: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const EDGE: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const LOG_BASE: SliderRange = SliderRange::continuous(0.1, 0.9999);
const LOG_OFFSET: SliderRange = SliderRange::continuous(0.001, 0.1);
const SQRT_SCALE: SliderRange = SliderRange::stepped(0.1, 10.0, 0.1);
const IMPULSE_K: SliderRange = SliderRange::stepped(0.1, 20.0, 0.1);
const SINC_K: SliderRange = SliderRange::stepped(0.1, 20.0, 0.1);
const SINC_ADDITION: SliderRange = SliderRange::stepped(-1.0, 1.0, 0.01);
const PULSE_CENTER: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const PULSE_WIDTH: SliderRange = SliderRange::stepped(0.01, 0.5, 0.01);
const TONE_K: SliderRange = SliderRange::stepped(0.1, 20.0, 0.1);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "function", rename_all = "snake_case")]
pub enum ShapingShader {
    Linear,
    Exponential(ExponentialFunctionParams),
    Step(StepFunctionParams),
    SmoothStep(SmoothStepFunctionParams),
    Log(LogFunctionParams),
    Sqrt(SqrtFunctionParams),
    ExpImpulse(ExpImpulseParams),
    Sinc(SincFunctionParams),
    Tone(ToneFunctionParams),
    CubicPulse(CubicPulseParams),
}

impl ShapingShader {
    /// Every shaping kernel with default parameters, in menu order
    pub fn all() -> Vec<ShapingShader> {
        vec![
            ShapingShader::Linear,
            ShapingShader::Exponential(Default::default()),
            ShapingShader::Step(Default::default()),
            ShapingShader::SmoothStep(Default::default()),
            ShapingShader::Log(Default::default()),
            ShapingShader::Sqrt(Default::default()),
            ShapingShader::ExpImpulse(Default::default()),
            ShapingShader::Sinc(Default::default()),
            ShapingShader::Tone(Default::default()),
            ShapingShader::CubicPulse(Default::default()),
        ]
    }

    /// Short label for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapingShader::Linear => "lerp",
            ShapingShader::Exponential(_) => "expo",
            ShapingShader::Step(_) => "step",
            ShapingShader::SmoothStep(_) => "smooth",
            ShapingShader::Log(_) => "log",
            ShapingShader::Sqrt(_) => "sqrt",
            ShapingShader::ExpImpulse(_) => "expImpulse",
            ShapingShader::Sinc(_) => "sinc",
            ShapingShader::Tone(_) => "tone",
            ShapingShader::CubicPulse(_) => "cubicPulse",
        }
    }

    /// Default-configured variant for a kernel name
    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.function_name() == name)
    }

    fn record(&self) -> Option<(usize, Vec<u8>)> {
        fn pack<T: GpuRecord>(record: &T) -> Option<(usize, Vec<u8>)> {
            Some((T::stride(), record_bytes(record)))
        }
        match self {
            ShapingShader::Linear => None,
            ShapingShader::Exponential(p) => pack(p),
            ShapingShader::Step(p) => pack(p),
            ShapingShader::SmoothStep(p) => pack(p),
            ShapingShader::Log(p) => pack(p),
            ShapingShader::Sqrt(p) => pack(p),
            ShapingShader::ExpImpulse(p) => pack(p),
            ShapingShader::Sinc(p) => pack(p),
            ShapingShader::Tone(p) => pack(p),
            ShapingShader::CubicPulse(p) => pack(p),
        }
    }
}

impl ComputeShaderDefinition for ShapingShader {
    fn function_name(&self) -> &'static str {
        match self {
            ShapingShader::Linear => "linearInterpolation",
            ShapingShader::Exponential(_) => "exponentialFunction",
            ShapingShader::Step(_) => "stepFunction",
            ShapingShader::SmoothStep(_) => "smoothStepFunction",
            ShapingShader::Log(_) => "logFunction",
            ShapingShader::Sqrt(_) => "sqrtFunction",
            ShapingShader::ExpImpulse(_) => "expImpulseFunction",
            ShapingShader::Sinc(_) => "sincFunction",
            ShapingShader::Tone(_) => "toneFunction",
            ShapingShader::CubicPulse(_) => "cubicPulseFunction",
        }
    }

    fn byte_length(&self) -> usize {
        self.record().map_or(0, |(len, _)| len)
    }

    fn encode_parameters(&self, _runtime: &RuntimeProperties) -> Vec<u8> {
        self.record().map(|(_, bytes)| bytes).unwrap_or_default()
    }

    fn controls(&self) -> Vec<Control> {
        match self {
            ShapingShader::Linear => Vec::new(),
            ShapingShader::Exponential(_) => {
                vec![Control::slider("exponent", "Exponent", EXPONENT)]
            }
            ShapingShader::Step(_) => vec![Control::slider("threshold", "Threshold", THRESHOLD)],
            ShapingShader::SmoothStep(_) => vec![
                Control::slider("edge0", "Edge 0", EDGE),
                Control::slider("edge1", "Edge 1", EDGE),
            ],
            ShapingShader::Log(_) => vec![
                Control::slider("base", "Base", LOG_BASE),
                Control::slider("offset", "Offset", LOG_OFFSET),
            ],
            ShapingShader::Sqrt(_) => vec![Control::slider("scale", "Scale", SQRT_SCALE)],
            ShapingShader::ExpImpulse(_) => vec![Control::slider("k", "k", IMPULSE_K)],
            ShapingShader::Sinc(_) => vec![
                Control::slider("k", "k", SINC_K),
                Control::slider("addition", "Addition", SINC_ADDITION),
            ],
            ShapingShader::Tone(_) => vec![Control::slider("k", "k", TONE_K)],
            ShapingShader::CubicPulse(_) => vec![
                Control::slider("center", "Center", PULSE_CENTER),
                Control::slider("width", "Width", PULSE_WIDTH),
            ],
        }
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        let function = self.function_name();
        match (self, id) {
            (ShapingShader::Exponential(p), "exponent") => {
                p.exponent = value.number_in(id, EXPONENT)?
            }
            (ShapingShader::Step(p), "threshold") => p.threshold = value.number_in(id, THRESHOLD)?,
            (ShapingShader::SmoothStep(p), "edge0") => p.edge0 = value.number_in(id, EDGE)?,
            (ShapingShader::SmoothStep(p), "edge1") => p.edge1 = value.number_in(id, EDGE)?,
            (ShapingShader::Log(p), "base") => p.base = value.number_in(id, LOG_BASE)?,
            (ShapingShader::Log(p), "offset") => p.offset = value.number_in(id, LOG_OFFSET)?,
            (ShapingShader::Sqrt(p), "scale") => p.scale = value.number_in(id, SQRT_SCALE)?,
            (ShapingShader::ExpImpulse(p), "k") => p.k = value.number_in(id, IMPULSE_K)?,
            (ShapingShader::Sinc(p), "k") => p.k = value.number_in(id, SINC_K)?,
            (ShapingShader::Sinc(p), "addition") => {
                p.addition = value.number_in(id, SINC_ADDITION)?
            }
            (ShapingShader::Tone(p), "k") => p.k = value.number_in(id, TONE_K)?,
            (ShapingShader::CubicPulse(p), "center") => {
                p.center = value.number_in(id, PULSE_CENTER)?
            }
            (ShapingShader::CubicPulse(p), "width") => p.width = value.number_in(id, PULSE_WIDTH)?,
            _ => return Err(unknown_control(function, id)),
        }
        Ok(())
    }
}
