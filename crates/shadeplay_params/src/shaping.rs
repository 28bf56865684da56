//! Shaping-function parameter records
//!
//! One record per shaping kernel. They share no base type: each is only
//! meaningful to its own kernel.

use crate::layout::gpu_record;
use serde::{Deserialize, Serialize};

/// `y = pow(x, exponent)`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct ExponentialFunctionParams {
    pub exponent: f32,
}

impl ExponentialFunctionParams {
    pub fn new(exponent: f32) -> Self {
        Self { exponent }
    }
}

impl Default for ExponentialFunctionParams {
    fn default() -> Self {
        Self::new(5.0)
    }
}

/// Hard step at `threshold`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct StepFunctionParams {
    pub threshold: f32,
}

impl StepFunctionParams {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl Default for StepFunctionParams {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// Hermite step between two edges
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothStepFunctionParams {
    pub edge0: f32,
    pub edge1: f32,
}

impl SmoothStepFunctionParams {
    pub fn new(edge0: f32, edge1: f32) -> Self {
        Self { edge0, edge1 }
    }
}

impl Default for SmoothStepFunctionParams {
    fn default() -> Self {
        Self::new(0.1, 0.9)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFunctionParams {
    pub base: f32,
    pub offset: f32,
}

impl LogFunctionParams {
    pub fn new(base: f32, offset: f32) -> Self {
        Self { base, offset }
    }
}

impl Default for LogFunctionParams {
    fn default() -> Self {
        Self::new(0.1, 0.1)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct SqrtFunctionParams {
    pub scale: f32,
}

impl SqrtFunctionParams {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }
}

impl Default for SqrtFunctionParams {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Exponential impulse, peaking at `x = 1/k`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpImpulseParams {
    pub k: f32,
}

impl ExpImpulseParams {
    pub fn new(k: f32) -> Self {
        Self { k }
    }
}

impl Default for ExpImpulseParams {
    fn default() -> Self {
        Self::new(5.0)
    }
}

/// Sinc curve with a vertical offset
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct SincFunctionParams {
    pub k: f32,
    pub addition: f32,
}

impl SincFunctionParams {
    pub fn new(k: f32, addition: f32) -> Self {
        Self { k, addition }
    }
}

impl Default for SincFunctionParams {
    fn default() -> Self {
        Self::new(10.0, 0.25)
    }
}

/// Tone-mapping curve
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneFunctionParams {
    pub k: f32,
}

impl ToneFunctionParams {
    pub fn new(k: f32) -> Self {
        Self { k }
    }
}

impl Default for ToneFunctionParams {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Cubic pulse of half-width `width` centered at `center`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct CubicPulseParams {
    pub center: f32,
    pub width: f32,
}

impl CubicPulseParams {
    pub fn new(center: f32, width: f32) -> Self {
        Self { center, width }
    }
}

impl Default for CubicPulseParams {
    fn default() -> Self {
        Self::new(0.5, 0.2)
    }
}

gpu_record!(ExponentialFunctionParams, "ExponentialFunctionParams", { exponent: Float });
gpu_record!(StepFunctionParams, "StepFunctionParams", { threshold: Float });
gpu_record!(SmoothStepFunctionParams, "SmoothStepFunctionParams", { edge0: Float, edge1: Float });
gpu_record!(LogFunctionParams, "LogFunctionParams", { base: Float, offset: Float });
gpu_record!(SqrtFunctionParams, "SqrtFunctionParams", { scale: Float });
gpu_record!(ExpImpulseParams, "ExpImpulseParams", { k: Float });
gpu_record!(SincFunctionParams, "SincFunctionParams", { k: Float, addition: Float });
gpu_record!(ToneFunctionParams, "ToneFunctionParams", { k: Float });
gpu_record!(CubicPulseParams, "CubicPulseParams", { center: Float, width: Float });

// Size assertions to catch shader/host mismatches at compile time
const _: () = assert!(std::mem::size_of::<ExponentialFunctionParams>() == 4);
const _: () = assert!(std::mem::size_of::<StepFunctionParams>() == 4);
const _: () = assert!(std::mem::size_of::<SmoothStepFunctionParams>() == 8);
const _: () = assert!(std::mem::size_of::<LogFunctionParams>() == 8);
const _: () = assert!(std::mem::size_of::<SqrtFunctionParams>() == 4);
const _: () = assert!(std::mem::size_of::<ExpImpulseParams>() == 4);
const _: () = assert!(std::mem::size_of::<SincFunctionParams>() == 8);
const _: () = assert!(std::mem::size_of::<ToneFunctionParams>() == 4);
const _: () = assert!(std::mem::size_of::<CubicPulseParams>() == 8);
