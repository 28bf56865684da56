//! Parameters for the introductory example kernels

use crate::layout::{flag, gpu_record, is_set};

/// Elapsed time for the basic animated kernel
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ExampleShaderParams {
    /// Seconds
    pub time: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DistanceFieldParams {
    pub width: f32,
}

/// Animation and hue-rotation phases
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ExampleComputeShader1Params {
    pub animation_phase: f32,
    pub hue_rotate_phase: f32,
}

/// Animation and hue-rotation phases plus a circle/box switch
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ExampleComputeShader2Params {
    pub animation_phase: f32,
    pub hue_rotate_phase: f32,
    /// Non-zero draws a box instead of a circle
    pub is_box: i32,
}

impl ExampleComputeShader2Params {
    pub fn new(animation_phase: f32, hue_rotate_phase: f32, is_box: bool) -> Self {
        Self {
            animation_phase,
            hue_rotate_phase,
            is_box: flag(is_box),
        }
    }

    pub fn draws_box(&self) -> bool {
        is_set(self.is_box)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SineTransitionParams {
    pub phase: f32,
}

gpu_record!(ExampleShaderParams, "ExampleShaderParams", { time: Float });
gpu_record!(DistanceFieldParams, "DistanceFieldParams", { width: Float });
gpu_record!(ExampleComputeShader1Params, "ExampleComputeShader1Params", {
    animation_phase: Float,
    hue_rotate_phase: Float,
});
gpu_record!(ExampleComputeShader2Params, "ExampleComputeShader2Params", {
    animation_phase: Float,
    hue_rotate_phase: Float,
    is_box: Int,
});
gpu_record!(SineTransitionParams, "SineTransitionParams", { phase: Float });

const _: () = assert!(std::mem::size_of::<ExampleShaderParams>() == 4);
const _: () = assert!(std::mem::size_of::<DistanceFieldParams>() == 4);
const _: () = assert!(std::mem::size_of::<ExampleComputeShader1Params>() == 8);
const _: () = assert!(std::mem::size_of::<ExampleComputeShader2Params>() == 12);
const _: () = assert!(std::mem::size_of::<SineTransitionParams>() == 4);
