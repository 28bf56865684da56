//! Shadeplay parameter contract
//!
//! Fixed-layout records that host code writes and GPU kernels read. Every
//! record is `#[repr(C)]` and `bytemuck::Pod`, with explicit padding where the
//! shader side aligns `vec2`/`vec4` members, so the bytes handed to a kernel
//! are exactly the struct the kernel declares.
//!
//! - **SDF**: [`SdfParams`] and the [`SdfPrimitive`] shape tag, plus the
//!   earlier schema revisions as separately named records
//! - **Shaping functions**: one small record per shaping kernel
//! - **Color picker**: [`ColorPickerParams`]
//! - **Examples**: records for the introductory kernels
//!
//! This crate root is the single import point for all of them. The WGSL side
//! of the contract lives in [`wgsl::PARAMS_WGSL`] and is checked against the
//! host layouts by [`wgsl::ShaderDeclarations::verify_all`].
//!
//! ```rust
//! use shadeplay_params::{GpuRecord, SdfParams, SdfPrimitive};
//!
//! let params = SdfParams::new(SdfPrimitive::RoundedBox)
//!     .with_intensity(0.75)
//!     .with_repetitions(2.0, 2.0);
//!
//! assert_eq!(params.as_bytes().len(), 64);
//! ```

pub mod color;
pub mod demo;
pub mod error;
pub mod layout;
pub mod sdf;
pub mod shaping;
pub mod wgsl;

pub use color::ColorPickerParams;
pub use demo::{
    DistanceFieldParams, ExampleComputeShader1Params, ExampleComputeShader2Params,
    ExampleShaderParams, SineTransitionParams,
};
pub use error::{ParamsError, Result};
pub use layout::{flag, is_set, FieldKind, FieldLayout, GpuRecord, RecordLayout};
pub use sdf::{SdfParams, SdfParamsV1, SdfParamsV2, SdfParamsV3, SdfParamsV4, SdfPrimitive, SdfRevision};
pub use shaping::{
    CubicPulseParams, ExpImpulseParams, ExponentialFunctionParams, LogFunctionParams,
    SincFunctionParams, SmoothStepFunctionParams, SqrtFunctionParams, StepFunctionParams,
    ToneFunctionParams,
};
pub use wgsl::{ShaderDeclarations, StructLayout, PARAMS_WGSL};

/// Shader-side names of every record exported by this crate
pub const RECORD_NAMES: &[&str] = &[
    "SDFParamsV1",
    "SDFParamsV2",
    "SDFParamsV3",
    "SDFParams",
    "ExponentialFunctionParams",
    "StepFunctionParams",
    "SmoothStepFunctionParams",
    "LogFunctionParams",
    "SqrtFunctionParams",
    "ExpImpulseParams",
    "SincFunctionParams",
    "ToneFunctionParams",
    "CubicPulseParams",
    "ColorPickerParams",
    "ExampleShaderParams",
    "DistanceFieldParams",
    "ExampleComputeShader1Params",
    "ExampleComputeShader2Params",
    "SineTransitionParams",
];

/// Layouts of every record, in [`RECORD_NAMES`] order
pub fn record_layouts() -> Vec<RecordLayout> {
    vec![
        SdfParamsV1::layout(),
        SdfParamsV2::layout(),
        SdfParamsV3::layout(),
        SdfParams::layout(),
        ExponentialFunctionParams::layout(),
        StepFunctionParams::layout(),
        SmoothStepFunctionParams::layout(),
        LogFunctionParams::layout(),
        SqrtFunctionParams::layout(),
        ExpImpulseParams::layout(),
        SincFunctionParams::layout(),
        ToneFunctionParams::layout(),
        CubicPulseParams::layout(),
        ColorPickerParams::layout(),
        ExampleShaderParams::layout(),
        DistanceFieldParams::layout(),
        ExampleComputeShader1Params::layout(),
        ExampleComputeShader2Params::layout(),
        SineTransitionParams::layout(),
    ]
}

/// Layout of the record called `name`
pub fn record_layout(name: &str) -> Option<RecordLayout> {
    record_layouts().into_iter().find(|l| l.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_names_match_layouts() {
        let names: Vec<&str> = record_layouts().iter().map(|l| l.name).collect();
        assert_eq!(names, RECORD_NAMES);
    }

    #[test]
    fn test_record_layout_lookup() {
        assert_eq!(record_layout("SDFParams").map(|l| l.size), Some(64));
        assert!(record_layout("Unknown").is_none());
    }

    #[test]
    fn test_padding_only_where_shader_aligns() {
        for layout in record_layouts() {
            let mut expected_offset = 0;
            for field in layout.fields {
                assert_eq!(
                    field.offset, expected_offset,
                    "{}.{} leaves an implicit gap",
                    layout.name, field.name
                );
                expected_offset += field.size();
            }
            assert_eq!(expected_offset, layout.size, "{} has trailing slack", layout.name);
        }
    }
}
