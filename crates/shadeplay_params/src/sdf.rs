//! Signed distance field parameters
//!
//! [`SdfParams`] is the current schema. Earlier layouts that shipped with
//! older kernels are kept as explicit records ([`SdfParamsV1`],
//! [`SdfParamsV2`], [`SdfParamsV3`]) with conversions to and from the
//! current one, so a producer always states which revision it writes.
//!
//! Memory layout of the current revision (64 bytes, shader align 8):
//! - should_mask: `i32`              @0
//! - shape: `u32`                    @4
//! - intensity: `f32`                @8
//! - (padding)                       @12
//! - repetitions: `vec2<f32>`        @16
//! - should_flip_alternating: `i32`  @24
//! - rotation: `f32`                 @28
//! - blend_k: `f32`                  @32
//! - scale: `f32`                    @36
//! - shell_thickness: `f32`          @40
//! - should_make_annular: `i32`      @44
//! - pattern_frequency: `f32`        @48
//! - should_apply_pattern: `i32`     @52
//! - pattern_phase: `f32`            @56
//! - contrast: `f32`                 @60

use crate::error::{ParamsError, Result};
use crate::layout::{flag, gpu_record, is_set, GpuRecord};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Distance function selector (must match shader `SDF_*` constants)
///
/// Values cross the host/GPU boundary. New primitives are appended with the
/// next free value; existing values never change.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdfPrimitive {
    #[default]
    Circle = 0,
    Box = 1,
    Triangle = 2,
    RoundedBox = 3,
    /// Rendered as a hexagon by the kernel (six sides)
    RegularPolygon = 4,
    Line = 5,
    Capsule = 6,
    Ellipse = 7,
    Cross = 8,
    Pentagram = 9,
    UnevenCapsule = 10,
    Heart = 11,
    Pie = 12,
}

impl SdfPrimitive {
    /// Every primitive, in value order
    pub const ALL: [SdfPrimitive; 13] = [
        SdfPrimitive::Circle,
        SdfPrimitive::Box,
        SdfPrimitive::Triangle,
        SdfPrimitive::RoundedBox,
        SdfPrimitive::RegularPolygon,
        SdfPrimitive::Line,
        SdfPrimitive::Capsule,
        SdfPrimitive::Ellipse,
        SdfPrimitive::Cross,
        SdfPrimitive::Pentagram,
        SdfPrimitive::UnevenCapsule,
        SdfPrimitive::Heart,
        SdfPrimitive::Pie,
    ];

    /// Value written into `SdfParams::shape`
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Stable id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Box => "box",
            Self::Triangle => "triangle",
            Self::RoundedBox => "rounded_box",
            Self::RegularPolygon => "regular_polygon",
            Self::Line => "line",
            Self::Capsule => "capsule",
            Self::Ellipse => "ellipse",
            Self::Cross => "cross",
            Self::Pentagram => "pentagram",
            Self::UnevenCapsule => "uneven_capsule",
            Self::Heart => "heart",
            Self::Pie => "pie",
        }
    }

    /// User-facing name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Box => "Box",
            Self::Triangle => "Triangle",
            Self::RoundedBox => "Rounded Box",
            Self::RegularPolygon => "Hexagon",
            Self::Line => "Line",
            Self::Capsule => "Capsule",
            Self::Ellipse => "Ellipse",
            Self::Cross => "Cross",
            Self::Pentagram => "Pentagram",
            Self::UnevenCapsule => "Uneven Capsule",
            Self::Heart => "Heart",
            Self::Pie => "Pie",
        }
    }

    /// Name of the matching WGSL constant, e.g. `SDF_ROUNDED_BOX`
    pub fn shader_constant(self) -> String {
        format!("SDF_{}", self.id().to_ascii_uppercase())
    }
}

impl TryFrom<u32> for SdfPrimitive {
    type Error = ParamsError;

    fn try_from(value: u32) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(ParamsError::UnknownPrimitive(value))
    }
}

impl From<SdfPrimitive> for u32 {
    fn from(primitive: SdfPrimitive) -> Self {
        primitive.value()
    }
}

impl FromStr for SdfPrimitive {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id() == s)
            .ok_or_else(|| ParamsError::UnknownPrimitiveId(s.to_string()))
    }
}

impl Display for SdfPrimitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// First revision: mask, shape and intensity only
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SdfParamsV1 {
    pub should_mask: i32,
    pub shape: u32,
    pub intensity: f32,
}

/// Second revision: adds tiling, alternating flip and rotation
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SdfParamsV2 {
    pub should_mask: i32,
    pub shape: u32,
    pub intensity: f32,
    _pad0: u32,
    pub repetitions: [f32; 2],
    pub should_flip_alternating: i32,
    pub rotation: f32,
}

/// Third revision: adds shape blending
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SdfParamsV3 {
    pub should_mask: i32,
    pub shape: u32,
    pub intensity: f32,
    _pad0: u32,
    pub repetitions: [f32; 2],
    pub should_flip_alternating: i32,
    pub rotation: f32,
    pub blend_k: f32,
    _pad1: u32,
}

/// Parameters for the `sdfDrawing` kernel (current revision)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SdfParams {
    /// Non-zero masks the output to the shape interior
    pub should_mask: i32,
    /// [`SdfPrimitive`] value
    pub shape: u32,
    pub intensity: f32,
    _pad0: u32,
    /// Tiling repeats along (x, y)
    pub repetitions: [f32; 2],
    /// Non-zero mirrors every other tile
    pub should_flip_alternating: i32,
    /// Radians
    pub rotation: f32,
    /// Smooth-min factor when blending shapes (0 = hard union)
    pub blend_k: f32,
    pub scale: f32,
    /// Ring width when annular
    pub shell_thickness: f32,
    pub should_make_annular: i32,
    pub pattern_frequency: f32,
    pub should_apply_pattern: i32,
    pub pattern_phase: f32,
    pub contrast: f32,
}

/// Alias naming the current revision explicitly
pub type SdfParamsV4 = SdfParams;

impl Default for SdfParams {
    fn default() -> Self {
        Self {
            should_mask: 0,
            shape: SdfPrimitive::Circle.value(),
            intensity: 1.0,
            _pad0: 0,
            repetitions: [1.0, 1.0],
            should_flip_alternating: 0,
            rotation: 0.0,
            blend_k: 0.0,
            scale: 0.5,
            shell_thickness: 0.05,
            should_make_annular: 0,
            pattern_frequency: 5.0,
            should_apply_pattern: 0,
            pattern_phase: 0.0,
            contrast: 1.0,
        }
    }
}

impl SdfParams {
    /// Default parameters drawing `shape`
    pub fn new(shape: SdfPrimitive) -> Self {
        Self::default().with_shape(shape)
    }

    pub fn with_shape(mut self, shape: SdfPrimitive) -> Self {
        self.shape = shape.value();
        self
    }

    pub fn with_mask(mut self, enabled: bool) -> Self {
        self.should_mask = flag(enabled);
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn with_repetitions(mut self, x: f32, y: f32) -> Self {
        self.repetitions = [x, y];
        self
    }

    pub fn with_flip_alternating(mut self, enabled: bool) -> Self {
        self.should_flip_alternating = flag(enabled);
        self
    }

    /// Set rotation in radians
    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.rotation = radians;
        self
    }

    pub fn with_blend_k(mut self, k: f32) -> Self {
        self.blend_k = k;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Render the outline as a ring of `shell_thickness`
    pub fn with_annular(mut self, enabled: bool, shell_thickness: f32) -> Self {
        self.should_make_annular = flag(enabled);
        self.shell_thickness = shell_thickness;
        self
    }

    /// Apply the distance banding pattern
    pub fn with_pattern(mut self, enabled: bool, frequency: f32, phase: f32) -> Self {
        self.should_apply_pattern = flag(enabled);
        self.pattern_frequency = frequency;
        self.pattern_phase = phase;
        self
    }

    pub fn with_contrast(mut self, contrast: f32) -> Self {
        self.contrast = contrast;
        self
    }

    /// Decode the shape tag
    pub fn shape(&self) -> Result<SdfPrimitive> {
        SdfPrimitive::try_from(self.shape)
    }

    pub fn masks(&self) -> bool {
        is_set(self.should_mask)
    }

    pub fn flips_alternating(&self) -> bool {
        is_set(self.should_flip_alternating)
    }

    pub fn is_annular(&self) -> bool {
        is_set(self.should_make_annular)
    }

    pub fn applies_pattern(&self) -> bool {
        is_set(self.should_apply_pattern)
    }

    pub fn to_v1(&self) -> SdfParamsV1 {
        SdfParamsV1 {
            should_mask: self.should_mask,
            shape: self.shape,
            intensity: self.intensity,
        }
    }

    pub fn to_v2(&self) -> SdfParamsV2 {
        SdfParamsV2 {
            should_mask: self.should_mask,
            shape: self.shape,
            intensity: self.intensity,
            _pad0: 0,
            repetitions: self.repetitions,
            should_flip_alternating: self.should_flip_alternating,
            rotation: self.rotation,
        }
    }

    pub fn to_v3(&self) -> SdfParamsV3 {
        SdfParamsV3 {
            should_mask: self.should_mask,
            shape: self.shape,
            intensity: self.intensity,
            _pad0: 0,
            repetitions: self.repetitions,
            should_flip_alternating: self.should_flip_alternating,
            rotation: self.rotation,
            blend_k: self.blend_k,
            _pad1: 0,
        }
    }

    /// Bytes of these parameters laid out as `revision`. Fields the revision
    /// lacks are dropped.
    pub fn encode_revision(&self, revision: SdfRevision) -> Vec<u8> {
        match revision {
            SdfRevision::V1 => self.to_v1().as_bytes().to_vec(),
            SdfRevision::V2 => self.to_v2().as_bytes().to_vec(),
            SdfRevision::V3 => self.to_v3().as_bytes().to_vec(),
            SdfRevision::V4 => self.as_bytes().to_vec(),
        }
    }
}

impl From<SdfParamsV1> for SdfParams {
    fn from(v1: SdfParamsV1) -> Self {
        Self {
            should_mask: v1.should_mask,
            shape: v1.shape,
            intensity: v1.intensity,
            ..Self::default()
        }
    }
}

impl From<SdfParamsV2> for SdfParams {
    fn from(v2: SdfParamsV2) -> Self {
        Self {
            should_mask: v2.should_mask,
            shape: v2.shape,
            intensity: v2.intensity,
            repetitions: v2.repetitions,
            should_flip_alternating: v2.should_flip_alternating,
            rotation: v2.rotation,
            ..Self::default()
        }
    }
}

impl From<SdfParamsV3> for SdfParams {
    fn from(v3: SdfParamsV3) -> Self {
        Self {
            should_mask: v3.should_mask,
            shape: v3.shape,
            intensity: v3.intensity,
            repetitions: v3.repetitions,
            should_flip_alternating: v3.should_flip_alternating,
            rotation: v3.rotation,
            blend_k: v3.blend_k,
            ..Self::default()
        }
    }
}

/// Schema revisions of the SDF parameter record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SdfRevision {
    V1,
    V2,
    V3,
    #[default]
    V4,
}

impl SdfRevision {
    pub const LATEST: SdfRevision = SdfRevision::V4;

    pub const ALL: [SdfRevision; 4] = [
        SdfRevision::V1,
        SdfRevision::V2,
        SdfRevision::V3,
        SdfRevision::V4,
    ];

    /// Record size for this revision
    pub fn byte_len(self) -> usize {
        match self {
            Self::V1 => SdfParamsV1::stride(),
            Self::V2 => SdfParamsV2::stride(),
            Self::V3 => SdfParamsV3::stride(),
            Self::V4 => SdfParams::stride(),
        }
    }

    /// Shader-side struct name
    pub fn record_name(self) -> &'static str {
        match self {
            Self::V1 => SdfParamsV1::NAME,
            Self::V2 => SdfParamsV2::NAME,
            Self::V3 => SdfParamsV3::NAME,
            Self::V4 => SdfParams::NAME,
        }
    }

    /// Decode bytes written in this revision and upgrade to the current schema
    pub fn decode(self, bytes: &[u8]) -> Result<SdfParams> {
        Ok(match self {
            Self::V1 => SdfParamsV1::from_bytes(bytes)?.into(),
            Self::V2 => SdfParamsV2::from_bytes(bytes)?.into(),
            Self::V3 => SdfParamsV3::from_bytes(bytes)?.into(),
            Self::V4 => SdfParams::from_bytes(bytes)?,
        })
    }
}

gpu_record!(SdfParamsV1, "SDFParamsV1", {
    should_mask: Int,
    shape: Uint,
    intensity: Float,
});

gpu_record!(SdfParamsV2, "SDFParamsV2", {
    should_mask: Int,
    shape: Uint,
    intensity: Float,
    _pad0: Padding,
    repetitions: Float2,
    should_flip_alternating: Int,
    rotation: Float,
});

gpu_record!(SdfParamsV3, "SDFParamsV3", {
    should_mask: Int,
    shape: Uint,
    intensity: Float,
    _pad0: Padding,
    repetitions: Float2,
    should_flip_alternating: Int,
    rotation: Float,
    blend_k: Float,
    _pad1: Padding,
});

gpu_record!(SdfParams, "SDFParams", {
    should_mask: Int,
    shape: Uint,
    intensity: Float,
    _pad0: Padding,
    repetitions: Float2,
    should_flip_alternating: Int,
    rotation: Float,
    blend_k: Float,
    scale: Float,
    shell_thickness: Float,
    should_make_annular: Int,
    pattern_frequency: Float,
    should_apply_pattern: Int,
    pattern_phase: Float,
    contrast: Float,
});

const _: () = assert!(std::mem::size_of::<SdfParamsV1>() == 12);
const _: () = assert!(std::mem::size_of::<SdfParamsV2>() == 32);
const _: () = assert!(std::mem::size_of::<SdfParamsV3>() == 40);
const _: () = assert!(std::mem::size_of::<SdfParams>() == 64);
const _: () = assert!(std::mem::offset_of!(SdfParams, repetitions) == 16);
