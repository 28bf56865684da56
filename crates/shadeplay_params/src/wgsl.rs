//! Shader-side declarations of the parameter records
//!
//! [`PARAMS_WGSL`] is the GPU half of the contract: kernels include it so
//! they read the same structs the host writes. [`ShaderDeclarations`] parses
//! WGSL with naga and checks every host record against it member by member.

use crate::error::{ParamsError, Result};
use crate::layout::{GpuRecord, RecordLayout};
use crate::sdf::SdfPrimitive;

/// WGSL struct and constant declarations for every parameter record
pub const PARAMS_WGSL: &str = r#"
// SDFParams.shape values
const SDF_CIRCLE: u32 = 0u;
const SDF_BOX: u32 = 1u;
const SDF_TRIANGLE: u32 = 2u;
const SDF_ROUNDED_BOX: u32 = 3u;
const SDF_REGULAR_POLYGON: u32 = 4u;
const SDF_LINE: u32 = 5u;
const SDF_CAPSULE: u32 = 6u;
const SDF_ELLIPSE: u32 = 7u;
const SDF_CROSS: u32 = 8u;
const SDF_PENTAGRAM: u32 = 9u;
const SDF_UNEVEN_CAPSULE: u32 = 10u;
const SDF_HEART: u32 = 11u;
const SDF_PIE: u32 = 12u;

struct SDFParamsV1 {
    should_mask: i32,
    shape: u32,
    intensity: f32,
}

struct SDFParamsV2 {
    should_mask: i32,
    shape: u32,
    intensity: f32,
    repetitions: vec2<f32>,
    should_flip_alternating: i32,
    rotation: f32,
}

struct SDFParamsV3 {
    should_mask: i32,
    shape: u32,
    intensity: f32,
    repetitions: vec2<f32>,
    should_flip_alternating: i32,
    rotation: f32,
    blend_k: f32,
}

struct SDFParams {
    should_mask: i32,
    shape: u32,
    intensity: f32,
    repetitions: vec2<f32>,
    should_flip_alternating: i32,
    rotation: f32,
    blend_k: f32,
    scale: f32,
    shell_thickness: f32,
    should_make_annular: i32,
    pattern_frequency: f32,
    should_apply_pattern: i32,
    pattern_phase: f32,
    contrast: f32,
}

struct ExponentialFunctionParams {
    exponent: f32,
}

struct StepFunctionParams {
    threshold: f32,
}

struct SmoothStepFunctionParams {
    edge0: f32,
    edge1: f32,
}

struct LogFunctionParams {
    base: f32,
    offset: f32,
}

struct SqrtFunctionParams {
    scale: f32,
}

struct ExpImpulseParams {
    k: f32,
}

struct SincFunctionParams {
    k: f32,
    addition: f32,
}

struct ToneFunctionParams {
    k: f32,
}

struct CubicPulseParams {
    center: f32,
    width: f32,
}

struct ColorPickerParams {
    color: vec4<f32>,
}

struct ExampleShaderParams {
    time: f32,
}

struct DistanceFieldParams {
    width: f32,
}

struct ExampleComputeShader1Params {
    animation_phase: f32,
    hue_rotate_phase: f32,
}

struct ExampleComputeShader2Params {
    animation_phase: f32,
    hue_rotate_phase: f32,
    is_box: i32,
}

struct SineTransitionParams {
    phase: f32,
}
"#;

/// A struct member as laid out by the shader compiler
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberLayout {
    pub name: String,
    pub offset: usize,
    /// WGSL spelling of the member type, e.g. `vec2<f32>`
    pub ty: String,
}

fn scalar_name(scalar: naga::Scalar) -> String {
    match (scalar.kind, scalar.width) {
        (naga::ScalarKind::Sint, 4) => "i32".to_string(),
        (naga::ScalarKind::Uint, 4) => "u32".to_string(),
        (naga::ScalarKind::Float, 4) => "f32".to_string(),
        (naga::ScalarKind::Float, 2) => "f16".to_string(),
        (naga::ScalarKind::Bool, _) => "bool".to_string(),
        (kind, width) => format!("{kind:?}{}", u32::from(width) * 8),
    }
}

/// A struct as laid out by the shader compiler
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructLayout {
    pub name: String,
    /// Size including trailing padding
    pub span: usize,
    pub members: Vec<MemberLayout>,
}

/// Parsed WGSL declarations
pub struct ShaderDeclarations {
    module: naga::Module,
}

impl ShaderDeclarations {
    /// Parse the built-in [`PARAMS_WGSL`]
    pub fn parse() -> Result<Self> {
        Self::parse_source(PARAMS_WGSL)
    }

    /// Parse arbitrary WGSL (e.g. a kernel source that declares its own copy)
    pub fn parse_source(source: &str) -> Result<Self> {
        let module = naga::front::wgsl::parse_str(source)
            .map_err(|err| ParamsError::ShaderParse(err.emit_to_string(source)))?;
        Ok(Self { module })
    }

    /// Names of every declared struct
    pub fn struct_names(&self) -> Vec<String> {
        self.module
            .types
            .iter()
            .filter(|(_, ty)| matches!(ty.inner, naga::TypeInner::Struct { .. }))
            .filter_map(|(_, ty)| ty.name.clone())
            .collect()
    }

    /// Layout of the struct called `name`
    pub fn struct_layout(&self, name: &str) -> Option<StructLayout> {
        self.module.types.iter().find_map(|(_, ty)| {
            if ty.name.as_deref() != Some(name) {
                return None;
            }
            match &ty.inner {
                naga::TypeInner::Struct { members, span } => Some(StructLayout {
                    name: name.to_string(),
                    span: *span as usize,
                    members: members
                        .iter()
                        .map(|m| MemberLayout {
                            name: m.name.clone().unwrap_or_default(),
                            offset: m.offset as usize,
                            ty: self.type_name(m.ty),
                        })
                        .collect(),
                }),
                _ => None,
            }
        })
    }

    fn type_name(&self, handle: naga::Handle<naga::Type>) -> String {
        let ty = &self.module.types[handle];
        match ty.inner {
            naga::TypeInner::Scalar(scalar) => scalar_name(scalar),
            naga::TypeInner::Vector { size, scalar } => {
                format!("vec{}<{}>", size as u8, scalar_name(scalar))
            }
            _ => ty.name.clone().unwrap_or_else(|| format!("{:?}", ty.inner)),
        }
    }

    /// Value of a `u32` module constant
    pub fn constant_u32(&self, name: &str) -> Option<u32> {
        self.module
            .constants
            .iter()
            .find(|(_, c)| c.name.as_deref() == Some(name))
            .and_then(|(_, c)| match self.module.global_expressions[c.init] {
                naga::Expression::Literal(naga::Literal::U32(value)) => Some(value),
                _ => None,
            })
    }

    /// Whether a module constant with this name exists, whatever its type
    pub fn has_constant(&self, name: &str) -> bool {
        self.module
            .constants
            .iter()
            .any(|(_, c)| c.name.as_deref() == Some(name))
    }

    /// Check one record against its shader struct
    pub fn verify_record<T: GpuRecord>(&self) -> Result<()> {
        self.verify_layout(&T::layout())
    }

    /// Check a host layout against the shader struct of the same name
    pub fn verify_layout(&self, host: &RecordLayout) -> Result<()> {
        let shader = self
            .struct_layout(host.name)
            .ok_or_else(|| ParamsError::MissingStruct(host.name.to_string()))?;

        let host_fields: Vec<_> = host.data_fields().collect();
        if host_fields.len() != shader.members.len() {
            return Err(ParamsError::FieldCount {
                record: host.name,
                host: host_fields.len(),
                shader: shader.members.len(),
            });
        }

        for (field, member) in host_fields.iter().zip(&shader.members) {
            if field.name != member.name || field.offset != member.offset {
                return Err(ParamsError::LayoutMismatch {
                    record: host.name,
                    field: field.name,
                    host_offset: field.offset,
                    shader_field: member.name.clone(),
                    shader_offset: member.offset,
                });
            }
            let host_type = field.kind.wgsl_type().unwrap_or("padding");
            if host_type != member.ty {
                return Err(ParamsError::TypeMismatch {
                    record: host.name,
                    field: field.name,
                    host_type,
                    shader_type: member.ty.clone(),
                });
            }
        }

        if host.size != shader.span {
            return Err(ParamsError::SizeMismatch {
                record: host.name,
                host: host.size,
                shader: shader.span,
            });
        }

        tracing::trace!(record = host.name, size = host.size, "layout matches shader");
        Ok(())
    }

    /// Check every `SDF_*` constant against [`SdfPrimitive`]
    pub fn verify_primitives(&self) -> Result<()> {
        for primitive in SdfPrimitive::ALL {
            let constant = primitive.shader_constant();
            let found = self.constant_u32(&constant);
            if found != Some(primitive.value()) {
                return Err(ParamsError::PrimitiveMismatch {
                    constant,
                    expected: primitive.value(),
                    found,
                });
            }
        }
        Ok(())
    }

    /// Check only the `SDF_*` constants the source declares. Returns how
    /// many were checked.
    pub fn verify_declared_primitives(&self) -> Result<usize> {
        let mut checked = 0;
        for primitive in SdfPrimitive::ALL {
            let constant = primitive.shader_constant();
            if !self.has_constant(&constant) {
                continue;
            }
            let found = self.constant_u32(&constant);
            if found != Some(primitive.value()) {
                return Err(ParamsError::PrimitiveMismatch {
                    constant,
                    expected: primitive.value(),
                    found,
                });
            }
            checked += 1;
        }
        Ok(checked)
    }

    /// Check every record and primitive constant. Returns the number of
    /// records verified.
    pub fn verify_all(&self) -> Result<usize> {
        let layouts = crate::record_layouts();
        for layout in &layouts {
            self.verify_layout(layout)?;
        }
        self.verify_primitives()?;

        tracing::debug!(records = layouts.len(), "shader parameter contract verified");
        Ok(layouts.len())
    }
}
