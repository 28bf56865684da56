//! Record layout introspection
//!
//! Every parameter record implements [`GpuRecord`], which exposes its field
//! table (name, byte offset, kind) alongside safe byte casts. The field table
//! is what the WGSL verifier and the CLI compare against the shader side.

use crate::error::{ParamsError, Result};
use bytemuck::Pod;
use std::mem::{align_of, size_of};

/// Scalar/vector kind of a record field as seen by the shader
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// 32-bit signed integer (also used for boolean flags)
    Int,
    /// 32-bit unsigned integer (enum tags)
    Uint,
    /// 32-bit float
    Float,
    /// Two 32-bit floats, 8-byte aligned on the GPU
    Float2,
    /// Four 32-bit floats, 16-byte aligned on the GPU
    Float4,
    /// Explicit host padding with no shader-side member
    Padding,
}

impl FieldKind {
    /// Size in bytes
    pub const fn size(self) -> usize {
        match self {
            FieldKind::Int | FieldKind::Uint | FieldKind::Float | FieldKind::Padding => 4,
            FieldKind::Float2 => 8,
            FieldKind::Float4 => 16,
        }
    }

    /// Alignment the shader side applies to this kind
    pub const fn shader_align(self) -> usize {
        match self {
            FieldKind::Float2 => 8,
            FieldKind::Float4 => 16,
            _ => 4,
        }
    }

    /// WGSL spelling of the type (None for padding)
    pub const fn wgsl_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Int => Some("i32"),
            FieldKind::Uint => Some("u32"),
            FieldKind::Float => Some("f32"),
            FieldKind::Float2 => Some("vec2<f32>"),
            FieldKind::Float4 => Some("vec4<f32>"),
            FieldKind::Padding => None,
        }
    }
}

/// One field of a record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
}

impl FieldLayout {
    pub const fn size(&self) -> usize {
        self.kind.size()
    }

    pub const fn is_padding(&self) -> bool {
        matches!(self.kind, FieldKind::Padding)
    }
}

/// Full layout of a record type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    /// Shader-side struct name
    pub name: &'static str,
    /// Size in bytes (equals the shader stride)
    pub size: usize,
    /// Host alignment
    pub align: usize,
    pub fields: &'static [FieldLayout],
}

impl RecordLayout {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that have a shader-side member (padding skipped)
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldLayout> {
        self.fields.iter().filter(|f| !f.is_padding())
    }

    /// Alignment of the record on the shader side
    pub fn shader_align(&self) -> usize {
        self.data_fields()
            .map(|f| f.kind.shader_align())
            .max()
            .unwrap_or(4)
    }
}

/// A fixed-layout record shared with GPU kernels
pub trait GpuRecord: Pod {
    /// Struct name on the shader side
    const NAME: &'static str;

    /// Field table in declaration order, padding included
    fn fields() -> &'static [FieldLayout];

    /// Size of the record in bytes
    fn stride() -> usize {
        size_of::<Self>()
    }

    fn layout() -> RecordLayout {
        RecordLayout {
            name: Self::NAME,
            size: size_of::<Self>(),
            align: align_of::<Self>(),
            fields: Self::fields(),
        }
    }

    /// View the record as the bytes a kernel receives
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Read a record back from bytes. The input need not be aligned.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != size_of::<Self>() {
            return Err(ParamsError::ByteLength {
                record: Self::NAME,
                expected: size_of::<Self>(),
                actual: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }
}

/// Encode a host boolean as a shader flag
#[inline]
pub const fn flag(value: bool) -> i32 {
    value as i32
}

/// Decode a shader flag. Any non-zero value reads as set.
#[inline]
pub const fn is_set(flag: i32) -> bool {
    flag != 0
}

/// Implements [`GpuRecord`] with a field table built from `offset_of!`.
macro_rules! gpu_record {
    ($ty:ident, $name:literal, { $($field:ident: $kind:ident),* $(,)? }) => {
        impl $crate::layout::GpuRecord for $ty {
            const NAME: &'static str = $name;

            fn fields() -> &'static [$crate::layout::FieldLayout] {
                const FIELDS: &[$crate::layout::FieldLayout] = &[
                    $($crate::layout::FieldLayout {
                        name: stringify!($field),
                        offset: ::std::mem::offset_of!($ty, $field),
                        kind: $crate::layout::FieldKind::$kind,
                    }),*
                ];
                FIELDS
            }
        }
    };
}

pub(crate) use gpu_record;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shaping::SmoothStepFunctionParams;

    #[test]
    fn test_flag_roundtrip() {
        assert_eq!(flag(true), 1);
        assert_eq!(flag(false), 0);
        assert!(is_set(1));
        assert!(is_set(-1));
        assert!(!is_set(0));
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        let err = SmoothStepFunctionParams::from_bytes(&[0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            ParamsError::ByteLength {
                record: "SmoothStepFunctionParams",
                expected: 8,
                actual: 5,
            }
        );
    }

    #[test]
    fn test_from_bytes_accepts_unaligned_input() {
        let params = SmoothStepFunctionParams::new(0.25, 0.75);
        let mut buffer = vec![0u8; 1];
        buffer.extend_from_slice(params.as_bytes());

        let decoded = SmoothStepFunctionParams::from_bytes(&buffer[1..]).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn test_layout_lists_fields_in_order() {
        let layout = SmoothStepFunctionParams::layout();
        assert_eq!(layout.name, "SmoothStepFunctionParams");
        assert_eq!(layout.size, 8);
        assert_eq!(layout.field("edge1").map(|f| f.offset), Some(4));
        assert_eq!(layout.shader_align(), 4);
    }
}
