//! Parameter contract error types

use thiserror::Error;

/// Errors raised while decoding records or checking them against the
/// shader-side declarations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// A shape tag outside the known primitive set
    #[error("unknown SDF primitive value: {0}")]
    UnknownPrimitive(u32),

    /// A primitive id string that names no primitive
    #[error("unknown SDF primitive id: {0:?}")]
    UnknownPrimitiveId(String),

    /// Byte buffer length does not match the record size
    #[error("{record} expects {expected} bytes, got {actual}")]
    ByteLength {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Color string could not be parsed
    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// WGSL declarations failed to parse
    #[error("WGSL parse failed: {0}")]
    ShaderParse(String),

    /// Record has no struct of the same name on the shader side
    #[error("shader declarations have no struct named {0}")]
    MissingStruct(String),

    /// A field sits at a different offset (or has a different name) on each side
    #[error(
        "{record}.{field}: host offset {host_offset}, shader member {shader_field} at {shader_offset}"
    )]
    LayoutMismatch {
        record: &'static str,
        field: &'static str,
        host_offset: usize,
        shader_field: String,
        shader_offset: usize,
    },

    /// A member is declared with a different type than the host writes
    #[error("{record}.{field}: host writes {host_type}, shader declares {shader_type}")]
    TypeMismatch {
        record: &'static str,
        field: &'static str,
        host_type: &'static str,
        shader_type: String,
    },

    /// Host and shader disagree on the number of members
    #[error("{record}: host declares {host} fields, shader declares {shader}")]
    FieldCount {
        record: &'static str,
        host: usize,
        shader: usize,
    },

    /// Total size differs between host and shader
    #[error("{record}: host size {host} bytes, shader size {shader} bytes")]
    SizeMismatch {
        record: &'static str,
        host: usize,
        shader: usize,
    },

    /// A primitive constant is missing or carries the wrong value
    #[error("shader constant {constant}: expected {expected}, found {found:?}")]
    PrimitiveMismatch {
        constant: String,
        expected: u32,
        found: Option<u32>,
    },
}

/// Result type for parameter contract operations
pub type Result<T> = std::result::Result<T, ParamsError>;
