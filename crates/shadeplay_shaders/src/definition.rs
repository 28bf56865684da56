//! The host-side description of one compute kernel

use crate::controls::{unknown_control, Control, ControlValue};
use crate::error::Result;
use crate::runtime::RuntimeProperties;
use shadeplay_params::GpuRecord;

/// A compute kernel plus the host state that feeds it
///
/// Each frame the driver calls [`update_runtime_properties`] with the time
/// since the previous frame, then binds the bytes from [`encode_parameters`]
/// at buffer index 0 before dispatching [`function_name`].
///
/// [`update_runtime_properties`]: ComputeShaderDefinition::update_runtime_properties
/// [`encode_parameters`]: ComputeShaderDefinition::encode_parameters
/// [`function_name`]: ComputeShaderDefinition::function_name
pub trait ComputeShaderDefinition {
    /// Kernel entry point name
    fn function_name(&self) -> &'static str;

    /// Size of the parameter block (0 when the kernel takes none)
    fn byte_length(&self) -> usize {
        0
    }

    /// Parameter block for the next dispatch, `byte_length()` bytes long
    fn encode_parameters(&self, _runtime: &RuntimeProperties) -> Vec<u8> {
        Vec::new()
    }

    /// Advance time-driven values
    fn update_runtime_properties(&self, _runtime: &mut RuntimeProperties, _delta_seconds: f64) {}

    /// Adjustable parameters, in display order
    fn controls(&self) -> Vec<Control> {
        Vec::new()
    }

    /// Apply user input to the control `id`
    fn set_control(&mut self, id: &str, _value: ControlValue) -> Result<()> {
        Err(unknown_control(self.function_name(), id))
    }
}

/// Copy a record into an owned parameter block
pub(crate) fn record_bytes<T: GpuRecord>(record: &T) -> Vec<u8> {
    record.as_bytes().to_vec()
}
