//! Solid color kernel

use crate::controls::{unknown_control, Control, ControlValue};
use crate::definition::{record_bytes, ComputeShaderDefinition};
use crate::error::Result;
use crate::runtime::RuntimeProperties;
use serde::{Deserialize, Serialize};
use shadeplay_params::{ColorPickerParams, GpuRecord};

/// Fills the output with one color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPickerShader {
    /// RGBA, channels are not range-checked
    pub color: [f32; 4],
}

impl Default for ColorPickerShader {
    fn default() -> Self {
        Self {
            color: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

impl ColorPickerShader {
    pub const FUNCTION_NAME: &'static str = "colorPickerShader";

    pub fn params(&self) -> ColorPickerParams {
        ColorPickerParams { color: self.color }
    }
}

impl ComputeShaderDefinition for ColorPickerShader {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        ColorPickerParams::stride()
    }

    fn encode_parameters(&self, _runtime: &RuntimeProperties) -> Vec<u8> {
        record_bytes(&self.params())
    }

    fn controls(&self) -> Vec<Control> {
        vec![Control::color("color", "Color")]
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        match id {
            "color" => self.color = value.color(id)?,
            _ => return Err(unknown_control(Self::FUNCTION_NAME, id)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_green() {
        let shader = ColorPickerShader::default();
        let bytes = shader.encode_parameters(&RuntimeProperties::default());
        assert_eq!(bytes.len(), 16);

        let floats: [f32; 4] = bytemuck::pod_read_unaligned(&bytes);
        assert_eq!(floats, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_color_control_accepts_out_of_range_channels() {
        let mut shader = ColorPickerShader::default();
        shader
            .set_control("color", ControlValue::Color([2.0, -1.0, 0.5, 1.0]))
            .unwrap();
        assert_eq!(shader.params().color, [2.0, -1.0, 0.5, 1.0]);
        assert!(shader
            .set_control("color", ControlValue::Number(1.0))
            .is_err());
    }
}
