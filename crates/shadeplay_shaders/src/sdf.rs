//! SDF drawing kernel definition

use crate::controls::{unknown_control, Control, ControlValue, SliderRange};
use crate::definition::ComputeShaderDefinition;
use crate::error::Result;
use crate::runtime::{accumulate, RuntimeProperties};
use serde::{Deserialize, Serialize};
use shadeplay_params::{SdfParams, SdfPrimitive, SdfRevision};
use std::f32::consts::TAU;

const INTENSITY: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const SCALE: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const SHELL_THICKNESS: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const CONTRAST: SliderRange = SliderRange::stepped(0.0, 10.0, 0.01);
const REPETITIONS: SliderRange = SliderRange::stepped(1.0, 20.0, 1.0);
const BLEND_K: SliderRange = SliderRange::stepped(0.0, 1.0, 0.01);
const ROTATION: SliderRange = SliderRange::stepped(0.0, TAU, 0.01);
const ROTATION_SPEED: SliderRange = SliderRange::stepped(0.0, 3.0, 0.025);
const PATTERN_FREQUENCY: SliderRange = SliderRange::stepped(1.0, 20.0, 0.5);
const PATTERN_PHASE: SliderRange = SliderRange::stepped(0.0, TAU, 0.01);
const PATTERN_SPEED: SliderRange = SliderRange::stepped(0.0, 3.0, 0.025);

/// Settings for the `sdfDrawing` kernel
///
/// Flags are plain `bool`s here and become `i32` only in [`SdfParams`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdfShader {
    pub should_mask: bool,
    pub selected_shape: SdfPrimitive,
    pub intensity: f32,
    /// Tile repeats, applied to both axes
    pub repetitions: f32,
    pub should_flip_alternating: bool,
    /// Base rotation in radians
    pub rotation: f32,
    pub blend_k: f32,
    pub is_rotating: bool,
    /// Radians per second while `is_rotating`
    pub rotation_speed: f32,
    pub scale: f32,
    pub should_make_annular: bool,
    pub shell_thickness: f32,
    pub should_apply_pattern: bool,
    pub pattern_frequency: f32,
    pub pattern_phase: f32,
    pub is_pattern_animated: bool,
    pub pattern_animation_speed: f32,
    pub contrast: f32,
    /// Layout revision the target kernel was built against
    pub revision: SdfRevision,
}

impl Default for SdfShader {
    fn default() -> Self {
        Self {
            should_mask: false,
            selected_shape: SdfPrimitive::Circle,
            intensity: 1.0,
            repetitions: 1.0,
            should_flip_alternating: false,
            rotation: 0.0,
            blend_k: 0.0,
            is_rotating: false,
            rotation_speed: 1.0,
            scale: 0.5,
            should_make_annular: false,
            shell_thickness: 0.05,
            should_apply_pattern: false,
            pattern_frequency: 5.0,
            pattern_phase: 0.0,
            is_pattern_animated: false,
            pattern_animation_speed: 1.0,
            contrast: 1.0,
            revision: SdfRevision::LATEST,
        }
    }
}

impl SdfShader {
    pub const FUNCTION_NAME: &'static str = "sdfDrawing";

    /// Record for the next dispatch, including automatic rotation and phase
    pub fn to_params(&self, runtime: &RuntimeProperties) -> SdfParams {
        SdfParams::new(self.selected_shape)
            .with_mask(self.should_mask)
            .with_intensity(self.intensity)
            .with_repetitions(self.repetitions, self.repetitions)
            .with_flip_alternating(self.should_flip_alternating)
            .with_rotation(self.rotation + runtime.auto_rotation.unwrap_or(0.0))
            .with_blend_k(self.blend_k)
            .with_scale(self.scale)
            .with_annular(self.should_make_annular, self.shell_thickness)
            .with_pattern(
                self.should_apply_pattern,
                self.pattern_frequency,
                self.pattern_phase + runtime.auto_pattern_phase.unwrap_or(0.0),
            )
            .with_contrast(self.contrast)
    }
}

impl ComputeShaderDefinition for SdfShader {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        self.revision.byte_len()
    }

    fn encode_parameters(&self, runtime: &RuntimeProperties) -> Vec<u8> {
        self.to_params(runtime).encode_revision(self.revision)
    }

    fn update_runtime_properties(&self, runtime: &mut RuntimeProperties, delta_seconds: f64) {
        if self.is_rotating {
            accumulate(&mut runtime.auto_rotation, self.rotation_speed, delta_seconds);
        }
        if self.is_pattern_animated {
            accumulate(
                &mut runtime.auto_pattern_phase,
                self.pattern_animation_speed,
                delta_seconds,
            );
        }
    }

    fn controls(&self) -> Vec<Control> {
        let shapes = SdfPrimitive::ALL
            .iter()
            .map(|p| (p.id(), p.display_name()))
            .collect();

        let mut controls = vec![
            Control::choice("shape", "SDF Function", shapes),
            Control::toggle("mask", "Enable Masking"),
            Control::slider("scale", "Scale", SCALE),
            Control::toggle("annular", "Annular (Ring)"),
        ];
        if self.should_make_annular {
            controls.push(Control::slider(
                "shell_thickness",
                "Shell Thickness",
                SHELL_THICKNESS,
            ));
        }
        controls.extend([
            Control::slider("intensity", "Intensity", INTENSITY),
            Control::slider("contrast", "Contrast", CONTRAST),
            Control::slider("repetitions", "Tile Repeats", REPETITIONS),
            Control::toggle("flip_alternating", "Flip Alternating"),
            Control::slider("blend_k", "Blend Amount", BLEND_K),
            Control::toggle("auto_rotate", "Auto Rotate"),
        ]);
        controls.push(if self.is_rotating {
            Control::slider("rotation_speed", "Speed", ROTATION_SPEED)
        } else {
            Control::slider("rotation", "Rotation", ROTATION)
        });
        controls.push(Control::toggle("apply_pattern", "Pattern Repeats"));
        if self.should_apply_pattern {
            controls.push(Control::slider(
                "pattern_frequency",
                "Pattern Frequency",
                PATTERN_FREQUENCY,
            ));
        }
        controls.push(Control::toggle("pattern_animation", "Pattern Animation"));
        controls.push(if self.is_pattern_animated {
            Control::slider("pattern_animation_speed", "Speed", PATTERN_SPEED)
        } else {
            Control::slider("pattern_phase", "Phase", PATTERN_PHASE)
        });
        controls
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        match id {
            "shape" => {
                self.selected_shape = value.choice(id)?.parse::<SdfPrimitive>()?;
            }
            "mask" => self.should_mask = value.toggle(id)?,
            "scale" => self.scale = value.number_in(id, SCALE)?,
            "annular" => self.should_make_annular = value.toggle(id)?,
            "shell_thickness" => self.shell_thickness = value.number_in(id, SHELL_THICKNESS)?,
            "intensity" => self.intensity = value.number_in(id, INTENSITY)?,
            "contrast" => self.contrast = value.number_in(id, CONTRAST)?,
            "repetitions" => self.repetitions = value.number_in(id, REPETITIONS)?,
            "flip_alternating" => self.should_flip_alternating = value.toggle(id)?,
            "blend_k" => self.blend_k = value.number_in(id, BLEND_K)?,
            "auto_rotate" => self.is_rotating = value.toggle(id)?,
            "rotation" => self.rotation = value.number_in(id, ROTATION)?,
            "rotation_speed" => self.rotation_speed = value.number_in(id, ROTATION_SPEED)?,
            "apply_pattern" => self.should_apply_pattern = value.toggle(id)?,
            "pattern_frequency" => {
                self.pattern_frequency = value.number_in(id, PATTERN_FREQUENCY)?
            }
            "pattern_animation" => self.is_pattern_animated = value.toggle(id)?,
            "pattern_phase" => self.pattern_phase = value.number_in(id, PATTERN_PHASE)?,
            "pattern_animation_speed" => {
                self.pattern_animation_speed = value.number_in(id, PATTERN_SPEED)?
            }
            _ => return Err(unknown_control(Self::FUNCTION_NAME, id)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShaderError;
    use shadeplay_params::{GpuRecord, SdfParamsV1};

    #[test]
    fn test_default_encodes_current_revision() {
        let shader = SdfShader::default();
        let bytes = shader.encode_parameters(&RuntimeProperties::default());
        assert_eq!(bytes.len(), 64);
        assert_eq!(shader.byte_length(), 64);

        let params = SdfParams::from_bytes(&bytes).unwrap();
        assert_eq!(params, SdfParams::default());
    }

    #[test]
    fn test_scalar_repetitions_fill_both_axes() {
        let shader = SdfShader {
            repetitions: 4.0,
            ..Default::default()
        };
        let params = shader.to_params(&RuntimeProperties::default());
        assert_eq!(params.repetitions, [4.0, 4.0]);
    }

    #[test]
    fn test_auto_rotation_accumulates_while_rotating() {
        let shader = SdfShader {
            is_rotating: true,
            rotation: 0.5,
            rotation_speed: 2.0,
            ..Default::default()
        };
        let mut runtime = RuntimeProperties::default();
        shader.update_runtime_properties(&mut runtime, 0.25);
        shader.update_runtime_properties(&mut runtime, 0.25);

        assert_eq!(runtime.auto_rotation, Some(1.0));
        assert_eq!(shader.to_params(&runtime).rotation, 1.5);
        assert_eq!(runtime.auto_pattern_phase, None);
    }

    #[test]
    fn test_pattern_phase_accumulates_while_animated() {
        let shader = SdfShader {
            is_pattern_animated: true,
            pattern_phase: 1.0,
            pattern_animation_speed: 0.5,
            ..Default::default()
        };
        let mut runtime = RuntimeProperties::default();
        shader.update_runtime_properties(&mut runtime, 2.0);

        assert_eq!(shader.to_params(&runtime).pattern_phase, 2.0);
        assert_eq!(runtime.auto_rotation, None);
    }

    #[test]
    fn test_older_revision_encodes_prefix() {
        let shader = SdfShader {
            selected_shape: SdfPrimitive::Cross,
            should_mask: true,
            revision: SdfRevision::V1,
            ..Default::default()
        };
        let bytes = shader.encode_parameters(&RuntimeProperties::default());
        assert_eq!(bytes.len(), shader.byte_length());

        let v1 = SdfParamsV1::from_bytes(&bytes).unwrap();
        assert_eq!(v1.shape, 8);
        assert_eq!(v1.should_mask, 1);
    }

    #[test]
    fn test_set_control_clamps_and_parses_shape() {
        let mut shader = SdfShader::default();
        shader
            .set_control("shape", ControlValue::Choice("heart".into()))
            .unwrap();
        shader
            .set_control("repetitions", ControlValue::Number(50.0))
            .unwrap();
        shader.set_control("mask", ControlValue::Toggle(true)).unwrap();

        assert_eq!(shader.selected_shape, SdfPrimitive::Heart);
        assert_eq!(shader.repetitions, 20.0);
        assert!(shader.should_mask);

        assert!(shader
            .set_control("shape", ControlValue::Choice("star".into()))
            .is_err());
        assert!(matches!(
            shader.set_control("warp", ControlValue::Number(1.0)),
            Err(ShaderError::UnknownControl { .. })
        ));
    }

    #[test]
    fn test_conditional_controls_follow_toggles() {
        let mut shader = SdfShader::default();
        let ids = |s: &SdfShader| s.controls().iter().map(|c| c.id).collect::<Vec<_>>();

        assert!(!ids(&shader).contains(&"shell_thickness"));
        assert!(ids(&shader).contains(&"rotation"));

        shader.should_make_annular = true;
        shader.is_rotating = true;
        assert!(ids(&shader).contains(&"shell_thickness"));
        assert!(ids(&shader).contains(&"rotation_speed"));
        assert!(!ids(&shader).contains(&"rotation"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let shader: SdfShader =
            serde_json::from_str(r#"{"selected_shape":"pie","intensity":0.5}"#).unwrap();
        assert_eq!(shader.selected_shape, SdfPrimitive::Pie);
        assert_eq!(shader.intensity, 0.5);
        assert_eq!(shader.scale, 0.5);
        assert_eq!(shader.revision, SdfRevision::V4);
    }
}
