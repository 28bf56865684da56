//! Introductory kernels: static patterns, time-driven animations and the
//! distance-field demo

use crate::controls::{unknown_control, Control, ControlValue, SliderRange};
use crate::definition::{record_bytes, ComputeShaderDefinition};
use crate::error::Result;
use crate::runtime::{AnimationPhases, RuntimeProperties};
use serde::{Deserialize, Serialize};
use shadeplay_params::{
    DistanceFieldParams, ExampleComputeShader1Params, ExampleComputeShader2Params,
    ExampleShaderParams, GpuRecord, SineTransitionParams,
};

const TRANSITION_RATE: SliderRange = SliderRange::stepped(0.0, 4.0, 0.01);
const FIELD_WIDTH: SliderRange = SliderRange::stepped(0.1, 0.5, 0.01);
const PHASE_RATE: SliderRange = SliderRange::stepped(0.0, 2.0, 0.01);

/// Kernels that take no parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StaticKernel {
    HelloWorld,
    Borders,
    ColorGradient,
    PolarColorGradient,
    Coordinates,
}

impl StaticKernel {
    pub const ALL: [StaticKernel; 5] = [
        StaticKernel::HelloWorld,
        StaticKernel::Borders,
        StaticKernel::ColorGradient,
        StaticKernel::PolarColorGradient,
        StaticKernel::Coordinates,
    ];

    pub fn function_name(self) -> &'static str {
        match self {
            StaticKernel::HelloWorld => "helloWorld",
            StaticKernel::Borders => "borders",
            StaticKernel::ColorGradient => "colorGradient",
            StaticKernel::PolarColorGradient => "polarColorGradient",
            StaticKernel::Coordinates => "coordinates",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticShader {
    pub kernel: StaticKernel,
}

impl StaticShader {
    pub fn new(kernel: StaticKernel) -> Self {
        Self { kernel }
    }
}

impl ComputeShaderDefinition for StaticShader {
    fn function_name(&self) -> &'static str {
        self.kernel.function_name()
    }
}

/// Passes elapsed seconds to `exampleShader`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeShader;

impl TimeShader {
    pub const FUNCTION_NAME: &'static str = "exampleShader";
}

impl ComputeShaderDefinition for TimeShader {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        ExampleShaderParams::stride()
    }

    fn encode_parameters(&self, runtime: &RuntimeProperties) -> Vec<u8> {
        record_bytes(&ExampleShaderParams {
            time: runtime.elapsed as f32,
        })
    }
}

/// Start the phases at zero on the first update, advance them afterwards
fn advance_phases(
    slot: &mut Option<AnimationPhases>,
    animation_rate: f32,
    hue_rotate_rate: f32,
    delta_seconds: f64,
) {
    *slot = Some(match *slot {
        None => AnimationPhases::default(),
        Some(phases) => phases.advanced(
            f64::from(animation_rate),
            f64::from(hue_rotate_rate),
            delta_seconds,
        ),
    });
}

fn current_phases(slot: Option<AnimationPhases>) -> (f32, f32) {
    let phases = slot.unwrap_or_default();
    (
        phases.animation_phase as f32,
        phases.hue_rotate_phase as f32,
    )
}

fn rate_controls() -> [Control; 2] {
    [
        Control::slider("animation_rate", "Animation Rate", PHASE_RATE),
        Control::slider("hue_rotate_rate", "Hue Rotate Rate", PHASE_RATE),
    ]
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleShader1 {
    pub animation_rate: f32,
    pub hue_rotate_rate: f32,
}

impl Default for ExampleShader1 {
    fn default() -> Self {
        Self {
            animation_rate: 1.0,
            hue_rotate_rate: 1.0,
        }
    }
}

impl ExampleShader1 {
    pub const FUNCTION_NAME: &'static str = "exampleComputeShader1";
}

impl ComputeShaderDefinition for ExampleShader1 {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        ExampleComputeShader1Params::stride()
    }

    fn encode_parameters(&self, runtime: &RuntimeProperties) -> Vec<u8> {
        let (animation_phase, hue_rotate_phase) = current_phases(runtime.example1_phases);
        record_bytes(&ExampleComputeShader1Params {
            animation_phase,
            hue_rotate_phase,
        })
    }

    fn update_runtime_properties(&self, runtime: &mut RuntimeProperties, delta_seconds: f64) {
        advance_phases(
            &mut runtime.example1_phases,
            self.animation_rate,
            self.hue_rotate_rate,
            delta_seconds,
        );
    }

    fn controls(&self) -> Vec<Control> {
        rate_controls().to_vec()
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        match id {
            "animation_rate" => self.animation_rate = value.number_in(id, PHASE_RATE)?,
            "hue_rotate_rate" => self.hue_rotate_rate = value.number_in(id, PHASE_RATE)?,
            _ => return Err(unknown_control(Self::FUNCTION_NAME, id)),
        }
        Ok(())
    }
}

/// Like [`ExampleShader1`] with a circle/box switch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleShader2 {
    pub animation_rate: f32,
    pub hue_rotate_rate: f32,
    pub is_box: bool,
}

impl Default for ExampleShader2 {
    fn default() -> Self {
        Self {
            animation_rate: 1.0,
            hue_rotate_rate: 1.0,
            is_box: false,
        }
    }
}

impl ExampleShader2 {
    pub const FUNCTION_NAME: &'static str = "exampleComputeShader2";
}

impl ComputeShaderDefinition for ExampleShader2 {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        ExampleComputeShader2Params::stride()
    }

    fn encode_parameters(&self, runtime: &RuntimeProperties) -> Vec<u8> {
        let (animation_phase, hue_rotate_phase) = current_phases(runtime.example2_phases);
        record_bytes(&ExampleComputeShader2Params::new(
            animation_phase,
            hue_rotate_phase,
            self.is_box,
        ))
    }

    fn update_runtime_properties(&self, runtime: &mut RuntimeProperties, delta_seconds: f64) {
        advance_phases(
            &mut runtime.example2_phases,
            self.animation_rate,
            self.hue_rotate_rate,
            delta_seconds,
        );
    }

    fn controls(&self) -> Vec<Control> {
        let mut controls = vec![Control::toggle("is_box", "Box")];
        controls.extend(rate_controls());
        controls
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        match id {
            "is_box" => self.is_box = value.toggle(id)?,
            "animation_rate" => self.animation_rate = value.number_in(id, PHASE_RATE)?,
            "hue_rotate_rate" => self.hue_rotate_rate = value.number_in(id, PHASE_RATE)?,
            _ => return Err(unknown_control(Self::FUNCTION_NAME, id)),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SineTransitionShader {
    /// Phase units per second
    pub rate: f32,
}

impl Default for SineTransitionShader {
    fn default() -> Self {
        Self { rate: 1.0 }
    }
}

impl SineTransitionShader {
    pub const FUNCTION_NAME: &'static str = "sineTransition";
}

impl ComputeShaderDefinition for SineTransitionShader {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        SineTransitionParams::stride()
    }

    fn encode_parameters(&self, runtime: &RuntimeProperties) -> Vec<u8> {
        record_bytes(&SineTransitionParams {
            phase: runtime.transition_phase.unwrap_or(0.0) as f32,
        })
    }

    fn update_runtime_properties(&self, runtime: &mut RuntimeProperties, delta_seconds: f64) {
        runtime.transition_phase = Some(match runtime.transition_phase {
            None => 0.0,
            Some(phase) => phase + f64::from(self.rate) * delta_seconds,
        });
    }

    fn controls(&self) -> Vec<Control> {
        vec![Control::slider("rate", "Rate", TRANSITION_RATE)]
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        match id {
            "rate" => self.rate = value.number_in(id, TRANSITION_RATE)?,
            _ => return Err(unknown_control(Self::FUNCTION_NAME, id)),
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceFieldShader {
    pub width: f32,
}

impl Default for DistanceFieldShader {
    fn default() -> Self {
        Self { width: 0.25 }
    }
}

impl DistanceFieldShader {
    pub const FUNCTION_NAME: &'static str = "distanceField";
}

impl ComputeShaderDefinition for DistanceFieldShader {
    fn function_name(&self) -> &'static str {
        Self::FUNCTION_NAME
    }

    fn byte_length(&self) -> usize {
        DistanceFieldParams::stride()
    }

    fn encode_parameters(&self, _runtime: &RuntimeProperties) -> Vec<u8> {
        record_bytes(&DistanceFieldParams { width: self.width })
    }

    fn controls(&self) -> Vec<Control> {
        vec![Control::slider("width", "Width", FIELD_WIDTH)]
    }

    fn set_control(&mut self, id: &str, value: ControlValue) -> Result<()> {
        match id {
            "width" => self.width = value.number_in(id, FIELD_WIDTH)?,
            _ => return Err(unknown_control(Self::FUNCTION_NAME, id)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(bytes: &[u8]) -> Vec<f32> {
        bytes
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn test_static_kernels_take_no_parameters() {
        for kernel in StaticKernel::ALL {
            let shader = StaticShader::new(kernel);
            assert_eq!(shader.byte_length(), 0);
            assert!(shader
                .encode_parameters(&RuntimeProperties::default())
                .is_empty());
        }
        assert_eq!(
            StaticShader::new(StaticKernel::PolarColorGradient).function_name(),
            "polarColorGradient"
        );
    }

    #[test]
    fn test_time_shader_encodes_elapsed() {
        let runtime = RuntimeProperties {
            elapsed: 2.5,
            ..Default::default()
        };
        assert_eq!(floats(&TimeShader.encode_parameters(&runtime)), vec![2.5]);
    }

    #[test]
    fn test_first_update_zeroes_phases() {
        let shader = ExampleShader1::default();
        let mut runtime = RuntimeProperties::default();

        shader.update_runtime_properties(&mut runtime, 10.0);
        assert_eq!(runtime.example1_phases, Some(AnimationPhases::default()));

        shader.update_runtime_properties(&mut runtime, 0.5);
        assert_eq!(
            floats(&shader.encode_parameters(&runtime)),
            vec![0.5, 0.5]
        );
    }

    #[test]
    fn test_example2_encodes_box_flag() {
        let shader = ExampleShader2 {
            is_box: true,
            ..Default::default()
        };
        let bytes = shader.encode_parameters(&RuntimeProperties::default());
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[8..12], &1i32.to_ne_bytes());
    }

    #[test]
    fn test_transition_phase_advances_by_rate() {
        let shader = SineTransitionShader { rate: 2.0 };
        let mut runtime = RuntimeProperties::default();

        shader.update_runtime_properties(&mut runtime, 1.0);
        assert_eq!(runtime.transition_phase, Some(0.0));
        shader.update_runtime_properties(&mut runtime, 0.25);
        assert_eq!(runtime.transition_phase, Some(0.5));
    }

    #[test]
    fn test_distance_field_width_is_clamped() {
        let mut shader = DistanceFieldShader::default();
        shader.set_control("width", ControlValue::Number(3.0)).unwrap();
        assert_eq!(floats(&shader.encode_parameters(&RuntimeProperties::default())), vec![0.5]);
        shader.set_control("width", ControlValue::Number(0.0)).unwrap();
        assert_eq!(shader.width, 0.1);
    }

    #[test]
    fn test_example1_rates_are_clamped() {
        let mut shader = ExampleShader1::default();
        shader.set_control("animation_rate", ControlValue::Number(5.0)).unwrap();
        shader.set_control("hue_rotate_rate", ControlValue::Number(-1.0)).unwrap();
        assert_eq!(shader.animation_rate, 2.0);
        assert_eq!(shader.hue_rotate_rate, 0.0);

        let ids: Vec<_> = shader.controls().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["animation_rate", "hue_rotate_rate"]);
        assert!(shader.set_control("is_box", ControlValue::Toggle(true)).is_err());
    }

    #[test]
    fn test_example2_rates_are_clamped() {
        let mut shader = ExampleShader2::default();
        shader.set_control("animation_rate", ControlValue::Number(-3.0)).unwrap();
        shader.set_control("hue_rotate_rate", ControlValue::Number(9.0)).unwrap();
        shader.set_control("is_box", ControlValue::Toggle(true)).unwrap();
        assert_eq!(
            shader,
            ExampleShader2 {
                animation_rate: 0.0,
                hue_rotate_rate: 2.0,
                is_box: true,
            }
        );
        assert_eq!(shader.controls().len(), 3);
    }

    #[test]
    fn test_examples_keep_separate_phases() {
        let first = ExampleShader1::default();
        let second = ExampleShader2::default();
        let mut runtime = RuntimeProperties::default();

        first.update_runtime_properties(&mut runtime, 0.0);
        first.update_runtime_properties(&mut runtime, 1.5);
        second.update_runtime_properties(&mut runtime, 1.0);

        assert_eq!(floats(&first.encode_parameters(&runtime)), vec![1.5, 1.5]);
        assert_eq!(runtime.example2_phases, Some(AnimationPhases::default()));
        assert_eq!(&floats(&second.encode_parameters(&runtime))[..2], &[0.0, 0.0]);
    }
}
