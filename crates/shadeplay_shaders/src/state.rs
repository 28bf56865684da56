//! Per-view shader state: the active definition plus its runtime properties

use crate::catalog::ShaderDefinition;
use crate::definition::ComputeShaderDefinition;
use crate::error::{Result, ShaderError};
use crate::runtime::RuntimeProperties;
use std::time::Instant;

/// Everything needed to dispatch one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameParameters {
    pub function_name: &'static str,
    /// Bound at buffer index 0; empty when the kernel takes no parameters
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct ShaderState {
    definition: ShaderDefinition,
    runtime: RuntimeProperties,
    last_update: Option<Instant>,
}

impl ShaderState {
    pub fn new(definition: ShaderDefinition) -> Self {
        Self {
            definition,
            runtime: RuntimeProperties::default(),
            last_update: None,
        }
    }

    pub fn definition(&self) -> &ShaderDefinition {
        &self.definition
    }

    pub fn definition_mut(&mut self) -> &mut ShaderDefinition {
        &mut self.definition
    }

    /// Swap the active definition; runtime properties carry over
    pub fn set_definition(&mut self, definition: ShaderDefinition) {
        tracing::debug!(
            from = self.definition.function_name(),
            to = definition.function_name(),
            "switching shader"
        );
        self.definition = definition;
    }

    pub fn runtime(&self) -> &RuntimeProperties {
        &self.runtime
    }

    /// Advance by the wall-clock time since the previous update
    ///
    /// The first call advances by zero.
    pub fn update(&mut self, now: Instant) {
        let delta = self
            .last_update
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f64());
        self.last_update = Some(now);
        self.update_with_delta(delta);
    }

    /// Advance by an explicit time step
    pub fn update_with_delta(&mut self, delta_seconds: f64) {
        self.runtime.elapsed += delta_seconds;
        self.definition
            .update_runtime_properties(&mut self.runtime, delta_seconds);
    }

    /// Encode the current parameters
    pub fn encode(&self) -> Result<FrameParameters> {
        let function_name = self.definition.function_name();
        let bytes = self.definition.encode_parameters(&self.runtime);
        let expected = self.definition.byte_length();
        if bytes.len() != expected {
            return Err(ShaderError::ByteLength {
                function: function_name,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(FrameParameters {
            function_name,
            bytes,
        })
    }

    /// Update then encode
    pub fn frame(&mut self, now: Instant) -> Result<FrameParameters> {
        self.update(now);
        self.encode()
    }
}

impl Default for ShaderState {
    fn default() -> Self {
        Self::new(ShaderDefinition::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShaderKind;
    use crate::sdf::SdfShader;
    use std::time::Duration;

    #[test]
    fn test_first_update_has_zero_delta() {
        let mut state = ShaderState::new(ShaderKind::Example.definition());
        let start = Instant::now();
        state.update(start);
        assert_eq!(state.runtime().elapsed, 0.0);

        state.update(start + Duration::from_millis(500));
        assert_eq!(state.runtime().elapsed, 0.5);
    }

    #[test]
    fn test_clock_going_backwards_is_zero_delta() {
        let mut state = ShaderState::default();
        let start = Instant::now() + Duration::from_secs(1);
        state.update(start);
        state.update(start - Duration::from_millis(100));
        assert_eq!(state.runtime().elapsed, 0.0);
    }

    #[test]
    fn test_frame_encodes_active_kernel() {
        let mut state = ShaderState::new(ShaderKind::Example.definition());
        state.update_with_delta(1.5);
        let frame = state.encode().unwrap();
        assert_eq!(frame.function_name, "exampleShader");
        assert_eq!(frame.bytes, 1.5f32.to_ne_bytes().to_vec());
    }

    #[test]
    fn test_switching_keeps_runtime_properties() {
        let rotating = SdfShader {
            is_rotating: true,
            ..Default::default()
        };
        let mut state = ShaderState::new(ShaderDefinition::Sdf(rotating));
        state.update_with_delta(1.0);
        state.set_definition(ShaderKind::Example.definition());

        assert_eq!(state.runtime().auto_rotation, Some(1.0));
        assert_eq!(state.runtime().elapsed, 1.0);
        assert_eq!(state.definition().kind(), ShaderKind::Example);
    }

    #[test]
    fn test_parameterless_frame_is_empty() {
        let mut state = ShaderState::new(ShaderKind::HelloWorld.definition());
        let frame = state.frame(Instant::now()).unwrap();
        assert_eq!(frame.function_name, "helloWorld");
        assert!(frame.bytes.is_empty());
    }
}
