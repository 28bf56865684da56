//! Time-driven values a shader keeps between frames
//!
//! Each definition owns the slots it uses and leaves the rest alone, so
//! switching definitions never corrupts another definition's state.

/// Phases for the animated example kernels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationPhases {
    pub animation_phase: f64,
    pub hue_rotate_phase: f64,
}

impl AnimationPhases {
    /// Advance both phases by `rate * delta`
    pub fn advanced(self, animation_rate: f64, hue_rotate_rate: f64, delta_seconds: f64) -> Self {
        Self {
            animation_phase: self.animation_phase + animation_rate * delta_seconds,
            hue_rotate_phase: self.hue_rotate_phase + hue_rotate_rate * delta_seconds,
        }
    }
}

/// Per-frame mutable state shared by the active definition and the state manager
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeProperties {
    /// Seconds since the first update
    pub elapsed: f64,
    /// Accumulated automatic SDF rotation (radians)
    pub auto_rotation: Option<f32>,
    /// Accumulated automatic SDF pattern phase
    pub auto_pattern_phase: Option<f32>,
    /// `exampleComputeShader1` phases
    pub example1_phases: Option<AnimationPhases>,
    /// `exampleComputeShader2` phases
    pub example2_phases: Option<AnimationPhases>,
    /// Sine transition phase
    pub transition_phase: Option<f64>,
}

impl RuntimeProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything except elapsed time
    pub fn reset_animation(&mut self) {
        *self = Self {
            elapsed: self.elapsed,
            ..Self::default()
        };
    }
}

/// Add `speed * delta` to an accumulator, starting from zero when unset
pub(crate) fn accumulate(slot: &mut Option<f32>, speed: f32, delta_seconds: f64) {
    let step = speed * delta_seconds as f32;
    *slot = Some(slot.map_or(step, |current| current + step));
}
