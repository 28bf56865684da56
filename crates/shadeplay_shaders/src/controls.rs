//! UI-agnostic description of a shader's adjustable parameters
//!
//! A front end renders [`Control`]s however it likes (sliders, toggles,
//! menus) and feeds user input back as [`ControlValue`]s.

use crate::error::{Result, ShaderError};
use shadeplay_params::ColorPickerParams;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Closed numeric range for a slider
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    /// Suggested increment (None = continuous)
    pub step: Option<f32>,
}

impl SliderRange {
    pub const fn continuous(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            step: None,
        }
    }

    pub const fn stepped(min: f32, max: f32, step: f32) -> Self {
        Self {
            min,
            max,
            step: Some(step),
        }
    }

    /// Clamp into the range
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// How a control is presented
#[derive(Clone, Debug, PartialEq)]
pub enum ControlKind {
    Slider(SliderRange),
    Toggle,
    /// One of several options, as (id, label) pairs
    Choice(Vec<(&'static str, &'static str)>),
    Color,
}

/// One adjustable parameter
#[derive(Clone, Debug, PartialEq)]
pub struct Control {
    /// Stable id passed back to `set_control`
    pub id: &'static str,
    pub label: &'static str,
    pub kind: ControlKind,
}

impl Control {
    pub fn slider(id: &'static str, label: &'static str, range: SliderRange) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::Slider(range),
        }
    }

    pub fn toggle(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::Toggle,
        }
    }

    pub fn choice(
        id: &'static str,
        label: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::Choice(options),
        }
    }

    pub fn color(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            kind: ControlKind::Color,
        }
    }
}

/// User input for a control
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Number(f32),
    Toggle(bool),
    Choice(String),
    Color([f32; 4]),
}

impl ControlValue {
    /// Numeric value clamped into `range`
    pub fn number_in(&self, control: &str, range: SliderRange) -> Result<f32> {
        match *self {
            ControlValue::Number(v) if v.is_finite() => Ok(range.clamp(v)),
            _ => Err(mismatch(control, "a finite number")),
        }
    }

    pub fn toggle(&self, control: &str) -> Result<bool> {
        match *self {
            ControlValue::Toggle(on) => Ok(on),
            _ => Err(mismatch(control, "true or false")),
        }
    }

    pub fn choice(&self, control: &str) -> Result<&str> {
        match self {
            ControlValue::Choice(id) => Ok(id),
            _ => Err(mismatch(control, "an option id")),
        }
    }

    pub fn color(&self, control: &str) -> Result<[f32; 4]> {
        match *self {
            ControlValue::Color(rgba) => Ok(rgba),
            _ => Err(mismatch(control, "a color")),
        }
    }
}

fn mismatch(control: &str, expected: &'static str) -> ShaderError {
    ShaderError::ControlValue {
        control: control.to_string(),
        expected,
    }
}

/// Error for a control id the shader does not offer
pub(crate) fn unknown_control(shader: &'static str, control: &str) -> ShaderError {
    ShaderError::UnknownControl {
        shader,
        control: control.to_string(),
    }
}

/// Parses command-line style input: `true`/`false`, a number, `#RRGGBB[AA]`,
/// anything else is taken as a choice id.
impl FromStr for ControlValue {
    type Err = ShaderError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(on) = s.parse::<bool>() {
            return Ok(ControlValue::Toggle(on));
        }
        if let Ok(v) = s.parse::<f32>() {
            return Ok(ControlValue::Number(v));
        }
        if s.starts_with('#') {
            return Ok(ControlValue::Color(ColorPickerParams::from_hex(s)?.color));
        }
        Ok(ControlValue::Choice(s.to_string()))
    }
}

impl Display for ControlValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlValue::Number(v) => write!(f, "{v}"),
            ControlValue::Toggle(on) => write!(f, "{on}"),
            ControlValue::Choice(id) => f.write_str(id),
            ControlValue::Color([r, g, b, a]) => write!(f, "rgba({r}, {g}, {b}, {a})"),
        }
    }
}
