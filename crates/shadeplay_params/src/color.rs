//! Color picker parameters

use crate::error::{ParamsError, Result};
use crate::layout::gpu_record;
use serde::{Deserialize, Serialize};

/// Solid color for the color picker kernel (RGBA, matches shader `vec4<f32>`)
///
/// No range enforcement: channels are passed through as given.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
pub struct ColorPickerParams {
    /// (red, green, blue, alpha)
    pub color: [f32; 4],
}

impl ColorPickerParams {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            color: [r, g, b, a],
        }
    }

    /// Build from 8-bit channels
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|c| c as f32 / 255.0);
        Self::new(r, g, b, a)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ParamsError::InvalidColor(hex.to_string());
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !(digits.len() == 6 || digits.len() == 8)
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(invalid());
        }

        let mut rgba = [0u8, 0, 0, 255];
        for (i, channel) in rgba.iter_mut().enumerate().take(digits.len() / 2) {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self::from_rgba8(rgba))
    }

    pub fn red(&self) -> f32 {
        self.color[0]
    }

    pub fn green(&self) -> f32 {
        self.color[1]
    }

    pub fn blue(&self) -> f32 {
        self.color[2]
    }

    pub fn alpha(&self) -> f32 {
        self.color[3]
    }
}

gpu_record!(ColorPickerParams, "ColorPickerParams", { color: Float4 });

const _: () = assert!(std::mem::size_of::<ColorPickerParams>() == 16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GpuRecord;

    #[test]
    fn test_channel_order_is_rgba() {
        let params = ColorPickerParams::new(0.1, 0.2, 0.3, 0.4);
        let bytes = params.as_bytes();

        assert_eq!(&bytes[0..4], &0.1f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0.2f32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &0.3f32.to_ne_bytes());
        assert_eq!(&bytes[12..16], &0.4f32.to_ne_bytes());
    }

    #[test]
    fn test_from_hex() {
        let green = ColorPickerParams::from_hex("#00ff00").unwrap();
        assert_eq!(green, ColorPickerParams::new(0.0, 1.0, 0.0, 1.0));

        let translucent = ColorPickerParams::from_hex("ff000080").unwrap();
        assert_eq!(translucent.red(), 1.0);
        assert_eq!(translucent.alpha(), 128.0 / 255.0);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        for bad in [
            "",
            "#fff",
            "#gg0000",
            "#00ff00f",
            "#ÿÿÿ",
            "#+f+f+f",
            "##ffffff",
            "ff-0ff00",
        ] {
            assert_eq!(
                ColorPickerParams::from_hex(bad),
                Err(ParamsError::InvalidColor(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_default_is_transparent_black() {
        assert_eq!(ColorPickerParams::default().color, [0.0; 4]);
    }
}
