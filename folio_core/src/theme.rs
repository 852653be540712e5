//! Theme modes and the colour type shared by every particle variant.

use serde::{Deserialize, Serialize};

/// Theme mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn all() -> Vec<&'static str> {
        vec!["dark", "light"]
    }

    /// The other mode, used by the theme toggle.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Straight-alpha colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 1.0)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Multiplies the current alpha by `factor`.
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha(self.a * factor)
    }
}

/// A dark/light pair of base colours for one particle variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantPalette {
    pub dark: Rgba,
    pub light: Rgba,
}

impl VariantPalette {
    pub fn new(dark: Rgba, light: Rgba) -> Self {
        Self { dark, light }
    }

    /// Same colour in both modes.
    pub fn fixed(color: Rgba) -> Self {
        Self {
            dark: color,
            light: color,
        }
    }

    pub fn color_for(&self, mode: ThemeMode) -> Rgba {
        match mode {
            ThemeMode::Dark => self.dark,
            ThemeMode::Light => self.light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_names_round_trip() {
        for name in ThemeMode::all() {
            let mode = ThemeMode::from_name(name).unwrap();
            assert_eq!(mode.name(), name);
        }
        assert_eq!(ThemeMode::from_name(" Light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("black"), None);
    }

    #[test]
    fn test_toggle_flips_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&ThemeMode::Light).unwrap();
        assert_eq!(yaml.trim(), "light");
        let parsed: ThemeMode = serde_yaml::from_str("dark").unwrap();
        assert_eq!(parsed, ThemeMode::Dark);
    }

    #[test]
    fn test_palette_picks_mode_colour() {
        let palette =
            VariantPalette::new(Rgba::from_rgb8(157, 78, 221), Rgba::from_rgb8(77, 124, 254));
        assert_eq!(palette.color_for(ThemeMode::Light), Rgba::from_rgb8(77, 124, 254));
        assert_eq!(palette.color_for(ThemeMode::Dark).a, 1.0);
    }

    #[test]
    fn test_alpha_is_clamped() {
        let c = Rgba::from_rgb8(10, 20, 30).with_alpha(1.7);
        assert_eq!(c.a, 1.0);
        assert_eq!(c.scale_alpha(0.25).a, 0.25);
        assert_eq!(Rgba::TRANSPARENT.scale_alpha(4.0).a, 0.0);
    }
}
