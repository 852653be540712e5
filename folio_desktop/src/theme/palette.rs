use folio_core::theme::{Rgba, ThemeMode};
use iced::Color;

/// Widget colours for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl PaletteColors {
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(250, 248, 255), // Lavender white
            surface: Color::from_rgb8(242, 238, 252),
            surface_raised: Color::from_rgb8(255, 255, 255),
            border: Color::from_rgb8(212, 200, 236),
            text: Color::from_rgb8(28, 20, 44),
            muted: Color::from_rgb8(110, 100, 136),
            accent: Color::from_rgb8(123, 44, 191),
            accent_soft: Color::from_rgb8(77, 124, 254),
            success: Color::from_rgb8(40, 160, 80),
            danger: Color::from_rgb8(214, 54, 64),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(5, 5, 16), // Matches the hero fade
            surface: Color::from_rgb8(16, 12, 28),
            surface_raised: Color::from_rgb8(26, 20, 40),
            border: Color::from_rgb8(58, 42, 88),
            text: Color::from_rgb8(240, 235, 255),
            muted: Color::from_rgb8(150, 140, 180),
            accent: Color::from_rgb8(157, 78, 221),
            accent_soft: Color::from_rgb8(123, 44, 191),
            success: Color::from_rgb8(100, 230, 140),
            danger: Color::from_rgb8(255, 100, 100),
        }
    }

    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Returns palette for a specific theme mode
pub fn palette_from_mode(mode: ThemeMode) -> PaletteColors {
    PaletteColors::from_theme_mode(mode)
}

/// Converts an engine colour to an iced colour.
pub fn rgba_to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}
