use folio_core::theme::ThemeMode;
use iced::{theme, Theme};

use super::palette::palette_from_mode;

/// Builds the iced theme for the given mode.
pub fn app_theme_with_mode(mode: ThemeMode) -> Theme {
    let p = palette_from_mode(mode);
    let base = if mode.is_dark() {
        theme::Palette::DARK
    } else {
        theme::Palette::LIGHT
    };
    Theme::custom(
        format!("Folio {}", mode.name()),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            danger: p.danger,
            ..base
        },
    )
}
