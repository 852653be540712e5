use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Accent button with a glow on hover; dimmed while disabled.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: Color::WHITE,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..button::Style::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                shadow: Shadow {
                    color: Color { a: 0.6, ..palette.accent },
                    blur_radius: 12.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                ..base
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(Color { a: 0.4, ..palette.accent })),
                text_color: Color { a: 0.7, ..Color::WHITE },
                ..base
            },
            button::Status::Active => base,
        }
    }
}

/// Top bar link. The active page is underlined with the accent border.
pub fn nav_button_style(
    palette: PaletteColors,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = match (active, status) {
            (true, _) => palette.accent,
            (false, button::Status::Hovered) => palette.text,
            (false, _) => palette.muted,
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { palette.accent } else { Color::TRANSPARENT },
                width: if active { 1.0 } else { 0.0 },
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            ..button::Style::default()
        }
    }
}
