use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Translucent card floating over the particle layers.
pub fn card_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.8, ..palette.surface })),
        text_color: Some(palette.text),
        border: Border {
            color: Color { a: 0.5, ..palette.border },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.25, ..Color::BLACK },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Banner for the outcome of a contact submission.
pub fn status_banner_style(
    palette: PaletteColors,
    success: bool,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| {
        let tone = if success { palette.success } else { palette.danger };
        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..tone })),
            text_color: Some(tone),
            border: Border {
                color: Color { a: 0.4, ..tone },
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

/// Top bar strip.
pub fn top_bar_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.6, ..palette.background })),
        text_color: Some(palette.text),
        ..Default::default()
    }
}
