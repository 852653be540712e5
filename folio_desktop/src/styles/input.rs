use crate::constants::INPUT_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Form field with an accent border on focus and a danger border when the
/// last submission rejected it.
pub fn input_style(
    palette: PaletteColors,
    invalid: bool,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + Clone {
    move |_, status| {
        let border_color = match status {
            _ if invalid => palette.danger,
            text_input::Status::Focused { .. } | text_input::Status::Hovered => palette.accent,
            _ => palette.border,
        };
        text_input::Style {
            background: Background::Color(Color { a: 0.6, ..palette.surface_raised }),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: INPUT_BORDER_RADIUS.into(),
            },
            icon: palette.muted,
            placeholder: palette.muted,
            value: palette.text,
            selection: Color { a: 0.4, ..palette.accent },
        }
    }
}
