mod button;
mod container;
mod input;

pub use button::{nav_button_style, primary_button_style};
pub use container::{card_style, status_banner_style, top_bar_style};
pub use input::input_style;
