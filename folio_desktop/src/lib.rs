//! Folio Desktop - the portfolio shell with particle backgrounds, built with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod contact_form;
pub mod host;
pub mod styles;
pub mod theme;

pub use animation::ParticleLayer;
pub use constants::*;
pub use contact_form::{ContactForm, Field, FormStatus};
pub use host::FrameHost;
pub use styles::*;
pub use theme::{app_theme_with_mode, palette_from_mode, PaletteColors};
