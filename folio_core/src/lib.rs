//! Folio core: the particle effects engine behind the portfolio's animated
//! backgrounds, plus the contact form submission path.

pub mod contact;
pub mod particles;
pub mod theme;
pub mod utils;

pub use contact::{ContactPayload, ContactService, SubmissionResult};
pub use particles::{AnimationLoop, EngineConfig, ParticleEngine, Surface};
pub use theme::{Rgba, ThemeMode, VariantPalette};
pub use utils::config::Config;
pub use utils::{FolioError, FolioResult};
