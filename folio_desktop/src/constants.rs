// Window
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// UI Dimensions
pub const FORM_MAX_WIDTH: f32 = 560.0;
pub const HERO_MAX_WIDTH: f32 = 720.0;
pub const CONTENT_PADDING: f32 = 32.0;
pub const INPUT_BORDER_RADIUS: f32 = 8.0;
pub const BUTTON_BORDER_RADIUS: f32 = 6.0;
pub const CARD_BORDER_RADIUS: f32 = 16.0;

// Typography
pub const HERO_TITLE_SIZE: f32 = 56.0;
pub const PAGE_TITLE_SIZE: f32 = 32.0;
pub const BODY_TEXT_SIZE: f32 = 16.0;
pub const HINT_TEXT_SIZE: f32 = 13.0;
