/// localStorage key holding the logged-in identity.
pub static SESSION_KEY: &str = "user";

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 3000;

/// Delay between the logout toast and leaving the dashboard.
pub const LOGOUT_DELAY_MS: u32 = 1500;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
pub const DEFAULT_RATING: u8 = MAX_RATING;
