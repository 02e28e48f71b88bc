use log::Level;

pub const BRAND_NAME: &str = "Acme Inc";

pub const COUNTER_DURATION_SECS: f64 = 1.5;
pub const FRAME_INTERVAL_MS: u32 = 16;

// Fraction of an element that must be on screen before it animates in.
pub const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.5;
pub const HEADING_REVEAL_THRESHOLD: f64 = 0.5;
pub const CARD_REVEAL_THRESHOLD: f64 = 0.3;
pub const CARD_STAGGER_MS: u32 = 100;

pub const HEADER_SCROLLED_OFFSET: i32 = 40;

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";
pub const HERO_BACKGROUND_IMAGE: &str = "/images/workspace-background.jpeg";
pub const CTA_ILLUSTRATION_IMAGE: &str = "/images/cta-illustration.jpeg";

/// Where the sign-up form posts to. Baked in at build time from
/// `LANDING_SIGNUP_URL`; without it the form only records the address locally.
pub fn signup_url() -> Option<&'static str> {
    option_env!("LANDING_SIGNUP_URL").filter(|url| !url.trim().is_empty())
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
