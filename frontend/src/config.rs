use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the simulated submission waits before reporting success.
pub const SUBMISSION_DELAY_MS: u32 = 2_000;

/// Vertical scroll offset (px) past which the header switches to its scrolled look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_SELECTOR: &str = ".rule-card, .contact-card, .faq-item";
pub const REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease forwards";

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 99;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_ESSAY_LENGTH: usize = 10;

/// Allowed difference (years) between the declared age and the one derived from the birthday.
pub const AGE_TOLERANCE_YEARS: i64 = 1;
pub const DAYS_PER_YEAR: f64 = 365.25;

pub const REQUIRED_EMAIL_DOMAIN: &str = "gmail.com";
