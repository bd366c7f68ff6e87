use log::Level;

pub const OWNER_NAME: &str = "Ashley";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Preloader
pub const PRELOADER_MIN_DISPLAY_MS: u32 = 3_000;
pub const PRELOADER_FADE_DELAY_MS: u32 = 300;
pub const PRELOADER_FADE_OUT_MS: u32 = 800;
pub const PRELOADER_EMERGENCY_MS: u32 = PRELOADER_MIN_DISPLAY_MS + 3_000;
pub const PRELOADER_TICK_MS: u32 = 50;
pub const PRELOADER_INCREMENT: f64 = 1.5;

// Hero reveal safety nets
pub const HERO_REVEAL_DELAY_MS: u32 = 100;
pub const HERO_FALLBACK_MS: u32 = 5_000;
pub const HERO_FINAL_CHECK_MS: u32 = 8_000;

// Scroll behavior
pub const NAVBAR_SCROLLED_PX: f64 = 50.0;
pub const BACK_TO_TOP_PX: f64 = 300.0;
pub const SECTION_ACTIVE_OFFSET_PX: f64 = 100.0;
pub const SCROLL_TARGET_OFFSET_PX: f64 = 80.0;
pub const NAVBAR_DEBOUNCE_MS: u32 = 10;
pub const ACTIVE_LINK_DEBOUNCE_MS: u32 = 100;
pub const BACK_TO_TOP_DEBOUNCE_MS: u32 = 100;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Typing effect
pub const TYPED_STRINGS: &[&str] = &[
    "Full Stack Developer",
    "AI Enthusiast",
    "Web Architect",
    "Problem Solver",
];
pub const TYPE_SPEED_MS: u32 = 80;
pub const BACK_SPEED_MS: u32 = 40;
pub const BACK_DELAY_MS: u32 = 1_500;

// Carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
