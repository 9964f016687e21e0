use log::Level;

const DEFAULT_FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbz8VIL1vpDEMUSId-r43yNIl_6AK77-ssmPTmSxxlmkZKeFPco5gH5j57ljrTZ74BzL/exec";

pub const FORM_SOURCE: &str = "Falcon Team Website";
/// How long a success or error message stays up before the form resets.
pub const STATUS_RESET_MS: u32 = 5_000;
/// Delay between navigating home and scrolling to a section anchor.
pub const SECTION_SCROLL_DELAY_MS: u32 = 300;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const LANGUAGE_STORAGE_KEY: &str = "lang";

/// Contact form target. Set `FORM_ENDPOINT` at build time to point a
/// staging build somewhere else.
pub fn get_form_endpoint() -> &'static str {
    option_env!("FORM_ENDPOINT").unwrap_or(DEFAULT_FORM_ENDPOINT)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
