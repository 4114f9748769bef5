//! Page-wide tunables. Deployment specific values are read at build time.

pub const THEME_STORAGE_KEY: &str = "convex-theme";
pub const THEME_ATTRIBUTE: &str = "data-color-scheme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const META_THEME_COLOR_DARK: &str = "#040D12";
pub const META_THEME_COLOR_LIGHT: &str = "#E8F5E8";

pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;
pub const ANCHOR_OFFSET_PX: f64 = 100.0;
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 500.0;
pub const SCROLL_DEBOUNCE_MS: u32 = 50;

pub const TOAST_AUTO_DISMISS_MS: u32 = 5_000;
pub const TOAST_EXIT_MS: u32 = 400;
pub const SHAKE_RESET_MS: u32 = 1_000;
pub const BUTTON_SUCCESS_MS: u32 = 2_000;
pub const EMAIL_GLOW_MS: u32 = 2_000;
pub const FAQ_GLOW_MS: u32 = 1_000;
pub const PARALLAX_DEBOUNCE_MS: u32 = 10;

pub const ACCORDION_PADDING_PX: i32 = 20;
pub const PARTICLE_COUNT: usize = 20;

/// Where the waitlist form would post if it were submitted natively.
pub fn get_subscribe_url() -> &'static str {
    option_env!("CONVEX_SUBSCRIBE_URL").unwrap_or("/api/subscribe")
}

pub fn log_level() -> log::Level {
    parse_log_level(option_env!("CONVEX_LOG_LEVEL"))
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_is_parsed_case_insensitively() {
        assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
        assert_eq!(parse_log_level(Some(" trace ")), log::Level::Trace);
    }

    #[test]
    fn unknown_log_level_falls_back_to_build_default() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(parse_log_level(Some("loud")), expected);
        assert_eq!(parse_log_level(None), expected);
    }
}
