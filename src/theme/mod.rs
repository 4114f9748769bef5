//! Light/dark theme: the persisted store, its browser bindings and the
//! Yew provider every themed component reads from.

mod browser;
mod provider;
mod store;

use std::fmt;

use crate::config;

pub use browser::{ambient_preference, watch_ambient, DocumentPresenter, LocalStorage};
pub use provider::{use_theme, ThemeContext, ThemeProvider, ThemeProviderProps};
pub use store::{PreferenceStorage, SubscriptionId, ThemePresenter, ThemeState, ThemeStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a persisted value. Anything other than `light`/`dark` counts
    /// as no preference.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_dark_flag(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn meta_color(&self) -> &'static str {
        match self {
            Theme::Light => config::META_THEME_COLOR_LIGHT,
            Theme::Dark => config::META_THEME_COLOR_DARK,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    /// Toast shown after the user switches to this theme.
    pub fn activation_message(&self) -> &'static str {
        match self {
            Theme::Light => "☀️ Light theme activated!",
            Theme::Dark => "🌙 Dark theme activated!",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_values_round_trip_through_as_str() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_stored("Dark"), None);
        assert_eq!(Theme::from_stored(""), None);
    }

    #[test]
    fn toggled_flips_between_the_two_members() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn activation_message_names_the_new_theme() {
        assert!(Theme::Dark.activation_message().contains("Dark"));
        assert!(Theme::Light.activation_message().contains("Light"));
    }
}
