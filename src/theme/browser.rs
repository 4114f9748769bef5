use wasm_bindgen::JsCast;
use web_sys::{MediaQueryListEvent, Storage};

use crate::config;
use crate::error::{js_message, UiError};
use crate::utils::dom::{self, EventListener};

use super::store::{PreferenceStorage, ThemePresenter};
use super::Theme;

/// `window.localStorage` under [`config::THEME_STORAGE_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, UiError> {
        web_sys::window()
            .ok_or(UiError::StorageUnavailable)?
            .local_storage()
            .map_err(|_| UiError::StorageUnavailable)?
            .ok_or(UiError::StorageUnavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn load(&self) -> Result<Option<String>, UiError> {
        Self::storage()?
            .get_item(config::THEME_STORAGE_KEY)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }

    fn save(&self, value: &str) -> Result<(), UiError> {
        Self::storage()?
            .set_item(config::THEME_STORAGE_KEY, value)
            .map_err(|e| UiError::Storage(js_message(&e)))
    }
}

/// Writes the theme to the root `data-color-scheme` attribute and keeps the
/// mobile browser `theme-color` meta tag in step.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentPresenter;

impl ThemePresenter for DocumentPresenter {
    fn apply(&self, theme: Theme) {
        if let Err(e) = apply_to_document(theme) {
            log::debug!("could not apply theme {}: {}", theme, e);
        }
    }
}

fn apply_to_document(theme: Theme) -> Result<(), UiError> {
    let document = dom::document()?;
    let root = document
        .document_element()
        .ok_or(UiError::MissingElement("html"))?;
    root.set_attribute(config::THEME_ATTRIBUTE, theme.as_str())?;

    let meta = match document.query_selector("meta[name=\"theme-color\"]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "theme-color")?;
            let head = document.head().ok_or(UiError::MissingElement("head"))?;
            head.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", theme.meta_color())?;
    Ok(())
}

/// The platform's preferred color scheme, if it reports one.
pub fn ambient_preference() -> Option<Theme> {
    web_sys::window()?
        .match_media(config::DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| Theme::from_dark_flag(query.matches()))
}

/// Calls `on_change` whenever the platform color scheme flips.
pub fn watch_ambient<F>(on_change: F) -> Result<EventListener, UiError>
where
    F: Fn(Theme) + 'static,
{
    let query = dom::window()?
        .match_media(config::DARK_SCHEME_QUERY)?
        .ok_or(UiError::MissingElement("color scheme media query"))?;
    EventListener::new(&query, "change", move |event| {
        if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
            on_change(Theme::from_dark_flag(change.matches()));
        }
    })
}
