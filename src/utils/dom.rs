use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::MissingElement("window"))
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::MissingElement("document"))
}

/// Current vertical scroll offset, zero when it cannot be read.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport height in CSS pixels, zero when it cannot be read.
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Offset to scroll to so a section is not hidden under the fixed header.
pub fn anchor_scroll_top(element_top: f64) -> f64 {
    (element_top - config::ANCHOR_OFFSET_PX).max(0.0)
}

/// Extracts the section id from an in-page `#id` link.
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth scrolls to the in-page section `href` points at.
pub fn scroll_to_section(href: &str) -> Result<(), UiError> {
    let id = section_id(href).ok_or(UiError::MissingElement("section id"))?;
    let target = document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(UiError::MissingElement("section"))?;
    smooth_scroll_to(anchor_scroll_top(f64::from(target.offset_top())));
    Ok(())
}

/// True when the event target sits inside `container`.
pub fn event_within(event: &Event, container: Option<&Node>) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    match (container, target) {
        (Some(container), Some(target)) => container.contains(Some(&target)),
        _ => false,
    }
}

/// Event listener that unregisters itself when dropped.
pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl EventListener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, UiError>
    where
        F: Fn(&Event) + 'static,
    {
        let callback = Closure::<dyn Fn(Event)>::new(move |event: Event| handler(&event));
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if let Err(e) = removed {
            log::debug!("could not remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Registers `handler` for Escape presses anywhere on the page.
pub fn on_escape<F>(handler: F) -> Result<EventListener, UiError>
where
    F: Fn() + 'static,
{
    let document = document()?;
    EventListener::new(&document, "keydown", move |event| {
        if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            if key_event.key() == "Escape" {
                handler();
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offset_keeps_section_below_header() {
        assert_eq!(anchor_scroll_top(900.0), 800.0);
        assert_eq!(anchor_scroll_top(40.0), 0.0);
    }

    #[test]
    fn section_id_requires_a_fragment() {
        assert_eq!(section_id("#pricing"), Some("pricing"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("/docs"), None);
    }
}
