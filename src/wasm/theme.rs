use wasm_bindgen::JsValue;
use web_sys::Document;

use super::dom::{self, Listener};
use super::SharedTheme;
use crate::theme::{Palette, SubscriptionId, Theme};

const TRACK_DARK: &str = "#1f2937";
const TRACK_LIGHT: &str = "#d1d5db";

/// Keeps the document in sync with the theme store and wires the toggle
/// button.
pub struct ThemeBinding {
    store: SharedTheme,
    subscription: SubscriptionId,
    _toggles: Vec<Listener>,
}

impl ThemeBinding {
    pub fn install(document: &Document, store: SharedTheme) -> Result<Self, JsValue> {
        let (theme, palette) = {
            let s = store.borrow();
            (s.theme(), s.palette())
        };
        apply(document, theme, &palette);
        // The page stays hidden until the persisted theme has been applied.
        if let Some(root) = document.document_element() {
            root.remove_attribute("data-theme-pending")?;
        }

        let doc = document.clone();
        let subscription = store
            .borrow_mut()
            .subscribe(move |theme, palette| apply(&doc, theme, &palette));

        let mut toggles = Vec::new();
        for button in dom::query_all(document, "[data-theme-toggle]")? {
            let store = store.clone();
            toggles.push(Listener::add(&button, "click", move |_| {
                match store.try_borrow_mut() {
                    Ok(mut s) => {
                        let theme = s.toggle();
                        log::info!("theme switched to {theme}");
                    }
                    Err(_) => log::warn!("theme toggle re-entered; ignored"),
                }
            })?);
        }

        Ok(Self {
            store,
            subscription,
            _toggles: toggles,
        })
    }

    pub fn store(&self) -> &SharedTheme {
        &self.store
    }
}

impl Drop for ThemeBinding {
    fn drop(&mut self) {
        if let Ok(mut store) = self.store.try_borrow_mut() {
            store.unsubscribe(self.subscription);
        }
    }
}

fn apply(document: &Document, theme: Theme, palette: &Palette) {
    if let Some(root) = document.document_element() {
        root.set_attribute("data-theme", theme.as_str()).ok();
    }
    if let Some(body) = document.body() {
        body.style()
            .set_property("background-color", &palette.background.to_string())
            .ok();
        body.style()
            .set_property("color", &palette.foreground.to_string())
            .ok();
    }
    if let Ok(buttons) = dom::query_all(document, "[data-theme-toggle]") {
        let (pressed, track) = match theme {
            Theme::Dark => ("false", TRACK_DARK),
            Theme::Light => ("true", TRACK_LIGHT),
        };
        for button in buttons {
            button.set_attribute("aria-pressed", pressed).ok();
            dom::set_style(&button, "background-color", track);
        }
    }
}
