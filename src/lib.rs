#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated layer of the portfolio page: theme state, smooth scrolling,
//! scroll-triggered reveals, the hide-on-scroll header and the WebGL2 shader
//! visuals. Everything outside `wasm` is plain math driven by
//! `advance(dt)` calls so it can be tested off the browser.

pub mod clock;
pub mod ease;
pub mod error;
pub mod glyph;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod visual;

pub use error::{VizError, VizResult};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::theme::ThemeStore;

    mod assets;
    mod dom;
    mod gl;
    mod glyph;
    mod image;
    mod nav;
    mod render;
    mod reveal;
    mod scroll;
    mod storage;
    mod theme;
    mod tunnel;

    pub use dom::Listener;
    pub use render::AnimationLoop;
    pub use storage::LocalStorage;

    /// Theme store shared by every closure on the page.
    pub(crate) type SharedTheme = Rc<RefCell<ThemeStore>>;

    thread_local! {
        // Mounted components stay alive for the page session; dropping them
        // cancels their frame loops and listeners.
        static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
    }

    struct Page {
        theme: theme::ThemeBinding,
        _scroll: Option<scroll::SmoothScroll>,
        _nav: Option<nav::NavBinding>,
        _reveal: Option<reveal::RevealBinding>,
        _visuals: Vec<render::VisualHandle>,
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        web_sys::console::log_1(&"folio_viz starting".into());

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hydrate before anything renders so the first paint already uses
        // the persisted theme.
        let store: SharedTheme = Rc::new(RefCell::new(ThemeStore::hydrate(
            storage::LocalStorage::from_window(&window),
        )));
        let theme = theme::ThemeBinding::install(&document, store.clone())?;

        let scroll = scroll::SmoothScroll::mount(&window)
            .map_err(|err| log::warn!("smooth scroll disabled: {err:?}"))
            .ok();
        let nav = nav::NavBinding::mount(&window, &document, &store)?;
        let reveal = reveal::RevealBinding::mount(&window, &document)?;
        let visuals = render::mount_visuals(&document, &store)?;

        PAGE.with(|page| {
            *page.borrow_mut() = Some(Page {
                theme,
                _scroll: scroll,
                _nav: nav,
                _reveal: reveal,
                _visuals: visuals,
            });
        });
        Ok(())
    }

    fn with_store<T>(f: impl FnOnce(&SharedTheme) -> T) -> Result<T, JsValue> {
        PAGE.with(|page| {
            page.borrow()
                .as_ref()
                .map(|page| f(page.theme.store()))
                .ok_or_else(|| crate::VizError::ThemeUnavailable.into())
        })
    }

    /// Active theme name, `"dark"` or `"light"`.
    #[wasm_bindgen(js_name = currentTheme)]
    pub fn current_theme() -> Result<String, JsValue> {
        with_store(|store| store.borrow().theme().as_str().to_string())
    }

    /// Flips the theme as the toggle button does and returns the new name.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme() -> Result<String, JsValue> {
        let store = with_store(Rc::clone)?;
        let theme = store
            .try_borrow_mut()
            .map_err(|_| JsValue::from(crate::VizError::ThemeUnavailable))?
            .toggle();
        Ok(theme.as_str().to_string())
    }

    /// Tears every component down: frame loops are cancelled and listeners
    /// removed.
    #[wasm_bindgen]
    pub fn unmount() {
        PAGE.with(|page| page.borrow_mut().take());
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{current_theme, toggle_theme, unmount, AnimationLoop, Listener, LocalStorage};

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
