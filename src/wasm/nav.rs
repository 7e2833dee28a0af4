use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::dom::{self, Listener};
use super::render::AnimationLoop;
use super::SharedTheme;
use crate::clock::FrameClock;
use crate::nav::{NavConfig, NavOverlay, NavStyle, NavVisibility};
use crate::theme::{Palette, SubscriptionId};

/// Drives the `<nav data-nav>` header.
pub struct NavBinding {
    store: SharedTheme,
    subscription: SubscriptionId,
    _frame: AnimationLoop,
    _scroll: Listener,
}

impl NavBinding {
    pub fn mount(window: &Window, document: &Document, store: &SharedTheme) -> Result<Option<Self>, JsValue> {
        let Some(header) = document.query_selector("[data-nav]")? else {
            return Ok(None);
        };
        let config: NavConfig = dom::parse_config(&header).unwrap_or_else(|err| {
            log::warn!("nav config ignored: {err}");
            NavConfig::default()
        });
        let overlay = Rc::new(RefCell::new(NavOverlay::new(config)));

        paint(&header, &store.borrow().palette());
        let themed = header.clone();
        let subscription = store
            .borrow_mut()
            .subscribe(move |_, palette| paint(&themed, &palette));

        let scroll_overlay = overlay.clone();
        let win = window.clone();
        let scroll = Listener::add(window, "scroll", move |_| {
            let y = dom::scroll_y(&win);
            if let Some(visibility) = scroll_overlay.borrow_mut().on_scroll(y) {
                log::debug!(
                    "nav {}",
                    match visibility {
                        NavVisibility::Hidden => "hidden",
                        NavVisibility::Shown => "shown",
                    }
                );
            }
        })?;

        let mut clock = FrameClock::new();
        let frame = AnimationLoop::start(move |now| {
            let dt = clock.tick(now);
            let mut overlay = overlay.borrow_mut();
            let was_animating = overlay.is_animating();
            let pose = overlay.advance(dt);
            if was_animating {
                dom::set_style(&header, "transform", &pose.css_transform());
                dom::set_style(&header, "opacity", &format!("{:.3}", pose.opacity));
            }
        })?;

        Ok(Some(Self {
            store: store.clone(),
            subscription,
            _frame: frame,
            _scroll: scroll,
        }))
    }
}

impl Drop for NavBinding {
    fn drop(&mut self) {
        if let Ok(mut store) = self.store.try_borrow_mut() {
            store.unsubscribe(self.subscription);
        }
    }
}

fn paint(header: &Element, palette: &Palette) {
    let style = NavStyle::from_palette(palette);
    dom::set_style(header, "background-color", &style.background);
    dom::set_style(header, "border-bottom-color", &style.border);
    dom::set_style(header, "color", &style.text);
    dom::set_style(header, "--nav-link-hover", &style.link_hover);
}
