use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{TouchEvent, WheelEvent, Window};

use super::dom::{self, Listener};
use super::render::AnimationLoop;
use crate::clock::FrameClock;
use crate::scroll::{ScrollConfig, ScrollController};

const LINE_HEIGHT_PX: f64 = 16.0;

/// Smooth scrolling for the whole page. Wheel and touch input move the
/// controller's target; the frame loop writes the eased offset back to the
/// window.
pub struct SmoothScroll {
    _frame: AnimationLoop,
    _listeners: Vec<Listener>,
}

impl SmoothScroll {
    pub fn mount(window: &Window) -> Result<Self, JsValue> {
        let document = window.document().ok_or("no document")?;
        let controller = Rc::new(RefCell::new(ScrollController::new(
            ScrollConfig::default(),
            dom::scroll_limit(window, &document),
        )));
        controller
            .borrow_mut()
            .scroll_to(dom::scroll_y(window), true);

        let mut listeners = Vec::new();

        let wheel_target = controller.clone();
        let win = window.clone();
        listeners.push(Listener::add_active(window, "wheel", move |event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            if wheel.ctrl_key() {
                // Pinch zoom.
                return;
            }
            event.prevent_default();
            let delta = match wheel.delta_mode() {
                WheelEvent::DOM_DELTA_LINE => wheel.delta_y() * LINE_HEIGHT_PX,
                WheelEvent::DOM_DELTA_PAGE => wheel.delta_y() * dom::viewport_height(&win),
                _ => wheel.delta_y(),
            };
            let mut controller = wheel_target.borrow_mut();
            // Content height changes as images and fonts load.
            if let Some(document) = win.document() {
                controller.set_limit(dom::scroll_limit(&win, &document));
            }
            controller.on_wheel(delta);
        })?);

        let touch_y = Rc::new(Cell::new(None::<f64>));
        let start_y = touch_y.clone();
        listeners.push(Listener::add(window, "touchstart", move |event| {
            let y = event
                .dyn_ref::<TouchEvent>()
                .and_then(|touch| touch.touches().get(0))
                .map(|t| t.client_y() as f64);
            start_y.set(y);
        })?);

        let move_y = touch_y.clone();
        let touch_target = controller.clone();
        listeners.push(Listener::add_active(window, "touchmove", move |event| {
            let Some(y) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|touch| touch.touches().get(0))
                .map(|t| t.client_y() as f64)
            else {
                return;
            };
            if let Some(last) = move_y.replace(Some(y)) {
                event.prevent_default();
                touch_target.borrow_mut().on_touch(last - y);
            }
        })?);

        let end_y = touch_y;
        listeners.push(Listener::add(window, "touchend", move |_| end_y.set(None))?);

        let resize_target = controller.clone();
        let win = window.clone();
        listeners.push(Listener::add(window, "resize", move |_| {
            if let Some(document) = win.document() {
                resize_target
                    .borrow_mut()
                    .set_limit(dom::scroll_limit(&win, &document));
            }
        })?);

        // Scrollbar drags and anchor jumps bypass the wheel; adopt them once
        // the controller is at rest.
        let native_target = controller.clone();
        let win = window.clone();
        listeners.push(Listener::add(window, "scroll", move |_| {
            let y = dom::scroll_y(&win);
            if let Ok(mut controller) = native_target.try_borrow_mut() {
                if controller.is_settled() && (controller.offset() - y).abs() > 1.0 {
                    controller.scroll_to(y, true);
                }
            }
        })?);

        let mut clock = FrameClock::new();
        let frame_target = controller;
        let win = window.clone();
        let frame = AnimationLoop::start(move |now| {
            let dt = clock.tick(now);
            let mut controller = frame_target.borrow_mut();
            if controller.is_settled() {
                return;
            }
            let offset = controller.advance(dt);
            drop(controller);
            win.scroll_to_with_x_and_y(0.0, offset);
        })?;

        log::info!("smooth scroll mounted");
        Ok(Self {
            _frame: frame,
            _listeners: listeners,
        })
    }
}
