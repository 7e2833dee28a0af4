use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlCanvasElement};

use super::{dom, glyph, image, tunnel, SharedTheme};
use crate::error::{VizError, VizResult};
use crate::theme::{Palette, DARK};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Repeating animation-frame callback. Dropping the loop cancels the pending
/// frame and releases the closure.
pub struct AnimationLoop {
    frame: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
    alive: Rc<Cell<bool>>,
}

impl AnimationLoop {
    /// Calls `tick` with the frame timestamp (ms) once per display refresh.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        // `f` holds the animation-frame closure so that we can keep calling
        // `request_animation_frame` recursively. Storing it inside an `Option`
        // allows us to create the `Closure` first and then obtain a reference to
        // it from within itself.
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let pending = Rc::new(Cell::new(None));
        let alive = Rc::new(Cell::new(true));

        let next_pending = pending.clone();
        let next_alive = alive.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            if !next_alive.get() {
                return;
            }
            tick(now);

            // schedule next
            let Some(win) = window() else { return };
            let frame = f.borrow();
            if let Some(callback) = frame.as_ref() {
                match win.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(id) => next_pending.set(Some(id)),
                    Err(err) => log::warn!("animation frame not scheduled: {err:?}"),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let id = {
            let frame = g.borrow();
            let callback = frame.as_ref().ok_or("animation frame closure missing")?;
            window()
                .ok_or("no window")?
                .request_animation_frame(callback.as_ref().unchecked_ref())?
        };
        pending.set(Some(id));

        Ok(Self {
            frame: g,
            pending,
            alive,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.alive.set(false);
        if let (Some(id), Some(win)) = (self.pending.take(), window()) {
            win.cancel_animation_frame(id).ok();
        }
        // Breaks the closure -> Rc -> closure cycle.
        self.frame.borrow_mut().take();
    }
}

/// Slot for a visual whose loop starts once its assets have loaded.
#[derive(Clone, Default)]
pub struct LoopSlot {
    inner: Rc<RefCell<Option<AnimationLoop>>>,
    cancelled: Rc<Cell<bool>>,
}

impl LoopSlot {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Installs the loop unless the owning visual was unmounted while its
    /// assets were loading.
    pub fn fill(&self, animation: AnimationLoop) {
        if self.cancelled.get() {
            return;
        }
        *self.inner.borrow_mut() = Some(animation);
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        self.inner.borrow_mut().take();
    }
}

/// One mounted visual. Dropping it stops rendering.
pub struct VisualHandle {
    slot: LoopSlot,
}

impl VisualHandle {
    pub fn new(slot: LoopSlot) -> Self {
        Self { slot }
    }
}

impl Drop for VisualHandle {
    fn drop(&mut self) {
        self.slot.cancel();
    }
}

/// Current palette, or the dark one while a toggle holds the store.
pub fn palette(store: &SharedTheme) -> Palette {
    store.try_borrow().map(|store| store.palette()).unwrap_or(DARK)
}

/// Starts the per-frame draw for a visual, mapping browser errors.
pub fn run(tick: impl FnMut(f64) + 'static) -> VizResult<AnimationLoop> {
    AnimationLoop::start(tick).map_err(|err| VizError::dom(format!("{err:?}")))
}

/// Mounts every `<canvas data-visual="...">` on the page. A canvas that
/// cannot be set up is logged and skipped.
pub fn mount_visuals(document: &Document, store: &SharedTheme) -> Result<Vec<VisualHandle>, JsValue> {
    let mut handles = Vec::new();
    for element in dom::query_all(document, "canvas[data-visual]")? {
        let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
            continue;
        };
        let kind = canvas.get_attribute("data-visual").unwrap_or_default();
        let mounted = match kind.as_str() {
            "image" => dom::parse_config(&canvas)
                .and_then(|config| image::mount(&canvas, config, store.clone())),
            "glyph" => dom::parse_config(&canvas)
                .and_then(|config| glyph::mount(&canvas, config, store.clone())),
            "tunnel" => dom::parse_config(&canvas)
                .and_then(|config| tunnel::mount(&canvas, config, store.clone())),
            other => Err(VizError::config(format!("unknown visual {other:?}"))),
        };
        match mounted {
            Ok(handle) => handles.push(handle),
            Err(err) => log::warn!("visual {kind:?} skipped: {err}"),
        }
    }
    log::info!("mounted {} visual(s)", handles.len());
    Ok(handles)
}
