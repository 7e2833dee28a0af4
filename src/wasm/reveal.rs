use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::dom::{self, Listener};
use super::render::AnimationLoop;
use crate::clock::FrameClock;
use crate::reveal::{
    Marquee, Pose, RevealId, RevealKind, RevealPhase, SectionAnimator, TriggerConfig, TriggerStart, Yoyo,
};

struct Tracked {
    element: Element,
    id: Option<RevealId>,
    float: Option<Yoyo>,
    marquee: Option<Marquee>,
    finished: bool,
}

struct State {
    animator: SectionAnimator,
    tracked: Vec<Tracked>,
    elapsed: f64,
}

/// Reveals every `[data-reveal]` element once it scrolls into view, floats
/// `[data-float]` elements and slides `[data-marquee]` strips.
pub struct RevealBinding {
    _frame: AnimationLoop,
    _resize: Listener,
}

impl RevealBinding {
    pub fn mount(window: &Window, document: &Document) -> Result<Option<Self>, JsValue> {
        let scroll = dom::scroll_y(window);
        let mut animator = SectionAnimator::new(TriggerConfig::default());
        let mut tracked = Vec::new();

        for element in dom::query_all(document, "[data-reveal], [data-float], [data-marquee]")? {
            let id = match element.get_attribute("data-reveal") {
                Some(tag) => match tag.parse::<RevealKind>() {
                    Ok(kind) => {
                        let index = element
                            .get_attribute("data-stagger")
                            .and_then(|s| s.parse::<usize>().ok())
                            .unwrap_or(0);
                        let top = element.get_bounding_client_rect().top() + scroll;
                        let id = animator.register(top, kind, index);
                        if let Some(raw) = element.get_attribute("data-reveal-start") {
                            match raw.parse::<TriggerStart>() {
                                Ok(start) => animator.set_start(id, start),
                                Err(err) => log::warn!("{err}"),
                            }
                        }
                        Some(id)
                    }
                    Err(err) => {
                        log::warn!("{err}");
                        None
                    }
                },
                None => None,
            };
            let float = element.get_attribute("data-float").map(|raw| {
                let amplitude = raw.parse::<f64>().unwrap_or(-10.0);
                let period = element
                    .get_attribute("data-float-period")
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(2.0);
                Yoyo::new(amplitude, period)
            });
            let marquee = element.get_attribute("data-marquee").map(|raw| {
                let distance = raw.parse::<f64>().unwrap_or(-100.0);
                let period = element
                    .get_attribute("data-marquee-period")
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(20.0);
                Marquee::new(distance, period)
            });
            if id.is_none() && float.is_none() && marquee.is_none() {
                continue;
            }
            tracked.push(Tracked {
                element,
                id,
                float,
                marquee,
                finished: false,
            });
        }

        if tracked.is_empty() {
            return Ok(None);
        }

        let state = Rc::new(RefCell::new(State {
            animator,
            tracked,
            elapsed: 0.0,
        }));
        // Paint initial poses before the first frame so nothing flashes in
        // its final position.
        paint(&mut state.borrow_mut(), true);

        let resize_state = state.clone();
        let win = window.clone();
        let resize = Listener::add(window, "resize", move |_| {
            let scroll = dom::scroll_y(&win);
            let mut state = resize_state.borrow_mut();
            let State {
                animator, tracked, ..
            } = &mut *state;
            for entry in tracked.iter() {
                if let Some(id) = entry.id {
                    animator.set_top(id, entry.element.get_bounding_client_rect().top() + scroll);
                }
            }
        })?;

        let win = window.clone();
        let mut clock = FrameClock::new();
        let frame = AnimationLoop::start(move |now| {
            let dt = clock.tick(now);
            let mut state = state.borrow_mut();
            let started = state
                .animator
                .observe(dom::scroll_y(&win), dom::viewport_height(&win));
            if !started.is_empty() {
                log::debug!("revealing {} element(s)", started.len());
            }
            state.animator.advance(dt);
            state.elapsed += dt;
            paint(&mut state, false);
        })?;

        Ok(Some(Self {
            _frame: frame,
            _resize: resize,
        }))
    }
}

fn paint(state: &mut State, initial: bool) {
    let State {
        animator,
        tracked,
        elapsed,
    } = state;
    for entry in tracked.iter_mut() {
        let phase = entry.id.and_then(|id| animator.phase(id));
        let needs_paint = initial
            || entry.float.is_some()
            || entry.marquee.is_some()
            || match phase {
                Some(RevealPhase::Playing { .. }) => true,
                Some(RevealPhase::Done) => !entry.finished,
                _ => false,
            };
        if !needs_paint {
            continue;
        }
        let mut pose = entry
            .id
            .and_then(|id| animator.pose(id))
            .unwrap_or(Pose::IDENTITY);
        if let Some(float) = entry.float {
            pose.y += float.sample(*elapsed);
        }
        if let Some(marquee) = entry.marquee {
            pose.x += marquee.sample(*elapsed);
        }
        dom::set_style(&entry.element, "opacity", &format!("{:.3}", pose.opacity));
        dom::set_style(&entry.element, "transform", &pose.css_transform());
        entry.finished = phase == Some(RevealPhase::Done);
    }
}
