//! Browser-driven loops for the statistics screen: the requestAnimationFrame
//! scroll reel and the scroll-into-view reveal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both run outside the reactive graph on raw web-sys callbacks and only talk
//! back through signals, using the `try_*` accessors so a callback that fires
//! after the page is gone does nothing.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::state::credits::CreditsReel;

/// Fraction of a section that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Hand `value` to `release` when the current reactive owner is cleaned up.
///
/// For browser handles that must not outlive the component that made them.
pub fn release_on_cleanup<T: 'static>(value: T, release: impl FnOnce(T) + 'static) {
    let held = SendWrapper::new((value, release));
    on_cleanup(move || {
        let (value, release) = held.take();
        release(value);
    });
}

/// Start a frame loop that scrolls `port` while `generation` stays current.
pub fn run_reel(reel: RwSignal<CreditsReel>, port: NodeRef<leptos::html::Div>, generation: u64) {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(window) = web_sys::window() else {
            return;
        };

        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let window_for_cb = window.clone();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            let live = reel.try_with_untracked(|r| r.is_current(generation)).unwrap_or(false);
            if !live {
                holder_for_cb.borrow_mut().take();
                return;
            }

            if let Some(el) = port.get_untracked() {
                let observed = el.scroll_top();
                if let Some(next) = reel.try_update_untracked(|r| r.advance(observed)) {
                    el.set_scroll_top(next);
                }
            }

            let rescheduled = holder_for_cb
                .borrow()
                .as_ref()
                .is_some_and(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok());
            if !rescheduled {
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        } else {
            log::warn!("requestAnimationFrame unavailable; credits reel not started");
            reel.try_update(CreditsReel::halt);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (reel, port, generation);
    }
}

/// Flip `visible` to `true` the first time the element behind `node` scrolls
/// into view. The observer is disconnected when the owning component unmounts.
pub fn reveal_when_visible(node: NodeRef<leptos::html::Div>, visible: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue, closure::Closure};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let hit = entries
                        .iter()
                        .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|e| e.is_intersecting());
                    if hit {
                        visible.try_set(true);
                        observer.disconnect();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            let Ok(observer) = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) else {
                // No observer support: show everything up front.
                visible.set(true);
                return;
            };
            observer.observe(&el);

            // Released when the section unmounts, whether or not it was seen.
            release_on_cleanup((observer, callback), |(observer, callback)| {
                observer.disconnect();
                drop(callback);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, visible);
    }
}
