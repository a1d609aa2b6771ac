//! Browser-backed implementations of the page traits.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::booking::dispatch::{LinkOpener, Notice, Notifier, Scheduler};
use crate::device::Viewport;
use crate::effects::{RevealTracker, RevealView, REVEAL_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, VISIBLE_CLASS};
use crate::scroll::SectionScroller;

pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let element = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        match element {
            Some(element) => {
                let mut options = ScrollIntoViewOptions::new();
                options.behavior(ScrollBehavior::Smooth);
                options.block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                log::debug!("Scrolled to: {}", id);
                true
            }
            None => {
                gloo_console::log!("Element not found:", id);
                false
            }
        }
    }
}

pub struct WindowLinkOpener;

impl LinkOpener for WindowLinkOpener {
    fn open(&self, url: &str) -> bool {
        match window().map(|w| w.open_with_url_and_target(url, "_blank")) {
            Some(Ok(Some(_))) => true,
            _ => false,
        }
    }
}

/// Blocking `alert`/`confirm` dialogs.
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&self, notice: Notice) {
        let text = match notice {
            Notice::Warning(text) | Notice::Success(text) => text,
        };
        if let Some(window) = window() {
            let _ = window.alert_with_message(&text);
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        // Fire-and-forget; a staggered link cannot be called back.
        Timeout::new(delay_ms, task).forget();
    }
}

pub fn current_viewport() -> Viewport {
    let Some(window) = window() else {
        return Viewport::new(0.0, None);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let user_agent = window.navigator().user_agent().ok();
    Viewport { width, user_agent }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Heading text of the `.service-card` enclosing the clicked element.
pub fn card_heading(e: &MouseEvent) -> Option<String> {
    let target: Element = e.target()?.dyn_into().ok()?;
    let card = target.closest(".service-card").ok()??;
    card.query_selector("h3").ok()??.text_content()
}

/// True when the event target sits inside any of `elements`.
pub fn event_within(e: &web_sys::Event, elements: &[Option<Element>]) -> bool {
    let Some(node) = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    elements.iter().flatten().any(|el| el.contains(Some(&node)))
}

fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Toggles the visible marker on elements looked up by id, and re-arms
/// `observer` for them.
struct ObservedView<'a> {
    observer: &'a IntersectionObserver,
}

impl RevealView for ObservedView<'_> {
    fn set_revealed(&self, key: &str, revealed: bool) {
        let Some(element) = element_by_id(key) else {
            return;
        };
        let classes = element.class_list();
        let _ = if revealed {
            classes.add_1(VISIBLE_CLASS)
        } else {
            classes.remove_1(VISIBLE_CLASS)
        };
    }

    fn reobserve(&self, key: &str) {
        // observe() always queues an initial entry, so an element that is
        // already on screen is reported as intersecting again.
        if let Some(element) = element_by_id(key) {
            self.observer.unobserve(&element);
            self.observer.observe(&element);
        }
    }
}

/// Live observer; dropping it disconnects.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealView for RevealObserver {
    fn set_revealed(&self, key: &str, revealed: bool) {
        ObservedView { observer: &self.observer }.set_revealed(key, revealed);
    }

    fn reobserve(&self, key: &str) {
        ObservedView { observer: &self.observer }.reobserve(key);
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn observe_reveals(tracker: Rc<RefCell<RevealTracker>>) -> Option<RevealObserver> {
    let document = window()?.document()?;

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let view = ObservedView { observer: &observer };
        let mut tracker = tracker.borrow_mut();
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let id = entry.target().id();
            if id.is_empty() {
                continue;
            }
            tracker.on_intersect(&view, &id, entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut init = IntersectionObserverInit::new();
    init.root_margin(REVEAL_ROOT_MARGIN);
    init.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    let nodes = document.query_selector_all(&format!(".{}", REVEAL_CLASS)).ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    log::debug!("Observing {} element(s) for reveal", nodes.length());

    Some(RevealObserver { observer, _callback: callback })
}

/// Runs `f` on the next animation frame.
pub fn request_frame(f: impl FnOnce() + 'static) {
    let Some(window) = window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let _ = window.request_animation_frame(callback.unchecked_ref());
}
