use std::cell::Cell;
use std::collections::BTreeSet;

use crate::device::crosses_breakpoint;

/// Class added to an element once it has scrolled into view.
pub const VISIBLE_CLASS: &str = "visible";
/// Elements carrying this class take part in the reveal animation.
pub const REVEAL_CLASS: &str = "animate-on-scroll";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Translucent,
    Solid,
}

impl HeaderStyle {
    pub fn background(self) -> &'static str {
        match self {
            HeaderStyle::Translucent => "rgba(15, 15, 15, 0.95)",
            HeaderStyle::Solid => "rgba(15, 15, 15, 0.98)",
        }
    }
}

pub fn header_style(scroll_y: f64, threshold: f64) -> HeaderStyle {
    if scroll_y > threshold {
        HeaderStyle::Solid
    } else {
        HeaderStyle::Translucent
    }
}

pub fn indicator_opacity(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        "0"
    } else {
        "1"
    }
}

/// At most one animation frame request in flight.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<bool>,
}

impl FrameThrottle {
    /// True when the caller should request a frame; false while one is pending.
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn complete(&self) {
        self.pending.set(false);
    }
}

pub trait RevealView {
    fn set_revealed(&self, key: &str, revealed: bool);
    /// Start watching `key` afresh so its current intersection is reported
    /// again, even if it never left the viewport.
    fn reobserve(&self, key: &str);
}

/// One-way reveal bookkeeping for observed elements.
#[derive(Debug)]
pub struct RevealTracker {
    revealed: BTreeSet<String>,
    width: f64,
    breakpoint: f64,
    reset_on_breakpoint: bool,
}

impl RevealTracker {
    pub fn new(width: f64, breakpoint: f64, reset_on_breakpoint: bool) -> Self {
        Self {
            revealed: BTreeSet::new(),
            width,
            breakpoint,
            reset_on_breakpoint,
        }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Returns true when this call revealed the element.
    pub fn on_intersect(&mut self, view: &dyn RevealView, key: &str, intersecting: bool) -> bool {
        if !intersecting || self.revealed.contains(key) {
            return false;
        }
        view.set_revealed(key, true);
        self.revealed.insert(key.to_string());
        true
    }

    /// Returns the keys that were hidden again. Each one is re-observed so
    /// elements still on screen get revealed by the next observer callback.
    pub fn on_resize(&mut self, view: &dyn RevealView, new_width: f64) -> Vec<String> {
        let crossed = crosses_breakpoint(self.width, new_width, self.breakpoint);
        self.width = new_width;
        if !crossed || !self.reset_on_breakpoint {
            return Vec::new();
        }
        let cleared: Vec<String> = std::mem::take(&mut self.revealed).into_iter().collect();
        for key in &cleared {
            view.set_revealed(key, false);
            view.reobserve(key);
        }
        log::debug!("Breakpoint crossed at {}px, {} element(s) hidden", new_width, cleared.len());
        cleared
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct FakeView(RefCell<Vec<(String, bool)>>, RefCell<Vec<String>>);

    impl RevealView for FakeView {
        fn set_revealed(&self, key: &str, revealed: bool) {
            self.0.borrow_mut().push((key.to_string(), revealed));
        }

        fn reobserve(&self, key: &str) {
            self.1.borrow_mut().push(key.to_string());
        }
    }

    #[test]
    fn header_switches_past_threshold() {
        assert_eq!(header_style(0.0, 100.0), HeaderStyle::Translucent);
        assert_eq!(header_style(100.0, 100.0), HeaderStyle::Translucent);
        assert_eq!(header_style(100.5, 100.0), HeaderStyle::Solid);
        assert_eq!(HeaderStyle::Solid.background(), "rgba(15, 15, 15, 0.98)");
    }

    #[test]
    fn indicator_fades_out() {
        assert_eq!(indicator_opacity(20.0, 100.0), "1");
        assert_eq!(indicator_opacity(400.0, 100.0), "0");
    }

    #[test]
    fn throttle_is_single_flight() {
        let throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        throttle.complete();
        assert!(throttle.request());
    }

    #[test]
    fn reveal_happens_once() {
        let view = FakeView::default();
        let mut tracker = RevealTracker::new(1280.0, 768.0, false);

        assert!(!tracker.on_intersect(&view, "card-1", false));
        assert!(tracker.on_intersect(&view, "card-1", true));
        assert!(!tracker.on_intersect(&view, "card-1", true));
        assert!(tracker.is_revealed("card-1"));
        assert_eq!(*view.0.borrow(), vec![("card-1".to_string(), true)]);
    }

    #[test]
    fn leaving_viewport_does_not_hide() {
        let view = FakeView::default();
        let mut tracker = RevealTracker::new(1280.0, 768.0, true);
        tracker.on_intersect(&view, "hero", true);
        tracker.on_intersect(&view, "hero", false);
        assert!(tracker.is_revealed("hero"));
    }

    #[test]
    fn breakpoint_crossing_resets_when_enabled() {
        let view = FakeView::default();
        let mut tracker = RevealTracker::new(1280.0, 768.0, true);
        tracker.on_intersect(&view, "a", true);
        tracker.on_intersect(&view, "b", true);

        assert!(tracker.on_resize(&view, 1000.0).is_empty());
        assert_eq!(tracker.on_resize(&view, 600.0), vec!["a", "b"]);
        assert!(!tracker.is_revealed("a"));
        assert!(view.0.borrow().contains(&("b".to_string(), false)));

        assert!(tracker.on_intersect(&view, "a", true));
    }

    #[test]
    fn hidden_elements_are_watched_again() {
        let view = FakeView::default();
        let mut tracker = RevealTracker::new(600.0, 768.0, true);
        tracker.on_intersect(&view, "hero", true);
        tracker.on_intersect(&view, "card-2", true);

        let cleared = tracker.on_resize(&view, 1280.0);
        assert_eq!(*view.1.borrow(), cleared);
        assert_eq!(*view.1.borrow(), vec!["card-2", "hero"]);

        // The fresh observer entry for an element still on screen reveals it.
        assert!(tracker.on_intersect(&view, "hero", true));
        assert!(tracker.is_revealed("hero"));
    }

    #[test]
    fn breakpoint_crossing_ignored_when_disabled() {
        let view = FakeView::default();
        let mut tracker = RevealTracker::new(1280.0, 768.0, false);
        tracker.on_intersect(&view, "a", true);
        assert!(tracker.on_resize(&view, 500.0).is_empty());
        assert!(tracker.is_revealed("a"));
        assert!(view.1.borrow().is_empty());
    }
}
