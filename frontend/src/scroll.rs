pub const HOME: &str = "home";
pub const SERVICES: &str = "services";
pub const ABOUT: &str = "about";
/// The booking section.
pub const CONTACT: &str = "contact";

pub trait SectionScroller {
    /// Smooth, top-aligned scroll to the element with `id`. Returns false when
    /// the page has no such element.
    fn scroll_to(&self, id: &str) -> bool;
}

/// Fragment id of an in-page link, or None when the browser should navigate.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
