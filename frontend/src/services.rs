use yew::functional::UseReducerHandle;

use crate::booking::fields::{BookingFields, FieldAction, FormField};
use crate::config::SiteConfig;
use crate::scroll::{SectionScroller, CONTACT};

/// Used when a service button sits outside a card or the card has no heading.
pub const FALLBACK_SERVICE: &str = "Service";
pub const MAINTENANCE_SERVICE: &str = "Maintenance Service";

pub trait ServiceField {
    fn set_service(&self, name: &str);
}

impl ServiceField for UseReducerHandle<BookingFields> {
    fn set_service(&self, name: &str) {
        self.dispatch(FieldAction::Set(FormField::Service, name.to_string()));
    }
}

pub fn service_name_from_heading(heading: Option<&str>) -> String {
    heading
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .unwrap_or(FALLBACK_SERVICE)
        .to_string()
}

/// Pre-fills the booking form's service and brings the booking section into view.
/// The name is not checked against the offered services.
pub fn select_service(field: &dyn ServiceField, scroller: &dyn SectionScroller, name: &str) -> bool {
    field.set_service(name);
    log::debug!("Service pre-filled: {}", name);
    scroller.scroll_to(CONTACT)
}

/// Options for the service dropdown. `current` is appended when it is not one
/// of the offered services so a pre-filled value stays visible.
pub fn service_options(config: &SiteConfig, current: &str) -> Vec<String> {
    let mut options: Vec<String> = config.services.iter().map(|s| s.title.clone()).collect();
    if !options.iter().any(|o| o == MAINTENANCE_SERVICE) {
        options.push(MAINTENANCE_SERVICE.to_string());
    }
    if !current.is_empty() && !options.iter().any(|o| o == current) {
        options.push(current.to_string());
    }
    options
}

/// Value to force onto the `<select>`: the current service when it is one of
/// `options`, otherwise the empty placeholder.
pub fn select_value<'a>(options: &[String], current: &'a str) -> &'a str {
    if options.iter().any(|o| o == current) {
        current
    } else {
        ""
    }
}
