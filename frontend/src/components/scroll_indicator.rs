use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::config::site_config;
use crate::dom::DocumentScroller;
use crate::effects::indicator_opacity;
use crate::scroll::{SectionScroller, SERVICES};

/// Arrow under the hero; fades out once the page has scrolled. Kept in its
/// own component so scroll updates only re-render this element.
#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let opacity = indicator_opacity(scroll_y, site_config().scroll_threshold);

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        log::debug!("Scroll indicator clicked");
        DocumentScroller.scroll_to(SERVICES);
    });

    html! {
        <div id="scrollIndicator" class="scroll-indicator"
            style={format!("opacity: {};", opacity)}
            onclick={onclick}>
            <span></span>
        </div>
    }
}
