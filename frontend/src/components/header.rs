use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, MouseEvent};
use yew::prelude::*;

use crate::config::site_config;
use crate::dom::{self, DocumentScroller};
use crate::effects::{header_style, FrameThrottle, HeaderStyle};
use crate::nav::{menu_classes, MenuAction, MenuState};
use crate::scroll::{anchor_target, SectionScroller, ABOUT, CONTACT, HOME, SERVICES};

const NAV_LINKS: [(&str, &str); 4] = [
    (HOME, "Home"),
    (SERVICES, "Services"),
    (ABOUT, "About"),
    (CONTACT, "Contact"),
];

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let menu = use_reducer(MenuState::default);
    let style = use_state(|| HeaderStyle::Translucent);
    let nav_ref = use_node_ref();
    let button_ref = use_node_ref();

    // Outside clicks close the menu.
    {
        let menu = menu.clone();
        let nav_ref = nav_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with_deps(move |_| {
            let document = window().and_then(|w| w.document());
            let click_callback = Closure::wrap(Box::new(move |e: Event| {
                let inside = dom::event_within(
                    &e,
                    &[nav_ref.cast::<Element>(), button_ref.cast::<Element>()],
                );
                menu.dispatch(MenuAction::OutsideClick { inside });
            }) as Box<dyn FnMut(Event)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document {
                    let _ = document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Header background, one update per animation frame.
    {
        let setter = style.setter();
        use_effect_with_deps(move |_| {
            let window = window();
            let threshold = site_config().scroll_threshold;
            let throttle = Rc::new(FrameThrottle::default());

            let scroll_callback = Closure::wrap(Box::new(move || {
                if !throttle.request() {
                    return;
                }
                let throttle = throttle.clone();
                let setter = setter.clone();
                dom::request_frame(move || {
                    setter.set(header_style(dom::scroll_y(), threshold));
                    throttle.complete();
                });
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let nav_link = |href: String| {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            menu.dispatch(MenuAction::LinkClicked);
            if let Some(target) = anchor_target(&href) {
                e.prevent_default();
                DocumentScroller.scroll_to(target);
            }
        })
    };

    let contact_click = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::LinkClicked);
            DocumentScroller.scroll_to(CONTACT);
        })
    };

    let (nav_class, button_class) = menu_classes(menu.open);

    html! {
        <header id="header" class="header" style={format!("background: {};", style.background())}>
            <div class="header-content">
                <a href={format!("#{}", HOME)} class="logo" onclick={nav_link(format!("#{}", HOME))}>
                    {site_config().business_name.clone()}
                </a>
                <nav class={nav_class} ref={nav_ref}>
                    {
                        NAV_LINKS.iter().map(|(id, label)| {
                            let href = format!("#{}", id);
                            html! {
                                <a href={href.clone()} class="nav-link" onclick={nav_link(href)}>
                                    {*label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <button class="contact-btn" onclick={contact_click}>{"Book Now"}</button>
                </nav>
                <button id="mobileMenuBtn" class={button_class} ref={button_ref} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}
