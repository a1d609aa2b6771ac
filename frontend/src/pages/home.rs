use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::booking::fields::BookingFields;
use crate::components::booking_form::BookingForm;
use crate::components::header::SiteHeader;
use crate::components::reveal::Reveal;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::config::site_config;
use crate::dom::{self, DocumentScroller, RevealObserver};
use crate::effects::RevealTracker;
use crate::scroll::{SectionScroller, ABOUT, CONTACT, HOME, SERVICES};
use crate::services::{select_service, service_name_from_heading, MAINTENANCE_SERVICE};

fn scroll_button(target: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        e.stop_propagation();
        log::debug!("Button scrolling to {}", target);
        DocumentScroller.scroll_to(target);
    })
}

#[function_component(Home)]
pub fn home() -> Html {
    let config = site_config();
    let fields = use_reducer(BookingFields::default);
    let (width, _) = use_window_size();
    let tracker = use_mut_ref(|| {
        RevealTracker::new(
            dom::current_viewport().width,
            config.mobile_breakpoint,
            config.reset_reveal_on_breakpoint,
        )
    });

    let observer = use_mut_ref(|| None::<RevealObserver>);

    {
        let tracker = tracker.clone();
        let observer = observer.clone();
        use_effect_with_deps(move |_| {
            *observer.borrow_mut() = dom::observe_reveals(tracker);
            move || drop(observer.borrow_mut().take())
        }, ());
    }

    {
        let tracker = tracker.clone();
        let observer = observer.clone();
        use_effect_with_deps(move |width| {
            if let Some(observer) = observer.borrow().as_ref() {
                tracker.borrow_mut().on_resize(observer, *width);
            }
            || ()
        }, width);
    }

    let service_click = {
        let fields = fields.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            let name = service_name_from_heading(dom::card_heading(&e).as_deref());
            log::info!("Service button clicked: {}", name);
            select_service(&fields, &DocumentScroller, &name);
        })
    };

    let maintenance_click = {
        let fields = fields.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            select_service(&fields, &DocumentScroller, MAINTENANCE_SERVICE);
        })
    };

    html! {
        <>
            <SiteHeader />
            <section id={HOME} class="hero">
                <div class="hero-content">
                    <h1>{format!("{} - car care that comes to you", config.business_name)}</h1>
                    <p>{"Servicing, repairs and valeting, booked in a minute."}</p>
                    <div class="hero-buttons">
                        <button class="cta-btn primary" onclick={scroll_button(CONTACT)}>{"Book Now"}</button>
                        <button class="cta-btn secondary" onclick={scroll_button(SERVICES)}>{"View Services"}</button>
                    </div>
                </div>
                <ScrollIndicator />
            </section>

            <section id={SERVICES} class="services">
                <h2>{"Our Services"}</h2>
                <div class="services-grid">
                    {
                        config.services.iter().enumerate().map(|(i, service)| html! {
                            <Reveal id={format!("service-card-{}", i)} class={classes!("service-card")}>
                                <h3>{service.title.clone()}</h3>
                                <p>{service.blurb.clone()}</p>
                                <button class="service-btn" onclick={service_click.clone()}>{"Book This Service"}</button>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
                <Reveal id="maintenance-banner" class={classes!("maintenance")}>
                    <h3>{"Regular maintenance plans"}</h3>
                    <p>{"Keep on top of servicing with a scheduled visit."}</p>
                    <button class="maintenance-btn" onclick={maintenance_click}>{"Book Maintenance"}</button>
                </Reveal>
            </section>

            <section id={ABOUT} class="about">
                <Reveal id="about-copy">
                    <h2>{"About Us"}</h2>
                    <p>{"Independent, local and fully insured. We come to your home or workplace."}</p>
                </Reveal>
            </section>

            <section id={CONTACT} class="contact">
                <Reveal id="booking">
                    <h2>{"Book Your Service"}</h2>
                    <BookingForm fields={fields.clone()} />
                </Reveal>
            </section>
        </>
    }
}
