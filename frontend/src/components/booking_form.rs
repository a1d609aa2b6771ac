use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::dispatch::BookingDesk;
use crate::booking::fields::{BookingFields, FieldAction, FormField};
use crate::config::site_config;
use crate::device::classify;
use crate::dom::{current_viewport, DialogNotifier, TimeoutScheduler, WindowLinkOpener};
use crate::services::{select_value, service_options};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub fields: UseReducerHandle<BookingFields>,
}

fn on_input(fields: &UseReducerHandle<BookingFields>, field: FormField) -> Callback<InputEvent> {
    let fields = fields.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        fields.dispatch(FieldAction::Set(field, input.value()));
    })
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let fields = props.fields.clone();
    let desk = use_memo(
        |_| {
            BookingDesk::new(
                site_config().clone(),
                Rc::new(WindowLinkOpener),
                Rc::new(DialogNotifier),
                Rc::new(TimeoutScheduler),
            )
        },
        (),
    );

    let options = service_options(site_config(), &fields.service);
    let select_ref = use_node_ref();

    // Option `selected` attributes stop applying once the visitor has picked
    // by hand, so the select is driven through its value instead.
    {
        let select_ref = select_ref.clone();
        let value = select_value(&options, &fields.service).to_string();
        use_effect_with_deps(move |value| {
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                if select.value() != *value {
                    select.set_value(value);
                }
            }
            || ()
        }, value);
    }

    let onsubmit = {
        let fields = fields.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let device = classify(&current_viewport(), site_config());
            log::info!("Booking form submitted ({:?})", device);
            let outcome = desk.submit(&fields, device);
            if let Ok(receipt) = &outcome {
                log::debug!("{} link(s) scheduled on {:?} path", receipt.scheduled, receipt.device);
            }
            if let Some(action) = FieldAction::after_submit(&outcome) {
                fields.dispatch(action);
            }
        })
    };

    let on_service = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::Set(FormField::Service, select.value()));
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            fields.dispatch(FieldAction::Set(FormField::Message, area.value()));
        })
    };

    html! {
        <form id="contactForm" class="contact-form" onsubmit={onsubmit}>
            <div class="form-row">
                <input type="text" name={FormField::Name.form_name()} placeholder="Your name"
                    value={fields.name.clone()} oninput={on_input(&fields, FormField::Name)} />
                <input type="email" name={FormField::Email.form_name()} placeholder="Email address"
                    value={fields.email.clone()} oninput={on_input(&fields, FormField::Email)} />
            </div>
            <div class="form-row">
                <input type="tel" name={FormField::Phone.form_name()} placeholder="Phone number"
                    value={fields.phone.clone()} oninput={on_input(&fields, FormField::Phone)} />
                <select id="service" name={FormField::Service.form_name()} ref={select_ref} onchange={on_service}>
                    <option value="" selected={fields.service.is_empty()}>{"Select a service"}</option>
                    {
                        options.into_iter().map(|option| {
                            let selected = option == fields.service;
                            html! { <option value={option.clone()} selected={selected}>{option}</option> }
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <div class="form-row">
                <input type="date" name={FormField::PreferredDate.form_name()}
                    value={fields.preferred_date.clone()} oninput={on_input(&fields, FormField::PreferredDate)} />
                <input type="time" name={FormField::PreferredTime.form_name()}
                    value={fields.preferred_time.clone()} oninput={on_input(&fields, FormField::PreferredTime)} />
            </div>
            <textarea name={FormField::Message.form_name()} rows="4" placeholder="Anything we should know? (optional)"
                value={fields.message.clone()} oninput={on_message} />
            <button type="submit" class="cta-btn primary">{"Send Booking Request"}</button>
        </form>
    }
}
