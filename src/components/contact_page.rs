//! Contact Page Component
//!
//! Contact form with client-side validation. A valid submit swaps the form
//! for a thanks view and schedules a redirect home; leaving the page first
//! cancels the pending redirect.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

use crate::components::Loader;
use crate::validation::{validate_contact, ContactErrors, ContactField};

/// Simulated page load delay
const LOADING_DELAY_MS: u32 = 1_000;
/// How long the thanks view stays up before redirecting home
const REDIRECT_DELAY_MS: u32 = 5_000;

/// Contact page: loading screen, then the form or the thanks view
#[component]
pub fn ContactPage() -> impl IntoView {
    let navigate = StoredValue::new_local(use_navigate());

    let (loading, set_loading) = signal(true);
    let (submitted, set_submitted) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(ContactErrors::default());

    let loading_timer = StoredValue::new_local(Some(Timeout::new(LOADING_DELAY_MS, move || {
        set_loading.set(false);
    })));
    let redirect_timer = StoredValue::new_local(None::<Timeout>);

    // Pending timers must not outlive the page
    on_cleanup(move || {
        loading_timer.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
        redirect_timer.update_value(|slot| {
            if let Some(timer) = slot.take() {
                timer.cancel();
            }
        });
    });

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let report = validate_contact(&name.get(), &email.get(), &message.get());
        if !report.is_empty() {
            set_errors.set(report);
            return;
        }
        set_errors.set(ContactErrors::default());
        set_submitted.set(true);
        web_sys::console::log_1(&"[CONTACT] Message accepted, redirect scheduled".into());
        // Replacing a pending timeout drops it, which cancels it
        redirect_timer.set_value(Some(Timeout::new(REDIRECT_DELAY_MS, move || {
            navigate.with_value(|nav| nav("/", NavigateOptions::default()));
        })));
    };

    view! {
        <div class="contact-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-screen"><Loader/></div> }
            >
                <h2 class="contact-title">"Contáctanos"</h2>
                {move || if submitted.get() {
                    view! {
                        <div class="contact-thanks">
                            <h3>"Gracias por contactarse con nosotros"</h3>
                            <p>"Estaremos respondiendo a la brevedad."</p>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="contact-grid">
                            <div class="contact-form-column">
                                <h3>"Envíanos un mensaje"</h3>
                                <form class="contact-form" novalidate=true on:submit=handle_submit>
                                    <label for="name">"Nombre:"</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        class=("input-error", move || errors.get().name.is_some())
                                        prop:value=move || name.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            set_name.set(input.value());
                                            set_errors.update(|errs| errs.clear(ContactField::Name));
                                        }
                                    />
                                    {move || errors.get().name.map(|msg| {
                                        view! { <span class="field-error">{msg}</span> }
                                    })}

                                    <label for="email">"Correo Electrónico:"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        class=("input-error", move || errors.get().email.is_some())
                                        prop:value=move || email.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            set_email.set(input.value());
                                            set_errors.update(|errs| errs.clear(ContactField::Email));
                                        }
                                    />
                                    {move || errors.get().email.map(|msg| {
                                        view! { <span class="field-error">{msg}</span> }
                                    })}

                                    <label for="message">"Mensaje:"</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows=4
                                        class=("input-error", move || errors.get().message.is_some())
                                        prop:value=move || message.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                            set_message.set(textarea.value());
                                            set_errors.update(|errs| errs.clear(ContactField::Message));
                                        }
                                    ></textarea>
                                    {move || errors.get().message.map(|msg| {
                                        view! { <span class="field-error">{msg}</span> }
                                    })}

                                    <button type="submit" class="submit-btn">"Enviar Mensaje"</button>
                                </form>
                            </div>
                            <ContactInfo/>
                        </div>
                    }.into_any()
                }}
            </Show>
        </div>
    }
}

/// Static contact details shown next to the form
#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info-column">
            <h3>"Información de Contacto"</h3>
            <p>
                "Para cualquier consulta o asistencia, no dude en contactarnos. "
                "Estamos aquí para ayudarlo."
            </p>
            <p>"Teléfono: +54 11 1234 5678"</p>
            <p>"Correo Electrónico: info@bahia-shop.com"</p>
            <p>"Dirección: Av. Principal 1234, Bahía Blanca, Argentina"</p>
        </div>
    }
}
