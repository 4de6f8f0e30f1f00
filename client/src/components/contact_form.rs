//! Contact form and the list of direct contact channels.
//!
//! The form's draft survives reloads through `localStorage` and is cleared
//! once a simulated submission completes.

use leptos::prelude::*;

use crate::content::profile::CHANNELS;
use crate::content::site::{ContactMode, SITE};
use crate::state::contact::{ContactField, ContactState, SubmitOutcome};
use crate::state::toast::ToastState;
use crate::util::browser::open_href;
use crate::util::ui_persistence::{load_draft, save_draft};

#[component]
pub fn ContactForm(mode: ContactMode) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let contact = RwSignal::new(ContactState::default());

    // Restore once after hydration; never overwrite what the visitor already typed.
    Effect::new(move || {
        if let Some(draft) = load_draft() {
            contact.update(|c| {
                if c.draft.is_empty() {
                    c.draft = draft;
                }
            });
        }
    });

    let on_field = move |field: ContactField, value: String| {
        contact.update(|c| c.draft.set(field, value));
        contact.with_untracked(|c| save_draft(&c.draft));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = None;
        toasts.update(|t| contact.update(|c| result = Some(c.submit(mode, SITE.email, t))));
        match result {
            Some(Ok(SubmitOutcome::OpenMailto(href))) => open_href(&href),
            Some(Ok(SubmitOutcome::Pending)) => finish_later(contact, toasts),
            Some(Err(_)) | None => {}
        }
    };

    let sending = move || contact.with(ContactState::is_sending);

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            <div class="floating-field">
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder=" "
                    required
                    prop:value=move || contact.with(|c| c.draft.name.clone())
                    on:input=move |ev| on_field(ContactField::Name, event_target_value(&ev))
                />
                <label for="name">"Your Name"</label>
            </div>
            <div class="floating-field">
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder=" "
                    required
                    prop:value=move || contact.with(|c| c.draft.email.clone())
                    on:input=move |ev| on_field(ContactField::Email, event_target_value(&ev))
                />
                <label for="email">"Email Address"</label>
            </div>
            <div class="floating-field">
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder=" "
                    required
                    prop:value=move || contact.with(|c| c.draft.message.clone())
                    on:input=move |ev| on_field(ContactField::Message, event_target_value(&ev))
                ></textarea>
                <label for="message">"Your Message"</label>
            </div>
            {move || contact.with(|c| c.error).map(|msg| view! { <p class="form-error" role="alert">{msg}</p> })}
            <button type="submit" class="btn btn--primary btn--block hover-effect" disabled=sending>
                {move || if sending() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[cfg(feature = "hydrate")]
fn finish_later(contact: RwSignal<ContactState>, toasts: RwSignal<ToastState>) {
    use std::time::Duration;

    use crate::state::contact::{SIMULATED_DELAY_MS, finish_simulated};
    use crate::util::ui_persistence::clear_draft;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(SIMULATED_DELAY_MS))).await;
        if finish_simulated(contact, toasts) {
            clear_draft();
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn finish_later(_contact: RwSignal<ContactState>, _toasts: RwSignal<ToastState>) {}

#[component]
pub fn ContactChannels() -> impl IntoView {
    view! {
        <div class="channels">
            {CHANNELS
                .iter()
                .map(|ch| {
                    view! {
                        <div class="channel hover-effect">
                            <span class="channel__icon" aria-hidden="true">{ch.icon}</span>
                            <h3 class="accent mono">{ch.name}</h3>
                            <p>{ch.value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
