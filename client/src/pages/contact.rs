use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::{ContactChannels, ContactForm};
use crate::components::section_heading::SectionHeading;
use crate::content::profile::CONTACT_INTRO;
use crate::content::site::CONTACT_PAGE_MODE;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact"/>
        <section class="section page">
            <SectionHeading title="Contact Me" subtitle=CONTACT_INTRO/>
            <div class="contact-panel">
                <ContactForm mode=CONTACT_PAGE_MODE/>
            </div>
            <ContactChannels/>
        </section>
    }
}
