use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::about::{AboutBio, AboutProfile};
use crate::components::section_heading::SectionHeading;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About"/>
        <section class="section page">
            <SectionHeading title="About Me"/>
            <AboutProfile/>
            <AboutBio/>
        </section>
    }
}
