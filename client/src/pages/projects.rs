use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_card::ProjectGrid;
use crate::components::section_heading::SectionHeading;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects"/>
        <section class="section page">
            <SectionHeading
                title="Projects"
                subtitle="A selection of my GitHub projects and homelab builds focused on cybersecurity, automation, and network infrastructure."
            />
            <ProjectGrid/>
        </section>
    }
}
