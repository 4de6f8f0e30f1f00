use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::cyber_grid::CyberGrid;
use crate::components::homelab::{HomelabOverview, HomelabSpecs};
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::content::profile::HOMELAB_INTRO;

#[component]
pub fn HomelabPage() -> impl IntoView {
    view! {
        <Title text="Homelab"/>
        <section class="section page page--backdrop">
            <CyberGrid/>
            <Reveal>
                <SectionHeading title="Homelab" subtitle=HOMELAB_INTRO/>
            </Reveal>
            <HomelabOverview/>
            <HomelabSpecs/>
        </section>
    }
}
