use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::about::AboutBio;
use crate::components::contact_form::{ContactChannels, ContactForm};
use crate::components::hero::Hero;
use crate::components::holographic_stats::HolographicStats;
use crate::components::project_card::ProjectGrid;
use crate::components::reveal::Reveal;
use crate::components::section_heading::SectionHeading;
use crate::components::timeline::Timeline;
use crate::content::profile::CONTACT_INTRO;
use crate::content::site::{HOME_CONTACT_MODE, SITE};

/// Projects previewed on the landing page.
const PREVIEW_COUNT: usize = 3;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{} | Cybersecurity Portfolio", SITE.owner)/>
        <Hero/>
        <HolographicStats/>
        <section id="about" class="section">
            <Reveal>
                <SectionHeading title="About Me"/>
            </Reveal>
            <AboutBio/>
        </section>
        <section id="projects" class="section section--tinted">
            <Reveal>
                <SectionHeading title="Projects" subtitle="Highlights from my security tooling and homelab builds."/>
            </Reveal>
            <ProjectGrid limit=PREVIEW_COUNT/>
            <div class="section__more">
                <a href="/projects" class="btn btn--outline hover-effect">"All Projects"</a>
            </div>
        </section>
        <section id="journey" class="section section--tinted">
            <Reveal>
                <SectionHeading
                    title="My Journey"
                    subtitle="Key milestones in my cybersecurity and technology career"
                />
            </Reveal>
            <Timeline/>
        </section>
        <section id="contact" class="section">
            <Reveal>
                <SectionHeading title="Contact Me" subtitle=CONTACT_INTRO/>
            </Reveal>
            <div class="contact-layout">
                <Reveal>
                    <ContactForm mode=HOME_CONTACT_MODE/>
                </Reveal>
                <Reveal>
                    <ContactChannels/>
                </Reveal>
            </div>
        </section>
    }
}
