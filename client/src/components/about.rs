//! About sections: the bio used on the home page and the fuller profile on `/about`.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::profile::{
    ABOUT_BIO, ABOUT_HEADLINE, CERTIFICATIONS, EXPERTISE, PORTRAIT_IMAGE, SKILL_CHIPS, TECHNICAL_SKILLS, WHO_AM_I,
    WORKSPACE_IMAGE,
};

/// Headline, bio and two skill columns.
#[component]
pub fn AboutBio() -> impl IntoView {
    view! {
        <div class="about-bio">
            <Reveal class="about-bio__image">
                <img src=WORKSPACE_IMAGE alt="Workspace" loading="lazy"/>
            </Reveal>
            <div class="about-bio__text">
                <Reveal>
                    <h3 class="accent mono">{ABOUT_HEADLINE}</h3>
                </Reveal>
                {ABOUT_BIO.iter().map(|p| view! { <Reveal><p>{*p}</p></Reveal> }).collect_view()}
                <Reveal class="about-bio__columns">
                    <BulletList title="Technical Skills" items=TECHNICAL_SKILLS/>
                    <BulletList title="Certifications" items=CERTIFICATIONS/>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn BulletList(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="accent mono">{title}</h4>
            <ul class="bullets">{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
        </div>
    }
}

/// Portrait, "Who am I?", expertise and skill chips.
#[component]
pub fn AboutProfile() -> impl IntoView {
    view! {
        <div class="about-profile">
            <Reveal class="about-profile__portrait">
                <img src=PORTRAIT_IMAGE alt="Developer portrait" loading="lazy"/>
            </Reveal>
            <Reveal class="about-profile__text">
                <h3 class="accent mono">"Who am I?"</h3>
                <p>{WHO_AM_I}</p>
                <h4 class="accent mono">"My Expertise"</h4>
                <ul class="arrows">{EXPERTISE.iter().map(|e| view! { <li>{*e}</li> }).collect_view()}</ul>
                <h4 class="accent mono">"My Skills"</h4>
                <div class="chips">
                    {SKILL_CHIPS.iter().map(|s| view! { <span class="chip">{*s}</span> }).collect_view()}
                </div>
            </Reveal>
        </div>
    }
}
