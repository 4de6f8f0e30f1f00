//! "My Journey" milestones alternating either side of a vertical spine.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::timeline::MILESTONES;

#[component]
pub fn Timeline() -> impl IntoView {
    view! {
        <Reveal class="timeline">
            {MILESTONES
                .iter()
                .map(|m| {
                    view! {
                        <div class=m.side.class()>
                            <div class="milestone__point"><span class="milestone__ping"></span></div>
                            <div class="milestone__content">
                                <span class="milestone__year mono">{m.year}</span>
                                <h3 class="mono">{m.title}</h3>
                                <p>{m.description}</p>
                            </div>
                            <div class="milestone__icon-cell">
                                <div class="milestone__icon">{m.icon}</div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </Reveal>
    }
}
