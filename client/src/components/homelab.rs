//! Homelab overview: key components, a parallax network diagram, and hardware specs.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::profile::{HOMELAB_OVERVIEW, HOMELAB_SPECS, KEY_COMPONENTS, TOPOLOGY, TopologyNode};
use crate::util::motion::parallax_transform;

#[component]
pub fn HomelabOverview() -> impl IntoView {
    let scroll_y = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::browser;

        Effect::new(move || scroll_y.set(browser::scroll_y()));
        let handle = window_event_listener(leptos::ev::scroll, move |_| scroll_y.set(browser::scroll_y()));
        on_cleanup(move || handle.remove());
    }

    let tier = move |n: u8| {
        TOPOLOGY
            .iter()
            .filter(move |node| node.tier == n)
            .map(move |node| view! { <TopologyBox node=node scroll_y=scroll_y/> })
            .collect_view()
    };

    view! {
        <div class="homelab">
            <Reveal class="homelab__text">
                <h3 class="accent mono">"Network Infrastructure"</h3>
                <p>{HOMELAB_OVERVIEW}</p>
                <h4 class="accent mono">"Key Components"</h4>
                <ul class="arrows">
                    {KEY_COMPONENTS
                        .iter()
                        .map(|(name, role)| view! { <li><span class="accent mono">{*name}</span>" "{*role}</li> })
                        .collect_view()}
                </ul>
            </Reveal>
            <Reveal class="topology">
                <div class="topology__tier">{tier(0)}</div>
                <div class="topology__link"></div>
                <div class="topology__tier">{tier(1)}</div>
                <div class="topology__link topology__link--fan"></div>
                <div class="topology__tier">{tier(2)}</div>
                <div class="topology__link"></div>
                <div class="topology__tier">{tier(3)}</div>
            </Reveal>
        </div>
    }
}

#[component]
fn TopologyBox(node: &'static TopologyNode, scroll_y: RwSignal<f64>) -> impl IntoView {
    view! {
        <div class="topology__node hover-effect" style:transform=move || parallax_transform(scroll_y.get(), node.speed)>
            <span class="mono">{node.label}</span>
            {node.tooltip.map(|tip| view! { <span class="topology__tooltip">{tip}</span> })}
        </div>
    }
}

#[component]
pub fn HomelabSpecs() -> impl IntoView {
    view! {
        <Reveal class="homelab-specs">
            <h3 class="accent mono">"Homelab Specs"</h3>
            <div class="homelab-specs__grid">
                {HOMELAB_SPECS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="spec-group">
                                <h4 class="accent mono">{group.title}</h4>
                                <ul>{group.items.iter().map(|item| view! { <li>"• "{*item}</li> }).collect_view()}</ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Reveal>
    }
}
