//! Project cards with pointer tilt, and the grid that lays them out.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::projects::{PROJECTS, Project};
use crate::util::tilt::TILT_REST;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let card = NodeRef::<leptos::html::Div>::new();
    let transform = RwSignal::new(TILT_REST.to_owned());

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::browser::pointer_within;
            use crate::util::tilt::tilt_transform;

            if let Some(el) = card.get_untracked() {
                let (x, y, w, h) = pointer_within(&el, &ev);
                transform.set(tilt_transform(x, y, w, h));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            class="project-card"
            node_ref=card
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=move |_| transform.set(TILT_REST.to_owned())
        >
            <div class="project-card__image">
                <img src=project.image alt=project.title loading="lazy"/>
            </div>
            <div class="project-card__body">
                <h3 class="accent mono">{project.title}</h3>
                <p>{project.description}</p>
                <Tags tags=project.tags/>
                <a href=project.detail_href() class="project-card__link mono hover-effect">"View Project →"</a>
            </div>
        </div>
    }
}

#[component]
pub fn Tags(tags: &'static [&'static str]) -> impl IntoView {
    view! { <div class="tags">{tags.iter().map(|t| view! { <span class="tag mono">{*t}</span> }).collect_view()}</div> }
}

/// The first `limit` projects (all of them by default) in a responsive grid.
#[component]
pub fn ProjectGrid(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let shown = limit.unwrap_or(PROJECTS.len());
    view! {
        <div class="project-grid">
            {PROJECTS
                .iter()
                .take(shown)
                .enumerate()
                .map(|(i, project)| {
                    view! {
                        <div class="project-grid__cell" style:animation-delay=format!("{}ms", i * 100)>
                            <Reveal>
                                <ProjectCard project=project/>
                            </Reveal>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
