//! `/projects/:id`. Unknown ids redirect to the listing, replacing the
//! history entry so "back" does not bounce through the dead link.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::components::project_card::Tags;
use crate::content::projects::{
    DetailRoute, KEY_FEATURES, PROJECT_LAST_UPDATED, PROJECT_STATUS, Project, RELATED_LIMIT, related_projects,
    resolve_detail,
};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let params = use_params_map();
    let route = Memo::new(move |_| resolve_detail(params.with(|p| p.get("id")).as_deref()));

    move || match route.get() {
        DetailRoute::Show(project) => view! { <ProjectDetail project=project/> }.into_any(),
        DetailRoute::Redirect(path) => {
            view! { <Redirect path=path options=NavigateOptions { replace: true, ..NavigateOptions::default() }/> }
                .into_any()
        }
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    let details_html = render_markdown_html(project.details);
    let related = related_projects(project, RELATED_LIMIT);

    view! {
        <Title text=project.title/>
        <section class="section page project-detail">
            <a href="/projects" class="back-link hover-effect">"← Back to Projects"</a>
            <article class="project-detail__panel">
                <header class="project-detail__hero">
                    <img src=project.image alt=project.title/>
                    <div class="project-detail__hero-text">
                        <h1>{project.title}</h1>
                        <Tags tags=project.tags/>
                    </div>
                </header>
                <div class="project-detail__body">
                    <div class="project-detail__main">
                        <h2 class="accent">"Project Overview"</h2>
                        <p class="lead">{project.description}</p>
                        <h2 class="accent">"Details"</h2>
                        <div class="markdown" inner_html=details_html></div>
                        <h2 class="accent">"Key Features"</h2>
                        <ul class="features">
                            {KEY_FEATURES
                                .iter()
                                .map(|(icon, text)| {
                                    view! {
                                        <li>
                                            <span class="accent" aria-hidden="true">{*icon}</span>
                                            <span>{*text}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <aside class="project-detail__info">
                        <div class="info-card">
                            <h3 class="accent">"Project Information"</h3>
                            <InfoRow label="Project Type" value=project.kind().to_owned()/>
                            <InfoRow label="Technologies" value=project.tags.join(", ")/>
                            <InfoRow label="Status" value=PROJECT_STATUS.to_owned()/>
                            <InfoRow label="Last Updated" value=PROJECT_LAST_UPDATED.to_owned()/>
                        </div>
                        <a href="https://github.com" target="_blank" rel="noopener noreferrer" class="btn btn--primary btn--block">
                            "View GitHub Repository"
                        </a>
                        <a href=project.link class="btn btn--outline btn--block">"Try Live Demo"</a>
                    </aside>
                </div>
            </article>
            <Show when={
                let empty = related.is_empty();
                move || !empty
            }>
                <div class="related">
                    <h2>"Related Projects"</h2>
                    <div class="related__grid">
                        {related
                            .iter()
                            .map(|p| {
                                view! {
                                    <a href=p.detail_href() class="related-card hover-effect">
                                        <img src=p.image alt=p.title loading="lazy"/>
                                        <div class="related-card__text">
                                            <h3 class="accent">{p.title}</h3>
                                            <p>{p.description}</p>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="info-row">
            <h4>{label}</h4>
            <p>{value}</p>
        </div>
    }
}
