use leptos::prelude::*;

/// `< Title />` section heading with an optional subtitle.
#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    view! {
        <h2 class="section-title">
            <span class="accent">"<"</span>
            {format!(" {title} ")}
            <span class="accent">"/>"</span>
        </h2>
        {subtitle.map(|s| view! { <p class="section-subtitle">{s}</p> })}
    }
}
