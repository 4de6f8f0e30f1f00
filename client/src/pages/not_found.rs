use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found"/>
        <section class="section page not-found">
            <h1 class="glitch">"404"</h1>
            <p>"This page could not be found."</p>
            <a href="/" class="btn btn--primary hover-effect">"Return Home"</a>
        </section>
    }
}
