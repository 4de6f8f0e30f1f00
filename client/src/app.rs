//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_location;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{custom_cursor::CustomCursor, footer::Footer, navbar::Navbar, toaster::Toaster};
use crate::content::site::SITE;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, homelab::HomelabPage, not_found::NotFoundPage,
    project_detail::ProjectDetailPage, projects::ProjectsPage,
};
use crate::state::toast::ToastState;
use crate::util::browser::scroll_to_top;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content=SITE.tagline/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue to every page and lays out the chrome shared by
/// all routes: cursor, navbar, footer and toaster.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE.owner/>

        <Router>
            <ScrollToTop/>
            <CustomCursor/>
            <Navbar/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("id")) view=ProjectDetailPage/>
                    <Route path=StaticSegment("homelab") view=HomelabPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <Toaster/>
        </Router>
    }
}

/// Jump to the top of the page whenever the route path changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move |_| {
        pathname.track();
        scroll_to_top();
    });
}
