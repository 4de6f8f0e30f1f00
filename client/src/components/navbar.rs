//! Fixed top navigation bar with active-route highlighting and a mobile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::site::{NAV_ITEMS, is_active};
use crate::state::nav::NavState;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;

    Effect::new(move || {
        pathname.track();
        nav.update(NavState::close_menu);
    });

    #[cfg(feature = "hydrate")]
    {
        let sync = move || {
            let mut next = nav.get_untracked();
            if next.on_scroll(crate::util::browser::scroll_y()) {
                nav.set(next);
            }
        };
        Effect::new(move || sync());
        let handle = window_event_listener(leptos::ev::scroll, move |_| sync());
        on_cleanup(move || handle.remove());
    }

    view! {
        <header class="navbar" class:navbar--scrolled=move || nav.get().scrolled>
            <nav class="navbar__inner">
                <a href="/" class="navbar__logo" aria-label="Home">
                    <span class="glitch">"<CG/>"</span>
                </a>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav.get().menu_open.to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || if nav.get().menu_open { "✕" } else { "☰" }}
                </button>
                <ul class="navbar__links" class:navbar__links--open=move || nav.get().menu_open>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let active = move || pathname.with(|p| is_active(p, item.path));
                            view! {
                                <li>
                                    <a
                                        href=item.path
                                        class="navbar__link"
                                        class:navbar__link--active=active
                                        on:click=move |_| nav.update(NavState::close_menu)
                                    >
                                        {item.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}
