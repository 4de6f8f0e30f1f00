//! Four glowing stat cards that drift toward the pointer.

use leptos::prelude::*;

use crate::content::profile::STATS;
use crate::util::motion::STATS_REST;

#[component]
pub fn HolographicStats() -> impl IntoView {
    let grid = NodeRef::<leptos::html::Div>::new();
    let transform = RwSignal::new(STATS_REST.to_owned());

    let on_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::browser::pointer_within;
            use crate::util::motion::stats_transform;

            if let Some(el) = grid.get_untracked() {
                let (x, y, w, h) = pointer_within(&el, &ev);
                transform.set(stats_transform(x, y, w, h));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    view! {
        <section class="stats">
            <div class="stats__grid" node_ref=grid on:mousemove=on_move on:mouseleave=move |_| transform.set(STATS_REST.to_owned())>
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(i, stat)| {
                        view! {
                            <div
                                class="stat-card"
                                style:transform=move || transform.get()
                                style:animation-delay=format!("{}ms", i * 100)
                            >
                                <span class="stat-card__corner stat-card__corner--tl"></span>
                                <span class="stat-card__corner stat-card__corner--br"></span>
                                <h3 class="stat-card__value">{stat.value}</h3>
                                <p class="stat-card__label">{stat.label}</p>
                                <p class="stat-card__sublabel">{stat.sublabel}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
