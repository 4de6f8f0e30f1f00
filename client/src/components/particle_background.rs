//! Full-bleed particle canvas behind the hero.

use leptos::prelude::*;

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use canvas::engine::browser_seed;
        use canvas::particles::{ParticleConfig, ParticleField};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_for_mount = Arc::clone(&alive);
        let mut started = false;
        Effect::new(move || {
            let Some(el) = canvas_ref.get() else {
                return;
            };
            if std::mem::replace(&mut started, true) {
                return;
            }
            crate::util::backdrop::start(
                el,
                |w, h| ParticleField::new(ParticleConfig::default(), w, h, browser_seed()),
                Arc::clone(&alive_for_mount),
                |err| log::warn!("particle background stopped: {err:?}"),
            );
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! { <canvas node_ref=canvas_ref class="backdrop-canvas particle-canvas" aria-hidden="true"></canvas> }
}
