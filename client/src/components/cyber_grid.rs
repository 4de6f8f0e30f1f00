//! 3D cyber-grid backdrop with a static gradient fallback.
//!
//! If the engine cannot start or a frame fails to paint, the canvas is
//! swapped for a CSS gradient and the loop stops.

use leptos::prelude::*;

#[component]
pub fn CyberGrid() -> impl IntoView {
    let failed = RwSignal::new(false);
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use canvas::engine::browser_seed;
        use canvas::scene::{CyberScene, SceneConfig};

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
                |_, _| CyberScene::new(SceneConfig::default(), browser_seed()),
                Arc::clone(&alive_for_mount),
                move |err| {
                    log::warn!("cyber grid failed, showing fallback: {err:?}");
                    failed.try_update(|f| *f = true);
                },
            );
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="cyber-grid" aria-hidden="true">
            <Show when=move || !failed.get() fallback=|| view! { <div class="cyber-grid__fallback"></div> }>
                <canvas node_ref=canvas_ref class="backdrop-canvas"></canvas>
            </Show>
        </div>
    }
}
