//! Landing hero: particle backdrop, typed tagline and calls to action.

use leptos::prelude::*;

use crate::components::particle_background::ParticleBackground;
use crate::content::site::SITE;
use crate::util::typewriter::{Caret, caret, visible_text};

#[component]
pub fn Hero() -> impl IntoView {
    // Milliseconds since mount; drives the typewriter.
    let elapsed = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::time::Duration;

        use crate::util::browser::now_ms;
        use crate::util::typewriter::next_change_ms;

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            let started = now_ms();
            loop {
                let wait = next_change_ms(SITE.tagline, elapsed.get_untracked());
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let wait_ms = wait.ceil().max(1.0) as u64;
                gloo_timers::future::sleep(Duration::from_millis(wait_ms)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                elapsed.set(now_ms() - started);
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let typed = move || visible_text(SITE.tagline, elapsed.get());
    let caret_state = move || caret(SITE.tagline, elapsed.get());

    view! {
        <section id="hero" class="hero">
            <ParticleBackground/>
            <div class="hero__content">
                <p class="hero__greeting">"Hello, I'm"</p>
                <h1 class="hero__name">{SITE.owner}</h1>
                <h2 class="hero__tagline" aria-label=SITE.tagline>
                    {typed}
                    <span
                        class="caret"
                        class:caret--hidden=move || caret_state() == Caret::Hidden
                        class:caret--off=move || caret_state() == Caret::Off
                    >
                        "|"
                    </span>
                </h2>
                <div class="hero__actions">
                    <a href="/projects" class="btn btn--primary hover-effect">"View Projects"</a>
                    <a href="/contact" class="btn btn--outline hover-effect">"Contact Me"</a>
                </div>
            </div>
            <a href="/about" class="hero__scroll" aria-label="Scroll to about">"↓"</a>
        </section>
    }
}
