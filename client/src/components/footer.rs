use leptos::prelude::*;

use crate::content::site::{SITE, current_year};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{format!("© {} {} | Cybersecurity & Homelab Portfolio", current_year(), SITE.owner)}</p>
            <p class="footer__built">"Built with Rust, Leptos & WebAssembly"</p>
        </footer>
    }
}
