//! Scroll-reveal wrapper: fades its children in the first time they enter
//! the viewport.

use leptos::prelude::*;

use crate::state::reveal::RevealState;

#[component]
pub fn Reveal(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    observer::watch(node, state);

    view! {
        <div node_ref=node class=format!("reveal {class}") class:active=move || state.get().is_active()>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::prelude::*;
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::state::reveal::{REVEAL_THRESHOLD, RevealState};

    pub(super) fn watch(node: NodeRef<leptos::html::Div>, state: RwSignal<RevealState>) {
        let observer = StoredValue::new_local(None::<IntersectionObserver>);

        Effect::new(move || {
            let Some(el) = node.get() else {
                return;
            };
            if observer.with_value(Option::is_some) || state.get_untracked().is_active() {
                return;
            }

            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                move |entries: js_sys::Array, obs: IntersectionObserver| {
                    let seen = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());
                    let mut next = state.get_untracked();
                    if next.observe(seen) {
                        state.set(next);
                        obs.disconnect();
                    }
                },
            );
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

            match IntersectionObserver::new_with_options(callback.into_js_value().unchecked_ref(), &options) {
                Ok(obs) => {
                    obs.observe(&el);
                    observer.set_value(Some(obs));
                }
                Err(err) => {
                    log::warn!("IntersectionObserver unavailable, revealing immediately: {err:?}");
                    state.update(|s| {
                        s.observe(true);
                    });
                }
            }
        });

        on_cleanup(move || {
            if let Some(Some(obs)) = observer.try_get_value() {
                obs.disconnect();
            }
        });
    }
}
