//! Bottom-right toast stack with timed auto-dismissal.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    {
        use std::collections::HashSet;

        use gloo_timers::callback::Timeout;

        use crate::state::toast::TOAST_TTL_MS;

        let mut scheduled = HashSet::<u64>::new();
        Effect::new(move || {
            let ids: Vec<u64> = toasts.with(|t| t.toasts().iter().map(|toast| toast.id).collect());
            scheduled.retain(|id| ids.contains(id));
            for id in ids {
                if scheduled.insert(id) {
                    Timeout::new(TOAST_TTL_MS, move || {
                        toasts.try_update(|t| t.dismiss(id));
                    })
                    .forget();
                }
            }
        });
    }

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class()>
                            <div class="toast__text">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss notification"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
