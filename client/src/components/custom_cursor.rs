//! Dot-and-ring pointer that replaces the system cursor on desktop.
//!
//! Link hover is detected by delegation: every `mouseover` checks whether
//! the target sits inside a [`HOVER_TARGETS`] element, so links rendered
//! after mount are covered too.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::cursor::HOVER_TARGETS;
use crate::state::cursor::CursorState;

#[component]
pub fn CustomCursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorState::default());
    let style = Memo::new(move |_| cursor.get().style());

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev;

        let handles = vec![
            window_event_listener(ev::mousemove, move |e| {
                cursor.update(|c| c.move_to(f64::from(e.client_x()), f64::from(e.client_y())));
            }),
            window_event_listener(ev::mousedown, move |_| cursor.update(|c| c.clicked = true)),
            window_event_listener(ev::mouseup, move |_| cursor.update(|c| c.clicked = false)),
            window_event_listener(ev::mouseover, move |e| {
                let hovered = hovers_target(&e);
                if cursor.with_untracked(|c| c.link_hovered != hovered || c.hidden) {
                    cursor.update(|c| {
                        c.link_hovered = hovered;
                        c.hidden = false;
                    });
                }
            }),
            // `relatedTarget` is null when the pointer leaves the document.
            window_event_listener(ev::mouseout, move |e| {
                if e.related_target().is_none() {
                    cursor.update(|c| c.hidden = true);
                }
            }),
        ];
        on_cleanup(move || {
            for handle in handles {
                handle.remove();
            }
        });
    }

    view! {
        <div
            class="cursor-dot"
            aria-hidden="true"
            style:transform=move || style.with(|s| s.dot_transform())
            style:opacity=move || style.with(|s| s.opacity.to_string())
            style:width=move || style.with(|s| format!("{}px", s.dot_size_px))
            style:height=move || style.with(|s| format!("{}px", s.dot_size_px))
        ></div>
        <div
            class="cursor-outline"
            aria-hidden="true"
            style:transform=move || style.with(|s| s.outline_transform())
            style:opacity=move || style.with(|s| s.opacity.to_string())
            style:background-color=move || style.with(|s| s.outline_fill)
        ></div>
    }
}

#[cfg(feature = "hydrate")]
fn hovers_target(e: &web_sys::MouseEvent) -> bool {
    use wasm_bindgen::JsCast as _;

    e.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
        .is_some()
}
