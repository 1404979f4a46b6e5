use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus positioned dialog surface. Content (title, body, actions)
/// is supplied by the caller.
///
/// Closes on Escape and on a click that both starts and ends on the overlay.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Default: true.
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Extra class for the dialog surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let overlay_mouse_down = RwSignal::new(false);

    // Defer to the next tick so the handler is not dropped mid-dispatch
    // when the overlay unmounts.
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let is_direct = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_deferred();
        }
    });
    on_cleanup(move || escape.remove());

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };
    let modal_style = match modal_style {
        Some(extra) => format!("position: relative; {extra}"),
        None => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            role="presentation"
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct(&ev))
            on:click=move |ev| {
                let should_close = close_on_overlay && overlay_mouse_down.get() && is_direct(&ev);
                overlay_mouse_down.set(false);
                if should_close {
                    close_deferred();
                }
            }
        >
            <div
                class=modal_class
                style=modal_style
                role="dialog"
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
