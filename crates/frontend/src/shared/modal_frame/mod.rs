use crate::shared::modal_stack::focus_trap;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dialog frame container (overlay + positioned surface).
///
/// The surface carries the modal dialog semantics (`role="dialog"`,
/// `aria-modal="true"`) and hosts the focus trap for its lifetime. This
/// component intentionally does NOT render a header or action buttons:
/// details screens render their own compact header so they look identical
/// in a dialog and in a full view.
#[component]
pub fn ModalFrame(
    /// Id of the dialog entry in the modal stack; keys the focus-trap registry.
    dialog_id: u64,
    /// Called when the dialog should close (overlay click, Escape, close by host).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the dialog surface (`div.modal`).
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra style for the dialog surface (`div.modal`).
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);
    let surface_ref = NodeRef::<leptos::html::Div>::new();

    // Install the focus trap once the surface is in the DOM. The trap is
    // released by ModalStackService::close, never here: the service owns the
    // release handle for as long as the dialog is open.
    Effect::new(move |_| {
        if let Some(surface) = surface_ref.get() {
            let surface: &web_sys::HtmlElement = surface.as_ref();
            focus_trap::install(dialog_id, surface, on_close);
        }
    });

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // We only close if both press and release happened on the overlay itself.
    // This prevents closing when user selects text inside the dialog and releases the mouse outside.
    let handle_overlay_mouse_down = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            overlay_mouse_down.set(is_direct_overlay_event(&ev));
        }
    };

    let handle_overlay_click = {
        let is_direct_overlay_event = is_direct_overlay_event;
        move |ev: ev::MouseEvent| {
            let should_close =
                close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
            overlay_mouse_down.set(false);
            if should_close {
                // Defer close to next tick: avoids Leptos event delegation calling a dropped handler
                // when the overlay is removed synchronously during its own click dispatch.
                let on_close = on_close;
                spawn_local(async move {
                    TimeoutFuture::new(0).await;
                    on_close.run(());
                });
            }
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let overlay_style_full = move || format!("z-index: {z_index};");

    let modal_style_full = move || {
        let extra = modal_style.clone().unwrap_or_default();
        if extra.is_empty() {
            "position: relative;".to_string()
        } else {
            format!("position: relative; {extra}")
        }
    };

    view! {
        <div
            class="modal-overlay"
            style=overlay_style_full
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                node_ref=surface_ref
                class=move || {
                    if let Some(cls) = modal_class.clone() {
                        format!("modal {cls}")
                    } else {
                        "modal".to_string()
                    }
                }
                style=modal_style_full
                role="dialog"
                aria-modal="true"
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
