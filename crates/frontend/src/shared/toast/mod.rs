use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_VISIBLE_MS: u32 = 3000;

/// Сервис для всплывающих уведомлений
///
/// `show` replaces the current message and restarts the hide timer; an older
/// timer that fires late must not hide a newer message, hence the epoch check.
#[derive(Clone, Copy)]
pub struct ToastService {
    message: RwSignal<Option<String>>,
    epoch: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            epoch: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        let svc = *self;
        let epoch = self.epoch.get_untracked() + 1;
        self.epoch.set(epoch);
        self.message.set(Some(message.into()));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_VISIBLE_MS).await;
            if svc.epoch.get_untracked() == epoch {
                svc.message.set(None);
            }
        });
    }
}

/// Renders the current toast, if any.
///
/// Must be mounted exactly once, next to `ModalHost`.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <Show when=move || svc.message.get().is_some()>
            <div class="toast toast--visible" role="status" aria-live="polite">
                <span class="toast__message">
                    {move || svc.message.get().unwrap_or_default()}
                </span>
            </div>
        </Show>
    }
}
