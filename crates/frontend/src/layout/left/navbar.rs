use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Sidebar navigation: one item per top-level view.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="navbar" aria-label="Main navigation">
            {AppView::all().into_iter().map(|view| {
                let is_active = move || ctx.active_view.get() == view;
                view! {
                    <button
                        class="navbar__item"
                        class:navbar__item--active=is_active
                        aria-current=move || if is_active() { Some("page") } else { None }
                        on:click=move |_| ctx.navigate(view)
                    >
                        {icon(view.icon_name())}
                        <span class="navbar__label">{view.title()}</span>
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
