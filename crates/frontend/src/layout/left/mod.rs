pub mod navbar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <aside
            class="app-left"
            class:app-left--collapsed=move || !ctx.left_open.get()
        >
            {children()}
        </aside>
    }
}
