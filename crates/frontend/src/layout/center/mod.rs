use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main class="app-center">
            {children()}
        </main>
    }
}
