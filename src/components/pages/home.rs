use leptos::prelude::*;

use super::{PageNav, css};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"Home"</h1>
            <p class=css::muted>"Your stream will appear here."</p>
            <PageNav />
        </section>
    }
}
