use leptos::prelude::*;

use super::{PageNav, css};

/// Fallback page for paths no route claims.
#[component]
pub fn NotFoundPage(path: String, reason: Option<String>) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>"Page not found"</h1>
            <p class=css::muted>"Nothing lives at " <code>{path}</code></p>
            {reason.map(|reason| view! { <p class=css::error>{reason}</p> })}
            <PageNav />
        </section>
    }
}
