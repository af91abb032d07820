use leptos::prelude::*;

use super::{PageNav, css};
use crate::app::AppContext;
use crate::models::{AppRoute, ProfileParams};

/// Profile page.
///
/// Receives an already validated user id; loading the profile itself is
/// left to the page's data layer.
#[component]
pub fn ProfilePage(params: ProfileParams) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let user_id = params.user_id.to_string();
    let permalink = ctx.permalink(&AppRoute::Profile(params));

    view! {
        <section class=css::page>
            <h1 class=css::title>"Profile"</h1>
            <p class=css::muted>"User: " {user_id}</p>
            <p class=css::muted>"Link: " <code>{permalink}</code></p>
            <PageNav />
        </section>
    }
}
