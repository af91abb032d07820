use leptos::{ev, prelude::*};

use super::{PageNav, css};
use crate::app::AppContext;
use crate::models::{AppRoute, UserId};

/// Login page.
///
/// Only collects a user id and navigates to its profile; there is no
/// session handling here.
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (user_id, set_user_id) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match UserId::parse(user_id.get().trim()) {
            Ok(id) => {
                set_error.set(None);
                ctx.push(&AppRoute::profile(id).to_path());
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class=css::page>
            <h1 class=css::title>"Login"</h1>
            <form class=css::form on:submit=on_submit>
                <input
                    class=css::input
                    type="text"
                    placeholder="user id"
                    prop:value=user_id
                    on:input=move |ev| set_user_id.set(event_target_value(&ev))
                />
                <button class=css::button type="submit">"Continue"</button>
            </form>
            {move || error.get().map(|e| view! { <p class=css::error>{e}</p> })}
            <PageNav />
        </section>
    }
}
