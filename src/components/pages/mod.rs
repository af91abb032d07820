//! Page components selected by the router.
//!
//! - [`LoginPage`] - Entry page, `#/login`
//! - [`HomePage`] - `#/home`
//! - [`ProfilePage`] - `#/profile/{user_id}`
//! - [`NotFoundPage`] - Fallback for anything undeclared

mod home;
mod login;
mod not_found;
mod profile;

pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

use leptos::prelude::*;

use crate::models::AppRoute;

/// Navigation links shared by every page.
#[component]
fn PageNav() -> impl IntoView {
    view! {
        <nav class=css::nav>
            <a class=css::link href={AppRoute::Login.to_hash()}>"Login"</a>
            <a class=css::link href={AppRoute::Home.to_hash()}>"Home"</a>
        </nav>
    }
}
