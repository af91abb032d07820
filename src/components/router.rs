//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the displayed page is derived from `#/path`
//! - **Redirects rewrite the URL in place**: `#/` becomes `#/login` without a new history entry
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::pages::{HomePage, LoginPage, NotFoundPage, ProfilePage};
use crate::config::APP_NAME;
use crate::core::{RouteRequest, RouteTable};
use crate::models::{AppRoute, Page};
use crate::utils::{dom, log};

// ============================================================================
// Navigation
// ============================================================================

/// Outcome of resolving one location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// Route to display.
    pub route: AppRoute,
    /// Path the URL should be rewritten to, when a redirect fired.
    pub rewrite_to: Option<String>,
}

/// Resolve a requested path against the table into a typed route.
///
/// Never fails: resolution and parameter errors land on the not-found page.
pub fn navigation_for(routes: &RouteTable<Page>, requested: &str) -> Navigation {
    let resolved = match routes.navigate(requested) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error(&format!("navigation to '{}' failed: {}", requested, e));
            return Navigation {
                route: AppRoute::failed(RouteRequest::new(requested).path, e),
                rewrite_to: None,
            };
        }
    };

    let rewrite_to = resolved.was_redirected().then(|| match &resolved.request.query {
        Some(query) => format!("{}?{}", resolved.request.path, query),
        None => resolved.request.path.clone(),
    });

    let route = AppRoute::from_resolved(&resolved).unwrap_or_else(|e| {
        log::warn(&format!("rejected '{}': {}", resolved.request.path, e));
        AppRoute::failed(resolved.request.path.clone(), e)
    });

    Navigation { route, rewrite_to }
}

impl AppContext {
    /// Re-resolve the current browser location and update the route signal.
    pub fn sync_with_location(&self) {
        let requested = self.history.with_value(|history| history.current());
        let navigation = self
            .routes
            .with_value(|routes| navigation_for(routes, &requested));

        if let Some(path) = &navigation.rewrite_to {
            log::info(&format!("redirect '{}' -> '{}'", requested, path));
            self.history.with_value(|history| history.replace(path));
        }

        self.route.set(navigation.route);
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → redirect to `#/login`
/// - `#/login` → Login page
/// - `#/home` → Home page
/// - `#/profile/{user_id}` → Profile page
/// - anything else → Not-found page
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Resolve the initial location before the first render
    ctx.sync_with_location();

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync_with_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move |_| {
        let page = ctx.route.with(AppRoute::page);
        dom::set_document_title(&format!("{} | {}", page.title(), APP_NAME));
    });

    view! {
        <main>
            {move || match ctx.route.get() {
                AppRoute::Login => view! { <LoginPage /> }.into_any(),
                AppRoute::Home => view! { <HomePage /> }.into_any(),
                AppRoute::Profile(params) => view! { <ProfilePage params=params /> }.into_any(),
                AppRoute::NotFound { path, reason } => {
                    view! { <NotFoundPage path=path reason=reason /> }.into_any()
                }
            }}
        </main>
    }
}
