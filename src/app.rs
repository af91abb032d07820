//! Root application module.
//!
//! Contains the main App component and the AppContext definition.
//! The route table is built here exactly once and handed down through
//! context instead of living in a global.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::ROUTES_TOML;
use crate::core::RouteTable;
use crate::models::{AppRoute, Page};
use crate::utils::{HashHistory, log};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Accessed from any child component using `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Immutable route table.
    pub routes: StoredValue<RouteTable<Page>>,
    /// Hash history rooted at the configured base path.
    pub history: StoredValue<HashHistory>,
    /// Currently displayed route.
    pub route: RwSignal<AppRoute>,
}

impl AppContext {
    pub fn new(routes: RouteTable<Page>, history: HashHistory) -> Self {
        Self {
            routes: StoredValue::new(routes),
            history: StoredValue::new(history),
            route: RwSignal::new(AppRoute::Login),
        }
    }

    /// Shareable URL for a route, including the base path.
    pub fn permalink(&self, route: &AppRoute) -> String {
        self.history.with_value(|history| history.url(&route.to_path()))
    }

    /// Navigate to a route path, creating a history entry.
    ///
    /// The `hashchange` listener picks up the new location.
    pub fn push(&self, path: &str) {
        self.history.with_value(|history| history.push(path));
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Loads the static route table and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the AppRouter component
#[component]
pub fn App() -> impl IntoView {
    let router = RouteTable::<Page>::from_toml(ROUTES_TOML)
        .inspect_err(|e| log::error(&format!("failed to load routes: {}", e)))
        .map(|routes| {
            provide_context(AppContext::new(routes, HashHistory::from_env()));
            view! { <AppRouter /> }
        });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f6fa;
                    color: #2f3640;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #c23616; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #718093; margin-bottom: 2rem;">
                            "The application could not start. Please try reloading the page."
                        </p>
                        <ul style="
                            text-align: left;
                            margin: 0 0 1rem 0;
                            padding-left: 1.5rem;
                            color: #c23616;
                            font-size: 0.9rem;
                        ">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #0097e6;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {router}
        </ErrorBoundary>
    }
}
