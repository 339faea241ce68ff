//! Dioxus application entry point.
//!
//! This module provides the root App component. There is a single page, so no
//! router: the root installs the shared contexts and renders [`pages::Home`].

use std::rc::Rc;

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod theme;

use crate::config::AppConfig;
use crate::fetcher::HttpScheduleFetcher;
use pages::Home;
use theme::use_theme_provider;

/// Configuration and the schedule fetcher, shared via context
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<AppConfig>,
    pub fetcher: Rc<HttpScheduleFetcher>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let fetcher = HttpScheduleFetcher::from_config(&config);
        Self {
            config: Rc::new(config),
            fetcher: Rc::new(fetcher),
        }
    }
}

/// Get the app context - use in any component
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// Root app component
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(|| AppContext::new(crate::config::current()));

    // Initialize theme context at app root (handles localStorage + root class)
    use_theme_provider(&ctx.config.theme_storage_key);

    rsx! {
        Home {}
    }
}
