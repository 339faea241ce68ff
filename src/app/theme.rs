//! Theme context with localStorage persistence.
//!
//! The [`ThemeStore`] lives in a signal provided at the root; toggling goes
//! through [`ThemeContext::toggle`] so storage and the root class stay in sync
//! with what components render.

use dioxus::prelude::*;

use crate::theme::{platform_host, PlatformThemeHost, ThemeStore};

/// Theme store shared through context; `Copy` so handlers can capture it
#[derive(Clone, Copy)]
pub struct ThemeContext {
    store: Signal<ThemeStore<PlatformThemeHost>>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.store.read().is_dark()
    }

    /// Flip, persist and apply
    pub fn toggle(&self) {
        let mut store = self.store;
        let dark = store.write().toggle();
        tracing::debug!("Theme switched to {}", if dark { "dark" } else { "light" });
    }
}

/// Resolve the preference and provide [`ThemeContext`]. Call once, from `App`.
pub fn use_theme_provider(storage_key: &str) {
    let key = storage_key.to_string();
    let store = use_signal(move || ThemeStore::initialize(platform_host(&key)));

    use_context_provider(|| ThemeContext { store });
}

/// The [`ThemeContext`] provided by `App`
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
