//! Light/dark preference with persistence.
//!
//! The preference resolves from storage first, then the system color scheme,
//! then light. Every change is written back to storage and mirrored onto the
//! document root as a `dark` class.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

pub const DARK: &str = "dark";
pub const LIGHT: &str = "light";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Where the preference lives and how it is shown
pub trait ThemeHost {
    /// Stored value, `None` when absent or storage is unavailable
    fn load_preference(&self) -> Option<String>;
    fn store_preference(&self, value: &str) -> Result<(), StorageError>;
    /// `None` when the platform cannot tell
    fn system_prefers_dark(&self) -> Option<bool>;
    fn apply_root_marker(&self, dark: bool);
}

pub struct ThemeStore<H: ThemeHost> {
    host: H,
    is_dark: bool,
}

impl<H: ThemeHost> ThemeStore<H> {
    /// Resolve the initial preference and mirror it to storage and the root
    pub fn initialize(host: H) -> Self {
        let stored = host.load_preference().and_then(|v| match v.as_str() {
            DARK => Some(true),
            LIGHT => Some(false),
            _ => None,
        });
        let is_dark = stored
            .or_else(|| host.system_prefers_dark())
            .unwrap_or(false);

        let store = Self { host, is_dark };
        store.mirror();
        store
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn set(&mut self, dark: bool) {
        self.is_dark = dark;
        self.mirror();
    }

    /// Flip the preference and return the new value
    pub fn toggle(&mut self) -> bool {
        self.set(!self.is_dark);
        self.is_dark
    }

    fn mirror(&self) {
        self.host.apply_root_marker(self.is_dark);
        let value = if self.is_dark { DARK } else { LIGHT };
        if let Err(e) = self.host.store_preference(value) {
            // Preference still holds for this page session
            tracing::debug!("Theme preference not persisted: {}", e);
        }
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    storage_available: bool,
    stored: Option<String>,
    system_dark: Option<bool>,
    root_dark: bool,
}

/// In-memory host for non-browser contexts. Clones share state.
#[derive(Clone, Debug)]
pub struct MemoryThemeHost {
    state: Rc<RefCell<MemoryState>>,
}

impl Default for MemoryThemeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryThemeHost {
    /// Empty, writable storage and no system preference
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                storage_available: true,
                ..MemoryState::default()
            })),
        }
    }

    /// No storage at all
    pub fn unavailable() -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState::default())),
        }
    }

    pub fn with_stored(self, value: &str) -> Self {
        self.state.borrow_mut().stored = Some(value.to_string());
        self
    }

    pub fn with_system_dark(self, dark: bool) -> Self {
        self.state.borrow_mut().system_dark = Some(dark);
        self
    }

    pub fn stored(&self) -> Option<String> {
        self.state.borrow().stored.clone()
    }

    pub fn root_is_dark(&self) -> bool {
        self.state.borrow().root_dark
    }
}

impl ThemeHost for MemoryThemeHost {
    fn load_preference(&self) -> Option<String> {
        let state = self.state.borrow();
        if state.storage_available {
            state.stored.clone()
        } else {
            None
        }
    }

    fn store_preference(&self, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if !state.storage_available {
            return Err(StorageError::Unavailable);
        }
        state.stored = Some(value.to_string());
        Ok(())
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        self.state.borrow().system_dark
    }

    fn apply_root_marker(&self, dark: bool) {
        self.state.borrow_mut().root_dark = dark;
    }
}

/// `localStorage`, `prefers-color-scheme` and `<html class="dark">`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct BrowserThemeHost {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserThemeHost {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeHost for BrowserThemeHost {
    fn load_preference(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn store_preference(&self, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()??;
        Some(query.matches())
    }

    fn apply_root_marker(&self, dark: bool) {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(root) = document.document_element() {
                    let _ = root.class_list().toggle_with_force(DARK, dark);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub type PlatformThemeHost = BrowserThemeHost;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformThemeHost = MemoryThemeHost;

/// Host for the running platform; outside the browser there is no storage
pub fn platform_host(storage_key: &str) -> PlatformThemeHost {
    #[cfg(target_arch = "wasm32")]
    {
        BrowserThemeHost::new(storage_key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = storage_key;
        MemoryThemeHost::unavailable()
    }
}
