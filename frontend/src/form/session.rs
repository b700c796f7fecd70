#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use web_sys::window;

pub const FORM_SUBMITTED_KEY: &str = "popupFormSubmitted";
pub const AUTO_SHOWN_KEY: &str = "popupAutoShown";

/// String key/value store scoped to the browser session.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.sessionStorage`; silently does nothing when it is unavailable.
pub struct SessionStore;

impl FlagStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.session_storage().ok()).flatten() {
            if storage.set_item(key, value).is_err() {
                log::debug!("session storage refused {}", key);
            }
        }
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

#[cfg(test)]
impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// The two popup booleans, stored as `"true"` or absent.
pub struct PopupFlags<S> {
    store: S,
}

impl<S: FlagStore> PopupFlags<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn form_submitted(&self) -> bool {
        self.flag(FORM_SUBMITTED_KEY)
    }

    pub fn mark_form_submitted(&self) {
        self.store.set(FORM_SUBMITTED_KEY, "true");
    }

    pub fn auto_shown(&self) -> bool {
        self.flag(AUTO_SHOWN_KEY)
    }

    pub fn mark_auto_shown(&self) {
        self.store.set(AUTO_SHOWN_KEY, "true");
    }

    fn flag(&self, key: &str) -> bool {
        self.store.get(key).as_deref() == Some("true")
    }

    #[cfg(test)]
    pub(crate) fn store_value(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }
}
