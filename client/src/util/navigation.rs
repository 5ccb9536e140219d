//! Full-page navigation.
//!
//! A hard redirect reloads the document, which discards every piece of
//! per-user state held by mounted components. Soft route changes go through
//! `leptos_router` instead.

use std::sync::{Arc, Mutex, PoisonError};

pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

/// Sets `window.location.href`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(path) {
                    log::error!("redirect to {path} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Records redirect targets instead of leaving the page.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.visits.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_owned());
    }
}
