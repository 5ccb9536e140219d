//! Blocking user notifications.
//!
//! Form flows report outcomes through a native `alert` dialog. Outside the
//! browser the message is only logged.

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
    log::info!("alert: {message}");
}
