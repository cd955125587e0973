//! Blocking browser alerts.
//!
//! Every user-facing outcome of the auth and mindmap flows is reported through
//! `window.alert`, matching the page's modal-style feedback.

/// Show a blocking alert. Outside the browser the message is dropped.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert failed: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
