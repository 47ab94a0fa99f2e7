//! Waiter chat notification
//!
//! Best-effort external notification behind a capability interface so the
//! third-party messaging scheme never leaks into core logic. Sending is
//! fire-and-forget from the dispatcher's perspective.

use thiserror::Error;
use tracing::debug;

/// Notification failure
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("No opener available: {0}")]
    NoOpener(String),

    #[error("Failed to open chat link: {0}")]
    OpenFailed(String),
}

/// Capability interface for sending a chat message to a phone number
pub trait NotificationSender: Send + Sync {
    fn send(&self, phone: &str, message: &str) -> Result<(), NotifyError>;
}

/// Normalize a phone number for deep links
///
/// Strips every non-digit character; a bare 10-digit local number gets the
/// default country code prefixed.
pub fn normalize_phone(raw: &str, default_country_code: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("{default_country_code}{digits}")
    } else {
        digits
    }
}

/// Deep-link based sender
///
/// Builds a URL from a configurable template with `{phone}` and `{message}`
/// placeholders and hands it to the injected opener. The opener is whatever
/// the host platform uses to launch an external link.
pub struct ChatDeepLink {
    url_template: String,
    country_code: String,
    opener: Box<dyn Fn(&str) -> Result<(), NotifyError> + Send + Sync>,
}

impl ChatDeepLink {
    pub fn new(
        url_template: impl Into<String>,
        country_code: impl Into<String>,
        opener: impl Fn(&str) -> Result<(), NotifyError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            url_template: url_template.into(),
            country_code: country_code.into(),
            opener: Box::new(opener),
        }
    }

    /// Build the deep-link URL without opening it
    pub fn build_url(&self, phone: &str, message: &str) -> String {
        let phone = normalize_phone(phone, &self.country_code);
        self.url_template
            .replace("{phone}", &phone)
            .replace("{message}", &urlencoding::encode(message))
    }
}

impl NotificationSender for ChatDeepLink {
    fn send(&self, phone: &str, message: &str) -> Result<(), NotifyError> {
        let url = self.build_url(phone, message);
        debug!(url = %url, "Opening chat deep link");
        (self.opener)(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_digits() {
        assert_eq!(normalize_phone("(98765) 432-10", "91"), "919876543210");
        assert_eq!(normalize_phone("98765 43210", "91"), "919876543210");
    }

    #[test]
    fn test_normalize_keeps_full_numbers() {
        // Already has a country code - 12 digits, left alone
        assert_eq!(normalize_phone("+91 98765 43210", "91"), "919876543210");
        // Short numbers are passed through digit-stripped
        assert_eq!(normalize_phone("12345", "91"), "12345");
    }

    #[test]
    fn test_deep_link_url() {
        let link = ChatDeepLink::new("https://chat.example/{phone}?text={message}", "91", |_| {
            Ok(())
        });
        let url = link.build_url("9876543210", "Order A1023 ready: 2 items");
        assert_eq!(
            url,
            "https://chat.example/919876543210?text=Order%20A1023%20ready%3A%202%20items"
        );
    }

    #[test]
    fn test_send_reports_opener_failure() {
        let link = ChatDeepLink::new("https://chat.example/{phone}", "91", |_| {
            Err(NotifyError::OpenFailed("no browser".to_string()))
        });
        assert!(link.send("9876543210", "hi").is_err());
    }
}
