//! Contact configuration for outbound inquiry links.
use crate::composer::MessageComposer;
use crate::constants::{
    DEFAULT_CLOSING, DEFAULT_GREETING, DEFAULT_LINK_LABEL, DEFAULT_MESSAGING_HOST,
    DEFAULT_SOURCE_TAG,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_CONTACT_DATA: &str =
    include_str!("../../wildeast-web/static/assets/data/contact.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("contact configuration JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("recipient id `{0}` must be non-empty and contain only ASCII digits")]
    InvalidRecipient(String),
    #[error("messaging host `{0}` must be a bare host name")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// Phone number in international form, digits only.
    pub recipient: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_closing")]
    pub closing: String,
    #[serde(default = "default_source_tag")]
    pub source_tag: String,
    #[serde(default = "default_link_label")]
    pub link_label: String,
}

fn default_host() -> String {
    DEFAULT_MESSAGING_HOST.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_closing() -> String {
    DEFAULT_CLOSING.to_string()
}

fn default_source_tag() -> String {
    DEFAULT_SOURCE_TAG.to_string()
}

fn default_link_label() -> String {
    DEFAULT_LINK_LABEL.to_string()
}

impl ContactConfig {
    /// Default copy with the given recipient.
    #[must_use]
    pub fn for_recipient(recipient: impl Into<String>) -> Self {
        Self {
            host: default_host(),
            recipient: recipient.into(),
            greeting: default_greeting(),
            closing: default_closing(),
            source_tag: default_source_tag(),
            link_label: default_link_label(),
        }
    }

    /// Parse contact configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the configuration shipped with the web assets.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded configuration is invalid JSON.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_CONTACT_DATA)
    }

    /// Replace the recipient when an override is supplied.
    #[must_use]
    pub fn with_recipient_override(mut self, recipient: Option<&str>) -> Self {
        if let Some(recipient) = recipient {
            self.recipient = recipient.to_string();
        }
        self
    }

    /// Validate the configuration and build the link composer.
    ///
    /// # Errors
    ///
    /// Returns an error if the recipient is not digits-only or the host is malformed.
    pub fn composer(&self) -> Result<MessageComposer, ConfigError> {
        MessageComposer::new(self)
    }
}
