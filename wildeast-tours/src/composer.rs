//! Pre-filled inquiry messages and the messaging deep links that carry them.
use crate::config::{ConfigError, ContactConfig};
use crate::constants::{DATES_PREFIX, LOG_COMPOSER, REFERENCE_PREFIX, TEXT_QUERY_KEY};
use crate::tour::Tour;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static HOST_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$").ok());

/// Messaging recipient: a non-empty run of ASCII digits, no leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipientId(String);

impl RecipientId {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRecipient`] unless `raw` is one or more ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidRecipient(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecipientId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A composed `https://<host>/<recipient>?text=<message>` link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeepLink(String);

impl DeepLink {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Decoded message carried by the link.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        decode_text(&self.0)
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeepLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract and percent-decode the `text` query parameter of a link.
#[must_use]
pub fn decode_text(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == TEXT_QUERY_KEY)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|decoded| decoded.into_owned())
}

/// Builds inquiry links for tours. Only constructible from a valid
/// configuration, so every link it emits has a well-formed recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageComposer {
    host: String,
    recipient: RecipientId,
    greeting: String,
    closing: String,
    source_tag: String,
}

impl MessageComposer {
    /// # Errors
    ///
    /// Returns an error if the recipient is not digits-only or the host is not
    /// a bare host name.
    pub fn new(config: &ContactConfig) -> Result<Self, ConfigError> {
        let recipient = RecipientId::parse(&config.recipient)?;
        let host_ok = HOST_PATTERN
            .as_ref()
            .is_some_and(|re| re.is_match(&config.host));
        if !host_ok {
            return Err(ConfigError::InvalidHost(config.host.clone()));
        }
        log::debug!(target: LOG_COMPOSER, "composer ready for host {}", config.host);
        Ok(Self {
            host: config.host.clone(),
            recipient,
            greeting: config.greeting.clone(),
            closing: config.closing.clone(),
            source_tag: config.source_tag.clone(),
        })
    }

    #[must_use]
    pub const fn recipient(&self) -> &RecipientId {
        &self.recipient
    }

    /// `https://<host>/<recipient>`
    #[must_use]
    pub fn link_prefix(&self) -> String {
        format!("https://{}/{}", self.host, self.recipient)
    }

    /// The line-structured message for a tour.
    #[must_use]
    pub fn compose_text(&self, tour: &Tour) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(6);
        lines.push(self.greeting.clone());
        lines.push(format!("I'm interested in the {} tour.", tour.title));
        if let Some(dates) = tour.dates() {
            lines.push(format!("{DATES_PREFIX}{dates}"));
        }
        lines.push(self.closing.clone());
        lines.push(format!("{REFERENCE_PREFIX}{}", tour.id));
        lines.push(self.source_tag.clone());
        lines.join("\n")
    }

    #[must_use]
    pub fn compose(&self, tour: &Tour) -> DeepLink {
        let text = self.compose_text(tour);
        DeepLink(format!(
            "{}?{TEXT_QUERY_KEY}={}",
            self.link_prefix(),
            urlencoding::encode(&text)
        ))
    }
}
