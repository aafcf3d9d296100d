//! Request URL validation and normalization.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Host substrings accepted by the resolver.
///
/// Matching is plain substring containment, not host parsing. This mirrors
/// the upstream service's own leniency and is not a security boundary.
pub const SUPPORTED_HOSTS: &[&str] = &[
    "tiktok.com",
    "instagram.com",
    "youtu.be",
    "youtube.com",
];

/// A trimmed URL that passed the scheme and source checks.
///
/// Never holds an empty or non-HTTPS string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedTarget(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The `url` parameter was absent or empty. Callers render the default
    /// landing view for this, not an error page.
    #[error("no url provided")]
    MissingInput,

    #[error("Please provide a valid HTTPS URL")]
    InvalidScheme,

    #[error("Only TikTok, Instagram, and YouTube URLs are supported")]
    UnsupportedSource,
}

impl NormalizedTarget {
    /// Validate an optional query parameter value.
    ///
    /// An absent or empty value maps to [`ValidationError::MissingInput`];
    /// anything else goes through [`NormalizedTarget::parse`].
    pub fn from_param(param: Option<&str>) -> Result<Self, ValidationError> {
        match param {
            None => Err(ValidationError::MissingInput),
            Some(raw) if raw.is_empty() => Err(ValidationError::MissingInput),
            Some(raw) => Self::parse(raw),
        }
    }

    /// Trim and validate a raw URL string.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let cleaned = raw.trim();

        if !cleaned.starts_with("https://") {
            return Err(ValidationError::InvalidScheme);
        }

        if !SUPPORTED_HOSTS.iter().any(|host| cleaned.contains(host)) {
            return Err(ValidationError::UnsupportedSource);
        }

        Ok(Self(cleaned.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
