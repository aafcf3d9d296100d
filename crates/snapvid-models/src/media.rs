//! Resolution API response types.
//!
//! The upstream API leaves almost every field optional, so the schema here
//! is permissive: absent fields decode to `None` and unknown fields are
//! ignored. The one hard requirement is a locator on each media entry; an
//! entry without a URL is undownloadable and fails the decode.

use serde::{Deserialize, Serialize};

/// One downloadable rendition of a resolved video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaOption {
    /// Download locator
    pub url: String,
    /// Human-readable quality label, e.g. "720p"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Pre-formatted size string, e.g. "12.4 MB"
    #[serde(rename = "formattedSize", skip_serializing_if = "Option::is_none")]
    pub formatted_size: Option<String>,
}

impl MediaOption {
    /// Display label for the download link.
    pub fn label(&self) -> &str {
        self.quality.as_deref().unwrap_or("Download")
    }
}

/// Decoded response describing a video and its downloadable variants.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Freeform display string, passed through as returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Order preserved as returned by the API
    #[serde(default)]
    pub medias: Vec<MediaOption>,
}
