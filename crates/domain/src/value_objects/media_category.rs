//! Media category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a media attachment as understood by the provider
///
/// Only the top-level MIME token matters: `image/*`, `video/*` and `audio/*`
/// map to their own category, everything else is sent as a generic file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    /// Still images
    Image,
    /// Video clips
    Video,
    /// Audio clips and voice notes
    Audio,
    /// Anything else (documents, archives, unknown content)
    #[default]
    File,
}

impl MediaCategory {
    /// Classify a MIME type string such as `image/png`
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        let top_level = mime.split('/').next().unwrap_or_default().trim();
        match top_level.to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            "audio" => Self::Audio,
            _ => Self::File,
        }
    }

    /// Provider message type for this category
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::File => "file",
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_top_level_types_are_kept() {
        assert_eq!(MediaCategory::from_mime("image/png"), MediaCategory::Image);
        assert_eq!(MediaCategory::from_mime("video/mp4"), MediaCategory::Video);
        assert_eq!(MediaCategory::from_mime("audio/ogg"), MediaCategory::Audio);
    }

    #[test]
    fn other_types_fall_back_to_file() {
        assert_eq!(
            MediaCategory::from_mime("application/pdf"),
            MediaCategory::File
        );
        assert_eq!(MediaCategory::from_mime("text/plain"), MediaCategory::File);
        assert_eq!(MediaCategory::from_mime("font/woff2"), MediaCategory::File);
    }

    #[test]
    fn empty_mime_is_file() {
        assert_eq!(MediaCategory::from_mime(""), MediaCategory::File);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(MediaCategory::from_mime("IMAGE/JPEG"), MediaCategory::Image);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&MediaCategory::Video).unwrap();
        assert_eq!(json, r#""video""#);
    }

    #[test]
    fn display_matches_provider_type() {
        assert_eq!(MediaCategory::Audio.to_string(), "audio");
        assert_eq!(MediaCategory::default(), MediaCategory::File);
    }
}
