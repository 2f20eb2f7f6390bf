// src/domain/archive.rs
//
// Archive session files (PDF notes, audio and video recordings).
//
// The backend returns one entry per stored file. Playback and rendering stay
// in the UI shell; this module only classifies and filters entries.

use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_AUDIO: &str = "audio/mpeg";
pub const MIME_VIDEO: &str = "video/mp4";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

/// A single archived file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionFile {
    pub file_name: String,

    /// Free-form type hint from the uploader ("pdf", "audio/mp3", "video")
    #[serde(default)]
    pub file_type: String,

    /// Either a direct http(s) link or base64 content
    pub file_data: Option<String>,
}

impl SessionFile {
    pub fn category(&self) -> MediaCategory {
        MediaCategory::from_file_type(&self.file_type)
    }

    pub fn mime_type(&self) -> &'static str {
        mime_type_for(&self.file_type)
    }

    /// True when `file_data` is a direct http(s) link
    pub fn has_link(&self) -> bool {
        self.file_data.as_deref().is_some_and(is_http_url)
    }
}

/// Filter tab on the sessions page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCategory {
    All,
    Pdf,
    Audio,
    Video,
    Other,
}

impl MediaCategory {
    /// Classify a type hint by case-insensitive substring
    pub fn from_file_type(file_type: &str) -> Self {
        let normalized = file_type.to_lowercase();
        if normalized.contains("pdf") {
            MediaCategory::Pdf
        } else if normalized.contains("mp3") || normalized.contains("audio") {
            MediaCategory::Audio
        } else if normalized.contains("mp4") || normalized.contains("video") {
            MediaCategory::Video
        } else {
            MediaCategory::Other
        }
    }

    /// Whether a file of category `file_category` shows under this tab.
    /// `All` shows everything except `Other`.
    pub fn admits(&self, file_category: MediaCategory) -> bool {
        match self {
            MediaCategory::All => file_category != MediaCategory::Other,
            selected => *selected == file_category,
        }
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::All => write!(f, "all"),
            MediaCategory::Pdf => write!(f, "pdf"),
            MediaCategory::Audio => write!(f, "audio"),
            MediaCategory::Video => write!(f, "video"),
            MediaCategory::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for MediaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(MediaCategory::All),
            "pdf" => Ok(MediaCategory::Pdf),
            "audio" => Ok(MediaCategory::Audio),
            "video" => Ok(MediaCategory::Video),
            "other" => Ok(MediaCategory::Other),
            other => Err(format!("Unknown media category: {}", other)),
        }
    }
}

/// MIME type from a file type hint
pub fn mime_type_for(file_type: &str) -> &'static str {
    match MediaCategory::from_file_type(file_type) {
        MediaCategory::Pdf => MIME_PDF,
        MediaCategory::Audio => MIME_AUDIO,
        MediaCategory::Video => MIME_VIDEO,
        MediaCategory::All | MediaCategory::Other => MIME_OCTET_STREAM,
    }
}

/// MIME type from a link's file extension
pub fn mime_type_from_url(url: Option<&str>) -> &'static str {
    let Some(url) = url else {
        return MIME_OCTET_STREAM;
    };
    let lower = url.to_lowercase();
    if lower.ends_with(".pdf") {
        MIME_PDF
    } else if lower.ends_with(".mp3") {
        MIME_AUDIO
    } else if lower.ends_with(".mp4") {
        MIME_VIDEO
    } else {
        MIME_OCTET_STREAM
    }
}

/// True for absolute http/https URLs
pub fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(file_type: &str, data: Option<&str>) -> SessionFile {
        SessionFile {
            file_name: "session".to_string(),
            file_type: file_type.to_string(),
            file_data: data.map(str::to_string),
        }
    }

    #[test]
    fn test_categorize() {
        assert_eq!(MediaCategory::from_file_type("PDF"), MediaCategory::Pdf);
        assert_eq!(MediaCategory::from_file_type("audio/mp3"), MediaCategory::Audio);
        assert_eq!(MediaCategory::from_file_type("Video"), MediaCategory::Video);
        assert_eq!(MediaCategory::from_file_type("docx"), MediaCategory::Other);
        assert_eq!(MediaCategory::from_file_type(""), MediaCategory::Other);
    }

    #[test]
    fn test_all_excludes_other() {
        assert!(MediaCategory::All.admits(MediaCategory::Audio));
        assert!(!MediaCategory::All.admits(MediaCategory::Other));
        assert!(MediaCategory::Pdf.admits(MediaCategory::Pdf));
        assert!(!MediaCategory::Pdf.admits(MediaCategory::Video));
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(mime_type_for("mp4"), MIME_VIDEO);
        assert_eq!(mime_type_for("zip"), MIME_OCTET_STREAM);
        assert_eq!(mime_type_from_url(Some("https://cdn/x/Notes.PDF")), MIME_PDF);
        assert_eq!(mime_type_from_url(Some("https://cdn/x/a.mp3")), MIME_AUDIO);
        assert_eq!(mime_type_from_url(None), MIME_OCTET_STREAM);
    }

    #[test]
    fn test_links() {
        assert!(file("pdf", Some("https://cdn.example.org/a.pdf")).has_link());
        assert!(file("pdf", Some("http://cdn.example.org/a.pdf")).has_link());
        assert!(!file("pdf", Some("JVBERi0xLjQK")).has_link());
        assert!(!file("pdf", Some("ftp://cdn.example.org/a.pdf")).has_link());
        assert!(!file("pdf", None).has_link());
    }

    #[test]
    fn test_missing_file_type_deserializes_empty() {
        let parsed: SessionFile =
            serde_json::from_str(r#"{"fileName":"a","fileData":"https://x/a"}"#).unwrap();
        assert_eq!(parsed.file_type, "");
        assert_eq!(parsed.category(), MediaCategory::Other);
    }
}
