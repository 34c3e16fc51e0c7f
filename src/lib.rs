pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Hosts accepted as YouTube URLs
const YOUTUBE_HOSTS: [&str; 4] = ["youtube.com", "youtu.be", "www.youtube.com", "m.youtube.com"];

/// Video ID patterns, tried in order
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)([^&\n?#]+)").unwrap(),
        Regex::new(r"youtube\.com/watch\?.*v=([^&\n?#]+)").unwrap(),
    ]
});

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Caption transcript for a video
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Human-readable label, falling back to the video ID when the title is unknown
    pub fn label(&self) -> String {
        if self.title.trim().is_empty() {
            format!("Video ID: {}", self.video_id)
        } else {
            format!("Video: {}", self.title)
        }
    }
}

/// Check whether the input parses as a URL on one of the YouTube hosts.
///
/// Only the network location is inspected; the path and query may or may not
/// carry a usable video ID.
pub fn validate_youtube_url(input: &str) -> bool {
    let Ok(parsed) = url::Url::parse(input) else {
        return false;
    };

    // userinfo or an explicit port changes the network location
    if !parsed.username().is_empty() || parsed.password().is_some() || parsed.port().is_some() {
        return false;
    }

    parsed
        .host_str()
        .map(|host| YOUTUBE_HOSTS.contains(&host.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extract video ID from the supported YouTube URL formats
pub fn extract_video_id(input: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(input))
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_allowed_hosts() {
        assert!(validate_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(validate_youtube_url("https://youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(validate_youtube_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(validate_youtube_url("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_validate_host_is_case_insensitive() {
        assert!(validate_youtube_url("https://WWW.YouTube.COM/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_validate_ignores_path() {
        assert!(validate_youtube_url("https://www.youtube.com/feed/subscriptions"));
    }

    #[test]
    fn test_validate_rejects_non_urls() {
        assert!(!validate_youtube_url("not a url"));
        assert!(!validate_youtube_url(""));
        assert!(!validate_youtube_url("youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn test_validate_rejects_other_hosts() {
        assert!(!validate_youtube_url("https://vimeo.com/12345"));
        assert!(!validate_youtube_url("https://youtube.com.evil.example/watch?v=x"));
        assert!(!validate_youtube_url("https://music.youtube.com/watch?v=x"));
    }

    #[test]
    fn test_validate_rejects_port_and_userinfo() {
        assert!(!validate_youtube_url("https://www.youtube.com:8443/watch?v=x"));
        assert!(!validate_youtube_url("https://user@www.youtube.com/watch?v=x"));
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_leading_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ#t=5"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?si=abc"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_v_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ?version=3"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_no_id_segment() {
        assert_eq!(extract_video_id("https://www.youtube.com/feed/subscriptions"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/shorts/dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_label() {
        let mut t = Transcript {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: String::new(),
            language: "en".to_string(),
            segments: vec![],
        };
        assert_eq!(t.label(), "Video ID: dQw4w9WgXcQ");
        t.title = "Never Gonna Give You Up".to_string();
        assert_eq!(t.label(), "Video: Never Gonna Give You Up");
    }
}
