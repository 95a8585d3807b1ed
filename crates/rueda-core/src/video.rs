//! Resolution of reference video URLs into embeddable player URLs.
//!
//! Video links are authored by hand and come in several shapes (`watch?v=`,
//! `youtu.be/`, `embed/`, `shorts/`), optionally with a `t=<seconds>` start
//! offset. Resolution is a pure function of the input string.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

#[allow(clippy::expect_used)]
static START_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]t=(\d+)").expect("start time pattern is valid"));

/// Identifier patterns, tried in order.
#[allow(clippy::expect_used)]
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)",
        r"youtube\.com/embed/([^&\n?#]+)",
        r"youtube\.com/shorts/([^&\n?#]+)",
    ]
    .map(|pattern| Regex::new(pattern).expect("video id pattern is valid"))
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VideoError {
    #[error("no video id found in {url:?}")]
    MissingVideoId { url: String },
}

/// What could be extracted from a video URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoLink {
    pub video_id: Option<String>,
    /// Start offset in seconds.
    pub start_time: Option<u64>,
}

impl VideoLink {
    /// Extract the video id and start offset from `url`.
    ///
    /// The start offset is looked up independently of the id, so a URL
    /// with a timestamp but no recognisable id still reports the offset.
    pub fn parse(url: &str) -> Self {
        let start_time = START_TIME
            .captures(url)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok());

        let video_id = VIDEO_ID_PATTERNS
            .iter()
            .find_map(|re| re.captures(url))
            .and_then(|caps| caps.get(1))
            .map(|m| strip_query(m.as_str()).to_string())
            .filter(|id| !id.is_empty());

        Self {
            video_id,
            start_time,
        }
    }
}

/// A video ready to be embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedVideo {
    pub video_id: String,
    pub start_time: Option<u64>,
    pub shorts: bool,
}

impl EmbedVideo {
    /// The iframe URL.
    ///
    /// Shorts ignore the start offset; a zero offset is treated as none.
    #[must_use]
    pub fn embed_url(&self) -> String {
        match self.start_time {
            _ if self.shorts => format!("{EMBED_BASE}{}?enablejsapi=1", self.video_id),
            Some(start) if start > 0 => format!(
                "{EMBED_BASE}{}?start={start}&enablejsapi=1&rel=0",
                self.video_id
            ),
            _ => format!("{EMBED_BASE}{}?enablejsapi=1&rel=0", self.video_id),
        }
    }

    /// The canonical watch page, for clients that cannot embed.
    #[must_use]
    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }
}

impl fmt::Display for EmbedVideo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.embed_url())
    }
}

#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_BASE}{video_id}")
}

/// Whether `url` points at a short-form video.
#[must_use]
pub fn is_shorts(url: &str) -> bool {
    url.contains("/shorts/")
}

/// Resolve a video URL into something embeddable.
///
/// # Errors
///
/// [`VideoError::MissingVideoId`] when no identifier can be extracted; the
/// caller should show nothing rather than a broken player.
pub fn resolve_video(url: &str) -> Result<EmbedVideo, VideoError> {
    let link = VideoLink::parse(url);
    let video_id = link.video_id.ok_or_else(|| VideoError::MissingVideoId {
        url: url.to_string(),
    })?;
    Ok(EmbedVideo {
        video_id,
        start_time: link.start_time,
        shorts: is_shorts(url),
    })
}

fn strip_query(id: &str) -> &str {
    id.split(['?', '&']).next().unwrap_or(id)
}
