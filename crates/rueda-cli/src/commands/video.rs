use anyhow::Result;
use rueda_core::{resolve_video, EmbedVideo};

/// Print the embeddable form of a video link.
pub fn show_video(url: &str) -> Result<()> {
    let video = resolve_video(url)?;
    print!("{}", describe(&video));
    Ok(())
}

fn describe(video: &EmbedVideo) -> String {
    let start = video
        .start_time
        .map_or_else(|| String::from("-"), |t| format!("{t}s"));
    format!(
        "Video id:   {}\nStart time: {}\nShorts:     {}\nEmbed URL:  {}\nWatch URL:  {}\n",
        video.video_id,
        start,
        if video.shorts { "yes" } else { "no" },
        video.embed_url(),
        video.watch_url()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_with_start_time() {
        let video = resolve_video("https://www.youtube.com/watch?v=abc123&t=42").unwrap();
        let text = describe(&video);
        assert!(text.contains("Video id:   abc123"));
        assert!(text.contains("Start time: 42s"));
        assert!(text.contains("Shorts:     no"));
        assert!(text.contains("https://www.youtube.com/embed/abc123?start=42&enablejsapi=1&rel=0"));
    }

    #[test]
    fn test_describe_shorts() {
        let video = resolve_video("https://youtube.com/shorts/xyz789").unwrap();
        let text = describe(&video);
        assert!(text.contains("Start time: -"));
        assert!(text.contains("Shorts:     yes"));
    }

    #[test]
    fn test_show_video_without_id_fails() {
        assert!(show_video("https://example.com/not-a-video").is_err());
    }
}
