//! YouTube URL handling for maneuver videos.

use tracing::warn;
use url::Url;

/// Host fragment a video URL must carry to be embeddable.
const YOUTUBE_HOST: &str = "youtube.com";

/// Query parameter naming the video.
const VIDEO_PARAM: &str = "v";

/// Check if a URL looks like a YouTube video URL.
pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com/watch")
        || url.contains("youtube.com/embed/")
        || url.contains("youtu.be/")
}

/// Derive the embeddable player URL for a watch URL.
///
/// Only `youtube.com` hosts with a non-empty `v` parameter qualify; anything
/// else (including unparseable input) yields `None`.
pub fn embed_url(video_url: &str) -> Option<String> {
    let parsed = match Url::parse(video_url) {
        Ok(url) => url,
        Err(e) => {
            warn!("Invalid video URL {:?}: {}", video_url, e);
            return None;
        }
    };

    if !parsed
        .host_str()
        .is_some_and(|host| host.contains(YOUTUBE_HOST))
    {
        return None;
    }

    let video_id = parsed
        .query_pairs()
        .find(|(key, _)| key == VIDEO_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())?;

    Some(format!("https://www.youtube.com/embed/{}", video_id))
}
