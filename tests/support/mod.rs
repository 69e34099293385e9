use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use afterglow::youtube::{Video, VideoSource, YouTubeError};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// In-memory video source that counts upstream calls, so tests can
/// assert whether the proxy actually went past its cache.
pub struct MockVideoSource {
    videos: Vec<Video>,
    channel_calls: AtomicUsize,
    video_calls: AtomicUsize,
}

impl MockVideoSource {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos,
            channel_calls: AtomicUsize::new(0),
            video_calls: AtomicUsize::new(0),
        }
    }

    pub fn channel_calls(&self) -> usize {
        self.channel_calls.load(Ordering::SeqCst)
    }

    pub fn video_calls(&self) -> usize {
        self.video_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoSource for MockVideoSource {
    async fn fetch_channel_videos(&self, _channel_id: &str) -> Result<Vec<Video>, YouTubeError> {
        self.channel_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.videos.clone())
    }

    async fn fetch_video(&self, video_id: &str) -> Result<Video, YouTubeError> {
        self.video_calls.fetch_add(1, Ordering::SeqCst);
        self.videos
            .iter()
            .find(|v| v.id.video_id == video_id)
            .cloned()
            .ok_or(YouTubeError::NotFound)
    }
}

/// Build a video fixture; `with_details` controls whether statistics
/// and duration are present or serialized as null.
pub fn make_video(id: &str, title: &str, with_details: bool) -> Video {
    let details = if with_details {
        r#""statistics": { "viewCount": "4321" },
           "contentDetails": { "duration": "PT1H2M3S" }"#
    } else {
        r#""statistics": null,
           "contentDetails": null"#
    };
    serde_json::from_str(&format!(
        r#"{{
            "id": {{ "videoId": "{id}" }},
            "snippet": {{
                "title": "{title}",
                "publishedAt": "2025-03-01T20:00:00Z",
                "thumbnails": {{ "medium": {{ "url": "https://i.ytimg.com/vi/{id}/mqdefault.jpg" }} }}
            }},
            {details}
        }}"#
    ))
    .expect("valid video fixture")
}
