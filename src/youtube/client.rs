use crate::youtube::models::{DetailsResponse, SearchResponse, Video, VideoId};
use reqwest::{Client, Error as ReqwestError};
use thiserror::Error;
use tracing::{info, warn};

/// How many recent uploads a channel listing fetches.
pub const MAX_RESULTS: usize = 20;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("YouTube search API error: {0}")]
    SearchStatus(u16),
    #[error("YouTube videos API error: {0}")]
    DetailsStatus(u16),
    #[error("Video not found")]
    NotFound,
}

/// Something that can produce channel listings and per-video details.
/// The proxy depends on this seam so tests can count upstream calls.
#[async_trait::async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch_channel_videos(&self, channel_id: &str) -> Result<Vec<Video>, YouTubeError>;
    async fn fetch_video(&self, video_id: &str) -> Result<Video, YouTubeError>;
}

#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
        }
    }

    /// Point the client at a different API root (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Most recent uploads for a channel, newest first.
    async fn search_recent(&self, channel_id: &str) -> Result<SearchResponse, YouTubeError> {
        let url = format!("{}/search", self.base_url);
        let max_results = MAX_RESULTS.to_string();
        let params = [
            ("key", self.api_key.as_str()),
            ("channelId", channel_id),
            ("part", "snippet"),
            ("order", "date"),
            ("maxResults", &max_results),
            ("type", "video"),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("YouTube search API returned {}", status);
            return Err(YouTubeError::SearchStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Statistics and content details for a batch of video ids.
    async fn video_details(&self, ids: &[String]) -> Result<DetailsResponse, YouTubeError> {
        let url = format!("{}/videos", self.base_url);
        let joined = ids.join(",");
        let params = [
            ("key", self.api_key.as_str()),
            ("id", joined.as_str()),
            ("part", "snippet,statistics,contentDetails"),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("YouTube videos API returned {}", status);
            return Err(YouTubeError::DetailsStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl VideoSource for YouTubeClient {
    /// Fetch recent uploads and merge in per-video details keyed by id.
    /// A search result the details call doesn't know about keeps `None`
    /// statistics rather than being dropped.
    async fn fetch_channel_videos(&self, channel_id: &str) -> Result<Vec<Video>, YouTubeError> {
        let search = self.search_recent(channel_id).await?;
        if search.items.is_empty() {
            warn!("No videos found for channel {}", channel_id);
            return Ok(Vec::new());
        }

        let ids: Vec<String> = search
            .items
            .iter()
            .map(|item| item.id.video_id.clone())
            .collect();
        let details = self.video_details(&ids).await?;

        let videos = search
            .items
            .into_iter()
            .map(|item| {
                let row = details
                    .items
                    .iter()
                    .find(|d| d.id == item.id.video_id);
                Video {
                    id: item.id,
                    snippet: item.snippet,
                    statistics: row.and_then(|d| d.statistics.clone()),
                    content_details: row.and_then(|d| d.content_details.clone()),
                }
            })
            .collect::<Vec<_>>();

        info!("Fetched {} videos for channel {}", videos.len(), channel_id);
        Ok(videos)
    }

    async fn fetch_video(&self, video_id: &str) -> Result<Video, YouTubeError> {
        let details = self.video_details(&[video_id.to_string()]).await?;
        let row = details
            .items
            .into_iter()
            .next()
            .ok_or(YouTubeError::NotFound)?;

        Ok(Video {
            id: VideoId {
                video_id: row.id,
            },
            snippet: row.snippet,
            statistics: row.statistics,
            content_details: row.content_details,
        })
    }
}
