use serde::{Deserialize, Serialize};

/// One video as served by the proxy: a search result merged with the
/// per-video details row. `statistics` / `content_details` stay `null`
/// (not omitted) when the details lookup had no row for this id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: VideoId,
    pub snippet: Snippet,
    pub statistics: Option<Statistics>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoId {
    pub video_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Thumbnails {
    pub medium: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentDetails {
    pub duration: Option<String>,
}

/// Wrapper for the upstream search endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SearchItem {
    pub id: VideoId,
    pub snippet: Snippet,
}

/// Wrapper for the upstream videos (details) endpoint response.
/// Unlike search results, details rows carry a bare string id.
#[derive(Debug, Deserialize)]
pub(crate) struct DetailsResponse {
    #[serde(default)]
    pub items: Vec<DetailsItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DetailsItem {
    pub id: String,
    pub snippet: Snippet,
    pub statistics: Option<Statistics>,
    pub content_details: Option<ContentDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_details_serialize_as_null() {
        let video = Video {
            id: VideoId {
                video_id: "abc".to_string(),
            },
            snippet: Snippet {
                title: "AGNES @ Mason Bar".to_string(),
                published_at: "2025-03-01T20:00:00Z".to_string(),
                thumbnails: Thumbnails { medium: None },
            },
            statistics: None,
            content_details: None,
        };

        let json: serde_json::Value = serde_json::to_value(&video).unwrap();
        assert_eq!(json["statistics"], serde_json::Value::Null);
        assert_eq!(json["contentDetails"], serde_json::Value::Null);
        assert_eq!(json["id"]["videoId"], "abc");
        assert_eq!(json["snippet"]["publishedAt"], "2025-03-01T20:00:00Z");
    }

    #[test]
    fn video_round_trips_through_wire_names() {
        let raw = r#"{
            "id": { "videoId": "xyz" },
            "snippet": {
                "title": "AXEL B2B PAZZI",
                "publishedAt": "2025-02-14T21:00:00Z",
                "thumbnails": { "medium": { "url": "https://i.ytimg.com/vi/xyz/mqdefault.jpg" } }
            },
            "statistics": { "viewCount": "1234" },
            "contentDetails": { "duration": "PT1H2M3S" }
        }"#;

        let video: Video = serde_json::from_str(raw).unwrap();
        assert_eq!(video.id.video_id, "xyz");
        assert_eq!(
            video.statistics.as_ref().unwrap().view_count.as_deref(),
            Some("1234")
        );
        assert_eq!(
            video.content_details.as_ref().unwrap().duration.as_deref(),
            Some("PT1H2M3S")
        );

        let back = serde_json::to_string(&video).unwrap();
        let reparsed: Video = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, video);
    }
}
