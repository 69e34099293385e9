mod support;

use axum::{routing::get, Json, Router};
use serde_json::json;

use afterglow::youtube::{VideoSource, YouTubeClient, YouTubeError};

use crate::support::tracing_init;

/// Fake YouTube Data API: the search endpoint lists two uploads, the
/// videos endpoint only has a details row for the first.
async fn serve_fake_api() -> Result<String, Box<dyn std::error::Error>> {
    tracing_init();

    let router = Router::new()
        .route(
            "/search",
            get(|| async {
                Json(json!({
                    "items": [
                        {
                            "id": { "videoId": "with-details" },
                            "snippet": {
                                "title": "AGNES @ Mason Bar",
                                "publishedAt": "2025-03-01T20:00:00Z",
                                "thumbnails": {}
                            }
                        },
                        {
                            "id": { "videoId": "details-missing" },
                            "snippet": {
                                "title": "AXEL | Rooftop Session",
                                "publishedAt": "2025-02-14T21:00:00Z",
                                "thumbnails": {}
                            }
                        }
                    ]
                }))
            }),
        )
        .route(
            "/videos",
            get(|| async {
                Json(json!({
                    "items": [
                        {
                            "id": "with-details",
                            "snippet": {
                                "title": "AGNES @ Mason Bar",
                                "publishedAt": "2025-03-01T20:00:00Z",
                                "thumbnails": {}
                            },
                            "statistics": { "viewCount": "1234" },
                            "contentDetails": { "duration": "PT1H2M3S" }
                        }
                    ]
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(base_url)
}

#[tokio::test]
async fn merge_keeps_search_items_without_a_details_row() -> Result<(), Box<dyn std::error::Error>>
{
    let base_url = serve_fake_api().await?;
    let client = YouTubeClient::with_base_url("test-key".to_string(), base_url);

    let videos = client.fetch_channel_videos("UCtest").await?;
    assert_eq!(videos.len(), 2);

    let detailed = &videos[0];
    assert_eq!(detailed.id.video_id, "with-details");
    assert_eq!(
        detailed
            .statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref()),
        Some("1234")
    );
    assert_eq!(
        detailed
            .content_details
            .as_ref()
            .and_then(|d| d.duration.as_deref()),
        Some("PT1H2M3S")
    );

    // No details row: the item survives the merge with empty fields
    // instead of being dropped.
    let bare = &videos[1];
    assert_eq!(bare.id.video_id, "details-missing");
    assert_eq!(bare.snippet.title, "AXEL | Rooftop Session");
    assert!(bare.statistics.is_none());
    assert!(bare.content_details.is_none());

    Ok(())
}

#[tokio::test]
async fn fetch_video_resolves_a_details_row() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = serve_fake_api().await?;
    let client = YouTubeClient::with_base_url("test-key".to_string(), base_url);

    let found = client.fetch_video("with-details").await?;
    assert_eq!(found.id.video_id, "with-details");
    assert!(found.statistics.is_some());

    Ok(())
}

#[tokio::test]
async fn empty_details_response_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    tracing_init();

    let router = Router::new().route(
        "/videos",
        get(|| async { Json(json!({ "items": [] })) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let client = YouTubeClient::with_base_url("test-key".to_string(), base_url);
    let result = client.fetch_video("ghost").await;
    assert!(matches!(result, Err(YouTubeError::NotFound)));

    Ok(())
}
