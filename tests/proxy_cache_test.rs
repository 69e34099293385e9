mod support;

use std::sync::Arc;

use chrono::Utc;
use tempfile::TempDir;

use afterglow::cache::VideoCache;
use afterglow::proxy::{create_router, video_cache_key, ProxyState, VIDEOS_CACHE_KEY};
use afterglow::youtube::Video;

use crate::support::{make_video, tracing_init, MockVideoSource};

/// Proxy under test, served on an ephemeral loopback port.
struct ProxyFixture {
    base_url: String,
    source: Arc<MockVideoSource>,
    cache: VideoCache,
    _temp_dir: TempDir,
}

impl ProxyFixture {
    async fn new(videos: Vec<Video>) -> Result<Self, Box<dyn std::error::Error>> {
        tracing_init();

        let temp_dir = TempDir::new()?;
        let cache = VideoCache::new(temp_dir.path().join("cache")).await?;
        let source = Arc::new(MockVideoSource::new(videos));

        let state = ProxyState {
            source: Some(source.clone()),
            cache: cache.clone(),
            channel_id: "UCtest".to_string(),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        tokio::spawn(async move {
            let _ = axum::serve(listener, create_router(state)).await;
        });

        Ok(Self {
            base_url,
            source,
            cache,
            _temp_dir: temp_dir,
        })
    }

}

/// Proxy with no upstream configured, as when the API key is missing.
async fn serve_without_source() -> Result<(String, TempDir), Box<dyn std::error::Error>> {
    tracing_init();

    let temp_dir = TempDir::new()?;
    let state = ProxyState {
        source: None,
        cache: VideoCache::new(temp_dir.path().join("cache")).await?,
        channel_id: "UCtest".to_string(),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    tokio::spawn(async move {
        let _ = axum::serve(listener, create_router(state)).await;
    });

    Ok((base_url, temp_dir))
}

#[tokio::test]
async fn listing_miss_fetches_upstream_then_serves_from_cache() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![
        make_video("vid1", "AGNES @ Mason Bar", true),
        make_video("vid2", "AXEL B2B PAZZI", true),
    ])
    .await?;

    let first: Vec<Video> = reqwest::get(format!("{}/videos", fixture.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(first.len(), 2);
    assert_eq!(fixture.source.channel_calls(), 1);

    // Second request within the TTL never reaches upstream.
    let second: Vec<Video> = reqwest::get(format!("{}/videos", fixture.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(second, first);
    assert_eq!(fixture.source.channel_calls(), 1);

    Ok(())
}

#[tokio::test]
async fn half_hour_old_entry_is_still_fresh() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![make_video("vid1", "AGNES @ Mason Bar", true)]).await?;

    // An entry written 30 minutes ago under a one hour TTL.
    let cached = vec![make_video("cached", "CHARKOAL | Warehouse", true)];
    fixture
        .cache
        .put_with_expiry(
            VIDEOS_CACHE_KEY,
            &serde_json::to_string(&cached)?,
            Utc::now().timestamp() + 1800,
        )
        .await?;

    let served: Vec<Video> = reqwest::get(format!("{}/videos", fixture.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(served, cached);
    assert_eq!(fixture.source.channel_calls(), 0);

    Ok(())
}

#[tokio::test]
async fn expired_entry_triggers_a_refetch() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![make_video("vid1", "AGNES @ Mason Bar", true)]).await?;

    let stale = vec![make_video("stale", "Old listing", true)];
    fixture
        .cache
        .put_with_expiry(
            VIDEOS_CACHE_KEY,
            &serde_json::to_string(&stale)?,
            Utc::now().timestamp() - 1,
        )
        .await?;

    let served: Vec<Video> = reqwest::get(format!("{}/videos", fixture.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(served[0].id.video_id, "vid1");
    assert_eq!(fixture.source.channel_calls(), 1);

    Ok(())
}

#[tokio::test]
async fn video_details_are_cached_per_id() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![
        make_video("vid1", "AGNES @ Mason Bar", true),
        make_video("vid2", "AXEL B2B PAZZI", true),
    ])
    .await?;

    for _ in 0..3 {
        let video: Video = reqwest::get(format!("{}/videos/vid1", fixture.base_url))
            .await?
            .error_for_status()?
            .json()
            .await?;
        assert_eq!(video.id.video_id, "vid1");
    }
    assert_eq!(fixture.source.video_calls(), 1);

    // A different id is its own cache entry.
    reqwest::get(format!("{}/videos/vid2", fixture.base_url))
        .await?
        .error_for_status()?;
    assert_eq!(fixture.source.video_calls(), 2);
    assert!(fixture
        .cache
        .get(&video_cache_key("vid2"))
        .await
        .is_some());

    Ok(())
}

#[tokio::test]
async fn details_less_video_serves_null_fields() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![make_video("bare", "HLEB | Opening", false)]).await?;

    let body: serde_json::Value = reqwest::get(format!("{}/videos/bare", fixture.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(body["statistics"], serde_json::Value::Null);
    assert_eq!(body["contentDetails"], serde_json::Value::Null);

    Ok(())
}

#[tokio::test]
async fn unknown_video_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![make_video("vid1", "AGNES @ Mason Bar", true)]).await?;

    let response = reqwest::get(format!("{}/videos/nope", fixture.base_url)).await?;
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "Video not found");

    Ok(())
}

#[tokio::test]
async fn missing_api_key_is_a_served_error() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, _temp_dir) = serve_without_source().await?;

    for path in ["/videos", "/videos/vid1"] {
        let response = reqwest::get(format!("{}{}", base_url, path)).await?;
        assert_eq!(response.status(), 500);
        let body: serde_json::Value = response.json().await?;
        assert_eq!(body["error"], "YouTube API key is not configured");
    }

    Ok(())
}

#[tokio::test]
async fn corrupt_cache_entry_falls_through_to_upstream() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = ProxyFixture::new(vec![make_video("vid1", "AGNES @ Mason Bar", true)]).await?;

    fixture
        .cache
        .put(VIDEOS_CACHE_KEY, "not json at all", 3600)
        .await?;

    let served: Vec<Video> = reqwest::get(format!("{}/videos", fixture.base_url))
        .await?
        .error_for_status()?
        .json()
        .await?;
    assert_eq!(served[0].id.video_id, "vid1");
    assert_eq!(fixture.source.channel_calls(), 1);

    Ok(())
}
