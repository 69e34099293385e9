use crate::cache::VideoCache;
use crate::config::Config;
use crate::youtube::{VideoSource, YouTubeClient, YouTubeError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

/// Seconds a cached proxy response stays fresh.
pub const CACHE_TTL_SECS: i64 = 3600;

/// Cache key for the channel listing.
pub const VIDEOS_CACHE_KEY: &str = "youtube_videos";

/// Proxy server state
#[derive(Clone)]
pub struct ProxyState {
    /// Upstream video source; `None` when no API key is configured.
    pub source: Option<Arc<dyn VideoSource>>,
    pub cache: VideoCache,
    pub channel_id: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Create the proxy router
pub fn create_router(state: ProxyState) -> Router {
    Router::new()
        .route("/videos", get(get_videos))
        .route("/videos/:id", get(get_video))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Cache key for one video's details.
pub fn video_cache_key(video_id: &str) -> String {
    format!("youtube_video_{}", video_id)
}

/// Serve a cached JSON string if it still parses; a corrupt hit falls
/// through to a fresh fetch.
async fn cached_json(cache: &VideoCache, key: &str) -> Option<serde_json::Value> {
    let raw = cache.get(key).await?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Proxy: cached payload for {} failed to parse: {}", key, e);
            None
        }
    }
}

/// Best-effort cache write; the response is already on its way out.
async fn cache_put(cache: &VideoCache, key: &str, payload: &str) {
    if let Err(e) = cache.put(key, payload, CACHE_TTL_SECS).await {
        warn!("Proxy: failed to cache {}: {}", key, e);
    }
}

/// GET /videos - recent channel uploads, merged with statistics
async fn get_videos(State(state): State<ProxyState>) -> impl IntoResponse {
    let Some(source) = state.source.clone() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "YouTube API key is not configured",
        );
    };

    if let Some(cached) = cached_json(&state.cache, VIDEOS_CACHE_KEY).await {
        return Json(cached).into_response();
    }

    info!("Proxy: fetching fresh channel listing");
    match source.fetch_channel_videos(&state.channel_id).await {
        Ok(videos) => {
            match serde_json::to_string(&videos) {
                Ok(payload) => cache_put(&state.cache, VIDEOS_CACHE_KEY, &payload).await,
                Err(e) => warn!("Proxy: failed to serialize listing for cache: {}", e),
            }
            Json(videos).into_response()
        }
        Err(e) => {
            error!("Proxy: channel listing fetch failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// GET /videos/:id - details for a single video
async fn get_video(
    Path(id): Path<String>,
    State(state): State<ProxyState>,
) -> impl IntoResponse {
    let Some(source) = state.source.clone() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "YouTube API key is not configured",
        );
    };

    let cache_key = video_cache_key(&id);
    if let Some(cached) = cached_json(&state.cache, &cache_key).await {
        return Json(cached).into_response();
    }

    info!("Proxy: fetching fresh details for video {}", id);
    match source.fetch_video(&id).await {
        Ok(video) => {
            match serde_json::to_string(&video) {
                Ok(payload) => cache_put(&state.cache, &cache_key, &payload).await,
                Err(e) => warn!("Proxy: failed to serialize video for cache: {}", e),
            }
            Json(video).into_response()
        }
        Err(YouTubeError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, "Video not found")
        }
        Err(e) => {
            error!("Proxy: video fetch failed for {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Start the proxy on a dedicated thread with its own runtime, so the
/// UI event loop never hosts server work.
pub fn start(config: Config) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create proxy runtime");

        rt.block_on(async move {
            let cache = match VideoCache::new(config.cache_dir()).await {
                Ok(cache) => cache,
                Err(e) => {
                    error!("Proxy: failed to initialize cache: {}", e);
                    return;
                }
            };

            let source: Option<Arc<dyn VideoSource>> = config
                .youtube_api_key
                .clone()
                .map(|key| Arc::new(YouTubeClient::new(key)) as Arc<dyn VideoSource>);

            let state = ProxyState {
                source,
                cache,
                channel_id: config.channel_id.clone(),
            };

            let addr = format!("127.0.0.1:{}", config.proxy_port);
            let listener = match tokio::net::TcpListener::bind(&addr).await {
                Ok(listener) => listener,
                Err(e) => {
                    error!("Proxy: failed to bind {}: {}", addr, e);
                    return;
                }
            };

            info!("Proxy listening on {}", addr);
            if let Err(e) = axum::serve(listener, create_router(state)).await {
                error!("Proxy server error: {}", e);
            }
        });
    });
}
