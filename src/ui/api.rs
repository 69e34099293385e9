use crate::youtube::Video;
use serde::Deserialize;
use thiserror::Error;

/// Errors from UI fetches against the in-process proxy.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Api(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn api_error(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => ApiError::Api(body.error),
        Err(_) => ApiError::Api(format!("Failed to fetch data: {}", status)),
    }
}

/// Fetch the cached channel listing from the proxy.
pub async fn fetch_videos(base_url: &str) -> Result<Vec<Video>, ApiError> {
    let response = reqwest::get(format!("{}/videos", base_url)).await?;
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json().await?)
}

/// Fetch one video's details from the proxy.
pub async fn fetch_video(base_url: &str, video_id: &str) -> Result<Video, ApiError> {
    let response = reqwest::get(format!("{}/videos/{}", base_url, video_id)).await?;
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json().await?)
}
