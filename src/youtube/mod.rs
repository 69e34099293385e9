pub mod client;
pub mod models;

pub use client::{VideoSource, YouTubeClient, YouTubeError};
pub use models::Video;
