use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::ui::{use_video, Route};
use crate::youtube::Video;

/// "PT1H2M3S" style ISO 8601 duration to a "1:02:03" badge. Hours are
/// dropped when zero; malformed input renders as empty.
pub fn format_duration(duration: &str) -> String {
    let Some(rest) = duration.strip_prefix("PT") else {
        return String::new();
    };

    let mut hours = 0u64;
    let mut minutes = 0u64;
    let mut seconds = 0u64;
    let mut number = String::new();
    for c in rest.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        let value = number.parse().unwrap_or(0);
        number.clear();
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => return String::new(),
        }
    }

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// "Mar 6, 2025" style publish date.
pub fn format_date(published_at: &str) -> String {
    match published_at.parse::<DateTime<Utc>>() {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => String::new(),
    }
}

/// One tile in a video grid. Clicking selects the video and returns to
/// the home page where the hero player lives.
#[component]
pub fn VideoCard(video: Video) -> Element {
    let mut ctx = use_video();
    let navigator = use_navigator();

    let id = video.id.video_id.clone();
    let thumbnail = video
        .snippet
        .thumbnails
        .medium
        .as_ref()
        .map(|t| t.url.clone());
    let duration = video
        .content_details
        .as_ref()
        .and_then(|d| d.duration.as_deref())
        .map(format_duration)
        .unwrap_or_default();
    let published = format_date(&video.snippet.published_at);

    rsx! {
        button {
            class: "video-card",
            onclick: move |_| {
                ctx.set_video_id(id.clone());
                if !ctx.is_home_page() {
                    navigator.push(Route::Home {});
                }
            },
            div { class: "video-card-thumb",
                if let Some(url) = thumbnail {
                    img { src: "{url}", alt: "{video.snippet.title}", loading: "lazy" }
                }
                if !duration.is_empty() {
                    span { class: "video-card-duration", "{duration}" }
                }
            }
            div { class: "video-card-info",
                p { class: "video-card-title", "{video.snippet.title}" }
                p { class: "video-card-date", "{published}" }
            }
        }
    }
}
