use chrono::{DateTime, Datelike, Utc};
use dioxus::prelude::*;
use tracing::warn;

use crate::ui::components::youtube_player::{watch_url, YouTubePlayer};
use crate::ui::{api, use_video, AppContext};
use crate::youtube::Video;

/// Artist part of a set title: everything before the first `@` or `|`.
pub fn extract_artist_name(title: &str) -> String {
    title
        .split(['@', '|'])
        .next()
        .unwrap_or(title)
        .trim()
        .to_uppercase()
}

/// "MARCH 2025" style label for the hero banner.
pub fn format_hero_date(published_at: &str) -> String {
    match published_at.parse::<DateTime<Utc>>() {
        Ok(date) => format!("{} {}", month_name(date.month()), date.year()).to_uppercase(),
        Err(_) => String::new(),
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// "1,234,567" from the raw view count string.
pub fn format_views(view_count: &str) -> String {
    let digits: Vec<char> = view_count.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push(',');
        }
        out.push(*c);
    }
    out
}

/// Hero player docked under the header. Mounted in the layout but only
/// rendered on the home page; off home the floating widget takes over.
#[component]
pub fn MainVideoPlayer() -> Element {
    let app = use_context::<AppContext>();
    let video = use_video();

    let base_url = app.config.proxy_base_url();
    let details = use_resource({
        let video = video.clone();
        move || {
            let base_url = base_url.clone();
            let id = video.video_id();
            async move {
                match api::fetch_video(&base_url, &id).await {
                    Ok(v) => Some(v),
                    Err(e) => {
                        warn!("Failed to fetch video details: {}", e);
                        None
                    }
                }
            }
        }
    });

    if !video.is_home_page() {
        return rsx! {};
    }

    let video_id = video.video_id();
    let loaded: Option<Video> = details.read().clone().flatten();
    let meta = loaded.map(|v| {
        let artist = extract_artist_name(&v.snippet.title);
        let date = format_hero_date(&v.snippet.published_at);
        let views = v
            .statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref())
            .map(format_views);
        (artist, date, views)
    });

    rsx! {
        section { class: "main-player",
            div { class: "main-player-frame",
                YouTubePlayer { player_id: "main" }
            }
            if let Some((artist, date, views)) = meta {
                div { class: "main-player-meta",
                    h1 { class: "main-player-title",
                        span { class: "artist-name", "{artist}" }
                        span { class: "title-divider", " | " }
                        span { class: "set-date", "{date}" }
                    }
                    div { class: "main-player-row",
                        if let Some(views) = views {
                            span { class: "view-count", "{views} views" }
                        }
                        a {
                            class: "watch-link",
                            href: watch_url(&video_id),
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Watch on YouTube"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artist_name_stops_at_venue_or_pipe() {
        assert_eq!(extract_artist_name("Agnes @ Mason Bar"), "AGNES");
        assert_eq!(extract_artist_name("AXEL | Rooftop Session"), "AXEL");
        assert_eq!(extract_artist_name("  pazzi  "), "PAZZI");
    }

    #[test]
    fn hero_date_is_month_and_year() {
        assert_eq!(format_hero_date("2025-03-06T20:00:00Z"), "MARCH 2025");
        assert_eq!(format_hero_date("not a date"), "");
    }

    #[test]
    fn views_get_thousands_separators() {
        assert_eq!(format_views("7"), "7");
        assert_eq!(format_views("1234"), "1,234");
        assert_eq!(format_views("1234567"), "1,234,567");
    }
}
