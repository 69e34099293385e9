use dioxus::prelude::*;
use std::time::Duration;

use crate::ui::components::video_tabs::KNOWN_ARTISTS;
use crate::ui::components::VideoCard;
use crate::ui::{api, AppContext};
use crate::youtube::Video;

const DEBOUNCE_MS: u64 = 300;
const MIN_QUERY_LEN: usize = 3;
const MAX_RESULTS: usize = 8;

/// Case-insensitive title search over the cached listing.
pub fn filter_videos(videos: &[Video], query: &str) -> Vec<Video> {
    if query.len() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    videos
        .iter()
        .filter(|v| v.snippet.title.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

/// Roster artists whose name contains the query.
pub fn matching_artists(query: &str) -> Vec<&'static str> {
    if query.len() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = query.to_uppercase();
    KNOWN_ARTISTS
        .iter()
        .filter(|name| name.contains(&needle))
        .copied()
        .collect()
}

/// Overlay search across set titles and artists. Escape or the backdrop
/// closes it.
#[component]
pub fn SearchModal(on_close: EventHandler<()>) -> Element {
    let app = use_context::<AppContext>();
    let mut query = use_signal(String::new);
    let mut debounced = use_signal(String::new);

    let base_url = app.config.proxy_base_url();
    let videos = use_resource(move || {
        let base_url = base_url.clone();
        async move { api::fetch_videos(&base_url).await.unwrap_or_default() }
    });

    // Queries settle for a beat before filtering runs; a stale timer
    // whose query no longer matches does nothing.
    use_effect(move || {
        let q = query();
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)).await;
            if *query.peek() == q {
                debounced.set(q);
            }
        });
    });

    let loaded = videos.read().clone().unwrap_or_default();
    let q = debounced();
    let hits = filter_videos(&loaded, &q);
    let artists = matching_artists(&q);

    rsx! {
        div {
            class: "search-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "search-modal",
                onclick: move |e| e.stop_propagation(),
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Search sets and artists...",
                    autofocus: true,
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Escape {
                            on_close.call(());
                        }
                    },
                }
                if !artists.is_empty() {
                    div { class: "search-artists",
                        for artist in artists {
                            span { class: "search-artist-chip", "{artist}" }
                        }
                    }
                }
                if !hits.is_empty() {
                    div { class: "search-results",
                        for video in hits.iter() {
                            div {
                                key: "{video.id.video_id}",
                                onclick: move |_| on_close.call(()),
                                VideoCard { video: video.clone() }
                            }
                        }
                    }
                } else if q.len() >= MIN_QUERY_LEN {
                    p { class: "search-empty", "No sets match \"{q}\"." }
                }
            }
        }
    }
}
