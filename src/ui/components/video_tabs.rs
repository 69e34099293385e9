use dioxus::prelude::*;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::ui::components::{Artists, VideoCard};
use crate::youtube::Video;

/// Residents and regular guests, as credited in set titles. Parsing only
/// surfaces names from this roster so stray title text never becomes an
/// artist page.
pub const KNOWN_ARTISTS: &[&str] = &[
    "AGNES",
    "AXEL",
    "5OFFER",
    "OR NAGAR",
    "HAREL MOR",
    "PAZZI",
    "PAN.",
    "CHRIS BODNAR",
    "MIRONAS",
    "CHARKOAL",
    "DALTON",
    "GIO",
    "MADIMIEL",
    "DOX",
    "STÃSIA",
    "BAROQUE",
    "IVORY",
    "JIGSAW",
    "HLEB",
    "SHAYAN",
    "ADJK",
];

fn split_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s*(?:B2B|\s+X\s+|,|&|\+)\s*").unwrap())
}

fn bracket_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(.*?\)|\[.*?\]").unwrap())
}

/// Artist credit portion of a title: everything before the venue (`@`),
/// a pipe, or a trailing comma clause, uppercased.
pub fn clean_artist_name(title: &str) -> String {
    title
        .split(['@', '|', ','])
        .next()
        .unwrap_or(title)
        .trim()
        .to_uppercase()
}

/// All roster artists credited in a title. The full title splits on the
/// billing separators first, then each fragment is cleaned, so a comma
/// billing like "AGNES, AXEL @ Mason Bar" credits both names. Unknown
/// names are dropped.
pub fn parse_artists(title: &str) -> Vec<String> {
    let credit = title.to_uppercase();
    let credit = bracket_pattern().replace_all(&credit, "");
    let credit = credit.replace("AFTERGLOW", "");

    split_pattern()
        .split(&credit)
        .map(clean_artist_name)
        .filter(|name| KNOWN_ARTISTS.contains(&name.as_str()))
        .collect()
}

/// Group videos by credited artist, alphabetically.
pub fn collect_artists(videos: &[Video]) -> BTreeMap<String, Vec<Video>> {
    let mut grouped: BTreeMap<String, Vec<Video>> = BTreeMap::new();
    for video in videos {
        for artist in parse_artists(&video.snippet.title) {
            grouped.entry(artist).or_default().push(video.clone());
        }
    }
    grouped
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    RecentSets,
    Artists,
}

/// Tabbed video browser: a reverse-chronological grid of sets, and the
/// same videos regrouped per artist.
#[component]
pub fn VideoTabs(videos: Vec<Video>) -> Element {
    let mut tab = use_signal(|| Tab::RecentSets);

    let tab_class = |t: Tab| {
        if tab() == t {
            "tab active"
        } else {
            "tab"
        }
    };

    let panel = match tab() {
        Tab::RecentSets => rsx! {
            div { class: "video-grid",
                for video in videos.iter() {
                    VideoCard { key: "{video.id.video_id}", video: video.clone() }
                }
            }
        },
        Tab::Artists => rsx! {
            Artists { videos: videos.clone() }
        },
    };

    rsx! {
        div { class: "video-tabs",
            div { class: "tab-bar",
                button {
                    class: tab_class(Tab::RecentSets),
                    onclick: move |_| tab.set(Tab::RecentSets),
                    "Recent Sets"
                }
                button {
                    class: tab_class(Tab::Artists),
                    onclick: move |_| tab.set(Tab::Artists),
                    "Artists"
                }
            }
            {panel}
        }
    }
}
