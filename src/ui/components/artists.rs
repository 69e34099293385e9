use dioxus::prelude::*;

use crate::ui::components::video_tabs::collect_artists;
use crate::ui::components::VideoCard;
use crate::youtube::Video;

/// Directory index: artists bucketed by first letter, A to Z, with a
/// trailing "#" bucket for names that do not start with a letter.
pub fn letter_groups(artists: &[String]) -> Vec<(char, Vec<String>)> {
    let mut lettered: Vec<(char, Vec<String>)> = Vec::new();
    let mut other: Vec<String> = Vec::new();

    for artist in artists {
        let first = artist.chars().next().unwrap_or('#').to_ascii_uppercase();
        if first.is_ascii_alphabetic() {
            match lettered.iter_mut().find(|(l, _)| *l == first) {
                Some((_, names)) => names.push(artist.clone()),
                None => lettered.push((first, vec![artist.clone()])),
            }
        } else {
            other.push(artist.clone());
        }
    }

    lettered.sort_by_key(|(l, _)| *l);
    if !other.is_empty() {
        lettered.push(('#', other));
    }
    lettered
}

/// Artist directory with drill-down into each artist's sets.
#[component]
pub fn Artists(videos: Vec<Video>) -> Element {
    let mut selected = use_signal(|| None::<String>);

    let grouped = collect_artists(&videos);

    if let Some(artist) = selected() {
        let sets = grouped.get(&artist).cloned().unwrap_or_default();
        return rsx! {
            div { class: "artist-detail",
                button {
                    class: "back-link",
                    onclick: move |_| selected.set(None),
                    "← All artists"
                }
                h2 { class: "artist-heading", "{artist}" }
                div { class: "video-grid",
                    for video in sets.iter() {
                        VideoCard { key: "{video.id.video_id}", video: video.clone() }
                    }
                }
            }
        };
    }

    let names: Vec<String> = grouped.keys().cloned().collect();
    let groups = letter_groups(&names);

    rsx! {
        div { class: "artist-index",
            for (letter, artists) in groups {
                section { class: "artist-letter-group",
                    h3 { class: "artist-letter", "{letter}" }
                    ul {
                        for artist in artists {
                            li { key: "{artist}",
                                button {
                                    class: "artist-link",
                                    onclick: {
                                        let artist = artist.clone();
                                        move |_| selected.set(Some(artist.clone()))
                                    },
                                    "{artist}"
                                }
                            }
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
    fn groups_sort_alphabetically_with_hash_last() {
        let names = vec![
            "AXEL".to_string(),
            "AGNES".to_string(),
            "5OFFER".to_string(),
            "PAZZI".to_string(),
        ];
        let groups = letter_groups(&names);
        let letters: Vec<char> = groups.iter().map(|(l, _)| *l).collect();
        assert_eq!(letters, vec!['A', 'P', '#']);
        assert_eq!(groups[0].1, vec!["AXEL", "AGNES"]);
        assert_eq!(groups[2].1, vec!["5OFFER"]);
    }

    #[test]
    fn hash_bucket_is_omitted_when_empty() {
        let names = vec!["AGNES".to_string()];
        let groups = letter_groups(&names);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, 'A');
    }
}
