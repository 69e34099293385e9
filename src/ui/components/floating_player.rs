use dioxus::prelude::*;

use crate::ui::components::youtube_player::YouTubePlayer;
use crate::ui::{use_video, AppContext, Route};

/// Cross-page "now playing" widget. Hidden on the home page where the
/// hero player owns the selection; elsewhere it keeps the set going and
/// offers a way back, a minimize toggle, and a dismiss.
#[component]
pub fn FloatingPlayer() -> Element {
    let app = use_context::<AppContext>();
    let video = use_video();
    let navigator = use_navigator();

    if !video.is_floating() {
        return rsx! {};
    }

    let minimized = video.is_minimized();
    let frame_class = if minimized {
        "floating-player minimized"
    } else {
        "floating-player"
    };

    rsx! {
        div { class: "{frame_class}",
            div { class: "floating-player-bar",
                span { class: "floating-player-label", "Now Playing" }
                div { class: "floating-player-controls",
                    button {
                        aria_label: "Back to home",
                        onclick: move |_| {
                            navigator.push(Route::Home {});
                        },
                        "⌂"
                    }
                    button {
                        aria_label: if minimized { "Expand player" } else { "Minimize player" },
                        onclick: {
                            let mut video = video.clone();
                            move |_| video.toggle_minimized()
                        },
                        if minimized { "▲" } else { "▼" }
                    }
                    button {
                        aria_label: "Close player",
                        onclick: {
                            let registry = app.registry.clone();
                            let mut video = video.clone();
                            move |_| {
                                registry.pause_player("floating");
                                video.reset_video();
                            }
                        },
                        "✕"
                    }
                }
            }
            if !minimized {
                div { class: "floating-player-frame",
                    YouTubePlayer { player_id: "floating" }
                }
            }
        }
    }
}
