use crate::player::{surface, IframeSurface, PlayerEvent, PlayerSurface};
use crate::ui::{use_video, AppContext};
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Embed URL for the selected video. `enablejsapi` switches on the
/// message-channel API; autoplay stays off until the user has picked a
/// video, otherwise embeds error out under autoplay policy.
pub fn embed_url(video_id: &str, start_secs: u64, autoplay: bool) -> String {
    format!(
        "https://www.youtube.com/embed/{}?start={}&enablejsapi=1&autoplay={}",
        urlencoding::encode(video_id),
        start_secs,
        u8::from(autoplay),
    )
}

pub fn watch_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        urlencoding::encode(video_id)
    )
}

/// Forwards embed messages arriving on the window into the component.
/// Handlers are kept in a registry keyed by element id so a remount
/// replaces its old handler instead of stacking another one.
fn listener_js(element_id: &str) -> String {
    let key = serde_json::to_string(element_id).unwrap_or_default();
    format!(
        r#"
if (window.__playerListeners === undefined) {{ window.__playerListeners = {{}}; }}
const key = {key};
if (window.__playerListeners[key]) {{
  window.removeEventListener("message", window.__playerListeners[key]);
}}
const handler = (event) => {{
  if (typeof event.data === "string") {{
    dioxus.send(event.data);
  }}
}};
window.__playerListeners[key] = handler;
window.addEventListener("message", handler);
"#
    )
}

/// Detaches the message handler installed by [`listener_js`].
fn listener_cleanup_js(element_id: &str) -> String {
    let key = serde_json::to_string(element_id).unwrap_or_default();
    format!(
        r#"
const key = {key};
if (window.__playerListeners && window.__playerListeners[key]) {{
  window.removeEventListener("message", window.__playerListeners[key]);
  delete window.__playerListeners[key];
}}
"#
    )
}

/// One embedded player surface. `player_id` is the logical slot name:
/// "main" for the homepage docked player, "floating" for the cross-page
/// widget.
#[component]
pub fn YouTubePlayer(player_id: String) -> Element {
    let app = use_context::<AppContext>();
    let video = use_video();
    let mut load_error = use_signal(|| false);

    let element_id = use_hook(|| format!("yt-player-{}", player_id));

    // The iframe reloads whenever its src changes, so the src must only
    // change when the selection does. The start offset is the estimate
    // taken at that moment; per-second position updates are read with
    // peek and do not re-render this memo.
    let src = use_memo({
        let video = video.clone();
        move || {
            let id = video.video_id();
            let autoplay = video.has_user_interacted();
            embed_url(&id, video.estimated_start_secs(), autoplay)
        }
    });

    // Register with the registry on mount and whenever the selection
    // swaps the embed out; the registry pauses whichever player was
    // active before us.
    use_effect({
        let registry = app.registry.clone();
        let video = video.clone();
        let player_id = player_id.clone();
        let element_id = element_id.clone();
        move || {
            let _selected = video.video_id();
            registry.register_player(
                &player_id,
                Arc::new(IframeSurface::new(element_id.clone())),
            );
        }
    });

    // Unmount tears down both sides: the registry entry and the window
    // message handler installed below.
    use_drop({
        let registry = app.registry.clone();
        let player_id = player_id.clone();
        let element_id = element_id.clone();
        move || {
            registry.remove_player(&player_id);
            dioxus::document::eval(&listener_cleanup_js(&element_id));
        }
    });

    // Inbound telemetry. The embed replies to getCurrentTime polls with
    // onCurrentTime events; this listener is the only writer of the
    // context's position and the registry's telemetry.
    use_future({
        let registry = app.registry.clone();
        let video = video.clone();
        let player_id = player_id.clone();
        let element_id = element_id.clone();
        move || {
            let registry = registry.clone();
            let mut video = video.clone();
            let player_id = player_id.clone();
            let element_id = element_id.clone();
            async move {
                let mut channel = dioxus::document::eval(&listener_js(&element_id));
                loop {
                    match channel.recv::<String>().await {
                        Ok(payload) => match PlayerEvent::parse(&payload) {
                            Some(PlayerEvent::StateChange { playing }) => {
                                video.set_is_playing(playing);
                                registry.update_player_state(&player_id, playing);
                            }
                            Some(PlayerEvent::CurrentTime { time }) => {
                                video.set_current_time(time);
                                registry.update_player_time(&player_id, time);
                            }
                            // Not a player message, ignore.
                            None => {}
                        },
                        Err(_) => break,
                    }
                }
                debug!("Player {}: message channel closed", player_id);
            }
        }
    });

    // Outbound 1-second position poll driving the replies above. The
    // task is scoped to this component and cancelled on unmount.
    use_future({
        let element_id = element_id.clone();
        move || {
            let surface = IframeSurface::new(element_id.clone());
            async move {
                loop {
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    if let Err(e) = surface.post_message(&surface::current_time_query()) {
                        debug!("Position poll failed: {}", e);
                    }
                }
            }
        }
    });

    if load_error() {
        let video_id = video.video_id();
        return rsx! {
            div { class: "player-error",
                p { class: "player-error-title", "Error" }
                p { "The video could not be loaded. Please try watching it directly on YouTube." }
                a {
                    href: watch_url(&video_id),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Watch on YouTube"
                }
            }
        };
    }

    rsx! {
        iframe {
            id: "{element_id}",
            class: "video-frame",
            width: "100%",
            height: "100%",
            src: "{src}",
            title: "YouTube video player",
            allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
            allowfullscreen: true,
            onerror: move |_| load_error.set(true),
        }
    }
}
