use dioxus::prelude::*;

use crate::ui::components::VideoTabs;
use crate::ui::{api, AppContext};

/// Home page: the channel's recent sets under the hero player.
#[component]
pub fn Home() -> Element {
    let app = use_context::<AppContext>();

    let base_url = app.config.proxy_base_url();
    let videos = use_resource(move || {
        let base_url = base_url.clone();
        async move { api::fetch_videos(&base_url).await }
    });

    let body = match &*videos.read() {
        None => rsx! {
            div { class: "loading-spinner", aria_label: "Loading videos" }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Failed to load videos: {e}" }
        },
        Some(Ok(videos)) if videos.is_empty() => rsx! {
            div { class: "alert", "No videos available right now. Check back soon." }
        },
        Some(Ok(videos)) => rsx! {
            VideoTabs { videos: videos.clone() }
        },
    };

    rsx! {
        div { class: "home-page",
            {body}
        }
    }
}
