use dioxus::prelude::*;

use crate::ui::components::VideoTabs;
use crate::ui::{api, AppContext};

/// Full-library page wrapper around the shared video browser.
#[component]
pub fn LibraryPage() -> Element {
    rsx! {
        div { class: "library-page",
            h1 { class: "page-heading", "Full Library" }
            Library {}
        }
    }
}

#[component]
pub fn Library() -> Element {
    let app = use_context::<AppContext>();

    let base_url = app.config.proxy_base_url();
    let videos = use_resource(move || {
        let base_url = base_url.clone();
        async move { api::fetch_videos(&base_url).await }
    });

    let rendered = match &*videos.read() {
        None => rsx! {
            div { class: "loading-spinner", aria_label: "Loading library" }
        },
        Some(Err(e)) => rsx! {
            div { class: "alert alert-error", "Failed to load the library: {e}" }
        },
        Some(Ok(videos)) if videos.is_empty() => rsx! {
            div { class: "alert", "The library is empty right now." }
        },
        Some(Ok(videos)) => rsx! {
            VideoTabs { videos: videos.clone() }
        },
    };
    rendered
}
