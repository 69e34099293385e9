use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;
use crate::ui::{AppContext, VideoContextProvider};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/library")]
    LibraryPage {},
    #[route("/calendar")]
    CalendarPage {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/social")]
    Social {},
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("afterglow")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}

#[component]
pub fn App() -> Element {
    let app = use_context::<AppContext>();

    // A refresh can leave stale entries behind; start from a clean slate
    // and stop everything again when the app tears down.
    use_hook({
        let registry = app.registry.clone();
        move || registry.cleanup_all_players()
    });
    use_drop({
        let registry = app.registry.clone();
        move || registry.cleanup_all_players()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        VideoContextProvider {
            Router::<Route> {}
        }
    }
}
