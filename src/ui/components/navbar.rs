use dioxus::prelude::*;

use crate::ui::components::{FloatingPlayer, MainVideoPlayer, SearchModal};
use crate::ui::{use_video, Route};

/// Shared chrome for every page: header with navigation and search, the
/// docked hero player, the routed page body, and the floating widget.
#[component]
pub fn Navbar() -> Element {
    let mut video = use_video();
    let mut search_open = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    let is_home = matches!(use_route::<Route>(), Route::Home {});

    // The context tracks which page we are on so the floating widget can
    // decide whether to show itself.
    use_effect(use_reactive!(|(is_home,)| {
        video.sync_route(is_home);
    }));

    rsx! {
        header { class: "site-header",
            Link { class: "brand", to: Route::Home {}, "afterglow" }
            nav { class: "site-nav",
                Link { to: Route::LibraryPage {}, "Library" }
                Link { to: Route::CalendarPage {}, "Calendar" }
                Link { to: Route::Social {}, "Social" }
                Link { to: Route::About {}, "About" }
                Link { to: Route::Contact {}, "Contact" }
                button {
                    class: "search-trigger",
                    aria_label: "Search",
                    onclick: move |_| search_open.set(true),
                    "Search"
                }
                button {
                    class: "menu-trigger",
                    aria_label: "Menu",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "☰"
                }
            }
        }
        if menu_open() {
            nav { class: "mobile-menu",
                Link { onclick: move |_| menu_open.set(false), to: Route::LibraryPage {}, "Library" }
                Link { onclick: move |_| menu_open.set(false), to: Route::CalendarPage {}, "Calendar" }
                Link { onclick: move |_| menu_open.set(false), to: Route::Social {}, "Social" }
                Link { onclick: move |_| menu_open.set(false), to: Route::About {}, "About" }
                Link { onclick: move |_| menu_open.set(false), to: Route::Contact {}, "Contact" }
            }
        }
        if search_open() {
            SearchModal { on_close: move |_| search_open.set(false) }
        }

        MainVideoPlayer {}

        main { class: "page-body",
            Outlet::<Route> {}
        }

        FloatingPlayer {}
    }
}
