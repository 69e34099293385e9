use dioxus::prelude::*;

const LINKTREE_URL: &str = "https://linktr.ee/afterglow.sets";

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "static-page about-page",
            h1 { class: "page-heading", "About" }
            p {
                "afterglow is a Limassol based collective recording and releasing "
                "full length DJ sets from our residents and guests. Everything we "
                "film ends up here and on the channel, free to watch."
            }
            p {
                "Catch us most weeks at Mason Bar, or follow the calendar for "
                "one-off nights around the island."
            }
            div { class: "about-cards",
                a {
                    class: "about-card",
                    href: "https://maps.google.com/?q=Mason+Bar+Limassol",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    h3 { "Mason Bar" }
                    p { "Home venue, Limassol" }
                }
                a {
                    class: "about-card",
                    href: "https://www.instagram.com/afterglow.sets",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    h3 { "Instagram" }
                    p { "Photos, announcements, stories" }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        div { class: "static-page contact-page",
            h1 { class: "page-heading", "Contact" }
            p { "Bookings, press and anything else:" }
            a { class: "contact-link", href: "mailto:mgmt@afterglow.sets", "mgmt@afterglow.sets" }
            a {
                class: "contact-link",
                href: "https://www.instagram.com/afterglow.sets",
                target: "_blank",
                rel: "noopener noreferrer",
                "@afterglow.sets"
            }
        }
    }
}

/// All external profiles live on one linktree; this page just points
/// there.
#[component]
pub fn Social() -> Element {
    rsx! {
        div { class: "static-page social-page",
            h1 { class: "page-heading", "Social" }
            p { "All of our links in one place:" }
            a {
                class: "social-link",
                href: LINKTREE_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "{LINKTREE_URL}"
            }
        }
    }
}
