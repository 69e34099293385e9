use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;

/// One calendar entry. `lineup` stays `None` until the billing is
/// announced; weekly residencies never age into the past list.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub location: &'static str,
    pub location_url: &'static str,
    pub lineup: Option<&'static str>,
    pub rsvp_url: Option<&'static str>,
    pub is_weekly: bool,
}

const MASON_BAR: &str = "Mason Bar, Limassol";
const MASON_BAR_MAPS: &str = "https://maps.google.com/?q=Mason+Bar+Limassol";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "weekly-groove-affair",
            title: "Weekly Groove Affair",
            date: date(2025, 3, 6),
            time: "21:00",
            location: MASON_BAR,
            location_url: MASON_BAR_MAPS,
            lineup: Some("Rotating residents"),
            rsvp_url: None,
            is_weekly: true,
        },
        Event {
            id: "late-night-electric",
            title: "Late Night Electric x afterglow",
            date: date(2025, 4, 18),
            time: "23:00",
            location: MASON_BAR,
            location_url: MASON_BAR_MAPS,
            lineup: Some("AGNES / AXEL / PAZZI"),
            rsvp_url: Some("https://www.instagram.com/afterglow.sets"),
            is_weekly: false,
        },
        Event {
            id: "rooftop-sessions",
            title: "Rooftop Sessions",
            date: date(2025, 6, 21),
            time: "18:00",
            location: MASON_BAR,
            location_url: MASON_BAR_MAPS,
            lineup: None,
            rsvp_url: None,
            is_weekly: false,
        },
    ]
}

/// Split into upcoming (today or later, plus weeklies) and past, both
/// soonest-first.
pub fn split_events(events: Vec<Event>, today: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) = events
        .into_iter()
        .partition(|e| e.is_weekly || e.date >= today);
    upcoming.sort_by_key(|e| e.date);
    past.sort_by_key(|e| std::cmp::Reverse(e.date));
    (upcoming, past)
}

#[component]
pub fn CalendarPage() -> Element {
    let today = Utc::now().date_naive();
    let (upcoming, past) = split_events(events(), today);

    rsx! {
        div { class: "calendar-page",
            h1 { class: "page-heading", "Calendar" }
            section { class: "event-section",
                h2 { "Upcoming" }
                if upcoming.is_empty() {
                    p { class: "alert", "No upcoming events announced yet." }
                }
                for event in upcoming.iter() {
                    EventCard { key: "{event.id}", event: event.clone() }
                }
            }
            if !past.is_empty() {
                section { class: "event-section past",
                    h2 { "Past" }
                    for event in past.iter() {
                        EventCard { key: "{event.id}", event: event.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn EventCard(event: Event) -> Element {
    let lineup = event.lineup.unwrap_or("TO BE ANNOUNCED");
    let date_label = event.date.format("%b %-d, %Y").to_string();

    rsx! {
        article { class: "event-card",
            div { class: "event-card-header",
                h3 { class: "event-title", "{event.title}" }
                if event.is_weekly {
                    span { class: "event-weekly-badge", "Weekly" }
                }
            }
            dl { class: "event-details",
                dt { "Time" }
                dd { "{date_label} · {event.time}" }
                dt { "Location" }
                dd {
                    a {
                        href: "{event.location_url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{event.location}"
                    }
                }
                dt { "Lineup" }
                dd { "{lineup}" }
            }
            if let Some(rsvp) = event.rsvp_url {
                a {
                    class: "event-rsvp",
                    href: "{rsvp}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "RSVP"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &'static str, d: NaiveDate, weekly: bool) -> Event {
        Event {
            id,
            title: "Test Night",
            date: d,
            time: "21:00",
            location: MASON_BAR,
            location_url: MASON_BAR_MAPS,
            lineup: None,
            rsvp_url: None,
            is_weekly: weekly,
        }
    }

    #[test]
    fn past_events_move_behind_today() {
        let today = date(2025, 5, 1);
        let (upcoming, past) = split_events(
            vec![
                event("old", date(2025, 3, 6), false),
                event("new", date(2025, 6, 21), false),
            ],
            today,
        );
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "new");
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].id, "old");
    }

    #[test]
    fn weekly_events_never_expire() {
        let today = date(2026, 1, 1);
        let (upcoming, past) =
            split_events(vec![event("weekly", date(2025, 3, 6), true)], today);
        assert_eq!(upcoming.len(), 1);
        assert!(past.is_empty());
    }

    #[test]
    fn today_counts_as_upcoming() {
        let today = date(2025, 6, 21);
        let (upcoming, past) =
            split_events(vec![event("today", date(2025, 6, 21), false)], today);
        assert_eq!(upcoming.len(), 1);
        assert!(past.is_empty());
    }
}
