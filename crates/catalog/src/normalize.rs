use iconic_shared::{Event, RawEvent, ViewTab};

/// Settles the participation flag of every event fetched for `tab`.
///
/// Anything listed under `my-tickets` is a participation by definition; the
/// recommended list keeps the server flag and reads a missing one as `false`.
pub fn normalize(tab: ViewTab, raw: &[RawEvent]) -> Vec<Event> {
    raw.iter().map(|event| normalize_one(tab, event)).collect()
}

pub fn normalize_one(tab: ViewTab, raw: &RawEvent) -> Event {
    let is_participating = match tab {
        ViewTab::MyTickets => true,
        ViewTab::Events => raw.is_participating.unwrap_or(false),
    };

    Event {
        id: raw.id.clone(),
        is_exclusive: raw.is_exclusive.unwrap_or(false),
        is_participating,
        details: raw.details.clone(),
    }
}
