use iconic_shared::{Event, TicketingApi, ViewTab};

use crate::normalize;

/// Reads the collection behind `tab` and normalizes it.
///
/// Fails soft: any transport or server error yields an empty collection.
pub async fn fetch_events<A: TicketingApi + ?Sized>(
    api: &A,
    tab: ViewTab,
    token: Option<&str>,
) -> Vec<Event> {
    match api.list_events(tab, token).await {
        Ok(raw) => {
            let events = normalize(tab, &raw);
            tracing::debug!(%tab, count = events.len(), "Events fetched");
            events
        }
        Err(err) => {
            tracing::warn!(%tab, error = %err, "Event fetch failed, showing an empty collection");
            Vec::new()
        }
    }
}
