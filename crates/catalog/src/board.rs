use std::collections::HashSet;

use iconic_shared::{Event, EventId, ViewTab};

/// Returns `events` with the matching event marked as participating.
pub fn apply_join(events: &[Event], id: &EventId) -> Vec<Event> {
    events
        .iter()
        .map(|event| {
            if &event.id == id {
                Event {
                    is_participating: true,
                    ..event.clone()
                }
            } else {
                event.clone()
            }
        })
        .collect()
}

/// Handle for one fetch issued by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub tab: ViewTab,
    pub generation: u64,
}

/// Event collection displayed by the active screen.
///
/// Every tab selection bumps the generation; a fetch result is applied only
/// when its ticket carries the current generation, so a slow response for a
/// tab the user already left is dropped. Joins confirmed during the session
/// are replayed onto every applied result and are never undone.
#[derive(Debug, Default)]
pub struct EventBoard {
    tab: ViewTab,
    generation: u64,
    events: Vec<Event>,
    loading: bool,
    joined: HashSet<EventId>,
}

impl EventBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> ViewTab {
        self.tab
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin(&mut self, tab: ViewTab) -> FetchTicket {
        self.generation += 1;
        self.tab = tab;
        self.loading = true;

        FetchTicket {
            tab,
            generation: self.generation,
        }
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale.
    pub fn complete(&mut self, ticket: FetchTicket, events: Vec<Event>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                tab = %ticket.tab,
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale event fetch"
            );
            return false;
        }

        self.events = self
            .joined
            .iter()
            .fold(events, |events, id| apply_join(&events, id));
        self.loading = false;

        true
    }

    /// Marks `id` as participating. Returns `false` if the event is not displayed.
    pub fn apply_join(&mut self, id: &EventId) -> bool {
        self.joined.insert(id.clone());

        if self.get(id).is_none() {
            return false;
        }

        self.events = apply_join(&self.events, id);
        true
    }
}
