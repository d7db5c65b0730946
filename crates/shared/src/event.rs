use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Server-assigned event identifier, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(id) => write!(f, "{id}"),
            EventId::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for EventId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(id) => EventId::Number(id),
            Err(_) => EventId::Text(s.to_owned()),
        })
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        EventId::Number(value)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_owned())
    }
}

/// Which event collection the tickets screen shows.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ViewTab {
    #[default]
    Events,
    MyTickets,
}

impl ViewTab {
    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Events => "Recommended Events",
            ViewTab::MyTickets => "My Tickets",
        }
    }

    /// Message shown when the tab's collection is empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ViewTab::Events => "No recommended events at the moment.",
            ViewTab::MyTickets => "You haven't registered for any events yet.",
        }
    }
}

#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    #[default]
    Confirmed,
}

/// Event as the server sends it. Everything beyond the access flags is kept
/// untouched in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: EventId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_exclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_participating: Option<bool>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl RawEvent {
    pub fn new(id: impl Into<EventId>) -> Self {
        Self {
            id: id.into(),
            is_exclusive: None,
            is_participating: None,
            details: Map::new(),
        }
    }

    pub fn exclusive(mut self, is_exclusive: bool) -> Self {
        self.is_exclusive = Some(is_exclusive);
        self
    }

    pub fn participating(mut self, is_participating: bool) -> Self {
        self.is_participating = Some(is_participating);
        self
    }

    pub fn detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// Event with a settled participation flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub is_exclusive: bool,
    pub is_participating: bool,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Event {
    pub fn title(&self) -> Option<&str> {
        ["title", "name"]
            .iter()
            .find_map(|key| self.details.get(*key).and_then(Value::as_str))
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            is_exclusive: Some(event.is_exclusive),
            is_participating: Some(event.is_participating),
            details: event.details,
        }
    }
}
