//! Access policy for joining events
//!
//! Exclusive events are visible to everyone but only ICONIC members may join
//! them. Nobody joins an event twice.

use iconic_shared::Event;
use strum::{AsRefStr, Display};

/// Whether the user may join `event` right now
///
/// `(is_iconic || !is_exclusive) && !is_participating`
pub fn can_join(event: &Event, user_is_iconic: bool) -> bool {
    (user_is_iconic || !event.is_exclusive) && !event.is_participating
}

/// What a join click on an event leads to
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum JoinDecision {
    /// Run the join command
    Join,
    /// Exclusive event, user not ICONIC: offer the upgrade
    Upgrade,
    /// Already registered, nothing to do
    AlreadyJoined,
}

/// Re-derives the reason behind [`can_join`] from the same three inputs
pub fn decide(event: &Event, user_is_iconic: bool) -> JoinDecision {
    if event.is_participating {
        JoinDecision::AlreadyJoined
    } else if can_join(event, user_is_iconic) {
        JoinDecision::Join
    } else {
        JoinDecision::Upgrade
    }
}
