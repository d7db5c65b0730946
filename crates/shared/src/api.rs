use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{EventId, ParticipationStatus, RawEvent, Result, ViewTab};

/// On-chain transaction identifier returned by a wallet payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Body of a participation-creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewParticipation {
    pub event_id: EventId,
    pub status: ParticipationStatus,
}

impl NewParticipation {
    pub fn confirmed(event_id: EventId) -> Self {
        Self {
            event_id,
            status: ParticipationStatus::Confirmed,
        }
    }
}

/// Remote ticketing service.
///
/// Reads return server-shaped events; normalizing them is the caller's job.
#[async_trait]
pub trait TicketingApi: Send + Sync {
    async fn list_events(&self, tab: ViewTab, token: Option<&str>) -> Result<Vec<RawEvent>>;

    async fn create_participation(
        &self,
        participation: &NewParticipation,
        token: Option<&str>,
    ) -> Result<()>;

    /// Asks the server to verify `transaction_id` on chain and upgrade the user.
    ///
    /// A refusal is reported as [`crate::Error::Forbidden`].
    async fn upgrade_to_iconic(
        &self,
        user_id: &str,
        token: &str,
        transaction_id: &TransactionId,
    ) -> Result<()>;
}

#[async_trait]
impl<T: TicketingApi + ?Sized> TicketingApi for Arc<T> {
    async fn list_events(&self, tab: ViewTab, token: Option<&str>) -> Result<Vec<RawEvent>> {
        (**self).list_events(tab, token).await
    }

    async fn create_participation(
        &self,
        participation: &NewParticipation,
        token: Option<&str>,
    ) -> Result<()> {
        (**self).create_participation(participation, token).await
    }

    async fn upgrade_to_iconic(
        &self,
        user_id: &str,
        token: &str,
        transaction_id: &TransactionId,
    ) -> Result<()> {
        (**self)
            .upgrade_to_iconic(user_id, token, transaction_id)
            .await
    }
}
