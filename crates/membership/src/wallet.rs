use std::sync::Arc;

use async_trait::async_trait;
use iconic_shared::TransactionId;

use crate::Fee;

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("payment rejected by the user")]
    Rejected,

    #[error("wallet not connected")]
    NotConnected,

    #[error("{0}")]
    Failure(String),
}

/// Wallet provider capability.
#[async_trait]
pub trait Wallet: Send + Sync {
    fn is_connected(&self) -> bool;

    /// Asks the user to connect a wallet. Completion is observed through
    /// [`Wallet::is_connected`] on a later call, not awaited here.
    async fn connect(&self) -> Result<(), WalletError>;

    async fn pay_fee(&self, amount: Fee) -> Result<TransactionId, WalletError>;
}

#[async_trait]
impl<T: Wallet + ?Sized> Wallet for Arc<T> {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    async fn connect(&self) -> Result<(), WalletError> {
        (**self).connect().await
    }

    async fn pay_fee(&self, amount: Fee) -> Result<TransactionId, WalletError> {
        (**self).pay_fee(amount).await
    }
}

/// Wallet whose payment was signed out of band.
///
/// Connected only when a transaction id was supplied; paying hands that id
/// back without touching the chain.
#[derive(Debug, Clone, Default)]
pub struct PresignedWallet {
    transaction_id: Option<TransactionId>,
}

impl PresignedWallet {
    pub fn new(transaction_id: Option<TransactionId>) -> Self {
        Self { transaction_id }
    }
}

#[async_trait]
impl Wallet for PresignedWallet {
    fn is_connected(&self) -> bool {
        self.transaction_id.is_some()
    }

    async fn connect(&self) -> Result<(), WalletError> {
        tracing::info!("Sign the ICONIC fee payment in your wallet and pass its transaction id");
        Ok(())
    }

    async fn pay_fee(&self, amount: Fee) -> Result<TransactionId, WalletError> {
        let transaction_id = self
            .transaction_id
            .clone()
            .ok_or(WalletError::NotConnected)?;

        tracing::debug!(%amount, %transaction_id, "Using presigned payment");

        Ok(transaction_id)
    }
}
