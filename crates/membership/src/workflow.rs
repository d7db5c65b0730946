use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use iconic_shared::{Error, Session, TicketingApi, TransactionId};
use strum::{AsRefStr, Display};

use crate::{Fee, Wallet};

#[derive(Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpgradeState {
    #[default]
    Idle,
    WalletConnecting,
    Paying,
    Confirming,
    Success,
    Blocked,
    Failed,
}

/// Result of one upgrade attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// No wallet was connected; connecting was requested and nothing was paid.
    WalletConnectRequested,
    /// The wallet could not even start connecting.
    WalletUnavailable(String),
    /// No signed-in user to upgrade.
    Unauthenticated,
    Upgraded { transaction_id: TransactionId },
    Refused { transaction_id: TransactionId },
    PaymentFailed(String),
    ConfirmationFailed(String),
}

impl UpgradeOutcome {
    pub fn is_upgraded(&self) -> bool {
        matches!(self, UpgradeOutcome::Upgraded { .. })
    }
}

/// Read-only view of the workflow's `waiting` flag.
#[derive(Debug, Clone, Default)]
pub struct WaitingFlag(Arc<AtomicBool>);

impl WaitingFlag {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Holds `waiting` up for as long as it lives, including when the attempt is
/// dropped halfway.
struct WaitingGuard(Arc<AtomicBool>);

impl WaitingGuard {
    fn raise(flag: Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for WaitingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Become-ICONIC flow: wallet connect, fee payment, server confirmation.
///
/// Each call to [`UpgradeWorkflow::run`] is one round triggered by the user.
/// Rounds cannot overlap since `run` borrows the workflow mutably; a UI that
/// must disable its trigger meanwhile reads [`UpgradeWorkflow::waiting_flag`].
/// A round that has to connect the wallet stops there; the user triggers
/// again once connected.
#[derive(Debug, Default)]
pub struct UpgradeWorkflow {
    fee: Fee,
    state: UpgradeState,
    waiting: Arc<AtomicBool>,
}

impl UpgradeWorkflow {
    pub fn new(fee: Fee) -> Self {
        Self {
            fee,
            ..Default::default()
        }
    }

    pub fn fee(&self) -> Fee {
        self.fee
    }

    pub fn state(&self) -> UpgradeState {
        self.state
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting.load(Ordering::Acquire)
    }

    pub fn waiting_flag(&self) -> WaitingFlag {
        WaitingFlag(self.waiting.clone())
    }

    fn transition(&mut self, state: UpgradeState) {
        tracing::debug!(from = %self.state, to = %state, "Upgrade state change");
        self.state = state;
    }

    /// Failures are transient: the workflow is ready for another round.
    fn fail(&mut self) {
        self.transition(UpgradeState::Failed);
        self.transition(UpgradeState::Idle);
    }

    pub async fn run<A, W>(
        &mut self,
        api: &A,
        wallet: &W,
        session: Option<&Session>,
    ) -> UpgradeOutcome
    where
        A: TicketingApi + ?Sized,
        W: Wallet + ?Sized,
    {
        self.transition(UpgradeState::Idle);

        if !wallet.is_connected() {
            self.transition(UpgradeState::WalletConnecting);

            return match wallet.connect().await {
                Ok(()) => UpgradeOutcome::WalletConnectRequested,
                Err(err) => {
                    tracing::warn!(error = %err, "Wallet connect failed");
                    self.transition(UpgradeState::Idle);
                    UpgradeOutcome::WalletUnavailable(err.to_string())
                }
            };
        }

        let Some(session) = session else {
            tracing::warn!("Upgrade requested without a session");
            return UpgradeOutcome::Unauthenticated;
        };

        let _waiting = WaitingGuard::raise(self.waiting.clone());

        self.transition(UpgradeState::Paying);
        let transaction_id = match wallet.pay_fee(self.fee).await {
            Ok(transaction_id) => transaction_id,
            Err(err) => {
                tracing::warn!(user_id = %session.user_id, error = %err, "ICONIC fee payment failed");
                self.fail();
                return UpgradeOutcome::PaymentFailed(err.to_string());
            }
        };

        self.transition(UpgradeState::Confirming);
        match api
            .upgrade_to_iconic(&session.user_id, &session.token, &transaction_id)
            .await
        {
            Ok(()) => {
                tracing::info!(user_id = %session.user_id, %transaction_id, "User upgraded to ICONIC");
                self.transition(UpgradeState::Success);
                UpgradeOutcome::Upgraded { transaction_id }
            }
            Err(Error::Forbidden) => {
                tracing::info!(user_id = %session.user_id, %transaction_id, "ICONIC upgrade refused");
                self.transition(UpgradeState::Blocked);
                UpgradeOutcome::Refused { transaction_id }
            }
            Err(err) => {
                tracing::error!(user_id = %session.user_id, %transaction_id, error = %err, "ICONIC confirmation failed");
                self.fail();
                UpgradeOutcome::ConfirmationFailed(err.to_string())
            }
        }
    }
}
