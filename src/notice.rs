//! Transient user-facing notifications
//!
//! Screen operations return outcome values; this module turns them into the
//! messages the user sees. Nothing here touches state.

use iconic_membership::UpgradeOutcome;
use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::screen::JoinOutcome;

#[derive(Display, AsRefStr, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn for_join(outcome: &JoinOutcome) -> Option<Self> {
        match outcome {
            JoinOutcome::Joined(_) => Some(Self::success("You are registered for the event!")),
            JoinOutcome::Failed(..) => Some(Self::error(
                "Could not register for the event. Please try again.",
            )),
            JoinOutcome::UpgradePrompted(_)
            | JoinOutcome::AlreadyJoined(_)
            | JoinOutcome::UnknownEvent(_) => None,
        }
    }

    pub fn for_upgrade(outcome: &UpgradeOutcome) -> Self {
        match outcome {
            UpgradeOutcome::Upgraded { .. } => Self::success("You are now ICONIC!"),
            UpgradeOutcome::Refused { .. } => Self::info("Could not become ICONIC."),
            UpgradeOutcome::PaymentFailed(_) | UpgradeOutcome::ConfirmationFailed(_) => {
                Self::error("Error processing the ICONIC payment.")
            }
            UpgradeOutcome::WalletConnectRequested => {
                Self::info("Connect your wallet, then try again.")
            }
            UpgradeOutcome::WalletUnavailable(_) => Self::error("Could not connect your wallet."),
            UpgradeOutcome::Unauthenticated => Self::error("Sign in to become ICONIC."),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}
