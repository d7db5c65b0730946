use std::fmt;

use serde::{Deserialize, Serialize};

pub const MIST_PER_SUI: u64 = 1_000_000_000;

/// Amount of the chain's native currency, counted in MIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fee {
    mist: u64,
}

impl Fee {
    /// Price of the ICONIC upgrade: 0.1 SUI.
    pub const ICONIC: Fee = Fee::from_mist(100_000_000);

    pub const fn from_mist(mist: u64) -> Self {
        Self { mist }
    }

    pub fn mist(&self) -> u64 {
        self.mist
    }
}

impl Default for Fee {
    fn default() -> Self {
        Self::ICONIC
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.mist / MIST_PER_SUI;
        let fraction = self.mist % MIST_PER_SUI;

        if fraction == 0 {
            return write!(f, "{whole} SUI");
        }

        let fraction = format!("{fraction:09}");
        write!(f, "{whole}.{} SUI", fraction.trim_end_matches('0'))
    }
}
