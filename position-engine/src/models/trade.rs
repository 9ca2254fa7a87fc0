use super::transaction::{Side, Transaction};
use serde::{Deserialize, Serialize};

/// Current state of one trade lineage, rebuilt from its transactions.
///
/// Cancellation is soft: the economic fields keep their last pre-cancel
/// values for reporting, but the trade stops contributing to positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub trade_id: u64,
    pub current_version: u32,
    pub security_code: String,
    pub quantity: u64,
    pub side: Side,
    pub is_cancelled: bool,
}

impl Trade {
    /// Builds the live trade an INSERT establishes.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            trade_id: tx.trade_id,
            current_version: tx.version,
            security_code: tx.security_code.clone(),
            quantity: tx.quantity,
            side: tx.side,
            is_cancelled: false,
        }
    }

    /// Signed quantity this trade currently contributes to its security.
    /// Zero once cancelled.
    pub fn impact(&self) -> i64 {
        if self.is_cancelled {
            return 0;
        }
        match self.side {
            Side::Buy => self.quantity as i64,
            Side::Sell => -(self.quantity as i64),
        }
    }
}
