use serde::{Deserialize, Serialize};

/// Lifecycle stage a transaction moves its trade through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Insert,
    Update,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

/// A single versioned trade-lifecycle event. Immutable once ingested.
///
/// `version` claims to advance the trade identified by `trade_id`;
/// `transaction_id` only identifies the ingestion event itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: u64,
    pub trade_id: u64,
    pub version: u32,
    pub security_code: String,
    pub quantity: u64,
    pub action: Action,
    pub side: Side,
}

impl Transaction {
    pub fn new(
        transaction_id: u64,
        trade_id: u64,
        version: u32,
        security_code: impl Into<String>,
        quantity: u64,
        action: Action,
        side: Side,
    ) -> Self {
        Self {
            transaction_id,
            trade_id,
            version,
            security_code: security_code.into(),
            quantity,
            action,
            side,
        }
    }
}
