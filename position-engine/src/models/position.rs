use serde::{Deserialize, Serialize};

/// Net signed quantity of one security across all live trades.
///
/// A security that nets out to zero still appears with quantity 0;
/// absence means no trade ever touched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub security_code: String,
    pub quantity: i64,
}

impl Position {
    pub fn new(security_code: impl Into<String>, quantity: i64) -> Self {
        Self {
            security_code: security_code.into(),
            quantity,
        }
    }
}
