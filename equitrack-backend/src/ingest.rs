use position_engine::models::{Action, Side, Transaction};
use serde::Deserialize;

/// Unvalidated transaction payload as it arrives over HTTP.
///
/// Every field is optional so the required-field check happens here, at
/// the boundary, rather than as a deserialization failure. The engine
/// only ever sees the validated `Transaction`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    #[serde(default)]
    pub transaction_id: Option<u64>,
    #[serde(default)]
    pub trade_id: Option<u64>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub security_code: Option<String>,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub action: Option<Action>,
    #[serde(default)]
    pub side: Option<Side>,
}

impl TransactionDraft {
    /// Validates the draft into an engine-ready transaction.
    ///
    /// Zero ids, zero version, zero quantity and an empty security code
    /// are rejected along with absent fields. A missing or zero
    /// `transactionId` is assigned by the boundary (epoch millis); it is
    /// never the engine's job.
    pub fn into_transaction(self) -> Option<Transaction> {
        let trade_id = self.trade_id.filter(|id| *id != 0)?;
        let version = self.version.filter(|v| *v != 0)?;
        let security_code = self.security_code.filter(|s| !s.is_empty())?;
        let quantity = self.quantity.filter(|q| *q != 0)?;
        let action = self.action?;
        let side = self.side?;

        let transaction_id = match self.transaction_id {
            Some(id) if id != 0 => id,
            _ => chrono::Utc::now().timestamp_millis() as u64,
        };

        Some(Transaction {
            transaction_id,
            trade_id,
            version,
            security_code,
            quantity,
            action,
            side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> TransactionDraft {
        TransactionDraft {
            transaction_id: Some(9),
            trade_id: Some(1),
            version: Some(1),
            security_code: Some("REL".into()),
            quantity: Some(50),
            action: Some(Action::Insert),
            side: Some(Side::Buy),
        }
    }

    #[test]
    fn test_complete_draft_validates() {
        let tx = full_draft().into_transaction().unwrap();
        assert_eq!(tx.transaction_id, 9);
        assert_eq!(tx.trade_id, 1);
        assert_eq!(tx.security_code, "REL");
    }

    #[test]
    fn test_missing_transaction_id_is_assigned() {
        let mut draft = full_draft();
        draft.transaction_id = None;

        let tx = draft.into_transaction().unwrap();
        assert_ne!(tx.transaction_id, 0, "Boundary must assign an id");
    }

    #[test]
    fn test_zero_transaction_id_is_reassigned() {
        let mut draft = full_draft();
        draft.transaction_id = Some(0);

        let tx = draft.into_transaction().unwrap();
        assert_ne!(tx.transaction_id, 0);
    }

    #[test]
    fn test_falsy_required_fields_rejected() {
        let mut missing_trade = full_draft();
        missing_trade.trade_id = None;
        assert!(missing_trade.into_transaction().is_none());

        let mut zero_version = full_draft();
        zero_version.version = Some(0);
        assert!(zero_version.into_transaction().is_none());

        let mut empty_security = full_draft();
        empty_security.security_code = Some(String::new());
        assert!(empty_security.into_transaction().is_none());

        let mut zero_quantity = full_draft();
        zero_quantity.quantity = Some(0);
        assert!(zero_quantity.into_transaction().is_none());

        let mut no_action = full_draft();
        no_action.action = None;
        assert!(no_action.into_transaction().is_none());

        let mut no_side = full_draft();
        no_side.side = None;
        assert!(no_side.into_transaction().is_none());
    }

    #[test]
    fn test_draft_parses_wire_json() {
        let draft: TransactionDraft = serde_json::from_str(
            r#"{"tradeId": 1, "version": 1, "securityCode": "REL",
                "quantity": 50, "action": "INSERT", "side": "Buy"}"#,
        )
        .unwrap();

        let tx = draft.into_transaction().unwrap();
        assert_eq!(tx.action, Action::Insert);
        assert_eq!(tx.quantity, 50);
    }
}
