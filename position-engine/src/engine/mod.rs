use crate::models::{Action, Position, Trade, Transaction};
use log::warn;
use std::collections::HashMap;

/// In-memory reconciliation engine.
///
/// Owns the authoritative trade snapshots and the derived per-security
/// aggregate. Every mutation goes through the same remove-impact /
/// overwrite / add-impact cycle, so the aggregate is consistent after
/// each applied transaction. Single-writer: callers exposing this to
/// concurrent tasks must serialize the whole surface behind one lock.
#[derive(Debug, Default)]
pub struct Engine {
    trades: HashMap<u64, Trade>,
    positions: HashMap<String, i64>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single well-formed transaction. Never fails: an UPDATE
    /// or CANCEL for a trade we have never seen is dropped, not queued.
    pub fn apply(&mut self, tx: &Transaction) {
        match tx.action {
            Action::Insert => self.handle_insert(tx),
            Action::Update => self.handle_update(tx),
            Action::Cancel => self.handle_cancel(tx),
        }
    }

    /// Applies a batch in deterministic order: ascending trade id, then
    /// ascending version. Within one trade the version order is required
    /// for correctness; across trades it only pins down determinism.
    pub fn apply_batch(&mut self, transactions: &[Transaction]) {
        let mut ordered: Vec<&Transaction> = transactions.iter().collect();
        ordered.sort_by_key(|tx| (tx.trade_id, tx.version));

        for tx in ordered {
            self.apply(tx);
        }
    }

    fn handle_insert(&mut self, tx: &Transaction) {
        // A replayed INSERT replaces the whole trade, cancelled or not.
        // Reclaim its current impact before overwriting so nothing is
        // counted twice.
        if let Some(existing) = self.trades.get(&tx.trade_id) {
            let impact = existing.impact();
            let security = existing.security_code.clone();
            self.adjust_position(security, -impact);
        }

        let trade = Trade::from_transaction(tx);
        let impact = trade.impact();
        let security = trade.security_code.clone();
        self.trades.insert(tx.trade_id, trade);
        self.adjust_position(security, impact);
    }

    fn handle_update(&mut self, tx: &Transaction) {
        let existing = match self.trades.get_mut(&tx.trade_id) {
            Some(t) => t,
            None => {
                // Out-of-order delivery before the INSERT. Dropped, not queued.
                warn!(
                    "Dropping UPDATE for unknown trade {} (version {})",
                    tx.trade_id, tx.version
                );
                return;
            }
        };

        let old_impact = existing.impact();
        let old_security = existing.security_code.clone();

        existing.current_version = tx.version;
        existing.security_code = tx.security_code.clone();
        existing.quantity = tx.quantity;
        existing.side = tx.side;

        let new_impact = existing.impact();
        let new_security = existing.security_code.clone();

        self.adjust_position(old_security, -old_impact);
        self.adjust_position(new_security, new_impact);
    }

    fn handle_cancel(&mut self, tx: &Transaction) {
        let existing = match self.trades.get_mut(&tx.trade_id) {
            Some(t) => t,
            None => {
                warn!(
                    "Dropping CANCEL for unknown trade {} (version {})",
                    tx.trade_id, tx.version
                );
                return;
            }
        };

        // Already-cancelled trades contribute zero, so this removes zero.
        let impact = existing.impact();
        let security = existing.security_code.clone();

        existing.is_cancelled = true;
        existing.current_version = tx.version;

        self.adjust_position(security, -impact);
    }

    /// All mutations funnel through here so a security that nets back to
    /// zero keeps its explicit 0 entry rather than disappearing.
    fn adjust_position(&mut self, security_code: String, delta: i64) {
        let entry = self.positions.entry(security_code).or_insert(0);
        *entry += delta;
    }

    /// Snapshot of the aggregate, one entry per security ever touched.
    /// No ordering guarantee.
    pub fn positions(&self) -> Vec<Position> {
        self.positions
            .iter()
            .map(|(code, qty)| Position::new(code.clone(), *qty))
            .collect()
    }

    /// Snapshot of all trades, cancelled included. No ordering guarantee.
    pub fn trades(&self) -> Vec<Trade> {
        self.trades.values().cloned().collect()
    }

    pub fn trade(&self, trade_id: u64) -> Option<&Trade> {
        self.trades.get(&trade_id)
    }

    /// Full reset of both maps. Not an incremental rollback.
    pub fn clear(&mut self) {
        self.trades.clear();
        self.positions.clear();
    }
}
