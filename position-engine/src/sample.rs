use crate::models::{Action, Side, Transaction};

/// Fixed demonstration dataset. Applied as a batch it nets out to
/// REL = +60, ITC = 0, INF = +50.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new(1, 1, 1, "REL", 50, Action::Insert, Side::Buy),
        Transaction::new(2, 2, 1, "ITC", 40, Action::Insert, Side::Sell),
        Transaction::new(3, 3, 1, "INF", 70, Action::Insert, Side::Buy),
        Transaction::new(4, 1, 2, "REL", 60, Action::Update, Side::Buy),
        Transaction::new(5, 2, 2, "ITC", 30, Action::Cancel, Side::Buy),
        Transaction::new(6, 4, 1, "INF", 20, Action::Insert, Side::Sell),
    ]
}
