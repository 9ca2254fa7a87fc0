use super::*;

#[test]
fn test_transaction_wire_format() {
    let json = r#"{
        "transactionId": 4,
        "tradeId": 1,
        "version": 2,
        "securityCode": "REL",
        "quantity": 60,
        "action": "UPDATE",
        "side": "Buy"
    }"#;

    let tx: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(tx.trade_id, 1);
    assert_eq!(tx.version, 2);
    assert_eq!(tx.action, Action::Update);
    assert_eq!(tx.side, Side::Buy);

    let out = serde_json::to_string(&tx).unwrap();
    assert!(out.contains("\"tradeId\":1"));
    assert!(out.contains("\"action\":\"UPDATE\""));
    assert!(out.contains("\"side\":\"Buy\""));
}

#[test]
fn test_trade_serializes_camel_case() {
    let tx = Transaction::new(1, 7, 1, "INF", 20, Action::Insert, Side::Sell);
    let trade = Trade::from_transaction(&tx);

    let json = serde_json::to_string(&trade).unwrap();
    assert!(json.contains("\"tradeId\":7"));
    assert!(json.contains("\"currentVersion\":1"));
    assert!(json.contains("\"isCancelled\":false"));
}

#[test]
fn test_impact_sign_by_side() {
    let buy = Transaction::new(1, 1, 1, "REL", 50, Action::Insert, Side::Buy);
    let sell = Transaction::new(2, 2, 1, "REL", 50, Action::Insert, Side::Sell);

    assert_eq!(Trade::from_transaction(&buy).impact(), 50);
    assert_eq!(Trade::from_transaction(&sell).impact(), -50);
}

#[test]
fn test_cancelled_trade_has_zero_impact() {
    let tx = Transaction::new(1, 1, 1, "REL", 50, Action::Insert, Side::Buy);
    let mut trade = Trade::from_transaction(&tx);
    trade.is_cancelled = true;

    assert_eq!(trade.impact(), 0);
    // Economic fields survive the cancel for reporting.
    assert_eq!(trade.quantity, 50);
}
