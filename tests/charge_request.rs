use bigdecimal::BigDecimal;
use receipt_charge::api::{handle_charge, handle_charge_json, ChargeRequest};
use receipt_charge::{ChargeCalculator, ChargePolicy, CouponOverdraw, Invoice, PaymentEntry, Receipt};

fn receipt(total: i64, deposit: i64, change: i64) -> Receipt {
    Receipt {
        total: BigDecimal::from(total),
        deposit: BigDecimal::from(deposit),
        change: BigDecimal::from(change),
    }
}

#[test]
fn percentage_and_cash_request_settles() {
    let body = r#"{
        "invoice": {"total": 1000},
        "payments": [
            {"type": "CASH", "percentage": 10},
            {"type": "CASH", "amount": 900}
        ]
    }"#;

    let response = handle_charge_json(&ChargeCalculator::default(), body);
    assert!(response.success);
    assert_eq!(response.error, None);
    assert_eq!(response.receipt, Some(receipt(1000, 1800, 800)));
}

#[test]
fn missing_payments_defaults_to_empty() {
    let response = handle_charge_json(&ChargeCalculator::default(), r#"{"invoice": {"total": 0}}"#);
    assert!(response.success);
    assert_eq!(response.receipt, Some(receipt(0, 0, 0)));
}

#[test]
fn shortage_is_reported_with_kind() {
    let body = r#"{"invoice": {"total": 1000}, "payments": [{"type": "CASH", "amount": 500}]}"#;
    let response = handle_charge_json(&ChargeCalculator::default(), body);
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("SHORTAGE"));
    assert!(response.receipt.is_none());
}

#[test]
fn coupon_plus_cash_overcharge_is_reported() {
    let body = r#"{"invoice": {"total": 1000}, "payments": [
        {"type": "COUPON", "amount": 1000},
        {"type": "CASH", "amount": 100}
    ]}"#;
    let response = handle_charge_json(&ChargeCalculator::default(), body);
    assert_eq!(response.error.as_deref(), Some("OVERCHARGE"));
}

#[test]
fn malformed_request_is_rejected() {
    let response = handle_charge_json(&ChargeCalculator::default(), r#"{"invoice": {}}"#);
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("INVALID_REQUEST"));
}

#[test]
fn unknown_payment_type_is_rejected() {
    let body = r#"{"invoice": {"total": 10}, "payments": [{"type": "CARD", "amount": 10}]}"#;
    let response = handle_charge_json(&ChargeCalculator::default(), body);
    assert_eq!(response.error.as_deref(), Some("INVALID_REQUEST"));
}

#[test]
fn out_of_range_percentage_is_invalid_payment() {
    let body = r#"{"invoice": {"total": 10}, "payments": [{"type": "COUPON", "percentage": 120}]}"#;
    let response = handle_charge_json(&ChargeCalculator::default(), body);
    assert_eq!(response.error.as_deref(), Some("INVALID_PAYMENT"));
}

#[test]
fn reject_policy_flows_through_handler() {
    let calculator = ChargeCalculator::new(ChargePolicy {
        coupon_overdraw: CouponOverdraw::Reject,
    });
    let req = ChargeRequest {
        invoice: Invoice::new(100),
        payments: vec![PaymentEntry::coupon(150)],
    };
    let response = handle_charge(&calculator, &req);
    assert_eq!(response.error.as_deref(), Some("INVALID_COUPON"));

    let lenient = handle_charge(&ChargeCalculator::default(), &req);
    assert_eq!(lenient.receipt, Some(receipt(100, 150, 0)));
}

#[test]
fn response_serializes_amounts() {
    let body = r#"{"invoice": {"total": 1000}, "payments": [{"type": "CASH", "amount": 1500}]}"#;
    let response = handle_charge_json(&ChargeCalculator::default(), body);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(json["receipt"]["change"], "500");
    assert_eq!(json["receipt"]["deposit"], "1500");
}

#[test]
fn float_amounts_are_written_without_f64_scale() {
    let body = r#"{"invoice": {"total": 0.3}, "payments": [
        {"type": "CASH", "amount": 0.1},
        {"type": "CASH", "amount": 0.2}
    ]}"#;
    let response = handle_charge_json(&ChargeCalculator::default(), body);
    assert!(response.success);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["receipt"]["total"], "0.3");
    assert_eq!(json["receipt"]["deposit"], "0.3");
    assert_eq!(json["receipt"]["change"], "0");
}
