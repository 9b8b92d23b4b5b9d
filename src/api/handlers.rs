use crate::models::{Invoice, PaymentEntry, Receipt};
use crate::service::ChargeCalculator;
use serde::{Deserialize, Serialize};

/// 请求体: 账单 + 有序支付条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    pub invoice: Invoice,
    #[serde(default)]
    pub payments: Vec<PaymentEntry>,
}

/// 响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeResponse {
    pub success: bool,
    pub message: String,
    pub error: Option<String>,
    pub receipt: Option<Receipt>,
}

impl ChargeResponse {
    fn failure(kind: &str, message: String) -> Self {
        Self {
            success: false,
            message,
            error: Some(kind.to_string()),
            receipt: None,
        }
    }
}

/// 结算接口
pub fn handle_charge(calculator: &ChargeCalculator, req: &ChargeRequest) -> ChargeResponse {
    match calculator.charge_entries(&req.invoice, &req.payments) {
        Ok(receipt) => {
            tracing::info!(
                "Charged invoice total {} with {} payments, change {} ({:?})",
                receipt.total,
                req.payments.len(),
                receipt.change,
                calculator.policy()
            );
            ChargeResponse {
                success: true,
                message: format!("Successfully charged {} payments", req.payments.len()),
                error: None,
                receipt: Some(receipt),
            }
        }
        Err(e) => {
            tracing::warn!("Charge failed: {}", e);
            ChargeResponse::failure(e.kind(), format!("Error: {}", e))
        }
    }
}

/// 从 JSON 文本解析请求并结算，解析失败返回 INVALID_REQUEST
pub fn handle_charge_json(calculator: &ChargeCalculator, body: &str) -> ChargeResponse {
    match serde_json::from_str::<ChargeRequest>(body) {
        Ok(req) => handle_charge(calculator, &req),
        Err(e) => {
            tracing::warn!("Malformed charge request: {}", e);
            ChargeResponse::failure("INVALID_REQUEST", format!("Error: {}", e))
        }
    }
}
