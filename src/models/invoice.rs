use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 账单 (Invoice)
///
/// `total` 为应付金额，调用方保证非负。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub total: BigDecimal,
}

impl Invoice {
    pub fn new(total: impl Into<BigDecimal>) -> Self {
        Self {
            total: total.into(),
        }
    }
}
