use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 收据 (Receipt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub total: BigDecimal,   // 原始账单金额
    pub deposit: BigDecimal, // 现金 + 折扣/优惠券抵扣
    pub change: BigDecimal,  // 找零
}
