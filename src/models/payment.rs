use bigdecimal::{BigDecimal, Signed, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 百分比上限
pub const MAX_PERCENTAGE: u32 = 100;

/// 支付条目类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Coupon,
    Cash,
}

/// 原始支付条目 (输入边界的形态)
///
/// `type` 标签加上可选的 `percentage` / `amount`，由 [`PaymentEntry::classify`]
/// 转换为明确的 [`Payment`]。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentEntry {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<BigDecimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentEntryError {
    #[error("payment #{index}: percentage {percentage} exceeds 100")]
    PercentageOutOfRange { index: usize, percentage: u32 },

    #[error("payment #{index}: amount {amount} is negative")]
    NegativeAmount { index: usize, amount: BigDecimal },
}

/// 支付 (已分类)
#[derive(Debug, Clone, PartialEq)]
pub enum Payment {
    /// 按百分比折算剩余应付
    PercentageDiscount { percentage: u32 },
    /// 优惠券直接抵扣剩余应付
    CouponDeduction { amount: BigDecimal },
    /// 现金存入
    CashDeposit { amount: BigDecimal },
}

impl PaymentEntry {
    pub fn cash(amount: impl Into<BigDecimal>) -> Self {
        Self {
            payment_type: PaymentType::Cash,
            percentage: None,
            amount: Some(amount.into()),
        }
    }

    pub fn coupon(amount: impl Into<BigDecimal>) -> Self {
        Self {
            payment_type: PaymentType::Coupon,
            percentage: None,
            amount: Some(amount.into()),
        }
    }

    pub fn percentage(payment_type: PaymentType, percentage: u32) -> Self {
        Self {
            payment_type,
            percentage: Some(percentage),
            amount: None,
        }
    }

    /// 将原始条目分类为 [`Payment`]
    ///
    /// 判断顺序: 非零 percentage 优先，其次 COUPON + 非零 amount，再次非零 amount。
    /// 没有任何有效值的条目返回 `Ok(None)`。`index` 仅用于错误信息。
    pub fn classify(&self, index: usize) -> Result<Option<Payment>, PaymentEntryError> {
        if let Some(percentage) = self.percentage {
            if percentage > MAX_PERCENTAGE {
                return Err(PaymentEntryError::PercentageOutOfRange { index, percentage });
            }
        }
        if let Some(amount) = &self.amount {
            if amount.is_negative() {
                return Err(PaymentEntryError::NegativeAmount {
                    index,
                    amount: amount.clone(),
                });
            }
        }

        let amount = self.amount.as_ref().filter(|a| !a.is_zero());

        let payment = match (self.percentage, amount) {
            (Some(percentage), _) if percentage != 0 => Payment::PercentageDiscount { percentage },
            (_, Some(amount)) if self.payment_type == PaymentType::Coupon => {
                Payment::CouponDeduction {
                    amount: amount.clone(),
                }
            }
            (_, Some(amount)) => Payment::CashDeposit {
                amount: amount.clone(),
            },
            _ => {
                tracing::debug!("payment #{} carries no effective value, dropped", index);
                return Ok(None);
            }
        };

        Ok(Some(payment))
    }
}

/// 批量分类，保持原有顺序并丢弃无效条目
pub fn classify_all(entries: &[PaymentEntry]) -> Result<Vec<Payment>, PaymentEntryError> {
    let mut payments = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        if let Some(payment) = entry.classify(index)? {
            payments.push(payment);
        }
    }
    Ok(payments)
}
