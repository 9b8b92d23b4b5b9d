use bigdecimal::{BigDecimal, One, Signed, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{classify_all, Invoice, Payment, PaymentEntry, PaymentEntryError, Receipt};

/// 结算错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChargeError {
    /// 现金不足以覆盖折扣后的剩余应付
    #[error("shortage: remaining {remain} exceeds deposit {deposit}")]
    Shortage { remain: BigDecimal, deposit: BigDecimal },

    /// 剩余应付已被折扣/优惠券清零，却仍存入了现金
    #[error("overcharge: remainder already cleared, deposit {deposit} is unapplied")]
    Overcharge { deposit: BigDecimal },

    #[error("invalid coupon: payment #{index} drives remainder to {remain}")]
    InvalidCoupon { index: usize, remain: BigDecimal },

    #[error("invalid payment: {0}")]
    InvalidPayment(#[from] PaymentEntryError),
}

impl ChargeError {
    /// 错误类型标签 (用于响应体)
    pub fn kind(&self) -> &'static str {
        match self {
            ChargeError::Shortage { .. } => "SHORTAGE",
            ChargeError::Overcharge { .. } => "OVERCHARGE",
            ChargeError::InvalidCoupon { .. } => "INVALID_COUPON",
            ChargeError::InvalidPayment(_) => "INVALID_PAYMENT",
        }
    }
}

/// 优惠券把剩余应付抵扣为负数时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponOverdraw {
    #[default]
    Allow,
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    #[serde(default)]
    pub coupon_overdraw: CouponOverdraw,
}

/// 结算服务
///
/// 无状态，只持有策略，可在多处并发调用。
#[derive(Debug, Clone, Copy, Default)]
pub struct ChargeCalculator {
    policy: ChargePolicy,
}

impl ChargeCalculator {
    pub fn new(policy: ChargePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ChargePolicy {
        self.policy
    }

    /// 先对原始条目分类，再结算
    pub fn charge_entries(
        &self,
        invoice: &Invoice,
        entries: &[PaymentEntry],
    ) -> Result<Receipt, ChargeError> {
        let payments = classify_all(entries)?;
        self.charge(invoice, &payments)
    }

    /// 结算
    ///
    /// 1. 按顺序应用每笔支付: 百分比折算剩余应付 (向下取整)、优惠券抵扣剩余应付、现金累加存入
    /// 2. 剩余应付 > 存入 → Shortage；剩余应付为 0 且有存入 → Overcharge
    /// 3. 收据: total 原样返回，deposit = 存入 + (total - 剩余应付)，剩余应付 > 0 时找零
    pub fn charge(&self, invoice: &Invoice, payments: &[Payment]) -> Result<Receipt, ChargeError> {
        let total = &invoice.total;
        let mut remain = total.clone();
        let mut deposit = BigDecimal::zero();

        for (index, payment) in payments.iter().enumerate() {
            match payment {
                Payment::PercentageDiscount { percentage } => {
                    remain = floor(&(&remain * BigDecimal::from(*percentage) / BigDecimal::from(100)));
                }
                Payment::CouponDeduction { amount } => {
                    remain = &remain - amount;
                    if remain.is_negative() && self.policy.coupon_overdraw == CouponOverdraw::Reject {
                        tracing::warn!("payment #{} drives remainder to {}, rejected", index, remain);
                        return Err(ChargeError::InvalidCoupon { index, remain });
                    }
                }
                Payment::CashDeposit { amount } => {
                    deposit = &deposit + amount;
                }
            }
            tracing::debug!("payment #{} applied: remain={} deposit={}", index, remain, deposit);
        }

        if remain > deposit {
            return Err(ChargeError::Shortage { remain, deposit });
        }

        if remain.is_zero() && deposit > BigDecimal::zero() {
            return Err(ChargeError::Overcharge { deposit });
        }

        let change = if remain > BigDecimal::zero() {
            &deposit - &remain
        } else {
            BigDecimal::zero()
        };

        // 去掉 f64 输入带来的多余小数位
        let receipt = Receipt {
            total: total.normalized(),
            deposit: (&deposit + (total - &remain)).normalized(),
            change: change.normalized(),
        };
        tracing::debug!(
            "charge settled: total={} deposit={} change={}",
            receipt.total,
            receipt.deposit,
            receipt.change
        );

        Ok(receipt)
    }
}

/// 使用默认策略结算
pub fn charge(invoice: &Invoice, payments: &[Payment]) -> Result<Receipt, ChargeError> {
    ChargeCalculator::default().charge(invoice, payments)
}

/// 向负无穷取整 (`with_scale(0)` 向零截断)
fn floor(value: &BigDecimal) -> BigDecimal {
    let truncated = value.with_scale(0);
    if &truncated > value {
        truncated - BigDecimal::one()
    } else {
        truncated
    }
}
