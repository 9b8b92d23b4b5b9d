pub mod charge;

pub use charge::{charge, ChargeCalculator, ChargeError, ChargePolicy, CouponOverdraw};
