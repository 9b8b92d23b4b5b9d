pub mod api;
pub mod config;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use models::{Invoice, Payment, PaymentEntry, PaymentType, Receipt};
pub use service::{charge, ChargeCalculator, ChargeError, ChargePolicy, CouponOverdraw};
