pub mod handlers;

pub use handlers::{handle_charge, handle_charge_json, ChargeRequest, ChargeResponse};
