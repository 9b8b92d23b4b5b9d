pub mod invoice;
pub mod payment;
pub mod receipt;

pub use invoice::Invoice;
pub use payment::{classify_all, Payment, PaymentEntry, PaymentEntryError, PaymentType};
pub use receipt::Receipt;
