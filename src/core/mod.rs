pub mod assembler;
pub mod compiler;
pub mod dangerous_goods;
pub mod export_declaration;
pub mod invoice;
pub mod normalizer;
pub mod validator;

pub use crate::domain::model::ShipmentOrder;
pub use crate::domain::payload::CarrierPayload;
pub use crate::domain::ports::{ConfigProvider, InvoiceNumberSource};
pub use crate::utils::error::Result;
