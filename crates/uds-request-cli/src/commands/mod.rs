//! Command implementations for uds-request

pub mod data;
pub mod inspect;
pub mod management;
pub mod stored;
pub mod transfer;

pub use data::DataCommand;
pub use inspect::{decode_response, nrc};
pub use management::ManagementCommand;
pub use stored::StoredCommand;
pub use transfer::TransferCommand;
