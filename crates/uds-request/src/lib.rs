//! uds-request - ISO 14229 UDS diagnostic request builders
//!
//! Builds the byte sequence of every UDS request service and renders it in
//! the conventional space separated hex form (`"22 F1 90"`). No transport is
//! involved; callers hand the bytes to whatever ISO-TP or DoIP stack they use.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               RequestBuilder                 │
//! │   one method per service, OEM SID table      │
//! │                                              │
//! │  ┌────────────┐ ┌────────────┐ ┌──────────┐  │
//! │  │ ServiceIds │ │sub_function│ │  memory  │  │
//! │  │ (overrides)│ │ (constants)│ │ (ALFID)  │  │
//! │  └────────────┘ └────────────┘ └──────────┘  │
//! │                      │                       │
//! │                ┌─────┴──────┐                │
//! │                │ UdsRequest │                │
//! │                └────────────┘                │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use uds_request::{sub_function::session_type, RequestBuilder};
//!
//! let builder = RequestBuilder::new();
//! let request = builder.diagnostic_session_control(session_type::EXTENDED_SESSION);
//! assert_eq!(request.to_string(), "10 03");
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod memory;
pub mod nrc;
pub mod request;
pub mod response;
pub mod sid;
pub mod sub_function;

pub use builder::{
    DynamicDefinition, FileSize, FileTransfer, MemoryRegion, RequestBuilder, SourceDataIdentifier,
};
pub use config::{OutputFormat, ServiceOverrides, UdsRequestConfig};
pub use error::{ConfigError, RequestError, ResponseError};
pub use memory::AddressAndLengthFormat;
pub use nrc::NegativeResponseCode;
pub use request::{RequestReport, UdsRequest};
pub use response::{classify_response, Response};
pub use sid::{service_id, ServiceIds};
