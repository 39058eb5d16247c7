//! Request construction and response classification errors

use thiserror::Error;

use crate::nrc::NegativeResponseCode;

/// Errors raised while building or parsing a request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// addressAndLengthFormatIdentifier with a nibble outside 1..=8
    #[error("Invalid addressAndLengthFormatIdentifier 0x{0:02X}: address and size lengths must be 1..=8 bytes")]
    InvalidFormatIdentifier(u8),

    /// A value does not fit in the number of bytes reserved for it
    #[error("Value 0x{value:X} does not fit in {len} byte(s) for {field}")]
    ValueOutOfRange {
        field: &'static str,
        value: u64,
        len: usize,
    },

    /// A parameter violates the service's constraints
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed hex request string
    #[error("Invalid hex request: {0}")]
    InvalidHex(String),

    /// Operation needs a sub-function byte the request does not have
    #[error("Service 0x{0:02X} request has no sub-function byte")]
    MissingSubFunction(u8),
}

/// Errors raised while classifying ECU response bytes
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Empty response")]
    Empty,

    #[error("Negative response too short ({0} byte(s))")]
    TruncatedNegativeResponse(usize),

    #[error("Response 0x{actual:02X} does not answer service 0x{expected:02X}")]
    UnexpectedService { expected: u8, actual: u8 },

    /// Convenience variant for callers that treat any NRC as an error
    #[error("Negative response: {nrc} (0x{nrc:02X}) for service 0x{service_id:02X}")]
    Negative {
        service_id: u8,
        nrc: NegativeResponseCode,
    },
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
