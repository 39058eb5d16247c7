//! Encoded UDS request and its hex string form

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RequestError;
use crate::sid::{has_sub_function, service_name, ServiceIds};
use crate::sub_function::SUPPRESS_POSITIVE_RESPONSE;

/// A complete UDS request: SID followed by its parameters
///
/// Displays as upper-case hex bytes separated by single spaces, e.g. `"22 F1 90"`.
/// Sub-function handling and the service name follow the standard service
/// the request implements, which differs from the first byte when an OEM
/// table remaps SIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UdsRequest {
    bytes: Vec<u8>,
    service: u8,
}

impl UdsRequest {
    #[cfg(test)]
    pub(crate) fn new(sid: u8) -> Self {
        Self::for_service(sid, sid)
    }

    /// Request for the standard `service`, sent under `sid`
    pub(crate) fn for_service(service: u8, sid: u8) -> Self {
        Self {
            bytes: vec![sid],
            service,
        }
    }

    /// Wrap raw bytes. The first byte must be a standard SID.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, RequestError> {
        match bytes.first() {
            Some(&sid) => Ok(Self {
                service: sid,
                bytes,
            }),
            None => Err(RequestError::InvalidArgument(
                "request must contain at least a service ID".to_string(),
            )),
        }
    }

    /// Wrap raw bytes whose SID comes from an OEM service table
    pub fn from_bytes_with_ids(bytes: Vec<u8>, ids: &ServiceIds) -> Result<Self, RequestError> {
        let mut request = Self::from_bytes(bytes)?;
        if let Some(service) = ids.standard_service_id(request.service_id()) {
            request.service = service;
        }
        Ok(request)
    }

    /// Parse the space separated hex form (`"10 03"`, `"0x10 0x03"` or `"1003"`)
    pub fn from_hex_str(s: &str) -> Result<Self, RequestError> {
        let mut bytes = Vec::new();
        for token in s.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            if digits.is_empty() {
                return Err(RequestError::InvalidHex(format!("{token}: no digits")));
            }
            let decoded =
                hex::decode(digits).map_err(|e| RequestError::InvalidHex(format!("{token}: {e}")))?;
            bytes.extend(decoded);
        }

        if bytes.is_empty() {
            return Err(RequestError::InvalidHex("empty request".to_string()));
        }

        Self::from_bytes(bytes)
    }

    pub(crate) fn push(&mut self, byte: u8) -> &mut Self {
        self.bytes.push(byte);
        self
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub(crate) fn push_u16(&mut self, value: u16) -> &mut Self {
        self.extend(&value.to_be_bytes())
    }

    pub fn service_id(&self) -> u8 {
        self.bytes[0]
    }

    /// Standard SID of the service this request implements
    pub fn standard_service_id(&self) -> u8 {
        self.service
    }

    /// Standard name of the service, if it is a standard one
    pub fn service_name(&self) -> Option<&'static str> {
        service_name(self.service)
    }

    /// Sub-function byte without the suppress bit, for services that have one
    pub fn sub_function(&self) -> Option<u8> {
        if has_sub_function(self.service) {
            self.bytes
                .get(1)
                .map(|b| b & !SUPPRESS_POSITIVE_RESPONSE)
        } else {
            None
        }
    }

    /// Whether the suppressPosRspMsgIndicationBit is set
    pub fn suppresses_positive_response(&self) -> bool {
        has_sub_function(self.service)
            && self
                .bytes
                .get(1)
                .is_some_and(|b| b & SUPPRESS_POSITIVE_RESPONSE != 0)
    }

    /// Set the suppressPosRspMsgIndicationBit on the sub-function byte
    pub fn suppress_positive_response(mut self) -> Result<Self, RequestError> {
        let sid = self.service_id();
        if !has_sub_function(self.service) {
            return Err(RequestError::MissingSubFunction(sid));
        }
        let sub_function = self
            .bytes
            .get_mut(1)
            .ok_or(RequestError::MissingSubFunction(sid))?;
        *sub_function |= SUPPRESS_POSITIVE_RESPONSE;
        Ok(self)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: a request carries at least its SID
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// JSON-friendly summary of the request
    pub fn report(&self) -> RequestReport {
        RequestReport {
            service: self.service_name().unwrap_or("Unknown").to_string(),
            sid: self.service_id(),
            length: self.len(),
            suppress_positive_response: self.suppresses_positive_response(),
            bytes: self.to_string(),
        }
    }
}

impl fmt::Display for UdsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl FromStr for UdsRequest {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl AsRef<[u8]> for UdsRequest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<UdsRequest> for Vec<u8> {
    fn from(request: UdsRequest) -> Self {
        request.bytes
    }
}

/// Serializable request summary
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestReport {
    pub service: String,
    pub sid: u8,
    pub length: usize,
    pub suppress_positive_response: bool,
    pub bytes: String,
}
