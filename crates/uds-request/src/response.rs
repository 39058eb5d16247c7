//! Classification of ECU response bytes against the request that caused them

use serde::Serialize;

use crate::error::ResponseError;
use crate::nrc::NegativeResponseCode;
use crate::sid::{positive_response_sid, service_id};

/// A response matched to its request SID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Response {
    /// `SID+0x40` followed by the service-specific payload
    Positive { service_id: u8, payload: Vec<u8> },
    /// `7F SID NRC`
    Negative {
        service_id: u8,
        nrc: NegativeResponseCode,
    },
}

impl Response {
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positive { .. })
    }

    /// NRC 0x78: the server will send the final response later
    pub fn is_response_pending(&self) -> bool {
        matches!(self, Self::Negative { nrc, .. } if nrc.is_response_pending())
    }

    /// Positive payload, or the negative response as an error
    pub fn into_payload(self) -> Result<Vec<u8>, ResponseError> {
        match self {
            Self::Positive { payload, .. } => Ok(payload),
            Self::Negative { service_id, nrc } => Err(ResponseError::Negative { service_id, nrc }),
        }
    }
}

/// Match `response` to a request for `request_sid`
pub fn classify_response(request_sid: u8, response: &[u8]) -> Result<Response, ResponseError> {
    let first = *response.first().ok_or(ResponseError::Empty)?;

    if first == service_id::NEGATIVE_RESPONSE {
        if response.len() < 3 {
            return Err(ResponseError::TruncatedNegativeResponse(response.len()));
        }
        if response[1] != request_sid {
            return Err(ResponseError::UnexpectedService {
                expected: request_sid,
                actual: response[1],
            });
        }
        let nrc = NegativeResponseCode::from(response[2]);
        tracing::debug!(
            service_id = request_sid,
            nrc = u8::from(nrc),
            "Negative response: {}",
            nrc
        );
        return Ok(Response::Negative {
            service_id: request_sid,
            nrc,
        });
    }

    if first != positive_response_sid(request_sid) {
        return Err(ResponseError::UnexpectedService {
            expected: request_sid,
            actual: first,
        });
    }

    Ok(Response::Positive {
        service_id: request_sid,
        payload: response[1..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_response() {
        let response = classify_response(0x22, &[0x62, 0xF1, 0x90, 0x41]).unwrap();
        assert!(response.is_positive());
        assert_eq!(response.into_payload().unwrap(), vec![0xF1, 0x90, 0x41]);
    }

    #[test]
    fn test_negative_response() {
        let response = classify_response(0x27, &[0x7F, 0x27, 0x35]).unwrap();
        assert_eq!(
            response,
            Response::Negative {
                service_id: 0x27,
                nrc: NegativeResponseCode::InvalidKey,
            }
        );
        assert!(!response.is_response_pending());
        assert!(matches!(
            response.into_payload(),
            Err(ResponseError::Negative { service_id: 0x27, .. })
        ));
    }

    #[test]
    fn test_response_pending() {
        let response = classify_response(0x31, &[0x7F, 0x31, 0x78]).unwrap();
        assert!(response.is_response_pending());
    }

    #[test]
    fn test_malformed_responses() {
        assert_eq!(classify_response(0x10, &[]), Err(ResponseError::Empty));
        assert_eq!(
            classify_response(0x10, &[0x7F, 0x10]),
            Err(ResponseError::TruncatedNegativeResponse(2))
        );
        assert_eq!(
            classify_response(0x10, &[0x7F, 0x11, 0x12]),
            Err(ResponseError::UnexpectedService {
                expected: 0x10,
                actual: 0x11,
            })
        );
        assert_eq!(
            classify_response(0x10, &[0x51, 0x01]),
            Err(ResponseError::UnexpectedService {
                expected: 0x10,
                actual: 0x51,
            })
        );
    }

    #[test]
    fn test_serialized_shape() {
        let response = classify_response(0x3E, &[0x7F, 0x3E, 0x13]).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["kind"], "negative");
        assert_eq!(json["nrc"], 0x13);
    }
}
