//! UDS Negative Response Codes (NRC)

use std::fmt;

use serde::{Serialize, Serializer};

macro_rules! negative_response_codes {
    ($( $(#[$meta:meta])* $variant:ident = $value:literal, $desc:literal; )*) => {
        /// UDS Negative Response Codes (ISO 14229-1 Annex A.1)
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NegativeResponseCode {
            $( $(#[$meta])* $variant, )*
            /// Reserved or manufacturer-specific NRC
            Unknown(u8),
        }

        impl NegativeResponseCode {
            /// Every NRC with a standard meaning
            pub const ALL: &'static [NegativeResponseCode] = &[$( Self::$variant, )*];

            /// Short description of the condition
            pub fn description(&self) -> &'static str {
                match self {
                    $( Self::$variant => $desc, )*
                    Self::Unknown(_) => "reserved or manufacturer specific",
                }
            }

            fn name(&self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some(stringify!($variant)), )*
                    Self::Unknown(_) => None,
                }
            }
        }

        impl From<u8> for NegativeResponseCode {
            fn from(value: u8) -> Self {
                match value {
                    $( $value => Self::$variant, )*
                    other => Self::Unknown(other),
                }
            }
        }

        impl From<NegativeResponseCode> for u8 {
            fn from(nrc: NegativeResponseCode) -> Self {
                match nrc {
                    $( NegativeResponseCode::$variant => $value, )*
                    NegativeResponseCode::Unknown(v) => v,
                }
            }
        }
    };
}

negative_response_codes! {
    GeneralReject = 0x10, "general reject";
    ServiceNotSupported = 0x11, "service not supported";
    SubFunctionNotSupported = 0x12, "sub-function not supported";
    IncorrectMessageLengthOrInvalidFormat = 0x13, "incorrect message length or invalid format";
    ResponseTooLong = 0x14, "response too long";
    BusyRepeatRequest = 0x21, "busy, repeat request";
    ConditionsNotCorrect = 0x22, "conditions not correct";
    RequestSequenceError = 0x24, "request sequence error";
    NoResponseFromSubnetComponent = 0x25, "no response from subnet component";
    FailurePreventsExecutionOfRequestedAction = 0x26, "failure prevents execution of requested action";
    RequestOutOfRange = 0x31, "request out of range";
    SecurityAccessDenied = 0x33, "security access denied";
    InvalidKey = 0x35, "invalid key";
    ExceededNumberOfAttempts = 0x36, "exceeded number of attempts";
    RequiredTimeDelayNotExpired = 0x37, "required time delay not expired";
    UploadDownloadNotAccepted = 0x70, "upload/download not accepted";
    TransferDataSuspended = 0x71, "transfer data suspended";
    GeneralProgrammingFailure = 0x72, "general programming failure";
    WrongBlockSequenceCounter = 0x73, "wrong block sequence counter";
    /// Server accepted the request but needs more time
    RequestCorrectlyReceivedResponsePending = 0x78, "request correctly received, response pending";
    SubFunctionNotSupportedInActiveSession = 0x7E, "sub-function not supported in active session";
    ServiceNotSupportedInActiveSession = 0x7F, "service not supported in active session";
    RpmTooHigh = 0x81, "RPM too high";
    RpmTooLow = 0x82, "RPM too low";
    EngineIsRunning = 0x83, "engine is running";
    EngineIsNotRunning = 0x84, "engine is not running";
    EngineRunTimeTooLow = 0x85, "engine run time too low";
    TemperatureTooHigh = 0x86, "temperature too high";
    TemperatureTooLow = 0x87, "temperature too low";
    VehicleSpeedTooHigh = 0x88, "vehicle speed too high";
    VehicleSpeedTooLow = 0x89, "vehicle speed too low";
    ThrottleOrPedalTooHigh = 0x8A, "throttle/pedal too high";
    ThrottleOrPedalTooLow = 0x8B, "throttle/pedal too low";
    TransmissionRangeNotInNeutral = 0x8C, "transmission range not in neutral";
    TransmissionRangeNotInGear = 0x8D, "transmission range not in gear";
    BrakeSwitchNotClosed = 0x8F, "brake switch(es) not closed";
    ShifterLeverNotInPark = 0x90, "shifter lever not in park";
    TorqueConverterClutchLocked = 0x91, "torque converter clutch locked";
    VoltageTooHigh = 0x92, "voltage too high";
    VoltageTooLow = 0x93, "voltage too low";
}

impl NegativeResponseCode {
    /// NRC 0x78: the final response is still to come
    pub fn is_response_pending(&self) -> bool {
        *self == Self::RequestCorrectlyReceivedResponsePending
    }
}

impl fmt::UpperHex for NegativeResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value: u8 = (*self).into();
        fmt::UpperHex::fmt(&value, f)
    }
}

impl fmt::Display for NegativeResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown(0x{:02X})", u8::from(*self)),
        }
    }
}

impl Serialize for NegativeResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8((*self).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_round_trips_through_u8() {
        for nrc in NegativeResponseCode::ALL {
            let byte: u8 = (*nrc).into();
            assert_eq!(NegativeResponseCode::from(byte), *nrc);
        }
        assert_eq!(NegativeResponseCode::ALL.len(), 40);
    }

    #[test]
    fn test_unknown_code_preserved() {
        let nrc = NegativeResponseCode::from(0xF0);
        assert_eq!(nrc, NegativeResponseCode::Unknown(0xF0));
        assert_eq!(u8::from(nrc), 0xF0);
        assert_eq!(nrc.to_string(), "Unknown(0xF0)");
    }

    #[test]
    fn test_display_and_hex() {
        let nrc = NegativeResponseCode::SecurityAccessDenied;
        assert_eq!(format!("{} (0x{:02X})", nrc, nrc), "SecurityAccessDenied (0x33)");
        assert_eq!(nrc.description(), "security access denied");
    }

    #[test]
    fn test_response_pending() {
        assert!(NegativeResponseCode::from(0x78).is_response_pending());
        assert!(!NegativeResponseCode::GeneralReject.is_response_pending());
    }
}
