//! Diagnostic and communication management requests

use anyhow::Result;
use clap::Subcommand;
use uds_request::{RequestBuilder, UdsRequest};

use crate::args::{
    parse_hex_bytes, parse_reset_type, parse_session_type, parse_u16, parse_u32, parse_u8,
    HexBytes,
};

#[derive(Debug, Subcommand)]
pub enum ManagementCommand {
    /// DiagnosticSessionControl (0x10)
    Session {
        /// Session type: default, programming, extended, safety or a number
        #[arg(value_parser = parse_session_type)]
        session_type: u8,
    },

    /// ECUReset (0x11)
    Reset {
        /// Reset type: hard, key-off-on, soft, enable-rapid-shutdown, disable-rapid-shutdown or a number
        #[arg(value_parser = parse_reset_type, default_value = "hard")]
        reset_type: u8,
    },

    /// SecurityAccess (0x27) with a raw access type
    SecurityAccess {
        /// securityAccessType sub-function
        #[arg(value_parser = parse_u8)]
        access_type: u8,

        /// securityAccessDataRecord or key (hex)
        #[arg(value_parser = parse_hex_bytes)]
        data: Option<HexBytes>,
    },

    /// SecurityAccess requestSeed for a security level
    Seed {
        /// Security level (1 = sub-function 0x01, 2 = 0x03, ...)
        #[arg(value_parser = parse_u8, default_value = "1")]
        level: u8,
    },

    /// SecurityAccess sendKey for a security level
    Key {
        /// Security level (1 = sub-function 0x02, 2 = 0x04, ...)
        #[arg(value_parser = parse_u8)]
        level: u8,

        /// Key bytes (hex)
        #[arg(value_parser = parse_hex_bytes)]
        key: HexBytes,
    },

    /// CommunicationControl (0x28)
    CommControl {
        #[arg(value_parser = parse_u8)]
        control_type: u8,

        #[arg(value_parser = parse_u8)]
        communication_type: u8,

        /// nodeIdentificationNumber for enhanced address control types
        #[arg(long, value_parser = parse_u16)]
        node: Option<u16>,
    },

    /// TesterPresent (0x3E)
    TesterPresent {
        #[arg(value_parser = parse_u8, default_value = "0")]
        sub_function: u8,
    },

    /// AccessTimingParameter (0x83)
    Timing {
        #[arg(value_parser = parse_u8)]
        access_type: u8,

        /// timingParameterRequestRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        record: Option<HexBytes>,
    },

    /// SecuredDataTransmission (0x84)
    Secured {
        /// securityDataRequestRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        record: HexBytes,
    },

    /// ControlDTCSetting (0x85)
    DtcSetting {
        /// 1 = on, 2 = off
        #[arg(value_parser = parse_u8)]
        setting_type: u8,

        /// DTCSettingControlOptionRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        record: Option<HexBytes>,
    },

    /// ResponseOnEvent (0x86)
    Roe {
        #[arg(value_parser = parse_u8)]
        event_type: u8,

        #[arg(value_parser = parse_u8)]
        window_time: u8,

        /// eventTypeRecord (hex)
        #[arg(long, value_parser = parse_hex_bytes)]
        event_record: Option<HexBytes>,

        /// serviceToRespondToRecord (hex)
        #[arg(long, value_parser = parse_hex_bytes)]
        respond_with: Option<HexBytes>,
    },

    /// LinkControl (0x87)
    Link {
        #[arg(value_parser = parse_u8)]
        control_type: u8,

        /// linkControlModeIdentifier
        #[arg(long, value_parser = parse_u8)]
        mode: Option<u8>,

        /// 3-byte linkRecord
        #[arg(long, value_parser = parse_u32)]
        record: Option<u32>,
    },
}

impl ManagementCommand {
    pub fn build(&self, builder: &RequestBuilder) -> Result<UdsRequest> {
        let request = match self {
            Self::Session { session_type } => builder.diagnostic_session_control(*session_type),
            Self::Reset { reset_type } => builder.ecu_reset(*reset_type),
            Self::SecurityAccess { access_type, data } => {
                builder.security_access(*access_type, data.as_ref().map(HexBytes::as_slice))
            }
            Self::Seed { level } => builder.security_access_request_seed(*level)?,
            Self::Key { level, key } => builder.security_access_send_key(*level, key.as_slice())?,
            Self::CommControl {
                control_type,
                communication_type,
                node,
            } => builder.communication_control(*control_type, *communication_type, *node),
            Self::TesterPresent { sub_function } => builder.tester_present(*sub_function),
            Self::Timing {
                access_type,
                record,
            } => builder
                .access_timing_parameter(*access_type, record.as_ref().map(HexBytes::as_slice)),
            Self::Secured { record } => builder.secured_data_transmission(record.as_slice()),
            Self::DtcSetting {
                setting_type,
                record,
            } => builder.control_dtc_setting(*setting_type, record.as_ref().map(HexBytes::as_slice)),
            Self::Roe {
                event_type,
                window_time,
                event_record,
                respond_with,
            } => builder.response_on_event(
                *event_type,
                *window_time,
                event_record.as_ref().map(HexBytes::as_slice),
                respond_with.as_ref().map(HexBytes::as_slice),
            ),
            Self::Link {
                control_type,
                mode,
                record,
            } => builder.link_control(*control_type, *mode, *record)?,
        };
        Ok(request)
    }
}
