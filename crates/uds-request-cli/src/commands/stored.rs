//! Stored data, input/output control and routine requests

use anyhow::Result;
use clap::Subcommand;
use uds_request::sub_function::dtc_group;
use uds_request::{RequestBuilder, UdsRequest};

use crate::args::{parse_hex_bytes, parse_routine_action, parse_u16, parse_u32, parse_u8, HexBytes};

#[derive(Debug, Subcommand)]
pub enum StoredCommand {
    /// ClearDiagnosticInformation (0x14)
    ClearDtc {
        /// groupOfDTC (3 bytes); all groups by default
        #[arg(value_parser = parse_u32, default_value_t = dtc_group::ALL)]
        group: u32,

        /// MemorySelection for user-defined DTC memory
        #[arg(long, value_parser = parse_u8)]
        memory: Option<u8>,
    },

    /// ReadDTCInformation (0x19)
    ReadDtc {
        /// reportType sub-function, e.g. 0x02
        #[arg(value_parser = parse_u8)]
        report_type: u8,

        /// Remaining report parameters (hex), e.g. status mask "09"
        #[arg(value_parser = parse_hex_bytes)]
        arguments: Option<HexBytes>,
    },

    /// InputOutputControlByIdentifier (0x2F)
    IoControl {
        #[arg(value_parser = parse_u16)]
        did: u16,

        /// controlOptionRecord (hex), starting with the control parameter
        #[arg(value_parser = parse_hex_bytes)]
        option: HexBytes,

        /// controlEnableMaskRecord (hex)
        #[arg(long, value_parser = parse_hex_bytes)]
        mask: Option<HexBytes>,
    },

    /// RoutineControl (0x31)
    Routine {
        /// Action: start, stop, result or a number
        #[arg(value_parser = parse_routine_action)]
        action: u8,

        /// routineIdentifier
        #[arg(value_parser = parse_u16)]
        routine_id: u16,

        /// routineControlOptionRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        option: Option<HexBytes>,
    },
}

impl StoredCommand {
    pub fn build(&self, builder: &RequestBuilder) -> Result<UdsRequest> {
        let request = match self {
            Self::ClearDtc { group, memory } => match memory {
                Some(selection) => {
                    builder.clear_diagnostic_information_in_memory(*group, *selection)?
                }
                None => builder.clear_diagnostic_information(*group)?,
            },
            Self::ReadDtc {
                report_type,
                arguments,
            } => builder.read_dtc_information(
                *report_type,
                arguments.as_ref().map(HexBytes::as_slice).unwrap_or_default(),
            ),
            Self::IoControl { did, option, mask } => builder.input_output_control_by_identifier(
                *did,
                option.as_slice(),
                mask.as_ref().map(HexBytes::as_slice),
            )?,
            Self::Routine {
                action,
                routine_id,
                option,
            } => builder.routine_control(
                *action,
                *routine_id,
                option.as_ref().map(HexBytes::as_slice),
            ),
        };
        Ok(request)
    }
}
