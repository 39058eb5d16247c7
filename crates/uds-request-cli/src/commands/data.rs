//! Data transmission requests

use anyhow::Result;
use clap::Subcommand;
use uds_request::{
    DynamicDefinition, MemoryRegion, RequestBuilder, SourceDataIdentifier, UdsRequest,
};

use crate::args::{
    parse_hex_bytes, parse_memory_region, parse_source_did, parse_u16, parse_u64, parse_u8,
    HexBytes,
};

#[derive(Debug, Subcommand)]
pub enum DataCommand {
    /// ReadDataByIdentifier (0x22)
    ReadDid {
        /// Data identifier(s), e.g. 0xF190
        #[arg(required = true, value_parser = parse_u16)]
        dids: Vec<u16>,
    },

    /// ReadMemoryByAddress (0x23)
    ReadMemory {
        /// addressAndLengthFormatIdentifier, e.g. 0x24
        #[arg(value_parser = parse_u8)]
        alfid: u8,

        #[arg(value_parser = parse_u64)]
        address: u64,

        #[arg(value_parser = parse_u64)]
        size: u64,
    },

    /// ReadScalingDataByIdentifier (0x24)
    ReadScaling {
        #[arg(value_parser = parse_u16)]
        did: u16,
    },

    /// ReadDataByPeriodicIdentifier (0x2A)
    ReadPeriodic {
        /// 1 = slow, 2 = medium, 3 = fast, 4 = stop
        #[arg(value_parser = parse_u8)]
        transmission_mode: u8,

        /// Periodic data identifiers (low byte of 0xF2xx)
        #[arg(value_parser = parse_u8)]
        ids: Vec<u8>,
    },

    /// DynamicallyDefineDataIdentifier (0x2C) defineByIdentifier
    DefineDidById {
        /// Dynamically defined DID
        #[arg(value_parser = parse_u16)]
        did: u16,

        /// Sources as DID:POSITION:SIZE
        #[arg(required = true, value_parser = parse_source_did)]
        sources: Vec<SourceDataIdentifier>,
    },

    /// DynamicallyDefineDataIdentifier (0x2C) defineByMemoryAddress
    DefineDidByMemory {
        #[arg(value_parser = parse_u16)]
        did: u16,

        #[arg(value_parser = parse_u8)]
        alfid: u8,

        /// Regions as ADDRESS:SIZE
        #[arg(required = true, value_parser = parse_memory_region)]
        regions: Vec<MemoryRegion>,
    },

    /// DynamicallyDefineDataIdentifier (0x2C) clear
    ClearDid {
        /// DID to clear; all dynamic DIDs when omitted
        #[arg(value_parser = parse_u16)]
        did: Option<u16>,
    },

    /// WriteDataByIdentifier (0x2E)
    WriteDid {
        #[arg(value_parser = parse_u16)]
        did: u16,

        /// dataRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        data: HexBytes,
    },

    /// WriteMemoryByAddress (0x3D); memorySize is the data length
    WriteMemory {
        #[arg(value_parser = parse_u8)]
        alfid: u8,

        #[arg(value_parser = parse_u64)]
        address: u64,

        /// dataRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        data: HexBytes,
    },
}

impl DataCommand {
    pub fn build(&self, builder: &RequestBuilder) -> Result<UdsRequest> {
        let request = match self {
            Self::ReadDid { dids } => builder.read_data_by_identifier(dids)?,
            Self::ReadMemory {
                alfid,
                address,
                size,
            } => builder.read_memory_by_address(*alfid, *address, *size)?,
            Self::ReadScaling { did } => builder.read_scaling_data_by_identifier(*did),
            Self::ReadPeriodic {
                transmission_mode,
                ids,
            } => builder.read_data_by_periodic_identifier(*transmission_mode, ids)?,
            Self::DefineDidById { did, sources } => {
                builder.dynamically_define_data_identifier(&DynamicDefinition::ByIdentifier {
                    did: *did,
                    sources: sources.clone(),
                })?
            }
            Self::DefineDidByMemory {
                did,
                alfid,
                regions,
            } => builder.dynamically_define_data_identifier(&DynamicDefinition::ByMemoryAddress {
                did: *did,
                alfid: *alfid,
                regions: regions.clone(),
            })?,
            Self::ClearDid { did } => builder
                .dynamically_define_data_identifier(&DynamicDefinition::Clear { did: *did })?,
            Self::WriteDid { did, data } => builder.write_data_by_identifier(*did, data.as_slice()),
            Self::WriteMemory {
                alfid,
                address,
                data,
            } => builder.write_memory_by_address(*alfid, *address, data.as_slice())?,
        };
        Ok(request)
    }
}
