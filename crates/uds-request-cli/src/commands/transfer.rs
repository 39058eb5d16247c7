//! Upload/download requests

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;
use uds_request::{FileSize, FileTransfer, RequestBuilder, UdsRequest};

use crate::args::{parse_hex_bytes, parse_u64, parse_u8, HexBytes};

#[derive(Debug, Subcommand)]
pub enum TransferCommand {
    /// RequestDownload (0x34)
    Download {
        #[arg(value_parser = parse_u64)]
        address: u64,

        #[arg(value_parser = parse_u64)]
        size: u64,

        /// addressAndLengthFormatIdentifier
        #[arg(long, value_parser = parse_u8, default_value = "0x44")]
        alfid: u8,

        /// dataFormatIdentifier (compression/encryption)
        #[arg(long, value_parser = parse_u8, default_value = "0")]
        data_format: u8,
    },

    /// RequestUpload (0x35)
    Upload {
        #[arg(value_parser = parse_u64)]
        address: u64,

        #[arg(value_parser = parse_u64)]
        size: u64,

        #[arg(long, value_parser = parse_u8, default_value = "0x44")]
        alfid: u8,

        #[arg(long, value_parser = parse_u8, default_value = "0")]
        data_format: u8,
    },

    /// TransferData (0x36)
    Transfer {
        /// blockSequenceCounter
        #[arg(value_parser = parse_u8)]
        block: u8,

        /// transferRequestParameterRecord (hex)
        #[arg(value_parser = parse_hex_bytes, conflicts_with = "file")]
        data: Option<HexBytes>,

        /// Read the record from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// RequestTransferExit (0x37)
    TransferExit {
        /// transferRequestParameterRecord (hex)
        #[arg(value_parser = parse_hex_bytes)]
        record: Option<HexBytes>,
    },

    /// RequestFileTransfer (0x38)
    FileTransfer {
        /// modeOfOperation: 1 add, 2 delete, 3 replace, 4 read, 5 read dir, 6 resume
        #[arg(value_parser = parse_u8)]
        mode: u8,

        /// filePathAndName
        path: String,

        /// dataFormatIdentifier
        #[arg(long, value_parser = parse_u8)]
        data_format: Option<u8>,

        /// fileSizeParameterLength in bytes
        #[arg(long, value_parser = parse_u8, default_value = "4")]
        size_length: u8,

        /// fileSizeUnCompressed
        #[arg(long, value_parser = parse_u64, requires = "compressed")]
        uncompressed: Option<u64>,

        /// fileSizeCompressed
        #[arg(long, value_parser = parse_u64, requires = "uncompressed")]
        compressed: Option<u64>,
    },
}

impl TransferCommand {
    pub fn build(&self, builder: &RequestBuilder) -> Result<UdsRequest> {
        let request = match self {
            Self::Download {
                address,
                size,
                alfid,
                data_format,
            } => builder.request_download(*data_format, *alfid, *address, *size)?,
            Self::Upload {
                address,
                size,
                alfid,
                data_format,
            } => builder.request_upload(*data_format, *alfid, *address, *size)?,
            Self::Transfer { block, data, file } => {
                let record = match file {
                    Some(path) => std::fs::read(path)
                        .with_context(|| format!("Failed to read {}", path.display()))?,
                    None => data.clone().unwrap_or_default().0,
                };
                tracing::debug!(block, bytes = record.len(), "TransferData record");
                builder.transfer_data(*block, &record)
            }
            Self::TransferExit { record } => {
                builder.request_transfer_exit(record.as_ref().map(HexBytes::as_slice))
            }
            Self::FileTransfer {
                mode,
                path,
                data_format,
                size_length,
                uncompressed,
                compressed,
            } => {
                let mut transfer = FileTransfer::new(*mode, path.as_bytes());
                if let Some(format) = data_format {
                    transfer = transfer.with_data_format(*format);
                }
                if let (Some(uncompressed), Some(compressed)) = (uncompressed, compressed) {
                    transfer = transfer.with_file_size(FileSize {
                        parameter_length: *size_length,
                        uncompressed: *uncompressed,
                        compressed: *compressed,
                    });
                }
                builder.request_file_transfer(&transfer)?
            }
        };
        Ok(request)
    }
}
