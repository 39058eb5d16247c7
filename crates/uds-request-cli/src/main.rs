//! uds-request - build ISO 14229 UDS diagnostic requests from the command line
//!
//! Prints the request as space separated hex bytes (or a JSON report) ready
//! to paste into a CAN/DoIP tool.

mod args;
mod commands;
mod config;
mod output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uds_request::{RequestBuilder, UdsRequest};

use crate::args::{parse_hex_bytes, parse_u8, HexBytes};
use crate::commands::{DataCommand, ManagementCommand, StoredCommand, TransferCommand};
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "uds-request")]
#[command(author, version, about = "Build UDS (ISO 14229) diagnostic requests")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path (service ID overrides, output defaults)
    #[arg(short, long, env = "UDS_REQUEST_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Set the suppressPosRspMsgIndicationBit on the sub-function byte
    #[arg(short = 's', long, global = true)]
    suppress_response: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Management(ManagementCommand),

    #[command(flatten)]
    Data(DataCommand),

    #[command(flatten)]
    Stored(StoredCommand),

    #[command(flatten)]
    Transfer(TransferCommand),

    /// Classify ECU response bytes for a request SID
    DecodeResponse {
        /// SID of the request that was sent
        #[arg(value_parser = parse_u8)]
        sid: u8,

        /// Response bytes (hex)
        #[arg(value_parser = parse_hex_bytes)]
        response: HexBytes,
    },

    /// Look up a negative response code
    Nrc {
        #[arg(value_parser = parse_u8, required_unless_present = "all")]
        code: Option<u8>,

        /// List every standard NRC
        #[arg(long)]
        all: bool,
    },
}

impl Commands {
    fn build_request(&self, builder: &RequestBuilder) -> Result<UdsRequest> {
        match self {
            Self::Management(cmd) => cmd.build(builder),
            Self::Data(cmd) => cmd.build(builder),
            Self::Stored(cmd) => cmd.build(builder),
            Self::Transfer(cmd) => cmd.build(builder),
            Self::DecodeResponse { .. } | Self::Nrc { .. } => {
                bail!("not a request command")
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = config::load(cli.config.as_deref())?;
    let merged = config::merge_with_args(&config, cli.output.map(Into::into), cli.no_color);
    let ctx = OutputContext::new(merged.output, merged.no_color, cli.quiet);

    let builder = RequestBuilder::with_service_ids(merged.service_ids);

    match &cli.command {
        Commands::DecodeResponse { sid, response } => {
            warn_unused_suppress(&cli, &ctx);
            commands::decode_response(*sid, response, &ctx)?;
        }
        Commands::Nrc { code, all } => {
            warn_unused_suppress(&cli, &ctx);
            commands::nrc(*code, *all, &ctx)?;
        }
        command => {
            let mut request = command
                .build_request(&builder)
                .context("Failed to build request")?;
            if cli.suppress_response {
                request = request
                    .suppress_positive_response()
                    .context("Cannot suppress the positive response")?;
            }
            tracing::debug!(sid = request.service_id(), len = request.len(), "Request built");
            ctx.print_request(&request);
        }
    }

    Ok(())
}

fn warn_unused_suppress(cli: &Cli, ctx: &OutputContext) {
    if cli.suppress_response {
        ctx.warn("--suppress-response only applies to request commands");
    }
}
