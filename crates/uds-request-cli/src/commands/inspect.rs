//! Response decoding and NRC lookup

use anyhow::{bail, Result};
use uds_request::{classify_response, NegativeResponseCode, Response};

use crate::args::HexBytes;
use crate::output::{nrc_line, NrcRow, OutputContext};

/// Classify response bytes against the SID of the request that caused them
pub fn decode_response(request_sid: u8, response: &HexBytes, ctx: &OutputContext) -> Result<()> {
    let response = classify_response(request_sid, response.as_slice())?;

    let text = match &response {
        Response::Positive { service_id, payload } => format!(
            "positive response to 0x{:02X}: {}",
            service_id,
            hex::encode_upper(payload)
        ),
        Response::Negative { service_id, nrc } => {
            format!("negative response to 0x{:02X}: {}", service_id, nrc_line(*nrc))
        }
    };

    if response.is_response_pending() {
        ctx.info("Server needs more time; wait for the final response");
    }

    ctx.print_value(&response, &text);
    Ok(())
}

/// Look up one NRC, or list them all
pub fn nrc(code: Option<u8>, all: bool, ctx: &OutputContext) -> Result<()> {
    if all {
        let rows: Vec<NrcRow> = NegativeResponseCode::ALL
            .iter()
            .copied()
            .map(NrcRow::from)
            .collect();
        ctx.print_rows(&rows);
        return Ok(());
    }

    let Some(code) = code else {
        bail!("Give an NRC value or --all");
    };

    let nrc = NegativeResponseCode::from(code);
    ctx.print_value(&NrcRow::from(nrc), &nrc_line(nrc));
    Ok(())
}
