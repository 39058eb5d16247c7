//! Value parsers for numeric and hex command-line arguments

use std::str::FromStr;

use uds_request::sub_function::{reset_type, routine_control_type, session_type};
use uds_request::{MemoryRegion, SourceDataIdentifier};

/// Byte record given as hex (`"0A1B"`, `"0A 1B"`, `"0x0A,0x1B"`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for HexBytes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = Vec::new();
        for token in s.split(|c: char| c.is_whitespace() || c == ',' || c == ':') {
            if token.is_empty() {
                continue;
            }
            let token = strip_hex_prefix(token).unwrap_or(token);
            bytes.extend(hex::decode(token).map_err(|e| format!("invalid hex '{token}': {e}"))?);
        }
        Ok(Self(bytes))
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

/// Decimal or `0x`-prefixed hexadecimal integer
pub fn parse_u64(s: &str) -> Result<u64, String> {
    let s = s.trim().replace('_', "");
    match strip_hex_prefix(&s) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    }
    .map_err(|e| format!("invalid number '{s}': {e}"))
}

pub fn parse_u32(s: &str) -> Result<u32, String> {
    narrow(s, parse_u64(s)?)
}

pub fn parse_u16(s: &str) -> Result<u16, String> {
    narrow(s, parse_u64(s)?)
}

pub fn parse_u8(s: &str) -> Result<u8, String> {
    narrow(s, parse_u64(s)?)
}

fn narrow<T: TryFrom<u64>>(s: &str, value: u64) -> Result<T, String> {
    T::try_from(value).map_err(|_| {
        format!(
            "{s} is out of range (max 0x{:X})",
            u64::MAX >> (64 - 8 * std::mem::size_of::<T>())
        )
    })
}

pub fn parse_hex_bytes(s: &str) -> Result<HexBytes, String> {
    s.parse()
}

/// Session type by name or number
pub fn parse_session_type(s: &str) -> Result<u8, String> {
    match s.to_lowercase().as_str() {
        "default" => Ok(session_type::DEFAULT_SESSION),
        "programming" => Ok(session_type::PROGRAMMING_SESSION),
        "extended" => Ok(session_type::EXTENDED_SESSION),
        "safety" => Ok(session_type::SAFETY_SYSTEM_DIAGNOSTIC_SESSION),
        other => parse_u8(other).map_err(|_| {
            format!("unknown session type '{s}'. Valid: default, programming, extended, safety or a number")
        }),
    }
}

/// Reset type by name or number
pub fn parse_reset_type(s: &str) -> Result<u8, String> {
    match s.to_lowercase().as_str() {
        "hard" => Ok(reset_type::HARD_RESET),
        "key-off-on" | "key_off_on" => Ok(reset_type::KEY_OFF_ON_RESET),
        "soft" => Ok(reset_type::SOFT_RESET),
        "enable-rapid-shutdown" => Ok(reset_type::ENABLE_RAPID_POWER_SHUTDOWN),
        "disable-rapid-shutdown" => Ok(reset_type::DISABLE_RAPID_POWER_SHUTDOWN),
        other => parse_u8(other).map_err(|_| {
            format!("unknown reset type '{s}'. Valid: hard, key-off-on, soft, enable-rapid-shutdown, disable-rapid-shutdown or a number")
        }),
    }
}

/// Routine control type by name or number
pub fn parse_routine_action(s: &str) -> Result<u8, String> {
    match s.to_lowercase().as_str() {
        "start" => Ok(routine_control_type::START_ROUTINE),
        "stop" => Ok(routine_control_type::STOP_ROUTINE),
        "result" | "results" => Ok(routine_control_type::REQUEST_ROUTINE_RESULTS),
        other => parse_u8(other)
            .map_err(|_| format!("unknown routine action '{s}'. Valid: start, stop, result or a number")),
    }
}

/// `DID:POSITION:SIZE`, e.g. `0x1234:1:2`
pub fn parse_source_did(s: &str) -> Result<SourceDataIdentifier, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [did, position, size] = parts.as_slice() else {
        return Err(format!("expected DID:POSITION:SIZE, got '{s}'"));
    };
    Ok(SourceDataIdentifier {
        did: parse_u16(did)?,
        position: parse_u8(position)?,
        memory_size: parse_u8(size)?,
    })
}

/// `ADDRESS:SIZE`, e.g. `0x21000000:4`
pub fn parse_memory_region(s: &str) -> Result<MemoryRegion, String> {
    let (address, size) = s
        .split_once(':')
        .ok_or_else(|| format!("expected ADDRESS:SIZE, got '{s}'"))?;
    Ok(MemoryRegion {
        address: parse_u64(address)?,
        size: parse_u64(size)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("16", 16)]
    #[case("0x10", 16)]
    #[case("0XFF", 255)]
    #[case("0x0800_0000", 0x0800_0000)]
    fn test_parse_u64(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_u64(input).unwrap(), expected);
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(parse_u8("0xFF").unwrap(), 0xFF);
        assert!(parse_u8("0x100").is_err());
        assert_eq!(parse_u16("0xF190").unwrap(), 0xF190);
        assert!(parse_u16("70000").is_err());
        assert!(parse_u32("0x1_0000_0000").is_err());
    }

    #[rstest]
    #[case("0A1B", vec![0x0A, 0x1B])]
    #[case("0A 1B", vec![0x0A, 0x1B])]
    #[case("0x0A,0x1B", vec![0x0A, 0x1B])]
    #[case("", vec![])]
    fn test_hex_bytes(#[case] input: &str, #[case] expected: Vec<u8>) {
        assert_eq!(parse_hex_bytes(input).unwrap(), HexBytes(expected));
    }

    #[test]
    fn test_hex_bytes_rejects_odd_length() {
        assert!(parse_hex_bytes("ABC").is_err());
    }

    #[test]
    fn test_named_values() {
        assert_eq!(parse_session_type("Extended").unwrap(), 0x03);
        assert_eq!(parse_session_type("0x60").unwrap(), 0x60);
        assert!(parse_session_type("turbo").is_err());
        assert_eq!(parse_reset_type("key-off-on").unwrap(), 0x02);
        assert_eq!(parse_routine_action("results").unwrap(), 0x03);
    }

    #[test]
    fn test_compound_values() {
        let source = parse_source_did("0x1234:1:2").unwrap();
        assert_eq!(source.did, 0x1234);
        assert_eq!(source.position, 1);
        assert_eq!(source.memory_size, 2);
        assert!(parse_source_did("0x1234:1").is_err());

        let region = parse_memory_region("0x21000000:4").unwrap();
        assert_eq!(region.address, 0x2100_0000);
        assert_eq!(region.size, 4);
        assert!(parse_memory_region("0x21000000").is_err());
    }
}
