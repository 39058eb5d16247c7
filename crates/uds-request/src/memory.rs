//! Memory address and size encoding (addressAndLengthFormatIdentifier)

use crate::error::RequestError;

/// Largest address or size field the builders support (u64)
pub const MAX_FIELD_LEN: u8 = 8;

/// Decoded addressAndLengthFormatIdentifier
///
/// Low nibble is the memoryAddress length, high nibble the memorySize length,
/// both in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressAndLengthFormat {
    pub address_len: u8,
    pub size_len: u8,
}

impl AddressAndLengthFormat {
    pub fn new(address_len: u8, size_len: u8) -> Result<Self, RequestError> {
        let valid = 1..=MAX_FIELD_LEN;
        if !valid.contains(&address_len) || !valid.contains(&size_len) {
            return Err(RequestError::InvalidFormatIdentifier(
                (size_len << 4) | (address_len & 0x0F),
            ));
        }
        Ok(Self {
            address_len,
            size_len,
        })
    }

    pub fn from_byte(alfid: u8) -> Result<Self, RequestError> {
        let address_len = alfid & 0x0F;
        let size_len = alfid >> 4;
        if !(1..=MAX_FIELD_LEN).contains(&address_len) || !(1..=MAX_FIELD_LEN).contains(&size_len)
        {
            return Err(RequestError::InvalidFormatIdentifier(alfid));
        }
        Ok(Self {
            address_len,
            size_len,
        })
    }

    /// Smallest format that holds both values
    pub fn fitting(address: u64, size: u64) -> Self {
        Self {
            address_len: minimal_len(address),
            size_len: minimal_len(size),
        }
    }

    pub fn to_byte(self) -> u8 {
        (self.size_len << 4) | self.address_len
    }

    /// memoryAddress followed by memorySize, each at its declared width
    pub fn encode(self, address: u64, size: u64) -> Result<Vec<u8>, RequestError> {
        let mut out = encode_sized("memoryAddress", address, self.address_len as usize)?;
        out.extend(encode_sized("memorySize", size, self.size_len as usize)?);
        Ok(out)
    }
}

/// Big-endian encoding of `value` in exactly `len` bytes
pub fn encode_sized(field: &'static str, value: u64, len: usize) -> Result<Vec<u8>, RequestError> {
    if len == 0 || len > MAX_FIELD_LEN as usize {
        return Err(RequestError::InvalidArgument(format!(
            "{field} length must be 1..={MAX_FIELD_LEN} bytes, got {len}"
        )));
    }
    if len < 8 && value >> (len * 8) != 0 {
        return Err(RequestError::ValueOutOfRange { field, value, len });
    }
    let bytes = value.to_be_bytes();
    Ok(bytes[bytes.len() - len..].to_vec())
}

/// Shortest big-endian representation; zero encodes as one byte
pub fn minimal_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    bytes[bytes.len() - minimal_len(value) as usize..].to_vec()
}

fn minimal_len(value: u64) -> u8 {
    let bits = 64 - value.leading_zeros();
    bits.div_ceil(8).max(1) as u8
}
