//! Input normalization for raw telegrams

use crate::error::{EepError, EepResult};

/// Raw telegram as supplied by the caller
///
/// Gateways deliver telegrams either as a byte buffer or as a hexadecimal
/// string. Both are normalized into a canonical byte sequence before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelegramInput<'a> {
    /// Raw octets
    Bytes(&'a [u8]),
    /// Case-insensitive hexadecimal string
    Hex(&'a str),
}

impl<'a> TelegramInput<'a> {
    /// Normalize the input into a byte sequence
    ///
    /// # Errors
    ///
    /// Returns `EepError::InvalidPayload` if a hexadecimal string contains
    /// non-hexadecimal characters or an odd number of digits.
    pub fn to_bytes(&self) -> EepResult<Vec<u8>> {
        match self {
            TelegramInput::Bytes(bytes) => Ok(bytes.to_vec()),
            TelegramInput::Hex(s) => hex::decode(s)
                .map_err(|e| EepError::InvalidPayload(format!("{}: {:?}", e, s))),
        }
    }
}

impl<'a> From<&'a [u8]> for TelegramInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        TelegramInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for TelegramInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        TelegramInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for TelegramInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        TelegramInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for TelegramInput<'a> {
    fn from(s: &'a str) -> Self {
        TelegramInput::Hex(s)
    }
}

impl<'a> From<&'a String> for TelegramInput<'a> {
    fn from(s: &'a String) -> Self {
        TelegramInput::Hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_input() {
        let input = TelegramInput::from("d20A3039");
        assert_eq!(input.to_bytes().unwrap(), vec![0xD2, 0x0A, 0x30, 0x39]);
    }

    #[test]
    fn test_bytes_input() {
        let data = [0xD2u8, 0x00, 0x4D];
        let input = TelegramInput::from(&data);
        assert_eq!(input.to_bytes().unwrap(), data.to_vec());
    }

    #[test]
    fn test_invalid_hex_input() {
        assert!(TelegramInput::from("xyz").to_bytes().is_err());
        assert!(TelegramInput::from("d2f").to_bytes().is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(TelegramInput::from("").to_bytes().unwrap().is_empty());
        assert!(TelegramInput::from(&Vec::<u8>::new()).to_bytes().unwrap().is_empty());
    }
}
