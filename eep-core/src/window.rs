//! Payload window and bit-field extraction for VLD telegrams

use crate::error::{EepError, EepResult};
use bytes::Buf;

/// Length of the sender ID (4 bytes) plus status byte trailing every telegram
pub const TELEGRAM_TRAILER_LENGTH: usize = 5;

/// The data bytes of a telegram
///
/// Excludes the leading RORG echo and the trailing sender ID + status bytes.
/// Fields inside the window are big-endian and bit-packed, so most readings
/// are extracted with [`PayloadWindow::field`]: read a multi-byte window,
/// shift away the bits of trailing fields and mask to the field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadWindow<'a> {
    data: &'a [u8],
}

impl<'a> PayloadWindow<'a> {
    /// Create a window over already-trimmed data bytes
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Create a window from a complete telegram
    ///
    /// # Arguments
    ///
    /// * `telegram` - RORG byte, data bytes, sender ID and status
    /// * `trailer_len` - Number of trailing bytes to discard
    ///
    /// # Errors
    ///
    /// Returns `EepError::TooShort` if the telegram cannot hold the RORG byte
    /// and the trailer.
    pub fn from_telegram(telegram: &'a [u8], trailer_len: usize) -> EepResult<Self> {
        let needed = trailer_len.checked_add(1).unwrap_or(usize::MAX);
        if telegram.len() < needed {
            return Err(EepError::TooShort {
                needed,
                actual: telegram.len(),
            });
        }
        Ok(Self::new(&telegram[1..telegram.len() - trailer_len]))
    }

    /// Number of data bytes in the window
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the window as a byte slice
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Enforce a minimum window length
    pub fn require(&self, min_len: usize) -> EepResult<()> {
        if self.data.len() < min_len {
            return Err(EepError::TooShort {
                needed: min_len,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Read a single byte
    pub fn read_u8(&self, offset: usize) -> EepResult<u8> {
        Ok(self.read_uint(offset, 1)? as u8)
    }

    /// Read a big-endian 16-bit value
    pub fn read_u16(&self, offset: usize) -> EepResult<u16> {
        Ok(self.read_uint(offset, 2)? as u16)
    }

    /// Read a big-endian unsigned integer of `n_bytes` (1-4) bytes
    pub fn read_uint(&self, offset: usize, n_bytes: usize) -> EepResult<u32> {
        if n_bytes == 0 || n_bytes > 4 {
            return Err(EepError::InvalidPayload(format!(
                "Unsupported field window of {} bytes",
                n_bytes
            )));
        }
        let end = offset + n_bytes;
        if end > self.data.len() {
            return Err(EepError::TooShort {
                needed: end,
                actual: self.data.len(),
            });
        }
        let mut buf = &self.data[offset..end];
        Ok(buf.get_uint(n_bytes) as u32)
    }

    /// Extract a bit-packed field
    ///
    /// Reads `n_bytes` starting at `offset`, shifts right by `shift` and
    /// applies `mask`.
    pub fn field(&self, offset: usize, n_bytes: usize, shift: u32, mask: u32) -> EepResult<u32> {
        Ok((self.read_uint(offset, n_bytes)? >> shift) & mask)
    }
}
