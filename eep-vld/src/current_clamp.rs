//! AC current clamps (FUNC 32)

use crate::telegram::{CurrentClamp, Telegram};
use eep_core::{EepError, EepResult, PayloadWindow};

/// FUNC code of the AC current clamp family
pub const FUNC_AC_CURRENT_CLAMP: u8 = 0x32;

/// Minimum data length of any current clamp telegram
pub const MIN_DATA_LENGTH: usize = 3;

const POWER_FAIL_FLAG: u8 = 0x80;
const DIVISOR_FLAG: u8 = 0x40;

/// AC current clamp TYPE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentClampType {
    SingleChannel = 0x00,
    DualChannel = 0x01,
    TripleChannel = 0x02,
}

impl CurrentClampType {
    /// Get the TYPE code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Get the TYPE from its code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(CurrentClampType::SingleChannel),
            0x01 => Some(CurrentClampType::DualChannel),
            0x02 => Some(CurrentClampType::TripleChannel),
            _ => None,
        }
    }

    /// Number of measurement channels
    pub fn channels(&self) -> usize {
        match self {
            CurrentClampType::SingleChannel => 1,
            CurrentClampType::DualChannel => 2,
            CurrentClampType::TripleChannel => 3,
        }
    }

    /// Number of data bytes read by this TYPE
    pub fn min_window_len(&self) -> usize {
        match self {
            CurrentClampType::SingleChannel => MIN_DATA_LENGTH,
            CurrentClampType::DualChannel => 4,
            CurrentClampType::TripleChannel => 6,
        }
    }
}

/// Decode an AC current clamp telegram
pub fn decode(type_code: u8, data: PayloadWindow<'_>) -> EepResult<Telegram> {
    data.require(MIN_DATA_LENGTH)?;

    let clamp_type = CurrentClampType::from_code(type_code).ok_or(EepError::UnsupportedType {
        func: FUNC_AC_CURRENT_CLAMP,
        type_code,
    })?;
    data.require(clamp_type.min_window_len())?;

    let status = data.read_u8(0)?;
    let divisor = if status & DIVISOR_FLAG == DIVISOR_FLAG {
        10.0
    } else {
        1.0
    };

    // Channel 1 and 3 sit in the upper 12 bits of their window, channel 2 in the lower 11.
    let raw_channels = [
        data.field(1, 2, 4, 0xFFF),
        data.field(2, 2, 0, 0x7FF),
        data.field(4, 2, 4, 0xFFF),
    ];
    let amperages = raw_channels
        .into_iter()
        .take(clamp_type.channels())
        .map(|raw| raw.map(|value| value as f64 / divisor))
        .collect::<EepResult<Vec<f64>>>()?;

    Ok(Telegram::CurrentClamp(CurrentClamp {
        is_power_fail: status & POWER_FAIL_FLAG == POWER_FAIL_FLAG,
        amperages,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_channel() {
        let data = [0x00, 0x4D, 0x21, 0x41, 0x00, 0x10];
        let telegram = decode(0x02, PayloadWindow::new(&data)).unwrap();
        assert_eq!(
            telegram,
            Telegram::CurrentClamp(CurrentClamp {
                is_power_fail: false,
                amperages: vec![1234.0, 321.0, 1.0],
            })
        );
    }

    #[test]
    fn test_single_channel_with_divisor() {
        let data = [0xC0, 0x4D, 0x20];
        let telegram = decode(0x00, PayloadWindow::new(&data)).unwrap();
        assert_eq!(
            telegram,
            Telegram::CurrentClamp(CurrentClamp {
                is_power_fail: true,
                amperages: vec![123.4],
            })
        );
    }

    #[test]
    fn test_dual_channel() {
        let data = [0x00, 0x00, 0x1F, 0xFF];
        let telegram = decode(0x01, PayloadWindow::new(&data)).unwrap();
        assert_eq!(
            telegram,
            Telegram::CurrentClamp(CurrentClamp {
                is_power_fail: false,
                amperages: vec![1.0, 2047.0],
            })
        );
    }

    #[test]
    fn test_channel_count_needs_data() {
        let data = [0x00, 0x4D, 0x21, 0x41];
        let result = decode(0x02, PayloadWindow::new(&data));
        assert!(matches!(result, Err(EepError::TooShort { needed: 6, actual: 4 })));
        assert!(decode(0x01, PayloadWindow::new(&data)).is_ok());
    }

    #[test]
    fn test_unknown_type() {
        let data = [0x00, 0x4D, 0x21];
        let result = decode(0x03, PayloadWindow::new(&data));
        assert!(matches!(
            result,
            Err(EepError::UnsupportedType { func: 0x32, type_code: 0x03 })
        ));
    }
}
