//! Single-value sensors (FUNC 15)

use crate::telegram::{PeopleActivityCounter, Telegram};
use eep_core::{EepError, EepResult, PayloadWindow};

/// FUNC code of the single sensor family
pub const FUNC_SINGLE_SENSOR: u8 = 0x15;

/// Minimum data length of any single sensor telegram
pub const MIN_DATA_LENGTH: usize = 3;

/// Single sensor TYPE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleSensorType {
    /// People activity counter (presence + passage count)
    PeopleActivityCounter = 0x00,
}

impl SingleSensorType {
    /// Get the TYPE code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Get the TYPE from its code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(SingleSensorType::PeopleActivityCounter),
            _ => None,
        }
    }

    /// Number of data bytes read by this TYPE
    pub fn min_window_len(&self) -> usize {
        match self {
            SingleSensorType::PeopleActivityCounter => MIN_DATA_LENGTH,
        }
    }
}

/// Decode a single sensor telegram
pub fn decode(type_code: u8, data: PayloadWindow<'_>) -> EepResult<Telegram> {
    data.require(MIN_DATA_LENGTH)?;

    let sensor_type = SingleSensorType::from_code(type_code).ok_or(EepError::UnsupportedType {
        func: FUNC_SINGLE_SENSOR,
        type_code,
    })?;
    data.require(sensor_type.min_window_len())?;

    match sensor_type {
        SingleSensorType::PeopleActivityCounter => decode_people_activity_counter(data),
    }
}

fn decode_people_activity_counter(data: PayloadWindow<'_>) -> EepResult<Telegram> {
    // Presence status 0 means "present"
    let presence_status = data.field(0, 1, 6, 0x03)?;

    Ok(Telegram::PeopleActivityCounter(PeopleActivityCounter {
        is_motion_detected: presence_status == 0,
        passage_count: data.read_u16(1)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_activity_counter() {
        let data = [0x0A, 0x30, 0x39];
        let telegram = decode(0x00, PayloadWindow::new(&data)).unwrap();
        assert_eq!(
            telegram,
            Telegram::PeopleActivityCounter(PeopleActivityCounter {
                is_motion_detected: true,
                passage_count: 12345,
            })
        );
    }

    #[test]
    fn test_people_activity_counter_absent() {
        let data = [0x40, 0xFF, 0xFF];
        let telegram = decode(0x00, PayloadWindow::new(&data)).unwrap();
        assert_eq!(
            telegram,
            Telegram::PeopleActivityCounter(PeopleActivityCounter {
                is_motion_detected: false,
                passage_count: 65535,
            })
        );
    }

    #[test]
    fn test_too_short() {
        let data = [0x0A, 0x30];
        let result = decode(0x00, PayloadWindow::new(&data));
        assert!(matches!(result, Err(EepError::TooShort { needed: 3, actual: 2 })));
    }

    #[test]
    fn test_type_codes() {
        let sensor_type = SingleSensorType::from_code(0x00).unwrap();
        assert_eq!(sensor_type.code(), 0x00);
        assert_eq!(sensor_type.min_window_len(), 3);
    }

    #[test]
    fn test_unknown_type() {
        let data = [0x0A, 0x30, 0x39];
        let result = decode(0x01, PayloadWindow::new(&data));
        assert!(matches!(
            result,
            Err(EepError::UnsupportedType { func: 0x15, type_code: 0x01 })
        ));
    }
}
