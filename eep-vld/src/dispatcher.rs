//! Profile dispatcher for VLD telegrams
//!
//! Resolves the FUNC of a profile identifier to its family decoder and hands
//! it the payload window of the telegram.
//!
//! # Telegram layout
//!
//! ```text
//! +------+-----------------------+-----------+--------+
//! | RORG | data (payload window) | sender ID | status |
//! | 1    | n                     | 4         | 1      |
//! +------+-----------------------+-----------+--------+
//! ```

use crate::telegram::Telegram;
use crate::{current_clamp, multi_function, single_sensor};
use eep_core::window::TELEGRAM_TRAILER_LENGTH;
use eep_core::{EepError, EepProfile, EepResult, PayloadWindow, TelegramInput};
use serde::{Deserialize, Serialize};

/// Minimum length of a complete VLD telegram
pub const MIN_TELEGRAM_LENGTH: usize = 8;

/// VLD function group (FUNC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VldFunction {
    /// Multi-function sensors
    MultiFunctionSensors = 0x14,
    /// Single-value sensors
    SingleSensor = 0x15,
    /// AC current clamps
    AcCurrentClamp = 0x32,
}

impl VldFunction {
    /// Get the FUNC code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Get the function group from its FUNC code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x14 => Some(VldFunction::MultiFunctionSensors),
            0x15 => Some(VldFunction::SingleSensor),
            0x32 => Some(VldFunction::AcCurrentClamp),
            _ => None,
        }
    }

    /// Decode the payload window with this family's decoder
    pub fn decode(&self, type_code: u8, data: PayloadWindow<'_>) -> EepResult<Telegram> {
        match self {
            VldFunction::MultiFunctionSensors => multi_function::decode(type_code, data),
            VldFunction::SingleSensor => single_sensor::decode(type_code, data),
            VldFunction::AcCurrentClamp => current_clamp::decode(type_code, data),
        }
    }
}

/// Decoder configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Minimum length of a complete telegram, in bytes
    pub min_telegram_len: usize,
    /// Number of trailing sender ID + status bytes
    pub trailer_len: usize,
}

impl DecoderConfig {
    /// Create a new decoder configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a telegram of `min_telegram_len` bytes cannot
    /// hold the RORG byte and the trailer.
    pub fn new(min_telegram_len: usize, trailer_len: usize) -> EepResult<Self> {
        let config = Self {
            min_telegram_len,
            trailer_len,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> EepResult<()> {
        let framing = self.trailer_len.checked_add(1).ok_or_else(|| {
            EepError::InvalidConfig(format!("trailer_len {} is too large", self.trailer_len))
        })?;
        if self.min_telegram_len < framing {
            return Err(EepError::InvalidConfig(format!(
                "min_telegram_len {} cannot hold RORG and {} trailer bytes",
                self.min_telegram_len, self.trailer_len
            )));
        }
        Ok(())
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            min_telegram_len: MIN_TELEGRAM_LENGTH,
            trailer_len: TELEGRAM_TRAILER_LENGTH,
        }
    }
}

/// VLD telegram decoder
///
/// Stateless apart from its configuration; one instance may be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct VldDecoder {
    config: DecoderConfig,
}

impl VldDecoder {
    /// Create a new decoder
    pub fn new(config: DecoderConfig) -> EepResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the decoder configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a telegram given as profile string and raw input
    ///
    /// Normalizes both inputs before decoding.
    pub fn decode_input<'a>(
        &self,
        profile: &str,
        input: impl Into<TelegramInput<'a>>,
    ) -> EepResult<Telegram> {
        let profile = EepProfile::parse(profile)?;
        let telegram = input.into().to_bytes()?;
        self.decode(&profile, &telegram)
    }

    /// Decode a complete telegram
    ///
    /// # Arguments
    ///
    /// * `profile` - EEP of the sending device
    /// * `telegram` - RORG byte, data bytes, sender ID and status
    pub fn decode(&self, profile: &EepProfile, telegram: &[u8]) -> EepResult<Telegram> {
        if !profile.is_vld() {
            return Err(EepError::UnsupportedRorg(profile.rorg()));
        }
        if telegram.len() < self.config.min_telegram_len {
            return Err(EepError::TooShort {
                needed: self.config.min_telegram_len,
                actual: telegram.len(),
            });
        }

        let data = PayloadWindow::from_telegram(telegram, self.config.trailer_len)?;
        let function =
            VldFunction::from_code(profile.func()).ok_or(EepError::UnsupportedFunc(profile.func()))?;

        log::trace!(
            "Decoding {} ({:?}) with {} data bytes",
            profile,
            function,
            data.len()
        );
        function.decode(profile.type_code(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_json(profile: &str, telegram: &str) -> serde_json::Value {
        VldDecoder::default()
            .decode_input(profile, telegram)
            .unwrap()
            .to_json()
            .unwrap()
    }

    #[test]
    fn test_indoor_multisensor() {
        assert_eq!(
            decode_json("D2-14-41", "d29165c02963e4f5d8000414006980"),
            json!({
                "temperature": 18.1,
                "relativeHumidity": 75.5,
                "illuminance": 331,
                "isMotionDetected": [false],
                "acceleration": [-0.01, -0.045, 1.02],
                "isContactDetected": [false]
            })
        );
    }

    #[test]
    fn test_people_activity_counter() {
        assert_eq!(
            decode_json("D2-15-00", "d20a30390414006980"),
            json!({ "isMotionDetected": [true], "passageCounts": [12345] })
        );
    }

    #[test]
    fn test_triple_channel_clamp() {
        assert_eq!(
            decode_json("D2-32-02", "d2004d214100100414006980"),
            json!({ "amperages": [1234, 321, 1] })
        );
    }

    #[test]
    fn test_air_quality_sensor() {
        assert_eq!(
            decode_json("D2-14-59", "d28a3e95555554d230390a680414006980"),
            json!({
                "relativeHumidity": 69,
                "temperature": 25,
                "pm10": 170,
                "pm2.5": 341,
                "pm1.0": 170,
                "formaldehydeConcentration": 0.666,
                "volatileOrganicCompoundsConcentration": 12.345,
                "carbonDioxideConcentration": 666
            })
        );
    }

    #[test]
    fn test_byte_input() {
        let telegram: [u8; 9] = [0xD2, 0x0A, 0x30, 0x39, 0x04, 0x14, 0x00, 0x69, 0x80];
        let decoded = VldDecoder::default().decode_input("d21500", &telegram).unwrap();
        assert_eq!(
            decoded.to_json().unwrap(),
            json!({ "isMotionDetected": [true], "passageCounts": [12345] })
        );
    }

    #[test]
    fn test_non_vld_rorg() {
        let result = VldDecoder::default().decode_input("A5-14-41", "d29165c02963e4f5d8000414006980");
        assert!(matches!(result, Err(EepError::UnsupportedRorg(0xA5))));
    }

    #[test]
    fn test_telegram_too_short() {
        let result = VldDecoder::default().decode_input("D2-15-00", "d20a303904140069");
        assert!(matches!(result, Err(EepError::TooShort { needed: 3, actual: 2 })));

        let result = VldDecoder::default().decode_input("D2-15-00", "d20a3004140069");
        assert!(matches!(result, Err(EepError::TooShort { needed: 8, actual: 7 })));
    }

    #[test]
    fn test_unknown_func() {
        let result = VldDecoder::default().decode_input("D2-01-00", "d20a30390414006980");
        assert!(matches!(result, Err(EepError::UnsupportedFunc(0x01))));
    }

    #[test]
    fn test_invalid_inputs() {
        let decoder = VldDecoder::default();
        assert!(matches!(
            decoder.decode_input("fail", "d20a30390414006980"),
            Err(EepError::InvalidProfile(_))
        ));
        assert!(matches!(
            decoder.decode_input("D2-15-00", "xyz"),
            Err(EepError::InvalidPayload(_))
        ));
        assert!(matches!(
            decoder.decode_input("D2-15-00", ""),
            Err(EepError::TooShort { needed: 8, actual: 0 })
        ));
    }

    #[test]
    fn test_decode_is_pure() {
        let decoder = VldDecoder::default();
        let first = decoder.decode_input("D2-14-59", "d28a3e95555554d230390a680414006980").unwrap();
        let second = decoder.decode_input("D2-14-59", "d28a3e95555554d230390a680414006980").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_function_codes() {
        for code in [0x14, 0x15, 0x32] {
            assert_eq!(VldFunction::from_code(code).unwrap().code(), code);
        }
        assert_eq!(VldFunction::from_code(0x20), None);
    }

    #[test]
    fn test_config() {
        assert_eq!(
            DecoderConfig::default(),
            DecoderConfig::new(MIN_TELEGRAM_LENGTH, TELEGRAM_TRAILER_LENGTH).unwrap()
        );
        assert!(DecoderConfig::new(4, 5).is_err());

        let config: DecoderConfig = serde_json::from_value(json!({ "min_telegram_len": 10 })).unwrap();
        assert_eq!(config.trailer_len, TELEGRAM_TRAILER_LENGTH);

        let decoder = VldDecoder::new(config).unwrap();
        assert!(decoder.decode_input("D2-15-00", "d20a30390414006980").is_err());
    }

    #[test]
    fn test_config_trailer_overflow() {
        let config: DecoderConfig =
            serde_json::from_value(json!({ "min_telegram_len": 8, "trailer_len": usize::MAX }))
                .unwrap();
        assert!(matches!(VldDecoder::new(config), Err(EepError::InvalidConfig(_))));
        assert!(matches!(
            DecoderConfig::new(usize::MAX, usize::MAX),
            Err(EepError::InvalidConfig(_))
        ));
    }
}
