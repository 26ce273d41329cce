//! EnOcean Equipment Profile (EEP) telegram decoding
//!
//! Turns the raw payload of a Variable-Length Data (VLD) telegram plus the
//! profile identifier of the sending device into engineering-unit readings.
//!
//! # Architecture
//!
//! - `eep-core`: error type, profile identifier, input normalization, payload window
//! - `eep-vld`: field scaling primitives, family decoders and the dispatcher
//!
//! # Supported profiles
//!
//! | Profile | Device |
//! |---|---|
//! | D2-14-41 | Indoor multisensor (temperature, humidity, illuminance, acceleration, contact) |
//! | D2-14-52 | Water temperature and pH |
//! | D2-14-53 | Water temperature and dissolved oxygen |
//! | D2-14-59 | Temperature, humidity, particulate matter, HCHO, VOC and CO2 |
//! | D2-15-00 | People activity counter |
//! | D2-32-00/01/02 | Single, dual and triple channel AC current clamp |
//!
//! # Usage
//!
//! ```
//! let reading = eep::process_vld_telegram("D2-15-00", "d20a30390414006980").unwrap();
//! assert_eq!(reading["passageCounts"][0], 12345);
//! ```

pub use eep_core::{EepError, EepProfile, EepResult, PayloadWindow, TelegramInput, RORG_VLD};
pub use eep_vld::*;

/// Decode a VLD telegram into its typed form
///
/// Returns `None` for a malformed profile identifier or payload, an
/// unsupported profile, or a telegram too short for its profile.
pub fn decode_telegram<'a>(profile: &str, payload: impl Into<TelegramInput<'a>>) -> Option<Telegram> {
    match VldDecoder::default().decode_input(profile, payload) {
        Ok(telegram) => Some(telegram),
        Err(e) => {
            log::debug!("No result for profile {:?}: {}", profile, e);
            None
        }
    }
}

/// Decode a VLD telegram into a mapping of measurement names to values
///
/// Returns `None` under the same conditions as [`decode_telegram`].
pub fn process_vld_telegram<'a>(
    profile: &str,
    payload: impl Into<TelegramInput<'a>>,
) -> Option<DecodedReading> {
    let telegram = decode_telegram(profile, payload)?;
    match telegram.to_reading() {
        Ok(reading) => Some(reading),
        Err(e) => {
            log::debug!("Failed to build reading for profile {:?}: {}", profile, e);
            None
        }
    }
}
