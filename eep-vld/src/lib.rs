//! VLD (Variable-Length Data, RORG `D2`) telegram decoding
//!
//! This crate turns the payload of a VLD telegram into engineering-unit
//! readings. Decoding is a pure function of the profile identifier and the
//! telegram bytes.
//!
//! # Layers
//!
//! - `codec`: scaling primitives shared by all families
//! - `multi_function`, `single_sensor`, `current_clamp`: family decoders (FUNC 14, 15, 32)
//! - `dispatcher`: FUNC resolution and payload window derivation
//! - `telegram`: typed decoded telegrams and their mapping form
//!
//! Reference: http://tools.enocean-alliance.org/EEPViewer/

pub mod codec;
pub mod current_clamp;
pub mod dispatcher;
pub mod multi_function;
pub mod single_sensor;
pub mod telegram;

pub use current_clamp::CurrentClampType;
pub use dispatcher::{DecoderConfig, VldDecoder, VldFunction};
pub use multi_function::MultiFunctionType;
pub use single_sensor::SingleSensorType;
pub use telegram::{
    AirQualitySensor, CurrentClamp, DecodedReading, IndoorMultisensor, PeopleActivityCounter,
    Telegram, WaterDissolvedOxygen, WaterPh,
};
