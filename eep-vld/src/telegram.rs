//! Decoded VLD telegrams
//!
//! Every supported profile decodes into a typed struct. Readings whose raw
//! value is out of range are `None`. How an absent reading appears in the
//! mapping form depends on the profile: the indoor multisensor and the water
//! sensors emit `null`, the air quality sensor drops the key.

use eep_core::EepResult;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Mapping from measurement name to value
pub type DecodedReading = serde_json::Map<String, Value>;

/// Serialize a single-channel reading as a one-element list
fn single_channel<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    [value].serialize(serializer)
}

/// A scaled reading; whole values are written as integers
struct Number(f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Readings stay far below 2^53, where every whole f64 is an exact i64.
        if self.0.is_finite() && self.0.fract() == 0.0 && self.0.abs() < 9.0e15 {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

fn optional_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    value.map(Number).serialize(serializer)
}

fn optional_numbers<S: Serializer>(
    values: &[Option<f64>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|value| value.map(Number)))
}

fn numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|value| Number(*value)))
}

/// Indoor multisensor (D2-14-41)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndoorMultisensor {
    /// Temperature in °C
    #[serde(serialize_with = "optional_number")]
    pub temperature: Option<f64>,
    /// Relative humidity in %
    #[serde(serialize_with = "optional_number")]
    pub relative_humidity: Option<f64>,
    /// Illuminance in lux
    pub illuminance: Option<u32>,
    #[serde(serialize_with = "single_channel")]
    pub is_motion_detected: bool,
    /// X, Y and Z acceleration in g
    #[serde(serialize_with = "optional_numbers")]
    pub acceleration: [Option<f64>; 3],
    #[serde(serialize_with = "single_channel")]
    pub is_contact_detected: bool,
}

/// Water properties sensor reporting pH (D2-14-52)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterPh {
    /// Water temperature in °C
    #[serde(serialize_with = "optional_number")]
    pub temperature: Option<f64>,
    #[serde(rename = "pH", serialize_with = "optional_number")]
    pub ph: Option<f64>,
}

/// Water properties sensor reporting dissolved oxygen (D2-14-53)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterDissolvedOxygen {
    /// Water temperature in °C
    #[serde(serialize_with = "optional_number")]
    pub temperature: Option<f64>,
    /// Dissolved oxygen in % saturation
    #[serde(serialize_with = "optional_number")]
    pub dissolved_oxygen: Option<f64>,
}

/// Combined temperature, humidity, particulate, CO2, formaldehyde and VOC sensor (D2-14-59)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySensor {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "optional_number")]
    pub relative_humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "optional_number")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pm10: Option<u16>,
    #[serde(rename = "pm2.5", skip_serializing_if = "Option::is_none")]
    pub pm2_5: Option<u16>,
    #[serde(rename = "pm1.0", skip_serializing_if = "Option::is_none")]
    pub pm1_0: Option<u16>,
    /// Formaldehyde in ppm
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "optional_number")]
    pub formaldehyde_concentration: Option<f64>,
    /// VOC in ppm
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "optional_number")]
    pub volatile_organic_compounds_concentration: Option<f64>,
    /// CO2 in ppm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_dioxide_concentration: Option<u16>,
}

/// People activity counter (D2-15-00)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleActivityCounter {
    #[serde(serialize_with = "single_channel")]
    pub is_motion_detected: bool,
    #[serde(rename = "passageCounts", serialize_with = "single_channel")]
    pub passage_count: u16,
}

/// AC current clamp with one to three channels (D2-32-00..02)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentClamp {
    /// Power fail flag; not part of the mapping form
    #[serde(skip)]
    pub is_power_fail: bool,
    /// Current per channel in A
    #[serde(serialize_with = "numbers")]
    pub amperages: Vec<f64>,
}

/// A decoded VLD telegram
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Telegram {
    IndoorMultisensor(IndoorMultisensor),
    WaterPh(WaterPh),
    WaterDissolvedOxygen(WaterDissolvedOxygen),
    AirQualitySensor(AirQualitySensor),
    PeopleActivityCounter(PeopleActivityCounter),
    CurrentClamp(CurrentClamp),
}

impl Telegram {
    /// Convert the telegram into its mapping form
    pub fn to_reading(&self) -> EepResult<DecodedReading> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }

    /// Convert the telegram into a JSON value
    pub fn to_json(&self) -> EepResult<Value> {
        Ok(Value::Object(self.to_reading()?))
    }
}
