//! Multi-function sensors (FUNC 14)

use crate::codec;
use crate::telegram::{
    AirQualitySensor, IndoorMultisensor, Telegram, WaterDissolvedOxygen, WaterPh,
};
use eep_core::{EepError, EepResult, PayloadWindow};

/// FUNC code of the multi-function sensor family
pub const FUNC_MULTI_FUNCTION_SENSORS: u8 = 0x14;

/// Minimum data length of any multi-function sensor telegram
pub const MIN_DATA_LENGTH: usize = 8;

/// Multi-function sensor TYPE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiFunctionType {
    /// Indoor temperature, humidity, XYZ acceleration, illumination and contact
    IndoorMultisensor = 0x41,
    /// Water temperature and pH
    WaterPh = 0x52,
    /// Water temperature and dissolved oxygen
    WaterDissolvedOxygen = 0x53,
    /// Temperature, humidity, PM10/PM2.5/PM1.0, HCHO, VOC and CO2
    AirQuality = 0x59,
}

impl MultiFunctionType {
    /// Get the TYPE code
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Get the TYPE from its code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x41 => Some(MultiFunctionType::IndoorMultisensor),
            0x52 => Some(MultiFunctionType::WaterPh),
            0x53 => Some(MultiFunctionType::WaterDissolvedOxygen),
            0x59 => Some(MultiFunctionType::AirQuality),
            _ => None,
        }
    }

    /// Number of data bytes read by this TYPE
    pub fn min_window_len(&self) -> usize {
        match self {
            MultiFunctionType::IndoorMultisensor => 9,
            MultiFunctionType::WaterPh | MultiFunctionType::WaterDissolvedOxygen => MIN_DATA_LENGTH,
            MultiFunctionType::AirQuality => 11,
        }
    }
}

/// Decode a multi-function sensor telegram
pub fn decode(type_code: u8, data: PayloadWindow<'_>) -> EepResult<Telegram> {
    data.require(MIN_DATA_LENGTH)?;

    let sensor_type = MultiFunctionType::from_code(type_code).ok_or(EepError::UnsupportedType {
        func: FUNC_MULTI_FUNCTION_SENSORS,
        type_code,
    })?;
    data.require(sensor_type.min_window_len())?;

    match sensor_type {
        MultiFunctionType::IndoorMultisensor => decode_indoor_multisensor(data),
        MultiFunctionType::WaterPh => decode_water_ph(data),
        MultiFunctionType::WaterDissolvedOxygen => decode_water_dissolved_oxygen(data),
        MultiFunctionType::AirQuality => decode_air_quality(data),
    }
}

fn decode_indoor_multisensor(data: PayloadWindow<'_>) -> EepResult<Telegram> {
    let temperature = codec::temperature10(data.field(0, 2, 6, 0x3FF)?);
    let relative_humidity = codec::relative_humidity(data.field(1, 2, 6, 0xFF)?);
    let illuminance = codec::illuminance(data.field(2, 3, 5, 0x1_FFFF)?);
    let acceleration_status = data.field(4, 1, 3, 0x03)?;
    let acceleration = [
        codec::acceleration10(data.field(4, 2, 1, 0x3FF)?),
        codec::acceleration10(data.field(5, 3, 7, 0x3FF)?),
        codec::acceleration10(data.field(6, 3, 5, 0x3FF)?),
    ];
    let contact_status = data.field(8, 1, 4, 0x01)?;

    Ok(Telegram::IndoorMultisensor(IndoorMultisensor {
        temperature,
        relative_humidity,
        illuminance,
        is_motion_detected: acceleration_status != 0,
        acceleration,
        is_contact_detected: contact_status != 0,
    }))
}

// Bits 0-6 are reserved, the 9-bit temperature fills the rest of the first two bytes.
fn water_temperature(data: PayloadWindow<'_>) -> EepResult<Option<f64>> {
    Ok(codec::temperature9(data.field(0, 2, 0, 0x1FF)?))
}

fn decode_water_ph(data: PayloadWindow<'_>) -> EepResult<Telegram> {
    Ok(Telegram::WaterPh(WaterPh {
        temperature: water_temperature(data)?,
        ph: codec::ph(data.read_u8(2)? as u32),
    }))
}

fn decode_water_dissolved_oxygen(data: PayloadWindow<'_>) -> EepResult<Telegram> {
    Ok(Telegram::WaterDissolvedOxygen(WaterDissolvedOxygen {
        temperature: water_temperature(data)?,
        dissolved_oxygen: codec::dissolved_oxygen(data.read_u8(2)? as u32),
    }))
}

fn decode_air_quality(data: PayloadWindow<'_>) -> EepResult<Telegram> {
    // A humidity of zero means the sensor did not report one; above raw 200 it is out of range.
    let relative_humidity =
        codec::relative_humidity(data.read_u8(0)? as u32).filter(|rh| *rh != 0.0);

    Ok(Telegram::AirQualitySensor(AirQualitySensor {
        relative_humidity,
        temperature: codec::air_temperature(data.field(1, 2, 6, 0x3FF)?),
        pm10: codec::particulate(data.field(2, 2, 3, 0x1FF)?),
        pm2_5: codec::particulate(data.field(3, 2, 4, 0x1FF)?),
        pm1_0: codec::particulate(data.field(4, 2, 3, 0x1FF)?),
        formaldehyde_concentration: codec::formaldehyde(data.field(5, 2, 3, 0x7FF)?),
        volatile_organic_compounds_concentration: codec::volatile_organic_compounds(
            data.read_u16(7)? as u32,
        ),
        carbon_dioxide_concentration: codec::carbon_dioxide(data.field(9, 2, 2, 0x3FFF)?),
    }))
}
