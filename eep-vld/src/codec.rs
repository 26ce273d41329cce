//! Field scaling primitives
//!
//! Each primitive maps a raw unsigned field value to a physical quantity and
//! returns `None` when the raw value lies outside the valid range of the field.
//! The arithmetic is kept in the order given by the profile definitions
//! (divide, then offset) so decoded values are reproducible exactly.

/// Maximum raw value of the 10-bit temperature field
pub const TEMPERATURE10_MAX: u32 = 1000;
/// Maximum raw value of the relative humidity field
pub const RELATIVE_HUMIDITY_MAX: u32 = 200;
/// Maximum raw value of the 10-bit acceleration field
pub const ACCELERATION10_MAX: u32 = 1000;
/// Maximum illuminance in lux
pub const ILLUMINANCE_MAX: u32 = 100_000;
/// Maximum raw value of the pH field
pub const PH_MAX: u32 = 140;
/// Maximum raw value of the dissolved oxygen field
pub const DISSOLVED_OXYGEN_MAX: u32 = 200;
/// Maximum raw value of the air quality temperature field (80 °C)
pub const AIR_TEMPERATURE_MAX: u32 = 800;
/// Raw particulate value reserved for "no measurement"
pub const PARTICULATE_INVALID: u32 = 511;
/// Maximum raw value of the formaldehyde field (2.000 ppm)
pub const FORMALDEHYDE_MAX: u32 = 2000;
/// Maximum raw value of the VOC field (65.000 ppm)
pub const VOC_MAX: u32 = 65_000;
/// Maximum CO2 concentration in ppm
pub const CARBON_DIOXIDE_MAX: u32 = 10_000;

/// Convert a 10-bit temperature to Celsius
pub fn temperature10(raw: u32) -> Option<f64> {
    if raw <= TEMPERATURE10_MAX {
        Some((raw as f64 / 10.0) - 40.0)
    } else {
        None
    }
}

/// Convert the 9-bit water temperature to Celsius
///
/// Same linear mapping as [`temperature10`], carried in a narrower field.
pub fn temperature9(raw: u32) -> Option<f64> {
    temperature10(raw & 0x1FF)
}

/// Convert relative humidity to percent (0.5 % resolution)
pub fn relative_humidity(raw: u32) -> Option<f64> {
    if raw <= RELATIVE_HUMIDITY_MAX {
        Some(raw as f64 / 2.0)
    } else {
        None
    }
}

/// Convert a 10-bit acceleration to g
pub fn acceleration10(raw: u32) -> Option<f64> {
    if raw <= ACCELERATION10_MAX {
        Some((raw as f64 - 500.0) / 200.0)
    } else {
        None
    }
}

/// Validate an illuminance in lux
pub fn illuminance(raw: u32) -> Option<u32> {
    (raw <= ILLUMINANCE_MAX).then_some(raw)
}

/// Convert the pH field (0.1 resolution, 0-14)
pub fn ph(raw: u32) -> Option<f64> {
    if raw <= PH_MAX {
        Some(raw as f64 / 10.0)
    } else {
        None
    }
}

/// Convert dissolved oxygen to percent saturation (0.5 % resolution)
pub fn dissolved_oxygen(raw: u32) -> Option<f64> {
    if raw <= DISSOLVED_OXYGEN_MAX {
        Some(raw as f64 / 2.0)
    } else {
        None
    }
}

/// Convert the air quality sensor temperature to Celsius (0-80 °C)
pub fn air_temperature(raw: u32) -> Option<f64> {
    if raw <= AIR_TEMPERATURE_MAX {
        Some(raw as f64 / 10.0)
    } else {
        None
    }
}

/// Validate a particulate matter concentration in µg/m³
pub fn particulate(raw: u32) -> Option<u16> {
    if raw < PARTICULATE_INVALID {
        Some(raw as u16)
    } else {
        None
    }
}

/// Convert formaldehyde concentration to ppm
pub fn formaldehyde(raw: u32) -> Option<f64> {
    if raw <= FORMALDEHYDE_MAX {
        Some(raw as f64 / 1000.0)
    } else {
        None
    }
}

/// Convert volatile organic compounds concentration to ppm
pub fn volatile_organic_compounds(raw: u32) -> Option<f64> {
    if raw <= VOC_MAX {
        Some(raw as f64 / 1000.0)
    } else {
        None
    }
}

/// Validate a CO2 concentration in ppm
pub fn carbon_dioxide(raw: u32) -> Option<u16> {
    if raw <= CARBON_DIOXIDE_MAX {
        Some(raw as u16)
    } else {
        None
    }
}
