use crate::error::{EepError, EepResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// RORG of the Variable-Length Data (VLD) telegram family
pub const RORG_VLD: u8 = 0xD2;

/// Separator used in the canonical `RORG-FUNC-TYPE` form
pub const PROFILE_SEPARATOR: &str = "-";

/// Separators accepted between the groups of a loosely formatted identifier
const ACCEPTED_SEPARATORS: [char; 5] = ['-', ':', '_', '.', ' '];

static CANONICAL_PROFILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-F]{2})-([0-9A-F]{2})-([0-9A-F]{2})$")
        .expect("canonical profile pattern is a valid regex")
});

/// EnOcean Equipment Profile identifier (RORG, FUNC, TYPE)
///
/// The canonical textual form is three uppercase hexadecimal groups joined
/// by `-`, for example `D2-14-41`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EepProfile {
    rorg: u8,
    func: u8,
    type_code: u8,
}

impl EepProfile {
    /// Create a new profile identifier from its three codes
    pub fn new(rorg: u8, func: u8, type_code: u8) -> Self {
        Self {
            rorg,
            func,
            type_code,
        }
    }

    /// Parse a profile identifier
    ///
    /// Supports formats like:
    /// - "D2-14-41" (any case, separators `-`, `:`, `_`, `.` or space)
    /// - "d21441"
    ///
    /// # Returns
    ///
    /// Returns `Ok(EepProfile)` if parsing succeeds, `Err(EepError::InvalidProfile)` otherwise
    pub fn parse(s: &str) -> EepResult<Self> {
        let canonical = Self::canonical(s)?;
        let caps = CANONICAL_PROFILE
            .captures(&canonical)
            .ok_or_else(|| EepError::InvalidProfile(s.to_string()))?;

        let group = |i: usize| -> EepResult<u8> {
            u8::from_str_radix(&caps[i], 16)
                .map_err(|_| EepError::InvalidProfile(s.to_string()))
        };

        Ok(Self::new(group(1)?, group(2)?, group(3)?))
    }

    /// Normalize a profile identifier string into canonical `RORG-FUNC-TYPE` form
    pub fn canonical(s: &str) -> EepResult<String> {
        let upper = s.to_uppercase();
        let chars: Vec<char> = upper.chars().collect();

        let groups: [String; 3] = match chars.len() {
            6 => [
                chars[0..2].iter().collect(),
                chars[2..4].iter().collect(),
                chars[4..6].iter().collect(),
            ],
            8 if ACCEPTED_SEPARATORS.contains(&chars[2])
                && ACCEPTED_SEPARATORS.contains(&chars[5]) =>
            {
                [
                    chars[0..2].iter().collect(),
                    chars[3..5].iter().collect(),
                    chars[6..8].iter().collect(),
                ]
            }
            _ => return Err(EepError::InvalidProfile(s.to_string())),
        };
        let canonical = groups.join(PROFILE_SEPARATOR);

        if !CANONICAL_PROFILE.is_match(&canonical) {
            return Err(EepError::InvalidProfile(s.to_string()));
        }

        Ok(canonical)
    }

    /// Get the RORG (radio organization) code
    pub fn rorg(&self) -> u8 {
        self.rorg
    }

    /// Get the FUNC (function group) code
    pub fn func(&self) -> u8 {
        self.func
    }

    /// Get the TYPE code
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// Check whether this profile belongs to the VLD telegram family
    pub fn is_vld(&self) -> bool {
        self.rorg == RORG_VLD
    }
}

impl FromStr for EepProfile {
    type Err = EepError;

    fn from_str(s: &str) -> EepResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for EepProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02X}{sep}{:02X}{sep}{:02X}",
            self.rorg,
            self.func,
            self.type_code,
            sep = PROFILE_SEPARATOR
        )
    }
}
