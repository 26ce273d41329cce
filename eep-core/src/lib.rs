//! Core types and utilities for EnOcean Equipment Profile (EEP) decoding
//!
//! This crate provides the error type, the profile identifier, the input
//! normalizer and the payload window used by every profile family decoder.

pub mod error;
pub mod input;
pub mod profile;
pub mod window;

pub use error::{EepError, EepResult};
pub use input::TelegramInput;
pub use profile::{EepProfile, RORG_VLD};
pub use window::PayloadWindow;
