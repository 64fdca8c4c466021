//! Measurement payload decoding.
//!
//! A measurement frame carries a 26 byte payload: twelve big-endian `u16`
//! readings followed by a version byte and an error code byte.
//!
//! ```text
//! offset  field
//!  0..12  PM1.0 / PM2.5 / PM10, CF=1 then ambient (µg/m³)
//! 12..24  particles per 0.1 L above 0.3 / 0.5 / 1.0 / 2.5 / 5.0 / 10 µm
//! 24      version
//! 25      error code
//! ```
//!
//! The layout is declared once in `measurement_layout!`; the struct, the
//! decoder and [`Measurement::LAYOUT`] are all generated from it.

use serde::{Deserialize, Serialize};

use crate::constants::MEASUREMENT_PAYLOAD_SIZE;
use crate::error::{ProtocolError, Result};

/// Width of a field in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    /// One byte.
    U8,
    /// Two bytes, big-endian.
    U16,
}

impl FieldWidth {
    /// Size in bytes.
    pub const fn size(self) -> usize {
        match self {
            FieldWidth::U8 => 1,
            FieldWidth::U16 => 2,
        }
    }
}

/// Location of one field inside the measurement payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, as it appears on [`Measurement`].
    pub name: &'static str,
    /// Byte offset into the payload.
    pub offset: usize,
    /// Field width.
    pub width: FieldWidth,
}

trait PayloadField: Copy {
    const WIDTH: FieldWidth;

    fn read(payload: &[u8], offset: usize) -> Self;
}

impl PayloadField for u8 {
    const WIDTH: FieldWidth = FieldWidth::U8;

    fn read(payload: &[u8], offset: usize) -> Self {
        payload[offset]
    }
}

impl PayloadField for u16 {
    const WIDTH: FieldWidth = FieldWidth::U16;

    fn read(payload: &[u8], offset: usize) -> Self {
        u16::from_be_bytes([payload[offset], payload[offset + 1]])
    }
}

macro_rules! measurement_layout {
    ($($(#[$doc:meta])* $field:ident: $ty:ty = $offset:literal,)*) => {
        /// One decoded measurement frame.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct Measurement {
            $($(#[$doc])* pub $field: $ty,)*
        }

        impl Measurement {
            /// Payload layout, in wire order.
            pub const LAYOUT: &'static [FieldSpec] = &[
                $(FieldSpec {
                    name: stringify!($field),
                    offset: $offset,
                    width: <$ty as PayloadField>::WIDTH,
                },)*
            ];

            fn read_fields(payload: &[u8]) -> Self {
                Measurement {
                    $($field: <$ty as PayloadField>::read(payload, $offset),)*
                }
            }

            /// `(name, value)` pairs in wire order.
            pub fn fields(&self) -> impl Iterator<Item = (&'static str, u16)> {
                [$((stringify!($field), u16::from(self.$field)),)*].into_iter()
            }
        }
    };
}

measurement_layout! {
    /// PM1.0 concentration, CF=1 (µg/m³).
    pm1_0_cf1: u16 = 0,
    /// PM2.5 concentration, CF=1 (µg/m³).
    pm2_5_cf1: u16 = 2,
    /// PM10 concentration, CF=1 (µg/m³).
    pm10_0_cf1: u16 = 4,
    /// PM1.0 concentration, ambient (µg/m³).
    pm1_0_amb: u16 = 6,
    /// PM2.5 concentration, ambient (µg/m³).
    pm2_5_amb: u16 = 8,
    /// PM10 concentration, ambient (µg/m³).
    pm10_0_amb: u16 = 10,
    /// Particles > 0.3 µm per 0.1 L.
    raw_gt0_3um: u16 = 12,
    /// Particles > 0.5 µm per 0.1 L.
    raw_gt0_5um: u16 = 14,
    /// Particles > 1.0 µm per 0.1 L.
    raw_gt1_0um: u16 = 16,
    /// Particles > 2.5 µm per 0.1 L.
    raw_gt2_5um: u16 = 18,
    /// Particles > 5.0 µm per 0.1 L.
    raw_gt5_0um: u16 = 20,
    /// Particles > 10 µm per 0.1 L.
    raw_gt10_0um: u16 = 22,
    /// Firmware version.
    version: u8 = 24,
    /// Sensor error code.
    error_code: u8 = 25,
}

impl Measurement {
    /// Decode a measurement payload.
    ///
    /// `payload` must hold at least `MEASUREMENT_PAYLOAD_SIZE` bytes; extra
    /// trailing bytes are ignored.
    pub fn parse(payload: &[u8]) -> Result<Measurement> {
        if payload.len() < MEASUREMENT_PAYLOAD_SIZE {
            return Err(ProtocolError::PayloadTooShort {
                expected: MEASUREMENT_PAYLOAD_SIZE,
                actual: payload.len(),
            });
        }
        Ok(Self::read_fields(payload))
    }
}
