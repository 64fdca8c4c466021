//! PMS7003 UART Protocol
//!
//! This crate decodes the serial stream of PMS7003-family particulate-matter
//! sensors and encodes the commands they accept.
//!
//! # Protocol Overview
//!
//! - **Sensor frames** (sensor → host): `0x42 0x4D`, a length field, the
//!   payload and a 16-bit additive checksum. A 26 byte payload is a
//!   measurement report; a 2 byte payload acknowledges a command.
//! - **Commands** (host → sensor): fixed 7 byte frames carrying a command
//!   byte and a 16-bit data word.
//!
//! The decoder is a byte-at-a-time state machine with no I/O and no
//! allocation. Corrupt input never produces an error, the decoder simply
//! resynchronizes on the next header.
//!
//! # Example
//!
//! ```rust
//! use pms7003_protocol::{Command, DecoderConfig, FrameDecoder, MeasurementMode};
//!
//! let mut decoder = FrameDecoder::new(DecoderConfig::pms7003());
//! let received: &[u8] = &[];
//!
//! for &byte in received {
//!     if decoder.process(byte) {
//!         let measurement = decoder.measurement()?;
//!         println!("PM2.5: {} µg/m³", measurement.pm2_5_amb);
//!     }
//! }
//!
//! let passive = Command::SetMode(MeasurementMode::Passive).encode();
//! assert_eq!(passive.len(), 7);
//! # Ok::<(), pms7003_protocol::ProtocolError>(())
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod measurement;
mod session;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use measurement::*;
pub use session::*;
