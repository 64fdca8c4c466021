//! Protocol constants
//!
//! Magic bytes, frame sizes and command codes used by the PMS7003 UART
//! protocol.

// ============================================================================
// Framing
// ============================================================================

/// First magic header byte (ASCII `'B'`).
pub const MAGIC1: u8 = 0x42;
/// Second magic header byte (ASCII `'M'`).
pub const MAGIC2: u8 = 0x4D;

/// Size of the trailing checksum field.
pub const CHECKSUM_SIZE: usize = 2;

/// Size of an encoded command frame (header, command, data, checksum).
pub const COMMAND_FRAME_SIZE: usize = 7;

/// Payload size of a full measurement frame (data words + version + error code).
pub const MEASUREMENT_PAYLOAD_SIZE: usize = 26;

/// Payload size of a command acknowledgement frame.
pub const RESPONSE_PAYLOAD_SIZE: usize = 2;

/// Default capacity of a decoder-owned frame buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

// ============================================================================
// Command Codes (host → sensor)
// ============================================================================

/// Select the reporting mode. data=0: passive (manual), data=1: active (automatic).
pub const CMD_AUTO_MANUAL: u8 = 0xE1;
/// Request a single reading while in passive mode.
pub const CMD_TRIG_MANUAL: u8 = 0xE2;
/// Select the power mode. data=0: standby, data=1: normal.
pub const CMD_ON_STANDBY: u8 = 0xE4;

// ============================================================================
// Command Data Values
// ============================================================================

/// `CMD_AUTO_MANUAL` data: passive reporting.
pub const MODE_PASSIVE: u16 = 0;
/// `CMD_AUTO_MANUAL` data: active reporting.
pub const MODE_ACTIVE: u16 = 1;
/// `CMD_ON_STANDBY` data: enter standby.
pub const POWER_STANDBY: u16 = 0;
/// `CMD_ON_STANDBY` data: resume normal operation.
pub const POWER_NORMAL: u16 = 1;
