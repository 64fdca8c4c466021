//! Commands that can be sent to the sensor.
//!
//! Every command is a fixed 7 byte frame:
//!
//! ```text
//! +------+------+-----+---------+---------+--------+--------+
//! | 0x42 | 0x4D | cmd | data_hi | data_lo | sum_hi | sum_lo |
//! +------+------+-----+---------+---------+--------+--------+
//! ```

use bytes::BufMut;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ProtocolError, Result};
use crate::frame::checksum;

/// Reporting mode selected with `CMD_AUTO_MANUAL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementMode {
    /// The sensor only reports when triggered.
    Passive,
    /// The sensor reports continuously.
    Active,
}

/// Power mode selected with `CMD_ON_STANDBY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerMode {
    /// Fan and laser off.
    Standby,
    /// Normal operation.
    Normal,
}

/// Commands that can be sent to the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch between passive and active reporting.
    SetMode(MeasurementMode),

    /// Request one reading (passive mode).
    Trigger,

    /// Enter or leave standby.
    SetPower(PowerMode),

    /// Any other command byte and data word.
    Raw {
        /// Command byte.
        cmd: u8,
        /// Data word.
        data: u16,
    },
}

impl Command {
    /// Interpret a command byte and data word, recognizing the known commands.
    pub fn from_parts(cmd: u8, data: u16) -> Command {
        match (cmd, data) {
            (CMD_AUTO_MANUAL, MODE_PASSIVE) => Command::SetMode(MeasurementMode::Passive),
            (CMD_AUTO_MANUAL, MODE_ACTIVE) => Command::SetMode(MeasurementMode::Active),
            (CMD_TRIG_MANUAL, 0) => Command::Trigger,
            (CMD_ON_STANDBY, POWER_STANDBY) => Command::SetPower(PowerMode::Standby),
            (CMD_ON_STANDBY, POWER_NORMAL) => Command::SetPower(PowerMode::Normal),
            (cmd, data) => Command::Raw { cmd, data },
        }
    }

    /// Get the command code for this command.
    pub fn code(&self) -> u8 {
        match self {
            Command::SetMode(_) => CMD_AUTO_MANUAL,
            Command::Trigger => CMD_TRIG_MANUAL,
            Command::SetPower(_) => CMD_ON_STANDBY,
            Command::Raw { cmd, .. } => *cmd,
        }
    }

    /// Get the data word for this command.
    pub fn data(&self) -> u16 {
        match self {
            Command::SetMode(MeasurementMode::Passive) => MODE_PASSIVE,
            Command::SetMode(MeasurementMode::Active) => MODE_ACTIVE,
            Command::Trigger => 0,
            Command::SetPower(PowerMode::Standby) => POWER_STANDBY,
            Command::SetPower(PowerMode::Normal) => POWER_NORMAL,
            Command::Raw { data, .. } => *data,
        }
    }

    /// Encode the command frame.
    pub fn encode(&self) -> [u8; COMMAND_FRAME_SIZE] {
        let mut buf = [0u8; COMMAND_FRAME_SIZE];
        let mut out = &mut buf[..];
        out.put_u8(MAGIC1);
        out.put_u8(MAGIC2);
        out.put_u8(self.code());
        out.put_u16(self.data());
        let sum = checksum(&buf[..COMMAND_FRAME_SIZE - CHECKSUM_SIZE]);
        buf[COMMAND_FRAME_SIZE - CHECKSUM_SIZE..].copy_from_slice(&sum.to_be_bytes());
        buf
    }
}

/// Encode a command frame into `buf`.
///
/// Returns the number of bytes written (always `COMMAND_FRAME_SIZE`). A
/// buffer shorter than that is left untouched.
pub fn encode_command(buf: &mut [u8], cmd: u8, data: u16) -> Result<usize> {
    if buf.len() < COMMAND_FRAME_SIZE {
        return Err(ProtocolError::BufferTooSmall {
            required: COMMAND_FRAME_SIZE,
            actual: buf.len(),
        });
    }

    let frame = Command::Raw { cmd, data }.encode();
    buf[..COMMAND_FRAME_SIZE].copy_from_slice(&frame);
    Ok(COMMAND_FRAME_SIZE)
}
