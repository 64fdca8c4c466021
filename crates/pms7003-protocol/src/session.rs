//! Slice-oriented wrapper around [`FrameDecoder`].

use crate::commands::Command;
use crate::constants::*;
use crate::frame::{DecoderConfig, FrameDecoder};
use crate::measurement::Measurement;

/// A completed, checksum-valid frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Regular measurement report.
    Measurement(Measurement),
    /// Two-byte command acknowledgement.
    Response(u16),
    /// Any other payload length.
    Other(Vec<u8>),
}

impl Frame {
    /// Classify a completed payload by its length.
    pub fn from_payload(payload: &[u8]) -> Frame {
        if payload.len() == RESPONSE_PAYLOAD_SIZE {
            return Frame::Response(u16::from_be_bytes([payload[0], payload[1]]));
        }
        match Measurement::parse(payload) {
            Ok(measurement) => Frame::Measurement(measurement),
            Err(_) => Frame::Other(payload.to_vec()),
        }
    }
}

/// A simple synchronous interface for one sensor channel.
///
/// This can be used with any byte stream (serial port, TCP bridge, capture
/// file, ...).
#[derive(Debug, Default)]
pub struct SensorSession {
    decoder: FrameDecoder,
    frames_accepted: u64,
    bytes_consumed: u64,
}

impl SensorSession {
    /// Create a new session.
    pub fn new(config: DecoderConfig) -> Self {
        SensorSession {
            decoder: FrameDecoder::new(config),
            frames_accepted: 0,
            bytes_consumed: 0,
        }
    }

    /// Feed received data and return every frame it completed.
    pub fn feed(&mut self, data: &[u8]) -> Vec<Frame> {
        let mut frames = Vec::new();
        for &byte in data {
            self.bytes_consumed += 1;
            if self.decoder.process(byte) {
                self.frames_accepted += 1;
                let frame = Frame::from_payload(self.decoder.payload());
                log::debug!("frame {}: {:?}", self.frames_accepted, frame);
                frames.push(frame);
            }
        }
        frames
    }

    /// Encode a command for transmission.
    pub fn encode_command(&self, command: &Command) -> [u8; COMMAND_FRAME_SIZE] {
        command.encode()
    }

    /// Drop any partial frame.
    pub fn reset(&mut self) {
        self.decoder.reset();
    }

    /// The underlying decoder.
    pub fn decoder(&self) -> &FrameDecoder {
        &self.decoder
    }

    /// Number of valid frames seen so far.
    pub fn frames_accepted(&self) -> u64 {
        self.frames_accepted
    }

    /// Number of bytes fed so far.
    pub fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }
}
