//! Frame decoding and encoding.
//!
//! Every frame sent by the sensor has the same shape:
//!
//! ```text
//! +------+------+--------+-------------------+--------+--------+
//! | 0x42 | 0x4D | length | payload[0..n]     | sum_hi | sum_lo |
//! +------+------+--------+-------------------+--------+--------+
//! ```
//!
//! The length field counts the payload plus the two checksum bytes. PMS7003
//! firmware sends it as a big-endian `u16`; some older modules send a single
//! byte. The checksum is the wrapping 16-bit sum of every byte before it,
//! header and length included.
//!
//! [`FrameDecoder`] consumes the stream one byte at a time and never reports
//! an error: a wrong header byte, a length the buffer cannot hold, or a bad
//! checksum all drop the frame and send the decoder back to hunting for
//! `0x42`.

use bytes::BufMut;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ProtocolError, Result};
use crate::measurement::Measurement;

/// How the length field is encoded on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthField {
    /// One length byte.
    SingleByte,
    /// Two length bytes, big-endian.
    #[default]
    TwoByte,
}

/// What to do with a byte that arrives where the second magic byte was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderResync {
    /// Drop the byte and wait for a fresh `0x42`.
    Discard,
    /// Treat the byte as a candidate first magic byte, so `42 42 4D` still
    /// locks onto the frame starting at the second `0x42`.
    #[default]
    Reprocess,
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Length field encoding.
    pub length_field: LengthField,
    /// Header mismatch policy.
    pub header_resync: HeaderResync,
}

impl DecoderConfig {
    /// PMS7003 firmware: two-byte length, mismatched header bytes reprocessed.
    pub const fn pms7003() -> Self {
        DecoderConfig {
            length_field: LengthField::TwoByte,
            header_resync: HeaderResync::Reprocess,
        }
    }

    /// Older single-byte-length modules: mismatched header bytes dropped.
    pub const fn legacy() -> Self {
        DecoderConfig {
            length_field: LengthField::SingleByte,
            header_resync: HeaderResync::Discard,
        }
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::pms7003()
    }
}

/// Parse position inside the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Hunting for `0x42`.
    AwaitHeader1,
    /// Got `0x42`, expecting `0x4D`.
    AwaitHeader2,
    /// Expecting the single length byte.
    AwaitLength,
    /// Expecting the high length byte.
    AwaitLengthHigh,
    /// Expecting the low length byte.
    AwaitLengthLow,
    /// Storing payload bytes.
    ReceivingPayload,
    /// Expecting the high checksum byte.
    AwaitChecksumHigh,
    /// Expecting the low checksum byte.
    AwaitChecksumLow,
}

/// Incremental decoder for sensor frames.
///
/// The payload of the frame in progress is written into `buffer`, whose
/// length is the largest payload the decoder accepts. Header, length and
/// checksum bytes are never stored. Each decoder is independent; use one per
/// serial channel.
#[derive(Debug, Clone)]
pub struct FrameDecoder<B = [u8; DEFAULT_BUFFER_SIZE]> {
    buffer: B,
    config: DecoderConfig,
    state: DecoderState,
    idx: usize,
    len: usize,
    len_high: u8,
    sum: u16,
    chk: u16,
    complete: bool,
}

impl FrameDecoder {
    /// Create a decoder with its own `DEFAULT_BUFFER_SIZE` byte buffer.
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_buffer([0u8; DEFAULT_BUFFER_SIZE], config)
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameDecoder<B> {
    /// Create a decoder that stores payloads in `buffer`.
    pub fn with_buffer(buffer: B, config: DecoderConfig) -> Self {
        FrameDecoder {
            buffer,
            config,
            state: DecoderState::AwaitHeader1,
            idx: 0,
            len: 0,
            len_high: 0,
            sum: 0,
            chk: 0,
            complete: false,
        }
    }

    /// Abandon any frame in progress and wait for a new header.
    pub fn reset(&mut self) {
        self.state = DecoderState::AwaitHeader1;
        self.idx = 0;
        self.len = 0;
        self.len_high = 0;
        self.sum = 0;
        self.chk = 0;
        self.complete = false;
    }

    /// Consume one byte.
    ///
    /// Returns `true` only on the byte that completes a frame whose checksum
    /// matches. The payload is then available from [`payload`](Self::payload)
    /// until the next call.
    pub fn process(&mut self, byte: u8) -> bool {
        self.complete = false;

        match self.state {
            DecoderState::AwaitHeader1 => self.await_header(byte),

            DecoderState::AwaitHeader2 => {
                self.accumulate(byte);
                if byte == MAGIC2 {
                    self.state = match self.config.length_field {
                        LengthField::SingleByte => DecoderState::AwaitLength,
                        LengthField::TwoByte => DecoderState::AwaitLengthHigh,
                    };
                } else {
                    log::trace!("expected 0x{:02X}, got 0x{:02X}", MAGIC2, byte);
                    self.state = DecoderState::AwaitHeader1;
                    if self.config.header_resync == HeaderResync::Reprocess {
                        self.await_header(byte);
                    }
                }
            }

            DecoderState::AwaitLength => {
                self.accumulate(byte);
                let declared = usize::from(byte);
                if declared <= self.capacity() {
                    self.begin_payload(declared);
                } else {
                    self.abandon(declared);
                }
            }

            DecoderState::AwaitLengthHigh => {
                self.accumulate(byte);
                self.len_high = byte;
                self.state = DecoderState::AwaitLengthLow;
            }

            DecoderState::AwaitLengthLow => {
                self.accumulate(byte);
                let declared = usize::from(u16::from_be_bytes([self.len_high, byte]));
                match declared.checked_sub(CHECKSUM_SIZE) {
                    Some(len) if len <= self.capacity() => self.begin_payload(declared),
                    _ => self.abandon(declared),
                }
            }

            DecoderState::ReceivingPayload => {
                self.accumulate(byte);
                if self.idx < self.len {
                    self.buffer.as_mut()[self.idx] = byte;
                    self.idx += 1;
                }
                if self.idx == self.len {
                    self.state = DecoderState::AwaitChecksumHigh;
                }
            }

            DecoderState::AwaitChecksumHigh => {
                self.chk = u16::from(byte) << 8;
                self.state = DecoderState::AwaitChecksumLow;
            }

            DecoderState::AwaitChecksumLow => {
                self.chk = self.chk.wrapping_add(u16::from(byte));
                self.state = DecoderState::AwaitHeader1;
                if self.chk == self.sum {
                    self.complete = true;
                    return true;
                }
                log::trace!(
                    "checksum mismatch: frame says 0x{:04X}, computed 0x{:04X}",
                    self.chk,
                    self.sum
                );
            }
        }

        false
    }

    /// Current parse position.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Largest payload this decoder accepts.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// Payload length declared by the most recent complete length field,
    /// excluding the checksum bytes.
    ///
    /// Set even when the length is rejected; a declared length below 2 reads as 0.
    pub fn payload_len(&self) -> usize {
        self.len
    }

    /// Payload of the frame completed by the last `process` call.
    ///
    /// Empty unless the last call to [`process`](Self::process) returned `true`.
    pub fn payload(&self) -> &[u8] {
        if self.complete {
            &self.buffer.as_ref()[..self.len]
        } else {
            &[]
        }
    }

    /// Decode the completed payload as a measurement.
    pub fn measurement(&self) -> Result<Measurement> {
        Measurement::parse(self.payload())
    }

    /// The 16-bit value of a completed two-byte payload, or 0 for any other length.
    ///
    /// Command acknowledgements carry the command byte and the low data byte.
    pub fn response(&self) -> u16 {
        match self.payload() {
            [hi, lo] => u16::from_be_bytes([*hi, *lo]),
            _ => 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> DecoderConfig {
        self.config
    }

    /// Release the payload buffer.
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    fn await_header(&mut self, byte: u8) {
        self.sum = u16::from(byte);
        if byte == MAGIC1 {
            self.state = DecoderState::AwaitHeader2;
        }
    }

    fn accumulate(&mut self, byte: u8) {
        self.sum = self.sum.wrapping_add(u16::from(byte));
    }

    /// `declared` counts the checksum bytes as well as the payload.
    ///
    /// An empty payload skips `ReceivingPayload`, so the next byte is read as
    /// the checksum rather than summed as payload.
    fn begin_payload(&mut self, declared: usize) {
        let Some(len) = declared.checked_sub(CHECKSUM_SIZE) else {
            self.abandon(declared);
            return;
        };
        self.idx = 0;
        self.len = len;
        self.state = if len == 0 {
            DecoderState::AwaitChecksumHigh
        } else {
            DecoderState::ReceivingPayload
        };
    }

    fn abandon(&mut self, declared: usize) {
        self.len = declared.saturating_sub(CHECKSUM_SIZE);
        log::trace!(
            "bogus frame length {} for a {} byte buffer",
            declared,
            self.capacity()
        );
        self.state = DecoderState::AwaitHeader1;
    }
}

/// Wrapping 16-bit additive checksum used by both directions of the protocol.
pub fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &b| sum.wrapping_add(u16::from(b)))
}

/// Build a complete sensor frame around `payload`.
///
/// This is what the sensor puts on the wire; useful for emulators and tests.
pub fn build_frame(payload: &[u8], length_field: LengthField) -> Result<Vec<u8>> {
    let declared = payload.len() + CHECKSUM_SIZE;
    let mut buf = Vec::with_capacity(2 + 2 + declared);
    buf.put_u8(MAGIC1);
    buf.put_u8(MAGIC2);

    match length_field {
        LengthField::SingleByte => {
            let len = u8::try_from(declared).map_err(|_| ProtocolError::PayloadTooLong {
                max: usize::from(u8::MAX) - CHECKSUM_SIZE,
                actual: payload.len(),
            })?;
            buf.put_u8(len);
        }
        LengthField::TwoByte => {
            let len = u16::try_from(declared).map_err(|_| ProtocolError::PayloadTooLong {
                max: usize::from(u16::MAX) - CHECKSUM_SIZE,
                actual: payload.len(),
            })?;
            buf.put_u16(len);
        }
    }

    buf.put_slice(payload);
    let sum = checksum(&buf);
    buf.put_u16(sum);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<B: AsRef<[u8]> + AsMut<[u8]>>(decoder: &mut FrameDecoder<B>, bytes: &[u8]) -> Vec<usize> {
        bytes
            .iter()
            .enumerate()
            .filter(|(_, &b)| decoder.process(b))
            .map(|(i, _)| i)
            .collect()
    }

    fn sample_payload() -> Vec<u8> {
        (1..=MEASUREMENT_PAYLOAD_SIZE as u8).collect()
    }

    #[test]
    fn test_valid_frame_completes_on_last_byte() {
        let mut decoder = FrameDecoder::default();
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();

        let completed = feed(&mut decoder, &frame);

        assert_eq!(completed, vec![frame.len() - 1]);
        assert_eq!(decoder.payload(), &sample_payload()[..]);
        assert_eq!(decoder.payload_len(), MEASUREMENT_PAYLOAD_SIZE);
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
    }

    #[test]
    fn test_noise_never_completes() {
        let mut decoder = FrameDecoder::default();
        let noise: Vec<u8> = (0..=255u8).filter(|&b| b != MAGIC1).cycle().take(2000).collect();

        assert!(feed(&mut decoder, &noise).is_empty());
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);

        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
    }

    #[test]
    fn test_frame_found_after_any_noise_prefix() {
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        let noise = [0x00, 0xFF, 0x4D, 0x13, 0x42, 0x00, 0x1C, 0x4D];

        for prefix in 0..=noise.len() {
            let mut decoder = FrameDecoder::default();
            let mut stream = noise[..prefix].to_vec();
            stream.extend_from_slice(&frame);

            let completed = feed(&mut decoder, &stream);
            assert_eq!(completed, vec![stream.len() - 1], "prefix length {}", prefix);
        }
    }

    #[test]
    fn test_oversized_length_resyncs() {
        let mut decoder = FrameDecoder::default();

        // 0x40 - 2 = 62 payload bytes, more than the 32 byte buffer
        for b in [MAGIC1, MAGIC2, 0x00, 0x40] {
            assert!(!decoder.process(b));
        }
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);

        // the very next byte is a header candidate
        decoder.process(MAGIC1);
        assert_eq!(decoder.state(), DecoderState::AwaitHeader2);
    }

    #[test]
    fn test_length_at_capacity_is_accepted() {
        let mut decoder = FrameDecoder::default();
        let payload = vec![0x11; DEFAULT_BUFFER_SIZE];
        let frame = build_frame(&payload, LengthField::TwoByte).unwrap();

        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
        assert_eq!(decoder.payload(), &payload[..]);
    }

    #[test]
    fn test_length_shorter_than_checksum_resyncs() {
        let mut decoder = FrameDecoder::default();
        for b in [MAGIC1, MAGIC2, 0x00, 0x01] {
            decoder.process(b);
        }
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
    }

    #[test]
    fn test_rejected_length_is_reported() {
        let mut decoder = FrameDecoder::default();
        for b in [MAGIC1, MAGIC2, 0xFF, 0xFF] {
            assert!(!decoder.process(b));
        }
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
        assert_eq!(decoder.payload_len(), 0xFFFF - 2);

        // half a length field does not touch the previous value
        for b in [MAGIC1, MAGIC2, 0x00] {
            decoder.process(b);
        }
        assert_eq!(decoder.state(), DecoderState::AwaitLengthLow);
        assert_eq!(decoder.payload_len(), 0xFFFF - 2);

        decoder.process(0x01);
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
        assert_eq!(decoder.payload_len(), 0);
    }

    #[test]
    fn test_checksum_mismatch_rejected_then_recovers() {
        let mut decoder = FrameDecoder::default();
        let good = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        let mut bad = good.clone();
        let last = bad.len() - 1;
        bad[last] ^= 0x01;

        assert!(feed(&mut decoder, &bad).is_empty());
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
        assert!(decoder.payload().is_empty());

        assert_eq!(feed(&mut decoder, &good), vec![good.len() - 1]);
    }

    #[test]
    fn test_corrupted_payload_rejected() {
        let mut decoder = FrameDecoder::default();
        let mut frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        frame[10] = frame[10].wrapping_add(1);

        assert!(feed(&mut decoder, &frame).is_empty());
    }

    #[test]
    fn test_checksum_wraps_at_16_bits() {
        let payload = vec![0xFF; 300];
        assert!(payload.len() * 0xFF > usize::from(u16::MAX));

        let mut decoder = FrameDecoder::with_buffer(vec![0u8; 512], DecoderConfig::pms7003());
        let frame = build_frame(&payload, LengthField::TwoByte).unwrap();

        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
        assert_eq!(decoder.payload().len(), 300);
    }

    #[test]
    fn test_reprocess_finds_frame_after_repeated_magic() {
        let mut decoder = FrameDecoder::new(DecoderConfig::pms7003());
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        let mut stream = vec![MAGIC1];
        stream.extend_from_slice(&frame);

        assert_eq!(feed(&mut decoder, &stream), vec![stream.len() - 1]);
    }

    #[test]
    fn test_discard_misses_frame_after_repeated_magic() {
        let config = DecoderConfig {
            length_field: LengthField::TwoByte,
            header_resync: HeaderResync::Discard,
        };
        let mut decoder = FrameDecoder::new(config);
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        let mut stream = vec![MAGIC1];
        stream.extend_from_slice(&frame);

        assert!(feed(&mut decoder, &stream).is_empty());

        // a clean frame afterwards is still found
        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
    }

    #[test]
    fn test_single_byte_length_variant() {
        let mut decoder = FrameDecoder::new(DecoderConfig::legacy());
        let frame = build_frame(&sample_payload(), LengthField::SingleByte).unwrap();
        assert_eq!(frame[2], 0x1C);

        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
        assert_eq!(decoder.payload(), &sample_payload()[..]);
    }

    #[test]
    fn test_single_byte_length_over_capacity() {
        let mut decoder = FrameDecoder::new(DecoderConfig::legacy());
        for b in [MAGIC1, MAGIC2, (DEFAULT_BUFFER_SIZE + 1) as u8] {
            decoder.process(b);
        }
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
    }

    #[test]
    fn test_single_byte_length_shorter_than_checksum_resyncs() {
        for length in [0x00, 0x01] {
            let mut decoder = FrameDecoder::new(DecoderConfig::legacy());
            for b in [MAGIC1, MAGIC2, length] {
                assert!(!decoder.process(b));
            }
            assert_eq!(decoder.state(), DecoderState::AwaitHeader1, "length {}", length);
            assert_eq!(decoder.payload_len(), 0);
        }

        let mut decoder = FrameDecoder::new(DecoderConfig::legacy());
        for b in [MAGIC1, MAGIC2, 0x02] {
            decoder.process(b);
        }
        assert_eq!(decoder.state(), DecoderState::AwaitChecksumHigh);
    }

    #[test]
    fn test_single_byte_length_at_capacity() {
        let mut decoder = FrameDecoder::new(DecoderConfig::legacy());
        let payload = vec![0x22; DEFAULT_BUFFER_SIZE - CHECKSUM_SIZE];
        let frame = build_frame(&payload, LengthField::SingleByte).unwrap();
        assert_eq!(usize::from(frame[2]), DEFAULT_BUFFER_SIZE);

        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
        assert_eq!(decoder.payload(), &payload[..]);
    }

    #[test]
    fn test_response_frame() {
        let mut decoder = FrameDecoder::default();
        let frame = build_frame(&[CMD_AUTO_MANUAL, 0x01], LengthField::TwoByte).unwrap();

        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
        assert_eq!(decoder.response(), 0xE101);
        assert!(decoder.measurement().is_err());
    }

    #[test]
    fn test_response_is_zero_for_other_lengths() {
        let mut decoder = FrameDecoder::default();
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();

        feed(&mut decoder, &frame);
        assert_eq!(decoder.response(), 0);
    }

    #[test]
    fn test_zero_length_payload() {
        let mut decoder = FrameDecoder::default();
        let frame = build_frame(&[], LengthField::TwoByte).unwrap();
        assert_eq!(frame, vec![0x42, 0x4D, 0x00, 0x02, 0x00, 0x91]);

        feed(&mut decoder, &frame[..4]);
        assert_eq!(decoder.state(), DecoderState::AwaitChecksumHigh);
        decoder.reset();

        assert_eq!(feed(&mut decoder, &frame), vec![5]);
        assert!(decoder.payload().is_empty());
    }

    #[test]
    fn test_payload_cleared_by_next_byte() {
        let mut decoder = FrameDecoder::default();
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();

        feed(&mut decoder, &frame);
        assert!(!decoder.payload().is_empty());

        decoder.process(0x00);
        assert!(decoder.payload().is_empty());
    }

    #[test]
    fn test_reset_abandons_frame() {
        let mut decoder = FrameDecoder::default();
        let frame = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();

        feed(&mut decoder, &frame[..10]);
        assert_eq!(decoder.state(), DecoderState::ReceivingPayload);

        decoder.reset();
        assert_eq!(decoder.state(), DecoderState::AwaitHeader1);
        assert_eq!(decoder.payload_len(), 0);

        // the tail of the old frame is noise now
        assert!(feed(&mut decoder, &frame[10..]).is_empty());
        assert_eq!(feed(&mut decoder, &frame), vec![frame.len() - 1]);
    }

    #[test]
    fn test_back_to_back_frames() {
        let mut decoder = FrameDecoder::default();
        let first = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        let second = build_frame(&[0xE4, 0x00], LengthField::TwoByte).unwrap();
        let mut stream = first.clone();
        stream.extend_from_slice(&second);

        let completed = feed(&mut decoder, &stream);
        assert_eq!(completed, vec![first.len() - 1, stream.len() - 1]);
        assert_eq!(decoder.response(), 0xE400);
    }

    #[test]
    fn test_independent_decoders() {
        let mut a = FrameDecoder::default();
        let mut b = FrameDecoder::default();
        let frame_a = build_frame(&sample_payload(), LengthField::TwoByte).unwrap();
        let frame_b = build_frame(&[0xE1, 0x00], LengthField::TwoByte).unwrap();

        // interleave b's bytes into a's stream
        let mut hits_a = 0;
        let mut hits_b = 0;
        for (i, &byte) in frame_a.iter().enumerate() {
            if a.process(byte) {
                hits_a += 1;
            }
            if let Some(&other) = frame_b.get(i) {
                if b.process(other) {
                    hits_b += 1;
                    assert_eq!(b.response(), 0xE100);
                }
            }
        }

        assert_eq!((hits_a, hits_b), (1, 1));
        assert_eq!(a.payload(), &sample_payload()[..]);
    }

    #[test]
    fn test_caller_supplied_buffer_is_returned() {
        let mut decoder = FrameDecoder::with_buffer([0u8; 4], DecoderConfig::pms7003());
        let frame = build_frame(&[1, 2, 3], LengthField::TwoByte).unwrap();

        feed(&mut decoder, &frame);
        assert_eq!(decoder.capacity(), 4);
        assert_eq!(decoder.into_buffer(), [1, 2, 3, 0]);
    }

    #[test]
    fn test_checksum_helper() {
        assert_eq!(checksum(&[0x42, 0x4D, 0xE1, 0x12, 0x34]), 0x01B6);
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn test_build_frame_single_byte_too_long() {
        let payload = vec![0u8; 254];
        let err = build_frame(&payload, LengthField::SingleByte).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::PayloadTooLong {
                max: 253,
                actual: 254
            }
        );
    }

    #[test]
    fn test_config_defaults_to_pms7003() {
        assert_eq!(DecoderConfig::default(), DecoderConfig::pms7003());
        assert_eq!(FrameDecoder::default().config(), DecoderConfig::pms7003());
    }
}
