//! Frame formatting for stdout.

use clap::ValueEnum;
use pms7003_protocol::{Frame, Measurement};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// How frames are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable line per frame.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FrameRecord<'a> {
    Measurement(&'a Measurement),
    Response { value: u16 },
    Other { payload: String },
}

impl<'a> From<&'a Frame> for FrameRecord<'a> {
    fn from(frame: &'a Frame) -> Self {
        match frame {
            Frame::Measurement(m) => FrameRecord::Measurement(m),
            Frame::Response(value) => FrameRecord::Response { value: *value },
            Frame::Other(payload) => FrameRecord::Other {
                payload: hex::encode(payload),
            },
        }
    }
}

/// Render one frame as a single line (no trailing newline).
pub fn format_frame(frame: &Frame, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&FrameRecord::from(frame))?),
        OutputFormat::Text => Ok(match frame {
            Frame::Measurement(m) => {
                let fields: Vec<String> = m
                    .fields()
                    .map(|(name, value)| format!("{}={}", name, value))
                    .collect();
                format!("measurement {}", fields.join(" "))
            }
            Frame::Response(value) => format!("response 0x{:04X}", value),
            Frame::Other(payload) => format!("payload {}", hex::encode_upper(payload)),
        }),
    }
}

/// Render bytes as space-separated upper-case hex.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurement() -> Measurement {
        Measurement {
            pm1_0_cf1: 16,
            pm2_5_amb: 37,
            version: 0x88,
            ..Default::default()
        }
    }

    #[test]
    fn test_text_measurement() {
        let line = format_frame(&Frame::Measurement(measurement()), OutputFormat::Text).unwrap();
        assert!(line.starts_with("measurement pm1_0_cf1=16 pm2_5_cf1=0 "));
        assert!(line.contains(" pm2_5_amb=37 "));
        assert!(line.ends_with(" version=136 error_code=0"));
    }

    #[test]
    fn test_text_response_and_other() {
        assert_eq!(
            format_frame(&Frame::Response(0xE100), OutputFormat::Text).unwrap(),
            "response 0xE100"
        );
        assert_eq!(
            format_frame(&Frame::Other(vec![0xAB, 0x01]), OutputFormat::Text).unwrap(),
            "payload AB01"
        );
    }

    #[test]
    fn test_json_measurement() {
        let line = format_frame(&Frame::Measurement(measurement()), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["type"], "measurement");
        assert_eq!(value["pm1_0_cf1"], 16);
        assert_eq!(value["pm2_5_amb"], 37);
        assert_eq!(value["version"], 136);
    }

    #[test]
    fn test_json_response_and_other() {
        let line = format_frame(&Frame::Response(0xE401), OutputFormat::Json).unwrap();
        assert_eq!(line, r#"{"type":"response","value":58369}"#);

        let line = format_frame(&Frame::Other(vec![1, 2]), OutputFormat::Json).unwrap();
        assert_eq!(line, r#"{"type":"other","payload":"0102"}"#);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0x42, 0x4D, 0x01]), "42 4D 01");
        assert_eq!(format_bytes(&[]), "");
    }
}
