//! Offline decoding of captured serial streams.

use std::io::{Read, Write};
use std::path::Path;

use pms7003_protocol::{DecoderConfig, SensorSession};

use crate::error::{CliError, CliResult};
use crate::output::{format_frame, OutputFormat};

/// Parse a hex dump such as `42 4D 00 1C` or `0x42,0x4d,001c`.
///
/// Tokens are separated by whitespace or commas and may carry a `0x` prefix.
/// A token may hold several bytes.
pub fn parse_hex_dump(text: &str) -> CliResult<Vec<u8>> {
    let mut bytes = Vec::new();
    for token in text.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if token.is_empty() {
            continue;
        }
        bytes.extend(hex::decode(token)?);
    }
    Ok(bytes)
}

/// Read a capture from `path` (`-` for stdin).
pub fn read_capture(path: &Path, hex_dump: bool) -> CliResult<Vec<u8>> {
    let mut data = Vec::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_end(&mut data)?;
    } else {
        data = std::fs::read(path)?;
    }

    if !hex_dump {
        return Ok(data);
    }
    let text = String::from_utf8(data)
        .map_err(|_| CliError::InvalidArgument(format!("{} is not a text hex dump", path.display())))?;
    parse_hex_dump(&text)
}

/// Decode a capture and write one line per frame. Returns the frame count.
pub fn decode_capture<W: Write>(
    data: &[u8],
    decoder: DecoderConfig,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<u64> {
    let mut session = SensorSession::new(decoder);
    for frame in session.feed(data) {
        writeln!(out, "{}", format_frame(&frame, format)?)?;
    }
    out.flush()?;

    tracing::info!(
        bytes = session.bytes_consumed(),
        frames = session.frames_accepted(),
        "capture decoded"
    );
    Ok(session.frames_accepted())
}
