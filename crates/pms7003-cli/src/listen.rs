//! Live decoding from a serial-over-TCP bridge.
//!
//! The sensor's UART is exposed on a TCP port (ser2net or similar). Bytes read
//! from the socket are fed to a [`SensorSession`]; startup commands and
//! periodic triggers are written back through the same socket.

use std::io::Write;
use std::time::Duration;

use pms7003_protocol::{Command, DecoderConfig, SensorSession};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Interval;
use tracing::{debug, info};

use crate::config::ListenConfig;
use crate::error::CliResult;
use crate::output::{format_frame, OutputFormat};

/// Connect to the bridge at `config.address` and print frames until it closes.
pub async fn listen<W: Write>(
    config: &ListenConfig,
    decoder: DecoderConfig,
    format: OutputFormat,
    out: W,
) -> CliResult<u64> {
    info!(address = %config.address, "connecting to serial bridge");
    let stream = TcpStream::connect(&config.address).await?;
    run_session(stream, config, decoder, format, out).await
}

/// Drive one sensor over an already-open byte stream.
///
/// Returns the number of frames decoded once the peer closes the stream.
pub async fn run_session<S, W>(
    stream: S,
    config: &ListenConfig,
    decoder: DecoderConfig,
    format: OutputFormat,
    mut out: W,
) -> CliResult<u64>
where
    S: AsyncRead + AsyncWrite,
    W: Write,
{
    let (mut reader, mut writer) = tokio::io::split(stream);
    let mut session = SensorSession::new(decoder);

    for startup in &config.startup_commands {
        let command = startup.command();
        writer.write_all(&session.encode_command(&command)).await?;
        debug!(?command, "sent startup command");
    }
    writer.flush().await?;

    let mut ticker = config
        .trigger_interval_secs
        .filter(|&secs| secs > 0)
        .map(|secs| tokio::time::interval(Duration::from_secs(secs)));

    let mut read_buf = [0u8; 256];

    loop {
        tokio::select! {
            result = reader.read(&mut read_buf) => {
                let n = result?;
                if n == 0 {
                    info!(
                        bytes = session.bytes_consumed(),
                        frames = session.frames_accepted(),
                        "serial bridge closed"
                    );
                    return Ok(session.frames_accepted());
                }
                for frame in session.feed(&read_buf[..n]) {
                    writeln!(out, "{}", format_frame(&frame, format)?)?;
                }
                out.flush()?;
            }

            _ = next_tick(&mut ticker) => {
                writer.write_all(&session.encode_command(&Command::Trigger)).await?;
                writer.flush().await?;
                debug!("sent manual trigger");
            }
        }
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
