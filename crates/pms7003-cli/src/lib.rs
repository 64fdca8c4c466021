//! Host tool for PMS7003 particulate-matter sensors.
//!
//! - `pms7003 decode <FILE>` decodes a binary capture or hex dump.
//! - `pms7003 listen` decodes live data from a serial-over-TCP bridge.
//! - `pms7003 encode <COMMAND>` prints a command frame as hex.

pub mod capture;
pub mod config;
pub mod error;
pub mod listen;
pub mod output;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pms7003_protocol::{Command, MeasurementMode, PowerMode};

pub use config::{CommandSpec, Config, ListenConfig, Variant};
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pms7003", version, about = "Decode and drive PMS7003 particulate-matter sensors")]
pub struct Cli {
    /// YAML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Protocol variant (overrides the config file).
    #[arg(long, global = true, value_enum)]
    pub variant: Option<Variant>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a captured byte stream.
    Decode {
        /// Capture file, or `-` for stdin.
        input: PathBuf,
        /// Input is a text hex dump instead of raw bytes.
        #[arg(long)]
        hex: bool,
    },

    /// Decode live data from a serial-over-TCP bridge.
    Listen {
        /// Bridge address, `host:port`.
        #[arg(long)]
        address: Option<String>,
        /// Send a manual trigger every N seconds.
        #[arg(long)]
        trigger_interval: Option<u64>,
    },

    /// Print an encoded command frame.
    Encode {
        /// Command to encode.
        #[arg(value_enum)]
        command: EncodeKind,
        /// Command byte for `raw`.
        #[arg(long, value_parser = parse_u8)]
        cmd: Option<u8>,
        /// Data word for `raw`.
        #[arg(long, value_parser = parse_u16, default_value = "0")]
        data: u16,
    },
}

/// Commands accepted by `encode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodeKind {
    /// Continuous reporting.
    ModeActive,
    /// Report only when triggered.
    ModePassive,
    /// Request one reading.
    Trigger,
    /// Enter standby.
    Standby,
    /// Leave standby.
    Wake,
    /// Arbitrary `--cmd` and `--data`.
    Raw,
}

impl EncodeKind {
    /// Build the command, using `cmd`/`data` for `Raw`.
    pub fn command(self, cmd: Option<u8>, data: u16) -> CliResult<Command> {
        Ok(match self {
            EncodeKind::ModeActive => Command::SetMode(MeasurementMode::Active),
            EncodeKind::ModePassive => Command::SetMode(MeasurementMode::Passive),
            EncodeKind::Trigger => Command::Trigger,
            EncodeKind::Standby => Command::SetPower(PowerMode::Standby),
            EncodeKind::Wake => Command::SetPower(PowerMode::Normal),
            EncodeKind::Raw => {
                let cmd = cmd.ok_or_else(|| {
                    CliError::InvalidArgument("raw commands need --cmd".to_string())
                })?;
                Command::Raw { cmd, data }
            }
        })
    }
}

fn parse_number(text: &str) -> Result<u64, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid number '{}': {}", text, e))
}

fn parse_u8(text: &str) -> Result<u8, String> {
    let value = parse_number(text)?;
    u8::try_from(value).map_err(|_| format!("{} does not fit in a byte", value))
}

fn parse_u16(text: &str) -> Result<u16, String> {
    let value = parse_number(text)?;
    u16::try_from(value).map_err(|_| format!("{} does not fit in 16 bits", value))
}

/// Load the config file (if any) and apply command-line overrides.
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_overrides(cli.format, cli.variant);

    if let CliCommand::Listen {
        address,
        trigger_interval,
    } = &cli.command
    {
        if let Some(address) = address {
            config.listen.address = address.clone();
        }
        if trigger_interval.is_some() {
            config.listen.trigger_interval_secs = *trigger_interval;
        }
    }

    Ok(config)
}

/// Run the selected subcommand, writing results to stdout.
pub async fn run(cli: Cli) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    let mut stdout = std::io::stdout();

    match cli.command {
        CliCommand::Decode { input, hex } => {
            let data = capture::read_capture(&input, hex)?;
            capture::decode_capture(&data, config.decoder, config.output, &mut stdout)?;
        }

        CliCommand::Listen { .. } => {
            listen::listen(&config.listen, config.decoder, config.output, stdout).await?;
        }

        CliCommand::Encode { command, cmd, data } => {
            let command = command.command(cmd, data)?;
            let line = encode_line(&command, config.output)?;
            writeln!(stdout, "{}", line)?;
        }
    }

    Ok(())
}

/// Render an encoded command for `encode`.
pub fn encode_line(command: &Command, format: OutputFormat) -> CliResult<String> {
    let frame = command.encode();
    Ok(match format {
        OutputFormat::Text => output::format_bytes(&frame),
        OutputFormat::Json => serde_json::to_string(&serde_json::json!({
            "cmd": command.code(),
            "data": command.data(),
            "frame": hex::encode(frame),
        }))?,
    })
}
