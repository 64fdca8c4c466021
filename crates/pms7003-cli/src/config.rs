//! YAML configuration for the host tool.
//!
//! ```yaml
//! decoder:
//!   length_field: two_byte      # single_byte | two_byte
//!   header_resync: reprocess    # discard | reprocess
//! output: json                  # text | json
//! listen:
//!   address: "192.168.1.20:4000"
//!   startup_commands:
//!     - { cmd: 0xE1, data: 0 }  # passive mode
//!   trigger_interval_secs: 5
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::Path;

use clap::ValueEnum;
use pms7003_protocol::{Command, DecoderConfig};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;
use crate::output::OutputFormat;

/// Default serial bridge address.
pub const DEFAULT_LISTEN_ADDRESS: &str = "127.0.0.1:4000";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame decoder settings.
    pub decoder: DecoderConfig,
    /// Output format.
    pub output: OutputFormat,
    /// Serial bridge settings for `listen`.
    pub listen: ListenConfig,
}

/// Settings for the `listen` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListenConfig {
    /// `host:port` of the serial-over-TCP bridge.
    pub address: String,
    /// Commands written once after connecting.
    pub startup_commands: Vec<CommandSpec>,
    /// Send a manual trigger this often (seconds). Passive mode only.
    pub trigger_interval_secs: Option<u64>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        ListenConfig {
            address: DEFAULT_LISTEN_ADDRESS.to_string(),
            startup_commands: Vec::new(),
            trigger_interval_secs: None,
        }
    }
}

/// A raw command as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Command byte.
    pub cmd: u8,
    /// Data word.
    #[serde(default)]
    pub data: u16,
}

impl CommandSpec {
    /// The typed command.
    pub fn command(&self) -> Command {
        Command::from_parts(self.cmd, self.data)
    }
}

/// Decoder presets selectable with `--variant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Two-byte length field, repeated magic bytes retried.
    Pms7003,
    /// Single-byte length field, repeated magic bytes dropped.
    Legacy,
}

impl From<Variant> for DecoderConfig {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Pms7003 => DecoderConfig::pms7003(),
            Variant::Legacy => DecoderConfig::legacy(),
        }
    }
}

impl Config {
    /// Parse a configuration document.
    pub fn from_yaml(text: &str) -> CliResult<Config> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> CliResult<Config> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Apply global command-line overrides.
    pub fn apply_overrides(&mut self, format: Option<OutputFormat>, variant: Option<Variant>) {
        if let Some(format) = format {
            self.output = format;
        }
        if let Some(variant) = variant {
            self.decoder = variant.into();
        }
    }
}
