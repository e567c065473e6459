use crate::address::Address;
use crate::error::Error;
use crate::mem::Kind;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SerialConfig {
    /// Serial device path, e.g. `/dev/ttyUSB0` or `COM2`.
    pub port: String,

    pub baudrate: u32,

    #[serde(default = "default_bytesize")]
    pub bytesize: u8,

    /// Parity: `N`/`E`/`O`, also accepted as `none`/`even`/`odd`.
    #[serde(default = "default_parity")]
    pub parity: String,

    #[serde(default = "default_stopbits")]
    pub stopbits: u8,

    /// Timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: f64,
}

fn default_bytesize() -> u8 {
    8
}

fn default_parity() -> String {
    "N".to_owned()
}

fn default_stopbits() -> u8 {
    1
}

fn default_timeout() -> f64 {
    5.0
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModbusConfig {
    pub slave_id: u8,
}

/// Per-kind enable flags; a kind that is absent from the document stays off.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ValueEnable {
    #[serde(default)]
    pub co: bool,
    #[serde(default)]
    pub di: bool,
    #[serde(default)]
    pub hr: bool,
    #[serde(default)]
    pub ir: bool,
}

impl ValueEnable {
    pub fn get(&self, kind: Kind) -> bool {
        match kind {
            Kind::Coil => self.co,
            Kind::DiscreteInput => self.di,
            Kind::HoldingRegister => self.hr,
            Kind::InputRegister => self.ir,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct StartAddresses {
    #[serde(default)]
    pub co: Option<Address>,
    #[serde(default)]
    pub di: Option<Address>,
    #[serde(default)]
    pub hr: Option<Address>,
    #[serde(default)]
    pub ir: Option<Address>,
}

impl StartAddresses {
    pub fn get(&self, kind: Kind) -> Option<&Address> {
        match kind {
            Kind::Coil => self.co.as_ref(),
            Kind::DiscreteInput => self.di.as_ref(),
            Kind::HoldingRegister => self.hr.as_ref(),
            Kind::InputRegister => self.ir.as_ref(),
        }
    }
}

/// Numeric base used to interpret spreadsheet cells.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataBase {
    #[default]
    Dec,
    Hex,
}

impl Display for DataBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataBase::Dec => f.write_str("dec"),
            DataBase::Hex => f.write_str("hex"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub serial: SerialConfig,
    pub modbus: ModbusConfig,
    pub value_enable: ValueEnable,

    /// Directory holding the per-kind spreadsheets.
    #[serde(default = "default_value_dir")]
    pub value_dir: String,

    #[serde(default)]
    pub data_base: DataBase,

    #[serde(default)]
    pub start_address: StartAddresses,

    #[serde(default = "default_enable_logging")]
    pub enable_logging: bool,
}

fn default_value_dir() -> String {
    ".".to_owned()
}

fn default_enable_logging() -> bool {
    true
}

impl Config {
    /// Read the configuration from file, YAML first with a TOML fallback.
    pub fn read(path: &str) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path, e)))?;
        if let Ok(c) = serde_yml::from_str(&content) {
            Ok(c)
        } else {
            toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path, e)))
        }
    }
}
