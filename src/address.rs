use crate::error::Error;

use serde::{Deserialize, Serialize};

/// Start address as it appears in the configuration document. Integers pass
/// through, strings are hex literals, anything else is rejected on resolve.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum Address {
    Decimal(u16),
    Hex(String),
    Other(serde_yml::Value),
}

impl Address {
    pub fn as_u16(&self) -> Result<u16, Error> {
        match self {
            Address::Decimal(v) => Ok(*v),
            Address::Hex(v) => {
                let digits = v
                    .trim()
                    .strip_prefix("0x")
                    .or_else(|| v.trim().strip_prefix("0X"))
                    .unwrap_or(v.trim());
                u16::from_str_radix(digits, 16)
                    .map_err(|_| Error::InvalidAddressFormat(v.clone()))
            }
            Address::Other(v) => Err(Error::InvalidAddressType(format!("{:?}", v))),
        }
    }
}

/// Resolve an optionally configured start address, falling back to `default`.
pub fn resolve(address: Option<&Address>, default: u16) -> Result<u16, Error> {
    match address {
        None => Ok(default),
        Some(a) => a.as_u16(),
    }
}
