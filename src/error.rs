use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Config(String),
    InvalidAddressFormat(String),
    InvalidAddressType(String),
    FileNotFound(PathBuf),
    InvalidCellValue(String),
    Workbook(String),
    Directory(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Invalid configuration: {}", e),
            Error::InvalidAddressFormat(v) => {
                write!(f, "Invalid start address, expected hex literal: {}", v)
            }
            Error::InvalidAddressType(v) => {
                write!(f, "Invalid start address, expected integer or hex string: {}", v)
            }
            Error::FileNotFound(p) => write!(f, "File not found: {}", p.display()),
            Error::InvalidCellValue(e) => write!(f, "Invalid cell value: {}", e),
            Error::Workbook(e) => write!(f, "Failed to read workbook: {}", e),
            Error::Directory(e) => write!(f, "Invalid value directory: {}", e),
        }
    }
}

impl std::error::Error for Error {}
