//! Spreadsheet loading: the first column of a workbook's first sheet becomes
//! one register value sequence.

use crate::config::DataBase;
use crate::error::Error;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Load the register values provided by the spreadsheet at `path`.
pub fn load_values(path: &Path, base: DataBase) -> Result<Vec<u16>, Error> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| Error::Workbook(format!("{}: {}", path.display(), e)))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Workbook(format!("{}: workbook has no sheets", path.display())))?
        .map_err(|e| Error::Workbook(format!("{}: {}", path.display(), e)))?;

    values_from_range(&range, base).map_err(|e| match e {
        Error::InvalidCellValue(msg) => {
            Error::InvalidCellValue(format!("{}: {}", path.display(), msg))
        }
        e => e,
    })
}

/// Convert a sheet range into the served value sequence.
///
/// The first element is duplicated and prepended, so the result has
/// row_count + 1 entries and `result[0] == result[1]`. Master-side tooling
/// relies on this addressing convention; see `mem::Block`.
pub fn values_from_range(range: &Range<Data>, base: DataBase) -> Result<Vec<u16>, Error> {
    let mut values = Vec::with_capacity(range.height() + 1);
    for (i, row) in range.rows().enumerate() {
        let cell = row.first().unwrap_or(&Data::Empty);
        let value = cell_value(cell, base).map_err(|e| match e {
            Error::InvalidCellValue(msg) => {
                Error::InvalidCellValue(format!("row {}: {}", i + 1, msg))
            }
            e => e,
        })?;
        values.push(value);
    }

    let first = values.first().copied().unwrap_or(0);
    values.insert(0, first);
    Ok(values)
}

fn cell_value(cell: &Data, base: DataBase) -> Result<u16, Error> {
    let invalid = || Error::InvalidCellValue(format!("{}", cell));
    let value: i64 = match (base, cell) {
        (_, Data::Empty) => 0,
        (DataBase::Hex, Data::String(s)) => parse_hex(s).ok_or_else(invalid)?,
        (DataBase::Hex, Data::Int(i)) => parse_hex(&i.to_string()).ok_or_else(invalid)?,
        (DataBase::Hex, Data::Float(f)) if f.fract() == 0.0 => {
            parse_hex(&(*f as i64).to_string()).ok_or_else(invalid)?
        }
        (DataBase::Dec, Data::Int(i)) => *i,
        (DataBase::Dec, Data::Float(f)) => f.trunc() as i64,
        (DataBase::Dec, Data::Bool(b)) => *b as i64,
        (DataBase::Dec, Data::String(s)) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(v) => v,
                Err(_) => s
                    .parse::<f64>()
                    .map(|f| f.trunc() as i64)
                    .map_err(|_| invalid())?,
            }
        }
        _ => return Err(invalid()),
    };
    u16::try_from(value).map_err(|_| invalid())
}

/// Hex cell text, with or without a `0x` prefix.
fn parse_hex(s: &str) -> Option<i64> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    i64::from_str_radix(digits, 16).ok()
}
