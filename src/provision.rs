use crate::address;
use crate::config::Config;
use crate::error::Error;
use crate::loader;
use crate::mem::{Block, Device, Kind};

use log::info;
use std::path::Path;

pub fn check_value_dir(dir: &Path) -> Result<(), Error> {
    if !dir.exists() {
        return Err(Error::Directory(format!(
            "{} does not exist",
            dir.display()
        )));
    }
    if !dir.is_dir() {
        return Err(Error::Directory(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    Ok(())
}

/// Assemble the device context from the configuration. Any failure aborts
/// provisioning for the whole device; no partial device is ever served.
pub fn provision(config: &Config) -> Result<Device, Error> {
    let dir = Path::new(&config.value_dir);
    check_value_dir(dir)?;

    let mut device = Device::new(config.modbus.slave_id);
    for kind in Kind::ALL {
        if !config.value_enable.get(kind) {
            continue;
        }
        let start = address::resolve(config.start_address.get(kind), 0)?;
        let values = loader::load_values(&dir.join(kind.file_name()), config.data_base)?;
        info!(
            "[LOAD] {} | start={:#06X} | values={}",
            kind,
            start,
            values.len()
        );
        device.insert(kind, Block::new(start, values));
    }
    Ok(device)
}

#[cfg(test)]
mod tests {
    use super::{check_value_dir, provision};
    use crate::config::{Config, DataBase, ModbusConfig, SerialConfig, StartAddresses, ValueEnable};
    use crate::error::Error;

    use std::path::Path;

    fn config(value_dir: &str, enable: ValueEnable) -> Config {
        Config {
            serial: SerialConfig {
                port: "/dev/null".to_owned(),
                baudrate: 9600,
                bytesize: 8,
                parity: "N".to_owned(),
                stopbits: 1,
                timeout: 5.0,
            },
            modbus: ModbusConfig { slave_id: 1 },
            value_enable: enable,
            value_dir: value_dir.to_owned(),
            data_base: DataBase::Dec,
            start_address: StartAddresses::default(),
            enable_logging: false,
        }
    }

    #[test]
    fn ut_provision_missing_dir() {
        let config = config(
            "no/such/dir",
            ValueEnable {
                co: true,
                ..ValueEnable::default()
            },
        );
        assert!(matches!(provision(&config), Err(Error::Directory(_))));
    }

    #[test]
    fn ut_provision_all_disabled() {
        // No kind enabled: nothing is read, the device map stays empty.
        let config = config("src", ValueEnable::default());
        let device = provision(&config).unwrap();
        assert!(device.is_empty());
        assert_eq!(device.slave_id(), 1);
    }

    #[test]
    fn ut_check_value_dir_rejects_file() {
        assert!(matches!(
            check_value_dir(Path::new("Cargo.toml")),
            Err(Error::Directory(_))
        ));
        assert!(check_value_dir(Path::new("src")).is_ok());
    }
}
