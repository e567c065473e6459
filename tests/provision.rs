use modbus_sim_rs::address::Address;
use modbus_sim_rs::config::{
    Config, DataBase, ModbusConfig, SerialConfig, StartAddresses, ValueEnable,
};
use modbus_sim_rs::error::Error;
use modbus_sim_rs::mem::Kind;
use modbus_sim_rs::provision::provision;

fn config(value_dir: &str) -> Config {
    Config {
        serial: SerialConfig {
            port: "/dev/ttyUSB0".to_owned(),
            baudrate: 9600,
            bytesize: 8,
            parity: "N".to_owned(),
            stopbits: 1,
            timeout: 5.0,
        },
        modbus: ModbusConfig { slave_id: 1 },
        value_enable: ValueEnable::default(),
        value_dir: value_dir.to_owned(),
        data_base: DataBase::Dec,
        start_address: StartAddresses::default(),
        enable_logging: false,
    }
}

#[test]
fn coil_block_from_spreadsheet() {
    // Only coils enabled, start address "0x0010", rows [1, 0, 1].
    let mut config = config("tests/data/dec");
    config.value_enable.co = true;
    config.start_address.co = Some(Address::Hex("0x0010".to_owned()));

    let device = provision(&config).unwrap();
    assert_eq!(device.len(), 1);

    let block = device.block(Kind::Coil).unwrap();
    assert_eq!(block.start(), 16);
    assert_eq!(block.values(), &[1, 1, 0, 1]);

    // A master read at the configured start address yields the rows.
    assert_eq!(block.read(16, 3).unwrap(), &[1, 0, 1]);
}

#[test]
fn disabled_kind_stays_unserved() {
    // hr.xlsx exists in the directory but the kind is switched off.
    let mut config = config("tests/data/dec");
    config.value_enable.co = true;

    let device = provision(&config).unwrap();
    assert!(device.block(Kind::HoldingRegister).is_none());
    assert!(device.block(Kind::Coil).is_some());
}

#[test]
fn empty_cell_loads_as_zero() {
    let mut config = config("tests/data/dec");
    config.value_enable.hr = true;

    let device = provision(&config).unwrap();
    let block = device.block(Kind::HoldingRegister).unwrap();
    assert_eq!(block.start(), 0);
    assert_eq!(block.values(), &[100, 100, 0, 300]);
}

#[test]
fn hex_base_loading() {
    let mut config = config("tests/data/hex");
    config.value_enable.hr = true;
    config.data_base = DataBase::Hex;
    config.start_address.hr = Some(Address::Decimal(32));

    let device = provision(&config).unwrap();
    let block = device.block(Kind::HoldingRegister).unwrap();
    assert_eq!(block.start(), 32);
    assert_eq!(block.values(), &[26, 26, 16]);
}

#[test]
fn hex_text_fails_under_dec_base() {
    let mut config = config("tests/data/hex");
    config.value_enable.hr = true;

    assert!(matches!(
        provision(&config),
        Err(Error::InvalidCellValue(_))
    ));
}

#[test]
fn missing_spreadsheet_is_fatal() {
    let mut config = config("tests/data/empty");
    config.value_enable.di = true;

    assert!(matches!(provision(&config), Err(Error::FileNotFound(_))));
}

#[test]
fn missing_value_dir_is_fatal() {
    let mut config = config("tests/data/nowhere");
    config.value_enable.co = true;

    assert!(matches!(provision(&config), Err(Error::Directory(_))));
}

#[test]
fn bad_start_address_aborts_provisioning() {
    let mut config = config("tests/data/dec");
    config.value_enable.co = true;
    config.start_address.co = Some(Address::Hex("not-hex".to_owned()));

    assert!(matches!(
        provision(&config),
        Err(Error::InvalidAddressFormat(_))
    ));
}
