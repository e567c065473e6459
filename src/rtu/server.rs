use crate::config::SerialConfig;
use crate::mem::{Device, Kind};

use anyhow::anyhow;
use log::{debug, error};
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio_modbus::prelude::{ExceptionCode, Response, SlaveRequest};
use tokio_modbus::server::rtu::Server as RtuServer;
use tokio_modbus::Request;
use tokio_serial::{DataBits, Parity, SerialStream, StopBits};

struct Service {
    device: Arc<Device>,
}

impl Service {
    fn read_words(&self, kind: Kind, addr: u16, cnt: u16) -> Result<Vec<u16>, ExceptionCode> {
        match self.device.block(kind).and_then(|b| b.read(addr, cnt)) {
            Some(values) => {
                debug!(
                    "{}: read [{:#06X}, {:#06X})",
                    kind,
                    addr,
                    addr as u32 + cnt as u32
                );
                Ok(values.to_vec())
            }
            None => Err(ExceptionCode::IllegalDataAddress),
        }
    }

    fn read_bits(&self, kind: Kind, addr: u16, cnt: u16) -> Result<Vec<bool>, ExceptionCode> {
        self.read_words(kind, addr, cnt)
            .map(|v| v.into_iter().map(|b| b != 0).collect())
    }
}

impl tokio_modbus::server::Service for Service {
    type Request = SlaveRequest<'static>;
    type Response = Response;
    type Exception = ExceptionCode;
    type Future = future::Ready<Result<Response, ExceptionCode>>;

    fn call(&self, request: Self::Request) -> Self::Future {
        let SlaveRequest { slave, request } = request;
        if slave != self.device.slave_id() {
            return future::ready(Err(ExceptionCode::IllegalDataAddress));
        }

        let result = match request {
            Request::ReadCoils(addr, cnt) => self
                .read_bits(Kind::Coil, addr, cnt)
                .map(Response::ReadCoils),
            Request::ReadDiscreteInputs(addr, cnt) => self
                .read_bits(Kind::DiscreteInput, addr, cnt)
                .map(Response::ReadDiscreteInputs),
            Request::ReadHoldingRegisters(addr, cnt) => self
                .read_words(Kind::HoldingRegister, addr, cnt)
                .map(Response::ReadHoldingRegisters),
            Request::ReadInputRegisters(addr, cnt) => self
                .read_words(Kind::InputRegister, addr, cnt)
                .map(Response::ReadInputRegisters),
            // Register contents come from the spreadsheets; writes are unserved.
            _ => Err(ExceptionCode::IllegalFunction),
        };

        if let Err(e) = &result {
            error!("request failed: {:?}", e);
        }
        future::ready(result)
    }
}

pub struct Server {
    config: SerialConfig,
    device: Arc<Device>,
}

impl Server {
    pub fn new(config: SerialConfig, device: Device) -> Self {
        Self {
            config,
            device: Arc::new(device),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let builder = serial_builder(&self.config)?;
        let serial_stream = SerialStream::open(&builder)
            .map_err(|e| anyhow!("failed to open {} ({})", self.config.port, e))?;

        let server = RtuServer::new(serial_stream);
        let service = Service {
            device: self.device.clone(),
        };
        server
            .serve_forever(service)
            .await
            .map_err(|e| anyhow!("server shut down unexpectedly ({})", e))
    }
}

fn serial_builder(config: &SerialConfig) -> anyhow::Result<tokio_serial::SerialPortBuilder> {
    let mut builder = tokio_serial::new(&config.port, config.baudrate)
        .timeout(Duration::from_secs_f64(config.timeout));
    builder = builder.data_bits(match config.bytesize {
        5 => DataBits::Five,
        6 => DataBits::Six,
        7 => DataBits::Seven,
        8 => DataBits::Eight,
        v => return Err(anyhow!("invalid bytesize specified: {}", v)),
    });
    builder = builder.stop_bits(match config.stopbits {
        1 => StopBits::One,
        2 => StopBits::Two,
        v => return Err(anyhow!("invalid stopbits specified: {}", v)),
    });
    builder = builder.parity(match config.parity.to_lowercase().as_str() {
        "n" | "none" => Parity::None,
        "e" | "even" => Parity::Even,
        "o" | "odd" => Parity::Odd,
        v => return Err(anyhow!("invalid parity specified: {}", v)),
    });
    Ok(builder)
}
