use std::fmt::Display;

/// The four Modbus register address spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Coil,
    DiscreteInput,
    HoldingRegister,
    InputRegister,
}

impl Kind {
    /// Construction order during provisioning.
    pub const ALL: [Kind; 4] = [
        Kind::Coil,
        Kind::DiscreteInput,
        Kind::HoldingRegister,
        Kind::InputRegister,
    ];

    /// Short key used in the configuration sections.
    pub fn key(&self) -> &'static str {
        match self {
            Kind::Coil => "co",
            Kind::DiscreteInput => "di",
            Kind::HoldingRegister => "hr",
            Kind::InputRegister => "ir",
        }
    }

    /// Name of the spreadsheet providing this kind's values.
    pub fn file_name(&self) -> String {
        format!("{}.xlsx", self.key())
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Coil => f.write_str("CO"),
            Kind::DiscreteInput => f.write_str("DI"),
            Kind::HoldingRegister => f.write_str("HR"),
            Kind::InputRegister => f.write_str("IR"),
        }
    }
}
