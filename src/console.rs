//! Console surface: banner, configuration help and the start prompt. Nothing
//! in here touches the register model.

use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Quit,
}

pub fn print_banner() {
    println!("{}", "=".repeat(72));
    println!("{:^72}", "Modbus RTU Slave Emulator");
    println!("{}", "-".repeat(72));
    println!("Name    : {}", env!("CARGO_PKG_NAME"));
    println!("Version : {}", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(72));
    println!();
}

pub fn print_help() {
    println!("[Usage]");
    println!("  1) This program acts as a Modbus RTU slave.");
    println!("  2) Spreadsheet files define the register contents.");
    println!("  3) Row 1 of a spreadsheet maps to the configured start address.");
    println!("  4) Restart the program after editing a spreadsheet.");
    println!("  5) Use Modbus Poll, a SCADA host or a PLC as the master.");
    println!();

    println!("[config.yaml parameters]");
    println!();
    println!("  serial:                  # serial line parameters");
    println!("    port      : COM2       # device path");
    println!("    baudrate  : 9600       # baud rate");
    println!("    bytesize  : 8          # data bits");
    println!("    parity    : N          # parity (N/E/O)");
    println!("    stopbits  : 1          # stop bits");
    println!("    timeout   : 5.0        # timeout in seconds");
    println!();
    println!("  modbus:");
    println!("    slave_id  : 1          # Modbus slave address");
    println!();
    println!("  value_enable:            # which register kinds to serve");
    println!("    co        : true/false # Coil");
    println!("    di        : true/false # Discrete Input");
    println!("    hr        : true/false # Holding Register");
    println!("    ir        : true/false # Input Register");
    println!();
    println!("  value_dir:");
    println!("    data                   # directory holding the .xlsx files");
    println!();
    println!("  data_base:");
    println!("    dec                    # dec = decimal, hex = hexadecimal");
    println!();
    println!("  start_address:           # start address per register kind");
    println!("    co        : \"0x0000\"");
    println!("    di        : \"0x0000\"");
    println!("    hr        : \"0x0000\"");
    println!("    ir        : \"0x0000\"");
    println!("    # row 1 of each spreadsheet maps to these addresses");
    println!();
    println!("  enable_logging: true/false");
    println!("    true  -> logs are written to log/YYYY-MM-DD.log");
    println!("    false -> no communication log is kept");
    println!();
    println!("{}", "=".repeat(72));
    println!();
}

/// Wait for the operator to start or quit. Empty input starts, `q` quits,
/// end of input counts as quit.
pub fn wait_for_start<R: BufRead>(input: &mut R) -> io::Result<Command> {
    loop {
        print!("> Press Enter to start the slave, or type q to quit: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Command::Quit);
        }
        match line.trim().to_lowercase().as_str() {
            "" => return Ok(Command::Start),
            "q" => return Ok(Command::Quit),
            _ => println!("Invalid input, press Enter to start or type q to quit."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{wait_for_start, Command};
    use std::io::Cursor;

    #[test]
    fn ut_prompt_start_on_empty_line() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(wait_for_start(&mut input).unwrap(), Command::Start);
    }

    #[test]
    fn ut_prompt_quit() {
        let mut input = Cursor::new(b"q\n".to_vec());
        assert_eq!(wait_for_start(&mut input).unwrap(), Command::Quit);

        let mut input = Cursor::new(b"Q\n".to_vec());
        assert_eq!(wait_for_start(&mut input).unwrap(), Command::Quit);
    }

    #[test]
    fn ut_prompt_retries_invalid_input() {
        let mut input = Cursor::new(b"start\nnope\n\n".to_vec());
        assert_eq!(wait_for_start(&mut input).unwrap(), Command::Start);
    }

    #[test]
    fn ut_prompt_quit_on_eof() {
        let mut input = Cursor::new(b"".to_vec());
        assert_eq!(wait_for_start(&mut input).unwrap(), Command::Quit);
    }
}
