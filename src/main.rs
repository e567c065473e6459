use modbus_sim_rs::config::Config;
use modbus_sim_rs::console::{self, Command};
use modbus_sim_rs::logging::{self, LogConfig};
use modbus_sim_rs::provision;
use modbus_sim_rs::rtu::Server;

use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: String,

    /// Switch on verbose output.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Skip the interactive start prompt.
    #[arg(long, default_value_t = false)]
    no_prompt: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    console::print_banner();
    console::print_help();

    if !args.no_prompt {
        let stdin = std::io::stdin();
        if console::wait_for_start(&mut stdin.lock())? == Command::Quit {
            println!("Exiting.");
            return Ok(());
        }
    }

    let config = Config::read(&args.config)?;

    logging::init(&LogConfig {
        to_file: config.enable_logging,
        dir: PathBuf::from("log"),
        verbose: args.verbose,
    })?;
    if config.enable_logging {
        println!("[LOG ] communication log enabled (log/ directory)");
    } else {
        println!("[LOG ] communication log disabled");
    }

    let device = provision::provision(&config)?;

    println!();
    println!("Modbus RTU slave ready");
    println!("{}", "-".repeat(40));
    println!("  Slave ID : {}", config.modbus.slave_id);
    println!("  Port     : {}", config.serial.port);
    println!("  Baudrate : {}", config.serial.baudrate);
    println!("  Data base: {}", config.data_base);
    println!("  Value dir: {}", config.value_dir);
    println!("{}", "-".repeat(40));
    println!("Waiting for Modbus master requests...");
    println!();

    let runtime = Runtime::new()?;
    runtime.block_on(async {
        let server = Server::new(config.serial.clone(), device);
        server.run().await
    })
}
