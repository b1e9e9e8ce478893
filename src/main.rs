use anyhow::{Context, Result};
use env_logger::Env;
use jarsplit::{cli, ui};
use log::debug;

fn init_logger() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init()
        .context("Failed to initialize logger")
}

fn main() {
    // Logging is optional; a failed init must not change the exit status.
    if let Err(e) = init_logger() {
        ui::print_error(&format!("{:#}", e));
    }

    debug!("Starting jarsplit v{}", env!("CARGO_PKG_VERSION"));

    let status = cli::run(std::env::args_os());
    std::process::exit(status.code());
}
