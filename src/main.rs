mod args;
mod brightness;
mod device;
mod line;
mod reading;
mod supervisor;
mod twinkletray;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use log::{debug, info};

use args::Args;
use supervisor::Supervisor;
use twinkletray::Twinkletray;

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn run() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // fail fast if the host has no serial subsystem at all
    let ports = serialport::available_ports().context("serial port discovery is unavailable")?;
    debug!("{} serial ports visible", ports.len());

    info!("watching for sensor PID {:04X}", args.pid);
    let actuator = Twinkletray::new(args.tool, args.monitor);
    let mut supervisor = Supervisor::new(
        args.pid,
        args.baud,
        Duration::from_millis(args.poll_interval_ms),
        actuator,
    );
    supervisor.run()
}
