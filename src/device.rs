use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use serialport::{SerialPort, SerialPortInfo, SerialPortType};

const SCAN_INTERVAL: Duration = Duration::from_secs(1);
const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Blocks until a sensor with the given USB product ID shows up and opens.
/// Retries the full port scan every second; never gives up.
pub fn wait_for_sensor(product_id: u16, baud: u32) -> Box<dyn SerialPort> {
    loop {
        match try_open(product_id, baud) {
            Ok(Some(port)) => return port,
            Ok(None) => debug!("no sensor with PID {product_id:04X} found, rescanning"),
            Err(e) => warn!("port scan failed: {e}"),
        }
        thread::sleep(SCAN_INTERVAL);
    }
}

fn try_open(product_id: u16, baud: u32) -> serialport::Result<Option<Box<dyn SerialPort>>> {
    let ports = serialport::available_ports()?;
    let Some(info) = find_sensor_port(&ports, product_id) else {
        return Ok(None);
    };
    let port = serialport::new(&info.port_name, baud)
        .timeout(READ_TIMEOUT)
        .open()?;
    info!("connected to sensor on {}", info.port_name);
    Ok(Some(port))
}

fn find_sensor_port(ports: &[SerialPortInfo], product_id: u16) -> Option<&SerialPortInfo> {
    ports.iter().find(|info| match &info.port_type {
        SerialPortType::UsbPort(usb) => usb.pid == product_id,
        _ => false,
    })
}
