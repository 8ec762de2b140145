use std::io;
use std::process::Command;

use log::{debug, warn};

pub trait Actuator {
    fn set_brightness(&mut self, value: f64) -> io::Result<()>;
}

/// Shells out to the Twinkle Tray CLI. Blocks until the tool exits; a
/// non-zero exit status is logged but never treated as an error.
pub struct Twinkletray {
    program: String,
    monitor: u32,
}

impl Twinkletray {
    pub fn new(program: String, monitor: u32) -> Self {
        Self { program, monitor }
    }

    fn args(&self, value: f64) -> [String; 2] {
        // fractional percentages are passed through verbatim
        [
            format!("--MonitorNum={}", self.monitor),
            format!("--Set={value}"),
        ]
    }
}

impl Actuator for Twinkletray {
    fn set_brightness(&mut self, value: f64) -> io::Result<()> {
        let output = Command::new(&self.program).args(self.args(value)).output()?;
        debug!(
            "{} stdout: {}",
            self.program,
            String::from_utf8_lossy(&output.stdout).trim()
        );
        debug!(
            "{} stderr: {}",
            self.program,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        if !output.status.success() {
            warn!("{} exited with {}", self.program, output.status);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_vector_selects_monitor_and_value() {
        let tray = Twinkletray::new("twinkletray".to_string(), 2);
        assert_eq!(tray.args(40.0), ["--MonitorNum=2", "--Set=40"]);
    }

    #[test]
    fn fractional_values_are_not_rounded() {
        let tray = Twinkletray::new("twinkletray".to_string(), 2);
        assert_eq!(tray.args(16.16)[1], "--Set=16.16");
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let tray = Twinkletray::new("twinkletray".to_string(), 1);
        assert_eq!(tray.args(96.0), ["--MonitorNum=1", "--Set=96"]);
        assert_eq!(tray.args(-8.0)[1], "--Set=-8");
    }
}
