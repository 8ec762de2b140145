use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Drive monitor brightness from a USB serial ambient light sensor")]
pub struct Args {
    /// USB product ID of the sensor, as hex digits
    #[arg(long, default_value = "4508", value_parser = parse_pid)]
    pub pid: u16,

    #[arg(long, default_value_t = 115200)]
    pub baud: u32,

    /// Sleep between polls while the port has no bytes pending
    #[arg(long, default_value_t = 10)]
    pub poll_interval_ms: u64,

    /// Brightness control executable to invoke
    #[arg(long, default_value = "twinkletray", env = "GLOWDIAL_TOOL")]
    pub tool: String,

    /// Monitor index passed to the brightness tool
    #[arg(long, default_value_t = 2)]
    pub monitor: u32,
}

fn parse_pid(s: &str) -> Result<u16, String> {
    u16::from_str_radix(s, 16).map_err(|e| format!("product ID must be hex digits: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_constants() {
        let args = Args::parse_from(["glowdial"]);
        assert_eq!(args.pid, 0x4508);
        assert_eq!(args.baud, 115200);
        assert_eq!(args.poll_interval_ms, 10);
        assert_eq!(args.tool, "twinkletray");
        assert_eq!(args.monitor, 2);
    }

    #[test]
    fn pid_is_parsed_as_hex() {
        let args = Args::parse_from(["glowdial", "--pid", "239a"]);
        assert_eq!(args.pid, 0x239a);
    }

    #[test]
    fn rejects_non_hex_pid() {
        assert!(Args::try_parse_from(["glowdial", "--pid", "zz"]).is_err());
    }
}
