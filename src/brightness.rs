const LUX_MIN: f64 = 0.0;
const LUX_MAX: f64 = 500.0;
const OUTPUT_MIN: f64 = 0.0;
const OUTPUT_MAX: f64 = 80.0;

/// Linear lux -> brightness percent transform. Deliberately unclamped: lux
/// outside [0, 500] maps outside [0, 80] and is forwarded to the tool as-is.
pub fn map_lux(lux: f64) -> f64 {
    (lux - LUX_MIN) * (OUTPUT_MAX - OUTPUT_MIN) / (LUX_MAX - LUX_MIN) + OUTPUT_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        assert_eq!(map_lux(0.0), 0.0);
        assert_eq!(map_lux(250.0), 40.0);
        assert_eq!(map_lux(500.0), 80.0);
    }

    #[test]
    fn out_of_range_lux_is_not_clamped() {
        assert_eq!(map_lux(600.0), 96.0);
        assert_eq!(map_lux(-50.0), -8.0);
    }
}
