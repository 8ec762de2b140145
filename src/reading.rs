use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// One decoded sensor line. Anything besides `lux` is ignored.
#[derive(Debug, Deserialize)]
pub struct Reading {
    pub lux: f64,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Line is not JSON at all; the supervisor skips it and moves on.
    #[error("line is not valid JSON: {0}")]
    Json(serde_json::Error),
    /// Valid JSON without a numeric `lux` field; fatal to the session.
    #[error("reading carries no numeric \"lux\" field")]
    MissingLux,
}

pub fn decode(line: &str) -> Result<Reading, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(line).map_err(DecodeError::Json)?;
    debug!("decoded {value}");
    serde_json::from_value(value).map_err(|_| DecodeError::MissingLux)
}
