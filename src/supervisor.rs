use std::io;
use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::brightness;
use crate::device;
use crate::line::{ByteSource, LineReader, ReadError};
use crate::reading::{self, DecodeError};
use crate::twinkletray::Actuator;

/// Anything that ends a processing session and forces a reconnect.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Decode(DecodeError),
    #[error("brightness tool could not be run: {0}")]
    Actuate(#[from] io::Error),
}

pub struct Supervisor<A> {
    product_id: u16,
    baud: u32,
    poll_interval: Duration,
    actuator: A,
}

impl<A: Actuator> Supervisor<A> {
    pub fn new(product_id: u16, baud: u32, poll_interval: Duration, actuator: A) -> Self {
        Self {
            product_id,
            baud,
            poll_interval,
            actuator,
        }
    }

    /// Connect, process until the session dies, reconnect. No terminal
    /// state; the process runs until it is killed from outside.
    pub fn run(&mut self) -> ! {
        loop {
            let port = device::wait_for_sensor(self.product_id, self.baud);
            let mut reader = LineReader::new(port, self.poll_interval);
            let err = self.run_session(&mut reader);
            warn!("session ended: {err}; reconnecting");
        }
    }

    fn run_session<S: ByteSource>(&mut self, reader: &mut LineReader<S>) -> SessionError {
        loop {
            if let Err(e) = self.step(reader) {
                return e;
            }
        }
    }

    // One read cycle: fill the buffer, drain every complete line, act on the
    // last reading of the flush. Earlier readings in the flush are dropped.
    fn step<S: ByteSource>(&mut self, reader: &mut LineReader<S>) -> Result<(), SessionError> {
        reader.fill()?;
        let mut pending = None;
        while let Some(line) = reader.next_line() {
            match reading::decode(&line) {
                Ok(reading) => pending = Some(reading.lux),
                Err(DecodeError::Json(e)) => warn!("discarding line, decode error: {e}"),
                Err(e @ DecodeError::MissingLux) => return Err(SessionError::Decode(e)),
            }
        }
        let Some(lux) = pending else {
            return Ok(());
        };
        let output = brightness::map_lux(lux);
        info!("lux {lux} output {output}");
        self.actuator.set_brightness(output)?;
        Ok(())
    }
}
