use std::io;
use std::thread;
use std::time::Duration;

use serialport::SerialPort;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("serial I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("serial data is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Seam over the serial port so the read loop can be driven in tests.
pub trait ByteSource {
    fn bytes_to_read(&mut self) -> io::Result<u32>;
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

impl ByteSource for Box<dyn SerialPort> {
    fn bytes_to_read(&mut self) -> io::Result<u32> {
        SerialPort::bytes_to_read(&**self).map_err(io::Error::from)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(self, buf)
    }
}

#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    pub fn extend(&mut self, chunk: &str) {
        self.buf.push_str(chunk);
    }

    /// Splits off everything up to the first newline. Partial trailing
    /// content stays buffered until a later extend completes it.
    pub fn next_line(&mut self) -> Option<String> {
        let at = self.buf.find('\n')?;
        let rest = self.buf.split_off(at + 1);
        let mut line = std::mem::replace(&mut self.buf, rest);
        line.pop();
        Some(line)
    }
}

pub struct LineReader<S> {
    source: S,
    buffer: LineBuffer,
    poll_interval: Duration,
}

impl<S: ByteSource> LineReader<S> {
    pub fn new(source: S, poll_interval: Duration) -> Self {
        Self {
            source,
            buffer: LineBuffer::default(),
            poll_interval,
        }
    }

    /// Blocks until the port reports pending bytes, then appends them all to
    /// the buffer. Invalid UTF-8 is fatal to the session, same as I/O errors.
    pub fn fill(&mut self) -> Result<(), ReadError> {
        loop {
            let pending = self.source.bytes_to_read()?;
            if pending == 0 {
                thread::sleep(self.poll_interval);
                continue;
            }
            let mut chunk = vec![0u8; pending as usize];
            let n = self.source.read(&mut chunk)?;
            if n == 0 {
                return Err(ReadError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "serial port closed",
                )));
            }
            let text = std::str::from_utf8(&chunk[..n])?;
            self.buffer.extend(text);
            return Ok(());
        }
    }

    pub fn next_line(&mut self) -> Option<String> {
        self.buffer.next_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_complete_lines_and_keeps_the_partial_tail() {
        let mut buf = LineBuffer::default();
        buf.extend("{\"lux\": 1}\n{\"lux\": 2}\n{\"lux\":");
        assert_eq!(buf.next_line().as_deref(), Some("{\"lux\": 1}"));
        assert_eq!(buf.next_line().as_deref(), Some("{\"lux\": 2}"));
        assert_eq!(buf.next_line(), None);

        buf.extend(" 3}\n");
        assert_eq!(buf.next_line().as_deref(), Some("{\"lux\": 3}"));
        assert_eq!(buf.next_line(), None);
    }

    #[test]
    fn no_newline_means_no_line() {
        let mut buf = LineBuffer::default();
        buf.extend("still going");
        assert_eq!(buf.next_line(), None);
    }

    #[test]
    fn empty_lines_come_through_as_empty() {
        let mut buf = LineBuffer::default();
        buf.extend("\n\n");
        assert_eq!(buf.next_line().as_deref(), Some(""));
        assert_eq!(buf.next_line().as_deref(), Some(""));
        assert_eq!(buf.next_line(), None);
    }
}
