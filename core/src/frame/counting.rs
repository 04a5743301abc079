//! frame/counting.rs
//! Sink adapter for streamed payloads.
//!
//! Counts the payload bytes that reach the caller's writer and keeps the
//! first error that writer returned. Backends wrap sink errors in their own
//! types (brotli's final flush drops them), so the Frame Writer asks the
//! adapter, not the codec, whether the sink failed.

use std::io::{self, Write};

pub(crate) struct PayloadSink<W: Write> {
    inner: W,
    written: u64,
    failure: Option<(io::ErrorKind, String)>,
}

impl<W: Write> PayloadSink<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self { inner, written: 0, failure: None }
    }

    /// Payload bytes accepted by the sink so far.
    pub(crate) fn written(&self) -> u64 {
        self.written
    }

    /// First error the sink reported, if any.
    pub(crate) fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take().map(|(kind, msg)| io::Error::new(kind, msg))
    }

    fn note<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        if let Err(e) = &result {
            // write_all retries Interrupted itself.
            if e.kind() != io::ErrorKind::Interrupted && self.failure.is_none() {
                self.failure = Some((e.kind(), e.to_string()));
            }
        }
        result
    }
}

impl<W: Write> Write for PayloadSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        let n = self.note(result)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.note(result)
    }
}
