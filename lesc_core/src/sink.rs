use std::io::{self, Write};

/// Append-only output sink that counts the bytes it forwards.
///
/// Wraps any [`Write`]. It has no `Seek` impl: encoders can only append, so
/// `bytes_written` always equals the length of what the inner writer received.
pub struct Sink<W> {
    inner: W,
    written: u64,
}

impl<W: Write> Sink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes accepted by the inner writer so far.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the sink without flushing.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Sink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
