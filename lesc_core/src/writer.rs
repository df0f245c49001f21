use std::io::Write;

use anyhow::Context;
use tracing::{debug, trace};

use crate::codec::ScalarCodec;
use crate::config::WriterConfig;
use crate::sample::{write_sample_chunks, SampleValues};
use crate::scalar::Scalar;
use crate::sink::Sink;
use crate::varint::{write_fixlen_int, write_varlen_int};

/// Forward-only sample writer.
///
/// # Write contract
/// Call [`write_sample`] once per sample, in the order the container expects
/// them. Every call appends that sample's encoding immediately; nothing is
/// buffered here, and no state carries from one sample to the next. Call
/// [`finish`] to flush the sink and get the destination back.
///
/// The element count and element type of each sample are not written. The
/// surrounding container records them out-of-band.
///
/// [`write_sample`]: SampleWriter::write_sample
/// [`finish`]: SampleWriter::finish
pub struct SampleWriter<W: Write, C: ScalarCodec> {
    sink: Sink<W>,
    codec: C,
    config: WriterConfig,
    samples_written: u64,
}

impl<W: Write, C: ScalarCodec> SampleWriter<W, C> {
    pub fn new(dst: W, codec: C, config: WriterConfig) -> Self {
        debug!(
            codec = codec.name(),
            string_encoding = config.string_encoding.name(),
            "sample writer created"
        );
        Self {
            sink: Sink::new(dst),
            codec,
            config,
            samples_written: 0,
        }
    }

    /// Append one sample and return the number of bytes it took.
    ///
    /// String samples use `config.string_encoding`; numeric samples ignore it.
    pub fn write_sample<V: SampleValues + ?Sized>(&mut self, values: &V) -> anyhow::Result<u64> {
        let start = self.sink.bytes_written();
        values
            .write_to(&self.codec, &mut self.sink, self.config.string_encoding)
            .with_context(|| {
                format!(
                    "writing sample {} ({} elements)",
                    self.samples_written,
                    values.element_count()
                )
            })?;
        let written = self.sink.bytes_written() - start;
        trace!(
            sample = self.samples_written,
            elements = values.element_count(),
            bytes = written,
            "sample encoded"
        );
        self.samples_written += 1;
        Ok(written)
    }

    /// Append several numeric samples back-to-back. Each chunk counts as one sample.
    pub fn write_chunks<T: Scalar>(&mut self, chunks: &[Vec<T>]) -> anyhow::Result<u64> {
        let start = self.sink.bytes_written();
        write_sample_chunks(&self.codec, &mut self.sink, chunks)
            .with_context(|| format!("writing {} sample chunks", chunks.len()))?;
        let written = self.sink.bytes_written() - start;
        trace!(chunks = chunks.len(), bytes = written, "sample chunks encoded");
        self.samples_written += chunks.len() as u64;
        Ok(written)
    }

    pub fn write_varlen_int(&mut self, value: u64) -> anyhow::Result<()> {
        write_varlen_int(&mut self.sink, value).context("writing varlen int")
    }

    pub fn write_fixlen_int<T: Scalar>(&mut self, value: T) -> anyhow::Result<()> {
        write_fixlen_int(&self.codec, &mut self.sink, value).context("writing fixlen int")
    }

    /// Total bytes appended to the destination.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.sink.bytes_written()
    }

    /// Samples appended so far. Each chunk of `write_chunks` counts as one.
    #[inline]
    pub fn samples_written(&self) -> u64 {
        self.samples_written
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Flush the sink and return the destination writer.
    pub fn finish(mut self) -> anyhow::Result<W> {
        self.sink.flush().context("flushing sample sink")?;
        debug!(
            samples = self.samples_written,
            bytes = self.sink.bytes_written(),
            "sample writer finished"
        );
        Ok(self.sink.into_inner())
    }
}
