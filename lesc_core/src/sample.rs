use std::io::Write;

use tracing::trace;

use crate::codec::ScalarCodec;
use crate::config::StringEncoding;
use crate::format::{varlen_encoded_len, LengthWidth, CHUNK7_MIXED, CHUNK7_UNIFORM};
use crate::scalar::Scalar;
use crate::varint::write_varlen_int;

// ── Numeric samples ────────────────────────────────────────────────────────

/// Write a numeric sample: `[Value1] .. [ValueN]`, no count and no separators.
///
/// The reader is expected to know N and the element type from the container.
pub fn write_sample_values<C, T, W>(codec: &C, dst: &mut W, values: &[T]) -> anyhow::Result<()>
where
    C: ScalarCodec,
    T: Scalar,
    W: Write + ?Sized,
{
    codec.encode_slice(dst, values)
}

/// Write several numeric samples back-to-back, each as [`write_sample_values`].
pub fn write_sample_chunks<C, T, W>(codec: &C, dst: &mut W, chunks: &[Vec<T>]) -> anyhow::Result<()>
where
    C: ScalarCodec,
    T: Scalar,
    W: Write + ?Sized,
{
    for chunk in chunks {
        codec.encode_slice(dst, chunk)?;
    }
    Ok(())
}

// ── String samples: plain ──────────────────────────────────────────────────

/// Write a string sample in plain mode: `[varlen len][bytes]` per string.
pub fn write_string_values<S, W>(dst: &mut W, strings: &[S]) -> anyhow::Result<()>
where
    S: AsRef<[u8]>,
    W: Write + ?Sized,
{
    for s in strings {
        let bytes = s.as_ref();
        write_varlen_int(dst, bytes.len() as u64)?;
        dst.write_all(bytes)?;
    }
    Ok(())
}

/// Bytes [`write_string_values`] would append for `strings`.
pub fn plain_encoded_len<S: AsRef<[u8]>>(strings: &[S]) -> u64 {
    strings
        .iter()
        .map(|s| {
            let len = s.as_ref().len() as u64;
            varlen_encoded_len(len) + len
        })
        .sum()
}

// ── String samples: chunk7 ─────────────────────────────────────────────────

/// Batch analysis for a non-empty chunk7 string sample.
///
/// Wire layout:
/// ```text
/// [uniform:1][width:1][len × (1 | N), each `width` bytes LE][bytes of s1 .. sN]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk7Plan {
    /// All strings share one byte length.
    pub uniform: bool,
    /// Width of every length entry, fixed by the longest string.
    pub width: LengthWidth,
    /// One entry when `uniform`, otherwise one per string.
    pub lengths: Vec<u64>,
    /// Sum of all string byte lengths.
    pub payload_len: u64,
}

impl Chunk7Plan {
    /// Analyze `strings`. Returns `None` for an empty batch, which encodes to nothing.
    pub fn new<S: AsRef<[u8]>>(strings: &[S]) -> Option<Self> {
        let mut lengths: Vec<u64> = strings.iter().map(|s| s.as_ref().len() as u64).collect();
        let min = *lengths.iter().min()?;
        let max = *lengths.iter().max()?;
        let payload_len = lengths.iter().sum();

        let uniform = min == max;
        if uniform {
            lengths.truncate(1);
        }

        Some(Self {
            uniform,
            width: LengthWidth::for_max(max),
            lengths,
            payload_len,
        })
    }

    /// Total bytes this plan appends, header and payload included.
    pub fn encoded_len(&self) -> u64 {
        2 + self.lengths.len() as u64 * self.width.bytes() as u64 + self.payload_len
    }

    /// Write the header and length list. String bytes follow separately.
    fn write_header<W: Write + ?Sized>(&self, dst: &mut W) -> anyhow::Result<()> {
        let flag = if self.uniform { CHUNK7_UNIFORM } else { CHUNK7_MIXED };
        dst.write_all(&[flag, self.width.bytes()])?;

        let mut buf = Vec::with_capacity(self.lengths.len() * self.width.bytes() as usize);
        match self.width {
            LengthWidth::U8 => {
                for &len in &self.lengths {
                    buf.push(len as u8);
                }
            }
            LengthWidth::U16 => {
                for &len in &self.lengths {
                    buf.extend_from_slice(&(len as u16).to_le_bytes());
                }
            }
            LengthWidth::U32 => {
                for &len in &self.lengths {
                    buf.extend_from_slice(&(len as u32).to_le_bytes());
                }
            }
            LengthWidth::U64 => {
                for &len in &self.lengths {
                    buf.extend_from_slice(&len.to_le_bytes());
                }
            }
        }
        dst.write_all(&buf)?;
        Ok(())
    }
}

/// Write a string sample in chunk7 mode. An empty batch writes zero bytes.
pub fn write_chunk7_strings<S, W>(dst: &mut W, strings: &[S]) -> anyhow::Result<()>
where
    S: AsRef<[u8]>,
    W: Write + ?Sized,
{
    let Some(plan) = Chunk7Plan::new(strings) else {
        return Ok(());
    };
    trace!(
        count = strings.len(),
        uniform = plan.uniform,
        width = plan.width.bytes(),
        "chunk7 string batch"
    );

    plan.write_header(dst)?;
    for s in strings {
        dst.write_all(s.as_ref())?;
    }
    Ok(())
}

// ── Sample dispatch ────────────────────────────────────────────────────────

/// A homogeneous sample that knows which encoder path it takes.
///
/// Implemented for slices of every [`Scalar`], for string slices
/// (`String`, `&str`, `Vec<u8>`), and for `Vec`s of those.
pub trait SampleValues {
    /// Number of elements in the sample.
    fn element_count(&self) -> usize;

    /// Append the sample to `dst`. `encoding` only affects string samples.
    fn write_to<C: ScalarCodec, W: Write + ?Sized>(
        &self,
        codec: &C,
        dst: &mut W,
        encoding: StringEncoding,
    ) -> anyhow::Result<()>;
}

impl<T: Scalar> SampleValues for [T] {
    fn element_count(&self) -> usize {
        self.len()
    }

    fn write_to<C: ScalarCodec, W: Write + ?Sized>(
        &self,
        codec: &C,
        dst: &mut W,
        _encoding: StringEncoding,
    ) -> anyhow::Result<()> {
        write_sample_values(codec, dst, self)
    }
}

macro_rules! impl_string_sample {
    ($($t:ty),*) => {$(
        impl SampleValues for [$t] {
            fn element_count(&self) -> usize {
                self.len()
            }

            fn write_to<C: ScalarCodec, W: Write + ?Sized>(
                &self,
                _codec: &C,
                dst: &mut W,
                encoding: StringEncoding,
            ) -> anyhow::Result<()> {
                match encoding {
                    StringEncoding::Plain => write_string_values(dst, self),
                    StringEncoding::Chunk7 => write_chunk7_strings(dst, self),
                }
            }
        }
    )*};
}

impl_string_sample!(String, &str, Vec<u8>);

impl<T> SampleValues for Vec<T>
where
    [T]: SampleValues,
{
    fn element_count(&self) -> usize {
        self.as_slice().element_count()
    }

    fn write_to<C: ScalarCodec, W: Write + ?Sized>(
        &self,
        codec: &C,
        dst: &mut W,
        encoding: StringEncoding,
    ) -> anyhow::Result<()> {
        self.as_slice().write_to(codec, dst, encoding)
    }
}
