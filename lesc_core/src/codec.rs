use std::io::Write;

use crate::scalar::{Bits, Scalar};

/// Core scalar encoding abstraction.
///
/// Each `ScalarCodec` implementation:
/// - Turns one [`Scalar`] into its canonical bit pattern via `canonical_bits`.
/// - Writes those bits little-endian, independent of host byte order.
/// - Holds no state between calls. The same codec value may encode into any
///   number of sinks, from any thread.
///
/// Exactly one implementation is used per build target; `lesc_codecs` picks
/// it at compile time.
pub trait ScalarCodec: Send + Sync {
    /// Human-readable codec name for logs.
    fn name(&self) -> &'static str;

    /// Canonical bit pattern of `value`, before byte ordering.
    fn canonical_bits<T: Scalar>(&self, value: T) -> T::Bits;

    /// Append the little-endian encoding of `value` to `dst`.
    fn encode<T: Scalar, W: Write + ?Sized>(&self, dst: &mut W, value: T) -> anyhow::Result<()> {
        dst.write_all(self.canonical_bits(value).le_bytes().as_ref())?;
        Ok(())
    }

    /// Append the encodings of `values` back-to-back, with no framing.
    ///
    /// Each value is handed to `dst` as soon as it is encoded. An override must
    /// produce the same bytes as calling [`encode`](Self::encode) once per element.
    fn encode_slice<T: Scalar, W: Write + ?Sized>(
        &self,
        dst: &mut W,
        values: &[T],
    ) -> anyhow::Result<()> {
        for &value in values {
            self.encode(dst, value)?;
        }
        Ok(())
    }
}
