use std::io::Write;

use crate::codec::ScalarCodec;
use crate::format::varlen_width;
use crate::scalar::Scalar;

/// Write `value` as a varlen int: `[width:1][value: width bytes LE]`.
///
/// `width` is 1, 4 or 8 as chosen by [`varlen_width`].
pub fn write_varlen_int<W: Write + ?Sized>(dst: &mut W, value: u64) -> anyhow::Result<()> {
    let width = varlen_width(value) as usize;
    let mut buf = [0u8; 9];
    buf[0] = width as u8;
    // low `width` bytes of the LE form; the value fits by construction
    buf[1..1 + width].copy_from_slice(&value.to_le_bytes()[..width]);
    dst.write_all(&buf[..1 + width])?;
    Ok(())
}

/// Write `value` with a tag equal to its static width: `[T::WIDTH:1][value]`.
///
/// Used where the width is fixed by the type instead of derived from the magnitude.
pub fn write_fixlen_int<C, T, W>(codec: &C, dst: &mut W, value: T) -> anyhow::Result<()>
where
    C: ScalarCodec,
    T: Scalar,
    W: Write + ?Sized,
{
    dst.write_all(&[T::WIDTH as u8])?;
    codec.encode(dst, value)
}
