use std::fmt::Debug;
use std::num::FpCategory;
use std::ops::BitOr;

mod private {
    pub trait SealedScalar {}
    pub trait SealedBits {}
}

/// Unsigned bit container with the same width as a [`Scalar`].
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only.
pub trait Bits: Copy + Eq + Debug + BitOr<Output = Self> + private::SealedBits {
    /// All bits clear.
    const ZERO: Self;

    /// Little-endian byte array of this width (`[u8; N]`).
    type Le: AsRef<[u8]>;

    fn le_bytes(self) -> Self::Le;
}

/// Sign, exponent and mantissa masks of an IEEE-754 binary format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatLayout<B> {
    pub sign: B,
    pub exponent: B,
    pub mantissa: B,
}

/// A fixed-width numeric sample element.
///
/// Sealed: the set of scalars is exactly `u8 i8 u16 i16 u32 i32 u64 i64 f32 f64`.
/// Each has a known width and a same-width unsigned [`Bits`] representation.
pub trait Scalar: Copy + PartialEq + Debug + Send + Sync + private::SealedScalar {
    type Bits: Bits;

    /// Width in bytes on the wire (1, 2, 4 or 8).
    const WIDTH: usize = std::mem::size_of::<Self>();

    /// Bit masks for float types, `None` for integers.
    const FLOAT_LAYOUT: Option<FloatLayout<Self::Bits>>;

    /// Raw bit pattern of the value.
    fn to_bits(self) -> Self::Bits;

    /// Float classification, `None` for integers.
    fn float_class(self) -> Option<FpCategory>;

    /// True for values below zero. Always false for `-0.0` and NaN.
    fn is_negative(self) -> bool;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {$(
        impl private::SealedBits for $t {}

        impl Bits for $t {
            const ZERO: Self = 0;
            type Le = [u8; std::mem::size_of::<$t>()];

            #[inline]
            fn le_bytes(self) -> Self::Le {
                self.to_le_bytes()
            }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64);

macro_rules! impl_unsigned_scalar {
    ($($t:ty),*) => {$(
        impl private::SealedScalar for $t {}

        impl Scalar for $t {
            type Bits = $t;
            const FLOAT_LAYOUT: Option<FloatLayout<$t>> = None;

            #[inline]
            fn to_bits(self) -> $t {
                self
            }

            #[inline]
            fn float_class(self) -> Option<FpCategory> {
                None
            }

            #[inline]
            fn is_negative(self) -> bool {
                false
            }
        }
    )*};
}

macro_rules! impl_signed_scalar {
    ($($t:ty => $bits:ty),*) => {$(
        impl private::SealedScalar for $t {}

        impl Scalar for $t {
            type Bits = $bits;
            const FLOAT_LAYOUT: Option<FloatLayout<$bits>> = None;

            #[inline]
            fn to_bits(self) -> $bits {
                self as $bits
            }

            #[inline]
            fn float_class(self) -> Option<FpCategory> {
                None
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

macro_rules! impl_float_scalar {
    ($($t:ty => $bits:ty { sign: $sign:expr, exponent: $exp:expr, mantissa: $man:expr }),*) => {$(
        impl private::SealedScalar for $t {}

        impl Scalar for $t {
            type Bits = $bits;
            const FLOAT_LAYOUT: Option<FloatLayout<$bits>> = Some(FloatLayout {
                sign: $sign,
                exponent: $exp,
                mantissa: $man,
            });

            #[inline]
            fn to_bits(self) -> $bits {
                <$t>::to_bits(self)
            }

            #[inline]
            fn float_class(self) -> Option<FpCategory> {
                Some(self.classify())
            }

            #[inline]
            fn is_negative(self) -> bool {
                self < 0.0
            }
        }
    )*};
}

impl_unsigned_scalar!(u8, u16, u32, u64);
impl_signed_scalar!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_float_scalar!(
    f32 => u32 {
        sign: 0x8000_0000,
        exponent: 0x7F80_0000,
        mantissa: 0x007F_FFFF
    },
    f64 => u64 {
        sign: 0x8000_0000_0000_0000,
        exponent: 0x7FF0_0000_0000_0000,
        mantissa: 0x000F_FFFF_FFFF_FFFF
    }
);
