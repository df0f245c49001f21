use lesc_core::scalar::Scalar;
use lesc_core::ScalarCodec;

/// Direct-copy scalar codec.
///
/// Every value is written as its raw bit pattern in little-endian order,
/// NaN payloads included. Each value goes straight to the sink; nothing is
/// staged in between.
///
/// Best for: every mainstream target, where floats are already IEEE-754.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeScalarCodec;

impl ScalarCodec for NativeScalarCodec {
    fn name(&self) -> &'static str {
        "native"
    }

    #[inline]
    fn canonical_bits<T: Scalar>(&self, value: T) -> T::Bits {
        value.to_bits()
    }
}
