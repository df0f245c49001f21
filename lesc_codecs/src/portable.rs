use std::num::FpCategory;

use lesc_core::scalar::{Bits, Scalar};
use lesc_core::ScalarCodec;

/// Classify-then-emit scalar codec.
///
/// Floats are classified before any bits are produced, and special values
/// are rebuilt from the format's bit masks:
/// - NaN: exponent and mantissa all ones, sign clear. Payload and sign are dropped.
/// - ±Infinity: exponent all ones, mantissa clear, sign bit iff negative.
/// - Zero, subnormal, normal: the value's own bits (so `-0.0` keeps its sign).
///
/// Integers are written as their bits. Values are emitted one at a time.
///
/// Best for: big-endian targets and builds that must not rely on the host's
/// float representation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableScalarCodec;

impl ScalarCodec for PortableScalarCodec {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn canonical_bits<T: Scalar>(&self, value: T) -> T::Bits {
        let Some(class) = value.float_class() else {
            return value.to_bits();
        };
        // a float class without float masks; unreachable for the sealed scalar set
        let Some(layout) = T::FLOAT_LAYOUT else {
            return <T::Bits as Bits>::ZERO;
        };

        match class {
            FpCategory::Nan => layout.exponent | layout.mantissa,
            FpCategory::Infinite if value.is_negative() => layout.exponent | layout.sign,
            FpCategory::Infinite => layout.exponent,
            FpCategory::Zero | FpCategory::Subnormal | FpCategory::Normal => value.to_bits(),
        }
    }
}
