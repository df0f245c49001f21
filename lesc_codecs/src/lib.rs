mod native;
mod portable;

pub use native::NativeScalarCodec;
pub use portable::PortableScalarCodec;

/// Scalar codec used when the caller does not pick one.
///
/// Little-endian targets get the direct-copy codec. Big-endian targets, or
/// builds with the `portable` feature, get the classify-then-emit codec.
#[cfg(all(target_endian = "little", not(feature = "portable")))]
pub type DefaultScalarCodec = NativeScalarCodec;

#[cfg(any(target_endian = "big", feature = "portable"))]
pub type DefaultScalarCodec = PortableScalarCodec;

pub fn default_codec() -> DefaultScalarCodec {
    DefaultScalarCodec::default()
}
