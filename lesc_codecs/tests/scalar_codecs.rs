/// Scalar codec tests: the per-class float bit patterns and the agreement
/// between the native and portable codecs on everything except NaN payloads.
use lesc_codecs::{default_codec, NativeScalarCodec, PortableScalarCodec};
use lesc_core::scalar::Scalar;
use lesc_core::ScalarCodec;

// ── helpers ───────────────────────────────────────────────────────────────

fn encode<C: ScalarCodec, T: Scalar>(codec: &C, value: T) -> Vec<u8> {
    let mut out = Vec::new();
    codec.encode(&mut out, value).unwrap();
    out
}

fn encode_slice<C: ScalarCodec, T: Scalar>(codec: &C, values: &[T]) -> Vec<u8> {
    let mut out = Vec::new();
    codec.encode_slice(&mut out, values).unwrap();
    out
}

// ── portable float classes ────────────────────────────────────────────────

#[test]
fn test_portable_f32_special_values() {
    let c = PortableScalarCodec;
    assert_eq!(encode(&c, f32::NAN), [0xFF, 0xFF, 0xFF, 0x7F]);
    assert_eq!(encode(&c, f32::INFINITY), [0x00, 0x00, 0x80, 0x7F]);
    assert_eq!(encode(&c, f32::NEG_INFINITY), [0x00, 0x00, 0x80, 0xFF]);
    assert_eq!(encode(&c, 0.0f32), [0x00, 0x00, 0x00, 0x00]);
    assert_eq!(encode(&c, -0.0f32), [0x00, 0x00, 0x00, 0x80]);
    assert_eq!(encode(&c, f32::from_bits(1)), [0x01, 0x00, 0x00, 0x00]);
    assert_eq!(encode(&c, f32::MAX), [0xFF, 0xFF, 0x7F, 0x7F]);
    assert_eq!(encode(&c, 1.0f32), [0x00, 0x00, 0x80, 0x3F]);
}

#[test]
fn test_portable_f64_special_values() {
    let c = PortableScalarCodec;
    assert_eq!(
        encode(&c, f64::NAN),
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F]
    );
    assert_eq!(
        encode(&c, f64::INFINITY),
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x7F]
    );
    assert_eq!(
        encode(&c, f64::NEG_INFINITY),
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0xFF]
    );
    assert_eq!(encode(&c, 0.0f64), [0u8; 8]);
    assert_eq!(
        encode(&c, -0.0f64),
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80]
    );
    assert_eq!(
        encode(&c, f64::from_bits(1)),
        [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
    );
    assert_eq!(
        encode(&c, f64::MAX),
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF, 0x7F]
    );
    assert_eq!(
        encode(&c, -2.5f64),
        [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0xC0]
    );
}

/// NaN sign and payload are not carried through the portable codec.
#[test]
fn test_portable_nan_is_canonical() {
    let c = PortableScalarCodec;
    let odd_nan = f32::from_bits(0xFFC0_1234);
    assert!(odd_nan.is_nan());
    assert_eq!(encode(&c, odd_nan), encode(&c, f32::NAN));

    let odd_nan64 = f64::from_bits(0xFFF8_0000_DEAD_BEEF);
    assert!(odd_nan64.is_nan());
    assert_eq!(encode(&c, odd_nan64), encode(&c, f64::NAN));
}

#[test]
fn test_signed_zero_stays_distinct() {
    for bytes in [
        (encode(&PortableScalarCodec, 0.0f32), encode(&PortableScalarCodec, -0.0f32)),
        (encode(&NativeScalarCodec, 0.0f32), encode(&NativeScalarCodec, -0.0f32)),
    ] {
        assert_ne!(bytes.0, bytes.1, "+0.0 and -0.0 must encode differently");
    }
    assert_ne!(
        encode(&PortableScalarCodec, 0.0f64),
        encode(&PortableScalarCodec, -0.0f64)
    );
}

// ── native codec ──────────────────────────────────────────────────────────

#[test]
fn test_native_keeps_nan_payload() {
    let nan = f32::from_bits(0x7FC0_0001);
    assert_eq!(encode(&NativeScalarCodec, nan), [0x01, 0x00, 0xC0, 0x7F]);
}

#[test]
fn test_codecs_agree_on_non_nan_floats() {
    let floats32 = [
        0.0f32,
        -0.0,
        1.0,
        -1.5,
        f32::MIN_POSITIVE,
        f32::from_bits(1),
        f32::MAX,
        f32::MIN,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ];
    for v in floats32 {
        assert_eq!(
            encode(&NativeScalarCodec, v),
            encode(&PortableScalarCodec, v),
            "codecs disagree on {v:?}"
        );
    }

    let floats64 = [
        0.0f64,
        -0.0,
        std::f64::consts::PI,
        f64::MIN_POSITIVE,
        f64::from_bits(1),
        f64::MAX,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    for v in floats64 {
        assert_eq!(
            encode(&NativeScalarCodec, v),
            encode(&PortableScalarCodec, v),
            "codecs disagree on {v:?}"
        );
    }
}

// ── integers ──────────────────────────────────────────────────────────────

#[test]
fn test_integers_are_little_endian() {
    let native = NativeScalarCodec;
    let portable = PortableScalarCodec;

    assert_eq!(encode(&native, 0xABu8), [0xAB]);
    assert_eq!(encode(&native, -1i8), [0xFF]);
    assert_eq!(encode(&native, 0x1234u16), [0x34, 0x12]);
    assert_eq!(encode(&native, -2i16), [0xFE, 0xFF]);
    assert_eq!(encode(&native, 0x0102_0304u32), [0x04, 0x03, 0x02, 0x01]);
    assert_eq!(encode(&native, i32::MIN), [0x00, 0x00, 0x00, 0x80]);
    assert_eq!(
        encode(&native, 0x0102_0304_0506_0708u64),
        [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
    );
    assert_eq!(encode(&native, -2i64), [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

    assert_eq!(encode(&portable, -2i64), encode(&native, -2i64));
    assert_eq!(encode(&portable, u64::MAX), encode(&native, u64::MAX));
    assert_eq!(encode(&portable, i16::MIN), encode(&native, i16::MIN));
}

#[test]
fn test_integer_round_trip() {
    for v in [0i32, 1, -1, 123_456_789, i32::MIN, i32::MAX] {
        let bytes = encode(&PortableScalarCodec, v);
        assert_eq!(i32::from_le_bytes(bytes.try_into().unwrap()), v);
    }
    for v in [0u64, 255, 256, u32::MAX as u64 + 1, u64::MAX] {
        let bytes = encode(&NativeScalarCodec, v);
        assert_eq!(u64::from_le_bytes(bytes.try_into().unwrap()), v);
    }
}

// ── slices ────────────────────────────────────────────────────────────────

#[test]
fn test_encode_slice_matches_per_value_encode() {
    let values = [1.5f64, -0.0, f64::INFINITY, 1e-310, -7.25];
    for bytes in [
        encode_slice(&NativeScalarCodec, &values),
        encode_slice(&PortableScalarCodec, &values),
    ] {
        let expected: Vec<u8> = values
            .iter()
            .flat_map(|&v| encode(&NativeScalarCodec, v))
            .collect();
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), values.len() * 8);
    }

    assert!(encode_slice::<_, u16>(&NativeScalarCodec, &[]).is_empty());
    assert!(encode_slice::<_, u16>(&PortableScalarCodec, &[]).is_empty());
}

#[test]
fn test_default_codec_selection() {
    let name = default_codec().name();
    if cfg!(any(target_endian = "big", feature = "portable")) {
        assert_eq!(name, "portable");
    } else {
        assert_eq!(name, "native");
    }
}

/// Records the size of every write it receives.
#[derive(Default)]
struct WriteLog {
    sizes: Vec<usize>,
}

impl std::io::Write for WriteLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.sizes.push(buf.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Slices are not staged into one big buffer; every value reaches the sink on its own.
#[test]
fn test_encode_slice_writes_value_by_value() {
    let values: Vec<f64> = (0..64).map(|i| i as f64 * 0.5).collect();

    let mut log = WriteLog::default();
    NativeScalarCodec.encode_slice(&mut log, &values).unwrap();
    assert_eq!(log.sizes, vec![8; 64]);

    let mut log = WriteLog::default();
    PortableScalarCodec.encode_slice(&mut log, &values[..3]).unwrap();
    assert_eq!(log.sizes, vec![8; 3]);
}
