pub mod codec;
pub mod config;
pub mod format;
pub mod sample;
pub mod scalar;
pub mod sink;
pub mod varint;
pub mod writer;

pub use codec::ScalarCodec;
pub use config::{StringEncoding, WriterConfig};
pub use format::LengthWidth;
pub use sample::{
    plain_encoded_len, write_chunk7_strings, write_sample_chunks, write_sample_values,
    write_string_values, Chunk7Plan, SampleValues,
};
pub use scalar::{Bits, FloatLayout, Scalar};
pub use sink::Sink;
pub use varint::{write_fixlen_int, write_varlen_int};
pub use writer::SampleWriter;
