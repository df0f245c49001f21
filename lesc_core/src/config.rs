use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How string samples are laid out on the wire.
///
/// Numeric samples are encoded the same way under either setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringEncoding {
    /// `[varlen len][bytes]` per string.
    #[default]
    Plain,
    /// Batch-wide uniform flag and length width, then all lengths, then all bytes.
    Chunk7,
}

impl StringEncoding {
    pub fn name(self) -> &'static str {
        match self {
            StringEncoding::Plain => "plain",
            StringEncoding::Chunk7 => "chunk7",
        }
    }
}

impl fmt::Display for StringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StringEncoding {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "plain" => Ok(StringEncoding::Plain),
            "chunk7" => Ok(StringEncoding::Chunk7),
            other => anyhow::bail!(
                "unknown string encoding '{}'. Valid options: plain, chunk7",
                other
            ),
        }
    }
}

/// Settings for a [`SampleWriter`](crate::SampleWriter).
///
/// Deserializable so a container can embed it in its own config file;
/// missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    pub string_encoding: StringEncoding,
}

impl WriterConfig {
    pub fn with_string_encoding(string_encoding: StringEncoding) -> Self {
        Self { string_encoding }
    }
}
