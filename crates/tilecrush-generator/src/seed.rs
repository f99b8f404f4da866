use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 256-bit seed that fully determines a tile stream.
///
/// Seeds print as 64 lowercase hex digits and parse from the same form
/// (case-insensitive), so a session can be replayed from a logged seed.
///
/// # Examples
///
/// ```
/// use tilecrush_generator::BoardSeed;
///
/// let seed = BoardSeed::random();
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>()?, seed);
/// # Ok::<(), tilecrush_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; BoardSeed::LEN]);

impl BoardSeed {
    /// Seed length in bytes.
    pub const LEN: usize = 32;

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a seed whose first eight bytes are `value` in little-endian order
    /// and whose remaining bytes are zero. Handy for tests and benchmarks.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0; Self::LEN];
        bytes[..8].copy_from_slice(&value.to_le_bytes());
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != Self::LEN * 2 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }

        let mut bytes = [0; Self::LEN];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
        }
        Ok(Self(bytes))
    }
}

fn hex_digit(byte: u8) -> Result<u8, SeedParseError> {
    char::from(byte)
        .to_digit(16)
        .and_then(|digit| u8::try_from(digit).ok())
        .ok_or(SeedParseError::InvalidHexDigit {
            ch: char::from(byte),
        })
}

/// Errors returned when parsing a [`BoardSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a character that is not a hex digit.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidHexDigit {
        /// The offending character (non-ASCII input is reported byte by byte).
        ch: char,
    },
}
