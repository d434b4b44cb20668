use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A 12-byte document identifier.
///
/// The canonical textual form is 24 lowercase hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectIdError {
    #[error("invalid object id length {length} in {input:?}, expected 24 hex digits")]
    InvalidLength { input: String, length: usize },
    #[error("invalid hex digit in object id {input:?}")]
    InvalidHex { input: String },
}

impl ObjectId {
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; 12] {
        self.0
    }

    pub fn parse_str(input: &str) -> Result<Self, ObjectIdError> {
        if input.len() != 24 {
            return Err(ObjectIdError::InvalidLength {
                input: input.to_string(),
                length: input.len(),
            });
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(input, &mut bytes).map_err(|_| ObjectIdError::InvalidHex {
            input: input.to_string(),
        })?;
        Ok(Self(bytes))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 12]> for ObjectId {
    fn from(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}
