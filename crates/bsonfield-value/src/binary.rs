use thiserror::Error;
use uuid::Uuid;

/// The subtype byte carried by a binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinarySubtype {
    Generic,
    Function,
    BinaryOld,
    UuidOld,
    Uuid,
    Md5,
    Encrypted,
    /// 0x80 to 0xFF.
    UserDefined(u8),
    /// Any other byte not assigned above.
    Reserved(u8),
}

impl From<u8> for BinarySubtype {
    fn from(byte: u8) -> Self {
        match byte {
            0x00 => Self::Generic,
            0x01 => Self::Function,
            0x02 => Self::BinaryOld,
            0x03 => Self::UuidOld,
            0x04 => Self::Uuid,
            0x05 => Self::Md5,
            0x06 => Self::Encrypted,
            0x80..=0xFF => Self::UserDefined(byte),
            other => Self::Reserved(other),
        }
    }
}

impl From<BinarySubtype> for u8 {
    fn from(subtype: BinarySubtype) -> Self {
        match subtype {
            BinarySubtype::Generic => 0x00,
            BinarySubtype::Function => 0x01,
            BinarySubtype::BinaryOld => 0x02,
            BinarySubtype::UuidOld => 0x03,
            BinarySubtype::Uuid => 0x04,
            BinarySubtype::Md5 => 0x05,
            BinarySubtype::Encrypted => 0x06,
            BinarySubtype::UserDefined(byte) | BinarySubtype::Reserved(byte) => byte,
        }
    }
}

/// A binary payload with its subtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binary {
    pub subtype: BinarySubtype,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UuidError {
    #[error("binary subtype {0:?} does not hold a standard UUID")]
    WrongSubtype(BinarySubtype),
    #[error("UUID binary must be 16 bytes, got {0}")]
    WrongLength(usize),
}

impl Binary {
    pub fn new(subtype: BinarySubtype, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            subtype,
            bytes: bytes.into(),
        }
    }

    pub fn generic(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(BinarySubtype::Generic, bytes)
    }

    /// Wraps a UUID in its native binary form (subtype 4, 16 bytes).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self::new(BinarySubtype::Uuid, uuid.as_bytes().to_vec())
    }

    pub fn to_uuid(&self) -> Result<Uuid, UuidError> {
        if self.subtype != BinarySubtype::Uuid {
            return Err(UuidError::WrongSubtype(self.subtype));
        }
        let bytes: [u8; 16] = self
            .bytes
            .as_slice()
            .try_into()
            .map_err(|_| UuidError::WrongLength(self.bytes.len()))?;
        Ok(Uuid::from_bytes(bytes))
    }
}
