//! Material identifiers
//!
//! A material id is 16 opaque bytes. It shares its width and text form with
//! a UUID, but carries no version or variant meaning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{Result, ViewerDataError};

/// Size of a material id in bytes
pub const MATERIAL_ID_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MaterialId([u8; MATERIAL_ID_SIZE]);

impl MaterialId {
    /// The all-zero id
    pub const NULL: MaterialId = MaterialId([0; MATERIAL_ID_SIZE]);

    pub const fn new(bytes: [u8; MATERIAL_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy from a byte slice, which must be exactly 16 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; MATERIAL_ID_SIZE] =
            bytes.try_into().map_err(|_| ViewerDataError::MaterialIdLength {
                expected: MATERIAL_ID_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; MATERIAL_ID_SIZE] {
        &self.0
    }

    pub fn set(&mut self, bytes: [u8; MATERIAL_ID_SIZE]) {
        self.0 = bytes;
    }

    pub fn clear(&mut self) {
        self.0 = [0; MATERIAL_ID_SIZE];
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

impl From<Uuid> for MaterialId {
    fn from(id: Uuid) -> Self {
        Self(*id.as_bytes())
    }
}

impl From<MaterialId> for Uuid {
    fn from(id: MaterialId) -> Self {
        Uuid::from_bytes(id.0)
    }
}

impl fmt::Display for MaterialId {
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, bytes in storage order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for MaterialId {
    type Err = ViewerDataError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Uuid::parse_str(s)?.into())
    }
}

impl Serialize for MaterialId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MaterialId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
