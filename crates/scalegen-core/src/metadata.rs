//! Runtime metadata: the type lookup plus per-pallet storage and call entries.

use serde::Deserialize;

use crate::LoadError;
use crate::table::{RawLookup, TypeId, TypeTable, number};

/// The only metadata version the generators understand.
pub const SUPPORTED_METADATA_VERSION: u32 = 14;

fn default_version() -> u32 {
    SUPPORTED_METADATA_VERSION
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    #[serde(default = "default_version")]
    version: u32,
    lookup: RawLookup,
    #[serde(default)]
    pallets: Vec<Pallet>,
}

/// Decoded v14 metadata.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub types: TypeTable,
    pub pallets: Vec<Pallet>,
}

impl Metadata {
    /// Parse the JSON form of v14 metadata.
    ///
    /// A missing `version` field is read as v14; any other version is rejected.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawMetadata = serde_json::from_str(json)?;
        if raw.version != SUPPORTED_METADATA_VERSION {
            return Err(LoadError::UnsupportedMetadataVersion(raw.version));
        }
        Ok(Self {
            types: TypeTable::from_raw(raw.lookup)?,
            pallets: raw.pallets,
        })
    }

    pub fn pallet(&self, name: &str) -> Option<&Pallet> {
        self.pallets.iter().find(|p| p.name == name)
    }
}

/// A pallet's entry in the metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Pallet {
    pub name: String,
    #[serde(deserialize_with = "number")]
    pub index: u8,
    #[serde(default)]
    pub storage: Option<PalletStorage>,
    #[serde(default)]
    pub calls: Option<PalletTypeRef>,
}

/// `{ "type": id }` reference to a pallet's call type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PalletTypeRef {
    #[serde(rename = "type")]
    pub ty: TypeId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PalletStorage {
    pub prefix: String,
    #[serde(default)]
    pub items: Vec<StorageItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageItem {
    pub name: String,
    pub modifier: StorageModifier,
    #[serde(rename = "type")]
    pub ty: StorageEntryType,
    /// Hex-encoded (`0x...`) SCALE bytes of the default value.
    #[serde(default, alias = "default")]
    pub fallback: String,
    #[serde(default)]
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StorageModifier {
    Optional,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum StorageEntryType {
    Plain(TypeId),
    Map {
        #[serde(default)]
        hashers: Vec<StorageHasher>,
        key: TypeId,
        value: TypeId,
    },
}

impl StorageEntryType {
    /// Type id of the stored value.
    pub fn value(&self) -> TypeId {
        match self {
            Self::Plain(value) | Self::Map { value, .. } => *value,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum StorageHasher {
    Blake2_128,
    Blake2_256,
    Blake2_128Concat,
    Twox128,
    Twox256,
    Twox64Concat,
    Identity,
}

impl StorageHasher {
    pub fn name(self) -> &'static str {
        match self {
            Self::Blake2_128 => "Blake2_128",
            Self::Blake2_256 => "Blake2_256",
            Self::Blake2_128Concat => "Blake2_128Concat",
            Self::Twox128 => "Twox128",
            Self::Twox256 => "Twox256",
            Self::Twox64Concat => "Twox64Concat",
            Self::Identity => "Identity",
        }
    }
}
