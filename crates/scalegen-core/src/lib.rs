#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for scalegen.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the JSON form of v14 runtime metadata
//! - **Analysis layer**: the id-ordered [`TypeTable`] consumed by the generators

mod metadata;
mod table;
pub mod utils;

#[cfg(test)]
mod metadata_tests;

pub use metadata::{
    Metadata, Pallet, PalletStorage, PalletTypeRef, StorageEntryType, StorageHasher,
    StorageItem, StorageModifier, SUPPORTED_METADATA_VERSION,
};
pub use table::{
    Field, PrimitiveKind, TypeDef, TypeDefRecord, TypeId, TypeParam, TypeTable, VariantCase,
};

/// Errors raised while loading metadata into a [`TypeTable`].
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid metadata json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported metadata version {0}, only v14 is supported")]
    UnsupportedMetadataVersion(u32),

    /// A type definition must populate exactly one kind.
    #[error("type {id} has {cases} definition kinds, expected exactly one")]
    MalformedTypeDef { id: TypeId, cases: usize },

    #[error("type {0} is defined more than once")]
    DuplicateTypeId(TypeId),

    #[error("variant type {id} uses index {index} for more than one case")]
    DuplicateVariantIndex { id: TypeId, index: u8 },
}
