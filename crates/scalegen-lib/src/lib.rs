//! scalegen: Rust types and SCALE codecs from runtime metadata.
//!
//! # Example
//!
//! ```
//! use scalegen_core::{PrimitiveKind, TypeDef, TypeDefRecord, TypeId, TypeTable};
//! use scalegen_lib::TypeGenerator;
//!
//! let table = TypeTable::from_records([
//!     TypeDefRecord::new(TypeId(0), TypeDef::Primitive(PrimitiveKind::U8)),
//!     TypeDefRecord::new(TypeId(1), TypeDef::Array { len: 32, elem: TypeId(0) }),
//! ])
//! .unwrap();
//!
//! let mut generator = TypeGenerator::new(&table);
//! let hash = generator.resolve(TypeId(1)).unwrap();
//! assert_eq!(hash.ty.to_string(), "[u8; 32]");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod pallet;
pub mod scale;
pub mod typegen;
pub mod value;

#[cfg(test)]
pub mod test_utils;

pub use emit::{Config, Emitter};
pub use pallet::PalletGenerator;
pub use typegen::{
    Argument, CallTypeLocator, Descriptor, RuntimePathLocator, Shape, TypeGenerator, TypeRef,
};
pub use value::{Value, ValueCodec};

use scalegen_core::TypeId;

/// Errors raised while generating types from a type table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("type {0} is not in the type table")]
    UnknownTypeId(TypeId),

    #[error("type {id}: unsupported primitive {tag:?}")]
    UnsupportedPrimitive { id: TypeId, tag: String },

    /// Compact encoding only applies to unit, u16, u32, u64 and u128.
    #[error("type {id}: compact of {inner} is not supported")]
    UnsupportedCompactInner { id: TypeId, inner: String },

    #[error("type {id}: bit sequence store {store} is not a fixed-width scalar")]
    UnsupportedBitstoreType { id: TypeId, store: String },

    /// A type that gets no declaration of its own contains itself.
    #[error("type {0} contains itself without a declaration to break the cycle")]
    CyclicTypeDefinition(TypeId),

    #[error("no runtime call type found in the type table")]
    NoCallTypeFound,

    #[error("runtime call type {0} is not a variant")]
    CallTypeNotVariant(TypeId),

    #[error("pallet {pallet}: calls type {id} is not a variant")]
    CallsNotVariant { pallet: String, id: TypeId },

    #[error("pallet {pallet}: storage item {item} has invalid default bytes {fallback:?}")]
    InvalidFallback {
        pallet: String,
        item: String,
        fallback: String,
    },

    /// Failure while resolving a dependency of `id`.
    #[error("while resolving type {id}: {source}")]
    Dependency {
        id: TypeId,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error raised by a dependency of `id`.
    ///
    /// Errors that already carry dependency context pass through unchanged so
    /// the innermost failing id stays visible.
    pub(crate) fn in_dependency(self, id: TypeId) -> Self {
        match self {
            Self::Dependency { .. } => self,
            source => Self::Dependency {
                id,
                source: Box::new(source),
            },
        }
    }

    /// The error at the bottom of any dependency wrapping.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Dependency { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
