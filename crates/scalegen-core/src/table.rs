//! Type definition records and the id-keyed table that holds them.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::LoadError;

// ============================================================================
// Common Types
// ============================================================================

/// Key of a type definition, unique within one [`TypeTable`].
///
/// Metadata JSON encodes ids either as numbers or as decimal strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TypeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        number(deserializer).map(TypeId)
    }
}

/// Numbers in metadata JSON may be quoted.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(u64),
    Str(String),
}

pub(crate) fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let raw = match RawNumber::deserialize(deserializer)? {
        RawNumber::Num(n) => n,
        RawNumber::Str(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("invalid number {s:?}")))?,
    };
    T::try_from(raw).map_err(|_| D::Error::custom(format!("number {raw} out of range")))
}

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Raw `{ "id", "type": {...} }` entry of the metadata lookup.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPortableType {
    pub id: TypeId,
    #[serde(rename = "type")]
    pub ty: RawType,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawType {
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub params: Vec<TypeParam>,
    /// Kept as a map so a definition with zero or several kinds is reported
    /// with its id instead of as a bare serde error.
    pub def: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub docs: Vec<String>,
}

/// Bare lookup, optionally wrapped in `{ "lookup": ... }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLookupDoc {
    Wrapped { lookup: RawLookup },
    Bare(RawLookup),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawLookup {
    pub types: Vec<RawPortableType>,
}

// ============================================================================
// Analysis Layer
// ============================================================================

/// Generic parameter of a type: `T = u32` or an unbound `T`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeParam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub ty: Option<TypeId>,
}

/// Field of a composite or of a variant case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeId,
    /// Source-level type name, e.g. `Box<<T as Config>::RuntimeCall>`.
    #[serde(rename = "typeName", alias = "type_name", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub docs: Vec<String>,
}

impl Field {
    /// Whether the source schema put this field behind a `Box`.
    pub fn is_boxed(&self) -> bool {
        self.type_name
            .as_deref()
            .is_some_and(|name| name.trim_start().starts_with("Box"))
    }
}

/// One case of a variant type.
///
/// `index` is the wire discriminant; it need not match the declaration position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantCase {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(deserialize_with = "number")]
    pub index: u8,
    #[serde(default)]
    pub docs: Vec<String>,
}

/// Primitive tag of a `Primitive` definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    Str,
    U8,
    U16,
    U32,
    U64,
    U128,
    U256,
    I8,
    I16,
    I32,
    I64,
    I128,
    I256,
    /// Tag this crate does not know; rejected by the generator, not the loader.
    Other(String),
}

impl PrimitiveKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "bool" => Self::Bool,
            "char" => Self::Char,
            "str" => Self::Str,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "u256" => Self::U256,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "i128" => Self::I128,
            "i256" => Self::I256,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Metadata spelling of the tag (`U8`, `Str`, ...).
    pub fn tag(&self) -> &str {
        match self {
            Self::Bool => "Bool",
            Self::Char => "Char",
            Self::Str => "Str",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::U128 => "U128",
            Self::U256 => "U256",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::I128 => "I128",
            Self::I256 => "I256",
            Self::Other(tag) => tag,
        }
    }
}

impl<'de> Deserialize<'de> for PrimitiveKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// The shape of a type. Exactly one kind per record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum TypeDef {
    #[serde(alias = "primitive")]
    Primitive(PrimitiveKind),
    #[serde(alias = "array")]
    Array {
        #[serde(deserialize_with = "number")]
        len: u32,
        #[serde(rename = "type")]
        elem: TypeId,
    },
    #[serde(alias = "sequence")]
    Sequence {
        #[serde(rename = "type")]
        elem: TypeId,
    },
    #[serde(alias = "tuple")]
    Tuple(Vec<TypeId>),
    #[serde(alias = "compact")]
    Compact {
        #[serde(rename = "type")]
        inner: TypeId,
    },
    #[serde(alias = "composite")]
    Composite {
        #[serde(default)]
        fields: Vec<Field>,
    },
    #[serde(alias = "variant")]
    Variant {
        #[serde(rename = "variants", default)]
        cases: Vec<VariantCase>,
    },
    #[serde(rename = "BitSequence", alias = "bitSequence", alias = "bitsequence")]
    BitSequence {
        #[serde(rename = "bitStoreType", alias = "bit_store_type")]
        store: TypeId,
        #[serde(rename = "bitOrderType", alias = "bit_order_type")]
        order: TypeId,
    },
}

impl TypeDef {
    /// Kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "Primitive",
            Self::Array { .. } => "Array",
            Self::Sequence { .. } => "Sequence",
            Self::Tuple(_) => "Tuple",
            Self::Compact { .. } => "Compact",
            Self::Composite { .. } => "Composite",
            Self::Variant { .. } => "Variant",
            Self::BitSequence { .. } => "BitSequence",
        }
    }
}

/// A type definition as found in the metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefRecord {
    pub id: TypeId,
    /// Namespace path, e.g. `["sp_core", "crypto", "AccountId32"]`. Empty for
    /// anonymous types (tuples, arrays, primitives).
    pub path: Vec<String>,
    pub params: Vec<TypeParam>,
    pub docs: Vec<String>,
    pub def: TypeDef,
}

impl TypeDefRecord {
    pub fn new(id: TypeId, def: TypeDef) -> Self {
        Self {
            id,
            path: Vec::new(),
            params: Vec::new(),
            docs: Vec::new(),
            def,
        }
    }

    pub fn with_path<S: Into<String>>(mut self, path: impl IntoIterator<Item = S>) -> Self {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_params(mut self, params: Vec<TypeParam>) -> Self {
        self.params = params;
        self
    }

    pub fn with_docs<S: Into<String>>(mut self, docs: impl IntoIterator<Item = S>) -> Self {
        self.docs = docs.into_iter().map(Into::into).collect();
        self
    }

    /// `a::b::C` form of the path, or `None` for anonymous types.
    pub fn qualified_path(&self) -> Option<String> {
        (!self.path.is_empty()).then(|| self.path.join("::"))
    }

    fn from_raw(raw: RawPortableType) -> Result<Self, LoadError> {
        let RawPortableType { id, ty } = raw;
        if ty.def.len() != 1 {
            return Err(LoadError::MalformedTypeDef {
                id,
                cases: ty.def.len(),
            });
        }
        let def: TypeDef = serde_json::from_value(serde_json::Value::Object(ty.def))?;

        if let TypeDef::Variant { cases } = &def {
            let mut seen = HashSet::new();
            for case in cases {
                if !seen.insert(case.index) {
                    return Err(LoadError::DuplicateVariantIndex {
                        id,
                        index: case.index,
                    });
                }
            }
        }

        Ok(Self {
            id,
            path: ty.path,
            params: ty.params,
            docs: ty.docs,
            def,
        })
    }
}

/// Immutable, id-ordered mapping from [`TypeId`] to [`TypeDefRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeTable {
    records: BTreeMap<TypeId, TypeDefRecord>,
}

impl TypeTable {
    pub fn from_records(
        records: impl IntoIterator<Item = TypeDefRecord>,
    ) -> Result<Self, LoadError> {
        let mut table = BTreeMap::new();
        for record in records {
            let id = record.id;
            if table.insert(id, record).is_some() {
                return Err(LoadError::DuplicateTypeId(id));
            }
        }
        Ok(Self { records: table })
    }

    /// Parse `{ "types": [...] }` or `{ "lookup": { "types": [...] } }`.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let lookup = match serde_json::from_str::<RawLookupDoc>(json)? {
            RawLookupDoc::Wrapped { lookup } | RawLookupDoc::Bare(lookup) => lookup,
        };
        Self::from_raw(lookup)
    }

    pub(crate) fn from_raw(lookup: RawLookup) -> Result<Self, LoadError> {
        let records = lookup
            .types
            .into_iter()
            .map(TypeDefRecord::from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDefRecord> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.records.contains_key(&id)
    }

    /// Records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDefRecord> {
        self.records.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.records.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
