//! Generated type descriptors.

use std::fmt;

use scalegen_core::TypeId;

/// Built-in Rust types a primitive maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Bool,
    Char,
    Str,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl Builtin {
    pub fn rust_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Str => "String",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }

    /// Name used when this type seeds another type's name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Char => "Char",
            Self::Str => "String",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
        }
    }

    /// Fixed-width scalars are passed by value in generated helpers.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::Str)
    }

    /// Encoded width in bytes, `None` for strings.
    pub fn width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::U8 | Self::I8 => Some(1),
            Self::U16 | Self::I16 => Some(2),
            Self::Char | Self::U32 | Self::I32 => Some(4),
            Self::U64 | Self::I64 => Some(8),
            Self::Str => None,
        }
    }
}

/// Types supplied by the SCALE runtime module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeType {
    U128,
    I128,
    U256,
    I256,
    UCompact,
}

impl RuntimeType {
    pub fn name(self) -> &'static str {
        match self {
            Self::U128 => "U128",
            Self::I128 => "I128",
            Self::U256 => "U256",
            Self::I256 => "I256",
            Self::UCompact => "UCompact",
        }
    }
}

/// A renderable Rust type reference.
///
/// Runtime types render with the `rt::` prefix; generated modules import the
/// runtime under that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Unit,
    Builtin(Builtin),
    Runtime(RuntimeType),
    Declared(String),
    Array { len: u32, elem: Box<TypeRef> },
    Vec(Box<TypeRef>),
    /// Owned box, used for nested variant payloads.
    Boxed(Box<TypeRef>),
    /// Optional heap indirection for fields the source schema boxed.
    Indirect(Box<TypeRef>),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Builtin(b) => f.write_str(b.rust_name()),
            Self::Runtime(r) => write!(f, "rt::{}", r.name()),
            Self::Declared(name) => f.write_str(name),
            Self::Array { len, elem } => write!(f, "[{elem}; {len}]"),
            Self::Vec(elem) => write!(f, "Vec<{elem}>"),
            Self::Boxed(inner) => write!(f, "Box<{inner}>"),
            Self::Indirect(inner) => write!(f, "rt::Indirect<{inner}>"),
        }
    }
}

/// One field of a composite or variant case, as laid out on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// Rust field name, already escaped.
    pub name: String,
    pub ty: TypeId,
    /// Field is wrapped in `rt::Indirect`.
    pub indirect: bool,
}

/// One case of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLayout {
    /// Case name as declared in the metadata.
    pub name: String,
    /// Name of the `bool` flag selecting this case.
    pub flag: String,
    /// Wire discriminant.
    pub index: u8,
    pub fields: Vec<FieldLayout>,
}

/// Wire shape of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Unit,
    Primitive(Builtin),
    /// 128- and 256-bit integers.
    Wide(RuntimeType),
    Compact,
    Array { len: u32, elem: TypeId },
    Sequence { elem: TypeId },
    /// Members in order; an empty tuple is the unit type.
    Tuple(Vec<TypeId>),
    Composite(Vec<FieldLayout>),
    Variant(Vec<CaseLayout>),
}

/// What a type id resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Record the descriptor was generated from. `None` for the shared compact
    /// wrapper, which stands for many records.
    pub source: Option<TypeId>,
    /// Readable name used to derive other names. Not unique.
    pub display_name: String,
    pub ty: TypeRef,
    pub scalar: bool,
    pub shape: Shape,
}

impl Descriptor {
    pub fn is_tuple(&self) -> bool {
        matches!(self.shape, Shape::Tuple(_))
    }

    pub fn is_variant(&self) -> bool {
        matches!(self.shape, Shape::Variant(_))
    }

    /// Cases of a variant, empty for anything else.
    pub fn cases(&self) -> &[CaseLayout] {
        match &self.shape {
            Shape::Variant(cases) => cases,
            _ => &[],
        }
    }

    /// Case with the given metadata name.
    pub fn case(&self, name: &str) -> Option<&CaseLayout> {
        self.cases().iter().find(|c| c.name == name)
    }
}
