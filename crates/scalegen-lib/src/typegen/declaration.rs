//! Type declarations emitted as a side effect of resolution.

use scalegen_core::TypeId;

use super::TypeRef;

/// A named Rust type that must appear in the generated module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub source: TypeId,
    /// `a::b::C` path of the source record, if it has one.
    pub path: Option<String>,
    pub docs: Vec<String>,
    pub kind: DeclKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Struct { fields: Vec<DeclField> },
    Variant { cases: Vec<DeclCase> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclField {
    pub name: String,
    pub ty: TypeRef,
    pub docs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclCase {
    pub name: String,
    pub flag: String,
    pub index: u8,
    pub fields: Vec<DeclField>,
    pub docs: Vec<String>,
}
