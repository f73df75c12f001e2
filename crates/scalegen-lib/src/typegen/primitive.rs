//! Primitive types.

use std::rc::Rc;

use scalegen_core::{PrimitiveKind, TypeDefRecord};

use super::{Builtin, Descriptor, RuntimeType, Shape, TypeGenerator, TypeRef};
use crate::{Error, Result};

enum Mapped {
    Builtin(Builtin),
    Runtime(RuntimeType),
}

fn map(kind: &PrimitiveKind) -> Option<Mapped> {
    let mapped = match kind {
        PrimitiveKind::Bool => Mapped::Builtin(Builtin::Bool),
        PrimitiveKind::Char => Mapped::Builtin(Builtin::Char),
        PrimitiveKind::Str => Mapped::Builtin(Builtin::Str),
        PrimitiveKind::U8 => Mapped::Builtin(Builtin::U8),
        PrimitiveKind::U16 => Mapped::Builtin(Builtin::U16),
        PrimitiveKind::U32 => Mapped::Builtin(Builtin::U32),
        PrimitiveKind::U64 => Mapped::Builtin(Builtin::U64),
        PrimitiveKind::I8 => Mapped::Builtin(Builtin::I8),
        PrimitiveKind::I16 => Mapped::Builtin(Builtin::I16),
        PrimitiveKind::I32 => Mapped::Builtin(Builtin::I32),
        PrimitiveKind::I64 => Mapped::Builtin(Builtin::I64),
        PrimitiveKind::U128 => Mapped::Runtime(RuntimeType::U128),
        PrimitiveKind::I128 => Mapped::Runtime(RuntimeType::I128),
        PrimitiveKind::U256 => Mapped::Runtime(RuntimeType::U256),
        PrimitiveKind::I256 => Mapped::Runtime(RuntimeType::I256),
        PrimitiveKind::Other(_) => return None,
    };
    Some(mapped)
}

/// Display name a primitive resolves to; unknown tags keep their spelling.
pub(super) fn primitive_display_name(kind: &PrimitiveKind) -> String {
    match map(kind) {
        Some(Mapped::Builtin(b)) => b.display_name().to_string(),
        Some(Mapped::Runtime(r)) => r.name().to_string(),
        None => kind.tag().to_string(),
    }
}

impl TypeGenerator<'_> {
    pub(super) fn primitive(
        &mut self,
        record: &TypeDefRecord,
        kind: &PrimitiveKind,
    ) -> Result<Rc<Descriptor>> {
        let desc = match map(kind) {
            Some(Mapped::Builtin(b)) => Descriptor {
                source: Some(record.id),
                display_name: b.display_name().to_string(),
                ty: TypeRef::Builtin(b),
                scalar: b.is_scalar(),
                shape: Shape::Primitive(b),
            },
            Some(Mapped::Runtime(r)) => Descriptor {
                source: Some(record.id),
                display_name: r.name().to_string(),
                ty: TypeRef::Runtime(r),
                scalar: false,
                shape: Shape::Wide(r),
            },
            None => {
                return Err(Error::UnsupportedPrimitive {
                    id: record.id,
                    tag: kind.tag().to_string(),
                });
            }
        };
        Ok(Rc::new(desc))
    }
}
