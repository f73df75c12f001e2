//! Compact integers.

use std::rc::Rc;

use scalegen_core::{TypeDefRecord, TypeId};

use super::{Builtin, Descriptor, RuntimeType, Shape, TypeGenerator, TypeRef};
use crate::{Error, Result};

impl TypeGenerator<'_> {
    /// Compact of unit is unit; compact of any supported unsigned integer is
    /// the one shared `UCompact` descriptor.
    pub(super) fn compact(
        &mut self,
        record: &TypeDefRecord,
        inner: TypeId,
    ) -> Result<Rc<Descriptor>> {
        let inner_desc = self.resolve_dependency(inner)?;
        if inner_desc.ty == TypeRef::Unit {
            return Ok(inner_desc);
        }

        let supported = matches!(
            inner_desc.shape,
            Shape::Primitive(Builtin::U16 | Builtin::U32 | Builtin::U64)
                | Shape::Wide(RuntimeType::U128)
        );
        if !supported {
            return Err(Error::UnsupportedCompactInner {
                id: record.id,
                inner: inner_desc.display_name.clone(),
            });
        }

        let shared = self.compact.get_or_insert_with(|| {
            Rc::new(Descriptor {
                source: None,
                display_name: RuntimeType::UCompact.name().to_string(),
                ty: TypeRef::Runtime(RuntimeType::UCompact),
                scalar: false,
                shape: Shape::Compact,
            })
        });
        Ok(Rc::clone(shared))
    }
}
