//! Arrays, sequences and bit sequences.

use std::rc::Rc;

use scalegen_core::{TypeDefRecord, TypeId};

use super::{Descriptor, Shape, TypeGenerator, TypeRef};
use crate::{Error, Result};

impl TypeGenerator<'_> {
    /// `[Elem; LEN]` with the length as a literal.
    pub(super) fn array(
        &mut self,
        record: &TypeDefRecord,
        len: u32,
        elem: TypeId,
    ) -> Result<Rc<Descriptor>> {
        let elem_desc = self.resolve_dependency(elem)?;
        Ok(Rc::new(Descriptor {
            source: Some(record.id),
            display_name: format!("{}Array", elem_desc.display_name),
            ty: TypeRef::Array {
                len,
                elem: Box::new(elem_desc.ty.clone()),
            },
            scalar: elem_desc.scalar,
            shape: Shape::Array { len, elem },
        }))
    }

    pub(super) fn sequence(
        &mut self,
        record: &TypeDefRecord,
        elem: TypeId,
    ) -> Result<Rc<Descriptor>> {
        let elem_desc = self.resolve_dependency(elem)?;
        Ok(Rc::new(Descriptor {
            source: Some(record.id),
            display_name: format!("{}Slice", elem_desc.display_name),
            ty: TypeRef::Vec(Box::new(elem_desc.ty.clone())),
            scalar: elem_desc.scalar,
            shape: Shape::Sequence { elem },
        }))
    }

    /// A sequence of the store primitive. Bit order is not modeled.
    pub(super) fn bit_sequence(
        &mut self,
        record: &TypeDefRecord,
        store: TypeId,
    ) -> Result<Rc<Descriptor>> {
        let store_desc = self.resolve_dependency(store)?;
        if !(store_desc.scalar && matches!(store_desc.shape, Shape::Primitive(_))) {
            return Err(Error::UnsupportedBitstoreType {
                id: record.id,
                store: store_desc.display_name.clone(),
            });
        }
        Ok(Rc::new(Descriptor {
            source: Some(record.id),
            display_name: format!("{}Slice", store_desc.display_name),
            ty: TypeRef::Vec(Box::new(store_desc.ty.clone())),
            scalar: true,
            shape: Shape::Sequence { elem: store },
        }))
    }
}
