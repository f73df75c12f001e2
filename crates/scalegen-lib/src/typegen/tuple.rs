//! Tuples.

use std::rc::Rc;

use scalegen_core::{TypeDefRecord, TypeId};

use super::{DeclField, DeclKind, Declaration, Descriptor, Shape, TypeGenerator, TypeRef};
use crate::Result;

impl TypeGenerator<'_> {
    /// `()` for no members, the member itself for one. Pairs are named after
    /// their members; wider tuples after their id.
    pub(super) fn tuple(
        &mut self,
        record: &TypeDefRecord,
        members: &[TypeId],
    ) -> Result<Rc<Descriptor>> {
        match members {
            [] => Ok(Rc::new(Descriptor {
                source: Some(record.id),
                display_name: "Unit".to_string(),
                ty: TypeRef::Unit,
                scalar: false,
                shape: Shape::Tuple(Vec::new()),
            })),
            [only] => self.resolve_dependency(*only),
            [first, second] => {
                // Named from the table so a member that refers back to this
                // pair finds it already registered.
                let first_name = self.display_name_of(*first);
                let second_name = self.display_name_of(*second);
                let name = self.names
                    .allocate(&["TupleOf", first_name.as_str(), second_name.as_str()]);
                let (desc, slot) = self.register(tuple_descriptor(record, &name, members));
                let first = self.resolve_dependency(*first)?;
                let second = self.resolve_dependency(*second)?;
                let fields = vec![tuple_field(0, &first.ty), tuple_field(1, &second.ty)];
                self.declare(slot, tuple_declaration(record, name, fields));
                Ok(desc)
            }
            _ => {
                let name = self.names.allocate(&[format!("Tuple{}", record.id)]);
                let (desc, slot) = self.register(tuple_descriptor(record, &name, members));
                let mut fields = Vec::with_capacity(members.len());
                for (i, member) in members.iter().enumerate() {
                    let member_desc = self.resolve_dependency(*member)?;
                    fields.push(tuple_field(i, &member_desc.ty));
                }
                self.declare(slot, tuple_declaration(record, name, fields));
                Ok(desc)
            }
        }
    }
}

fn tuple_descriptor(record: &TypeDefRecord, name: &str, members: &[TypeId]) -> Descriptor {
    Descriptor {
        source: Some(record.id),
        display_name: name.to_string(),
        ty: TypeRef::Declared(name.to_string()),
        scalar: false,
        shape: Shape::Tuple(members.to_vec()),
    }
}

fn tuple_field(i: usize, ty: &TypeRef) -> DeclField {
    DeclField {
        name: format!("elem_{i}"),
        ty: ty.clone(),
        docs: Vec::new(),
    }
}

fn tuple_declaration(record: &TypeDefRecord, name: String, fields: Vec<DeclField>) -> Declaration {
    Declaration {
        name,
        source: record.id,
        path: record.qualified_path(),
        docs: record.docs.clone(),
        kind: DeclKind::Struct { fields },
    }
}
