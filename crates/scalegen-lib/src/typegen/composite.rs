//! Structs.

use std::rc::Rc;

use scalegen_core::utils::{escape_ident, to_snake_case};
use scalegen_core::{Field, TypeDefRecord};

use super::naming::NameRegistry;
use super::{
    DeclField, DeclKind, Declaration, Descriptor, FieldLayout, Shape, TypeGenerator, TypeRef,
};
use crate::Result;

/// snake_case name for a field, or `fallback` when it has none.
pub(super) fn field_base(field: &Field, fallback: impl FnOnce() -> String) -> String {
    field
        .name
        .as_deref()
        .map(to_snake_case)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(fallback)
}

/// Type of a field as written in the declaration.
pub(super) fn field_type(inner: &TypeRef, indirect: bool) -> TypeRef {
    if indirect {
        TypeRef::Indirect(Box::new(inner.clone()))
    } else {
        inner.clone()
    }
}

impl TypeGenerator<'_> {
    /// A single-field composite is its field's type. Anything else becomes a
    /// struct declaration.
    pub(super) fn composite(
        &mut self,
        record: &TypeDefRecord,
        fields: &[Field],
    ) -> Result<Rc<Descriptor>> {
        if let [only] = fields {
            return self.resolve_dependency(only.ty);
        }

        let name = self.declaration_name(record, "Struct");
        let mut registry = NameRegistry::fields();
        let layouts: Vec<FieldLayout> = fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let base = field_base(field, || format!("field_{i}"));
                FieldLayout {
                    name: registry.mint(escape_ident(&base)),
                    ty: field.ty,
                    indirect: field.is_boxed(),
                }
            })
            .collect();

        let (desc, slot) = self.register(Descriptor {
            source: Some(record.id),
            display_name: name.clone(),
            ty: TypeRef::Declared(name.clone()),
            scalar: false,
            shape: Shape::Composite(layouts.clone()),
        });

        let mut decl_fields = Vec::with_capacity(fields.len());
        for (field, layout) in fields.iter().zip(layouts) {
            let field_desc = self.resolve_dependency(field.ty)?;
            decl_fields.push(DeclField {
                name: layout.name,
                ty: field_type(&field_desc.ty, layout.indirect),
                docs: field.docs.clone(),
            });
        }

        self.declare(
            slot,
            Declaration {
                name,
                source: record.id,
                path: record.qualified_path(),
                docs: record.docs.clone(),
                kind: DeclKind::Struct {
                    fields: decl_fields,
                },
            },
        );
        Ok(desc)
    }
}
