//! Tagged unions.
//!
//! A variant becomes one struct holding a `bool` flag per case plus every
//! case's payload fields. Exactly one flag is set in a well-formed value; the
//! generated codec writes the wire index of the first set flag.

use std::rc::Rc;

use scalegen_core::utils::{escape_ident, to_snake_case};
use scalegen_core::{TypeDefRecord, VariantCase};

use super::composite::{field_base, field_type};
use super::naming::NameRegistry;
use super::{
    CaseLayout, DeclCase, DeclField, DeclKind, Declaration, Descriptor, FieldLayout, Shape,
    TypeGenerator, TypeRef,
};
use crate::Result;

/// Flag and payload field names for every case, unique across the whole
/// declaration.
fn case_layouts(cases: &[VariantCase]) -> Vec<CaseLayout> {
    let mut registry = NameRegistry::fields();
    let mut layouts = Vec::with_capacity(cases.len());
    for case in cases {
        let mut case_name = to_snake_case(&case.name);
        if case_name.is_empty() {
            case_name = format!("case_{}", case.index);
        }
        let flag = registry.mint(escape_ident(&format!("is_{case_name}")));

        let single = case.fields.len() == 1;
        let fields = case
            .fields
            .iter()
            .enumerate()
            .map(|(j, field)| {
                let base = field_base(field, || {
                    if single {
                        String::new()
                    } else {
                        j.to_string()
                    }
                });
                let base = if base.is_empty() {
                    format!("as_{case_name}")
                } else {
                    format!("as_{case_name}_{base}")
                };
                FieldLayout {
                    name: registry.mint(escape_ident(&base)),
                    ty: field.ty,
                    indirect: field.is_boxed(),
                }
            })
            .collect();

        layouts.push(CaseLayout {
            name: case.name.clone(),
            flag,
            index: case.index,
            fields,
        });
    }
    layouts
}

impl TypeGenerator<'_> {
    pub(super) fn variant(
        &mut self,
        record: &TypeDefRecord,
        cases: &[VariantCase],
    ) -> Result<Rc<Descriptor>> {
        if cases.is_empty() {
            return Ok(Rc::new(Descriptor {
                source: Some(record.id),
                display_name: "Unit".to_string(),
                ty: TypeRef::Unit,
                scalar: false,
                shape: Shape::Unit,
            }));
        }

        let name = self.declaration_name(record, "Enum");
        let layouts = case_layouts(cases);
        let (desc, slot) = self.register(Descriptor {
            source: Some(record.id),
            display_name: name.clone(),
            ty: TypeRef::Declared(name.clone()),
            scalar: false,
            shape: Shape::Variant(layouts.clone()),
        });

        let mut decl_cases = Vec::with_capacity(cases.len());
        for (case, layout) in cases.iter().zip(layouts) {
            let mut fields = Vec::with_capacity(case.fields.len());
            for (field, field_layout) in case.fields.iter().zip(layout.fields) {
                let field_desc = self.resolve_dependency(field.ty)?;
                let boxed = self.box_nested_variants
                    && case.fields.len() == 1
                    && !field_layout.indirect
                    && field_desc.is_variant();
                let ty = if boxed {
                    TypeRef::Boxed(Box::new(field_desc.ty.clone()))
                } else {
                    field_type(&field_desc.ty, field_layout.indirect)
                };
                fields.push(DeclField {
                    name: field_layout.name,
                    ty,
                    docs: field.docs.clone(),
                });
            }
            decl_cases.push(DeclCase {
                name: layout.name,
                flag: layout.flag,
                index: layout.index,
                fields,
                docs: case.docs.clone(),
            });
        }

        self.declare(
            slot,
            Declaration {
                name,
                source: record.id,
                path: record.qualified_path(),
                docs: record.docs.clone(),
                kind: DeclKind::Variant { cases: decl_cases },
            },
        );
        Ok(desc)
    }
}
