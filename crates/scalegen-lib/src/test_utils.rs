//! Type table builders for tests.

use scalegen_core::{
    Field, PrimitiveKind, TypeDef, TypeDefRecord, TypeId, TypeParam, TypeTable, VariantCase,
};

/// Builds a table with ids assigned in insertion order.
#[derive(Default)]
pub struct TableBuilder {
    records: Vec<TypeDefRecord>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next added record will get.
    pub fn next_id(&self) -> TypeId {
        TypeId(self.records.len() as u32)
    }

    pub fn add(&mut self, def: TypeDef) -> TypeId {
        let id = self.next_id();
        self.records.push(TypeDefRecord::new(id, def));
        id
    }

    pub fn add_named(&mut self, path: &[&str], def: TypeDef) -> TypeId {
        let id = self.next_id();
        self.records
            .push(TypeDefRecord::new(id, def).with_path(path.iter().copied()));
        id
    }

    pub fn add_documented(&mut self, path: &[&str], docs: &[&str], def: TypeDef) -> TypeId {
        let id = self.next_id();
        self.records.push(
            TypeDefRecord::new(id, def)
                .with_path(path.iter().copied())
                .with_docs(docs.iter().copied()),
        );
        id
    }

    /// Named record with typed generic parameters.
    pub fn add_generic(
        &mut self,
        path: &[&str],
        params: &[(Option<&str>, Option<TypeId>)],
        def: TypeDef,
    ) -> TypeId {
        let id = self.next_id();
        let params = params
            .iter()
            .map(|(name, ty)| TypeParam {
                name: name.map(str::to_string),
                ty: *ty,
            })
            .collect();
        self.records.push(
            TypeDefRecord::new(id, def)
                .with_path(path.iter().copied())
                .with_params(params),
        );
        id
    }

    pub fn primitive(&mut self, kind: PrimitiveKind) -> TypeId {
        self.add(TypeDef::Primitive(kind))
    }

    pub fn build(self) -> TypeTable {
        TypeTable::from_records(self.records).unwrap()
    }
}

pub fn unnamed(ty: TypeId) -> Field {
    Field {
        name: None,
        ty,
        type_name: None,
        docs: Vec::new(),
    }
}

pub fn named(name: &str, ty: TypeId) -> Field {
    Field {
        name: Some(name.to_string()),
        ..unnamed(ty)
    }
}

/// Field the source schema put behind a `Box`.
pub fn boxed(name: &str, ty: TypeId) -> Field {
    Field {
        type_name: Some("Box<T>".to_string()),
        ..named(name, ty)
    }
}

pub fn case(name: &str, index: u8, fields: Vec<Field>) -> VariantCase {
    VariantCase {
        name: name.to_string(),
        fields,
        index,
        docs: Vec::new(),
    }
}

pub fn composite(fields: Vec<Field>) -> TypeDef {
    TypeDef::Composite { fields }
}

pub fn variant(cases: Vec<VariantCase>) -> TypeDef {
    TypeDef::Variant { cases }
}
