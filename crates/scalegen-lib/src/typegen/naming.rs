//! Collision-free names for declarations and their fields.

use std::collections::HashMap;

use scalegen_core::utils::as_type_name;
use scalegen_core::{TypeDef, TypeDefRecord, TypeId};

use super::TypeGenerator;
use super::primitive::primitive_display_name;

/// Provisional names stop descending after this many anonymous levels.
const PROVISIONAL_DEPTH: usize = 8;

/// Counts how often each candidate name was requested.
///
/// The first request for a candidate gets it bare; later requests get the
/// next free `candidate{sep}{n}` for `n = 1, 2, ...`. Suffixed names are
/// registered too, so a later bare request for `Foo1` cannot clash with a
/// suffixed `Foo` + `1`.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    counts: HashMap<String, u32>,
    separator: &'static str,
}

/// Prelude names the generated code uses unqualified. A declaration with one
/// of these names would shadow it for the whole module.
const PRELUDE_NAMES: &[&str] = &[
    "Box", "Err", "None", "Ok", "Option", "Result", "Some", "String", "Vec",
];

impl NameRegistry {
    /// Registry for type names: `Foo`, `Foo1`, `Foo2`. Prelude names start
    /// out taken.
    pub fn types() -> Self {
        Self {
            counts: PRELUDE_NAMES
                .iter()
                .map(|name| (name.to_string(), 1))
                .collect(),
            separator: "",
        }
    }

    /// Registry for field names: `dest`, `dest_1`, `dest_2`.
    pub fn fields() -> Self {
        Self {
            counts: HashMap::new(),
            separator: "_",
        }
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    pub fn mint(&mut self, candidate: String) -> String {
        let mut n = match self.counts.get(&candidate) {
            Some(&n) => n,
            None => {
                self.counts.insert(candidate.clone(), 1);
                return candidate;
            }
        };
        let name = loop {
            let name = format!("{candidate}{}{n}", self.separator);
            n += 1;
            if !self.counts.contains_key(&name) {
                break name;
            }
        };
        self.counts.insert(candidate, n);
        self.counts.insert(name.clone(), 1);
        name
    }
}

/// How a family's declaration name is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOverride {
    /// Join the whole namespace path instead of its last segment.
    FullPath,
    /// Fold in every generic parameter, not just enough to be unique.
    FullParams,
}

/// Type-name registry plus the per-family overrides, keyed by the last path
/// segment.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    registry: NameRegistry,
    overrides: HashMap<String, NameOverride>,
}

impl Default for NameAllocator {
    fn default() -> Self {
        let mut overrides = HashMap::new();
        for family in ["Public", "Event", "Error", "Call", "Signature"] {
            overrides.insert(family.to_string(), NameOverride::FullPath);
        }
        for family in ["Option", "WeakBoundedVec", "BoundedVec", "BTreeMap"] {
            overrides.insert(family.to_string(), NameOverride::FullParams);
        }
        Self {
            registry: NameRegistry::types(),
            overrides,
        }
    }
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace or add the override for a family.
    pub fn set_override(&mut self, family: impl Into<String>, value: NameOverride) {
        self.overrides.insert(family.into(), value);
    }

    pub fn override_for(&self, family: &str) -> Option<NameOverride> {
        self.overrides.get(family).copied()
    }

    /// Mint a unique type name from `words`.
    pub fn allocate<S: AsRef<str>>(&mut self, words: &[S]) -> String {
        self.registry.mint(as_type_name(words))
    }

    /// Whether `words` would be minted with a suffix.
    pub fn is_taken<S: AsRef<str>>(&self, words: &[S]) -> bool {
        self.registry.is_taken(&as_type_name(words))
    }
}

impl TypeGenerator<'_> {
    /// Name for a record that gets its own declaration.
    ///
    /// Records without a path fall back to `family`.
    pub(super) fn declaration_name(&mut self, record: &TypeDefRecord, family: &str) -> String {
        let Some(last) = record.path.last() else {
            return self.names.allocate(&[family]);
        };
        let seed = match self.names.override_for(last) {
            Some(NameOverride::FullPath) => record.path.clone(),
            _ => vec![last.clone()],
        };
        let params = self.param_words(record);

        if self.names.override_for(last) == Some(NameOverride::FullParams) {
            let words: Vec<String> = seed
                .into_iter()
                .chain(params.into_iter().flatten())
                .collect();
            return self.names.allocate(&words);
        }

        let mut words = seed;
        for param in &params {
            if !self.names.is_taken(&words) {
                break;
            }
            words.extend(param.iter().cloned());
        }
        self.names.allocate(&words)
    }

    /// Words each typed generic parameter contributes: its name if present,
    /// then the display name of its type.
    fn param_words(&self, record: &TypeDefRecord) -> Vec<Vec<String>> {
        record
            .params
            .iter()
            .filter_map(|param| {
                let ty = param.ty?;
                let mut words: Vec<String> = param.name.iter().cloned().collect();
                words.push(self.display_name_of(ty));
                Some(words)
            })
            .collect()
    }

    /// Display name of an id without resolving it.
    ///
    /// Resolved ids report their descriptor's display name; anything else,
    /// including ids whose resolution is still in progress, gets a name
    /// derived from the table alone.
    pub(super) fn display_name_of(&self, id: TypeId) -> String {
        match self.generated.get(&id) {
            Some(desc) => desc.display_name.clone(),
            None => self.provisional_name(id, 0),
        }
    }

    fn provisional_name(&self, id: TypeId, depth: usize) -> String {
        let Some(record) = self.table.get(id) else {
            return format!("Type{id}");
        };
        if depth >= PROVISIONAL_DEPTH {
            return "Unnamed".to_string();
        }
        let nested = |inner: TypeId| self.provisional_name(inner, depth + 1);
        // Transparent wrappers take their content's name, as they do once resolved.
        if let TypeDef::Composite { fields } = &record.def
            && let [only] = fields.as_slice()
        {
            return nested(only.ty);
        }
        if let Some(last) = record.path.last() {
            return as_type_name(&[last]);
        }
        match &record.def {
            TypeDef::Primitive(kind) => primitive_display_name(kind),
            TypeDef::Array { elem, .. } => format!("{}Array", nested(*elem)),
            TypeDef::Sequence { elem } => format!("{}Slice", nested(*elem)),
            TypeDef::BitSequence { store, .. } => format!("{}Slice", nested(*store)),
            TypeDef::Compact { .. } => "UCompact".to_string(),
            TypeDef::Tuple(members) => match members.as_slice() {
                [] => "Unit".to_string(),
                [only] => nested(*only),
                [a, b] => as_type_name(&["TupleOf".to_string(), nested(*a), nested(*b)]),
                _ => format!("Tuple{id}"),
            },
            TypeDef::Composite { .. } => "Struct".to_string(),
            TypeDef::Variant { .. } => "Enum".to_string(),
        }
    }
}
