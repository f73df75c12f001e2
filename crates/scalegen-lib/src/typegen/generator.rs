//! Memoized resolution of type ids to descriptors.

use std::cell::OnceCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

use scalegen_core::{TypeDef, TypeDefRecord, TypeId, TypeTable};
use tracing::{debug, trace};

use super::call::{CallTypeLocator, RuntimePathLocator};
use super::naming::NameAllocator;
use super::{Declaration, Descriptor};
use crate::{Error, Result};

/// Generation context: owns the descriptor cache, the name registry and the
/// declarations emitted so far.
///
/// Every id resolves at most once; later requests return the cached `Rc`.
/// Declarations come out in the order their ids were first requested.
///
/// A failed resolution may leave half-registered declarations behind, so the
/// first such failure is kept and every later `resolve` returns it.
pub struct TypeGenerator<'t> {
    pub(super) table: &'t TypeTable,
    pub(super) generated: HashMap<TypeId, Rc<Descriptor>>,
    in_progress: HashSet<TypeId>,
    pub(super) names: NameAllocator,
    /// One slot per declared id, filled once its dependencies are resolved.
    declarations: Vec<Option<Declaration>>,
    pub(super) compact: Option<Rc<Descriptor>>,
    pub(super) call_type: OnceCell<Option<TypeId>>,
    pub(super) locator: Box<dyn CallTypeLocator>,
    pub(super) call_helpers: BTreeSet<TypeId>,
    pub(super) box_nested_variants: bool,
    failed: Option<Error>,
}

impl<'t> TypeGenerator<'t> {
    pub fn new(table: &'t TypeTable) -> Self {
        Self {
            table,
            generated: HashMap::new(),
            in_progress: HashSet::new(),
            names: NameAllocator::new(),
            declarations: Vec::new(),
            compact: None,
            call_type: OnceCell::new(),
            locator: Box::new(RuntimePathLocator::default()),
            call_helpers: BTreeSet::new(),
            box_nested_variants: false,
            failed: None,
        }
    }

    /// Replace the strategy used to find the runtime call type.
    pub fn with_locator(mut self, locator: impl CallTypeLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Replace the name allocator, e.g. to change the family overrides.
    pub fn with_names(mut self, names: NameAllocator) -> Self {
        self.names = names;
        self
    }

    /// Render single-payload variant cases whose payload is itself a variant
    /// as `Box<T>`.
    pub fn box_nested_variants(mut self, value: bool) -> Self {
        self.box_nested_variants = value;
        self
    }

    pub fn table(&self) -> &'t TypeTable {
        self.table
    }

    /// Resolve `id`, generating it and its dependencies on first use.
    pub fn resolve(&mut self, id: TypeId) -> Result<Rc<Descriptor>> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        if let Some(desc) = self.generated.get(&id) {
            return Ok(Rc::clone(desc));
        }

        let table = self.table;
        let record = table.get(id).ok_or(Error::UnknownTypeId(id))?;
        if !self.in_progress.insert(id) {
            return Err(Error::CyclicTypeDefinition(id));
        }
        trace!(%id, kind = record.def.kind_name(), "resolving type");

        let result = self.generate(record);
        self.in_progress.remove(&id);
        let desc = match result {
            Ok(desc) => desc,
            Err(err) => {
                if self.failed.is_none() {
                    debug!(%id, error = %err, "resolution failed, generator is unusable");
                    self.failed = Some(err.clone());
                }
                return Err(err);
            }
        };

        let cached = self
            .generated
            .entry(id)
            .or_insert_with(|| Rc::clone(&desc));
        Ok(Rc::clone(cached))
    }

    /// Resolve every id in the table, in id order.
    pub fn resolve_all(&mut self) -> Result<()> {
        let table = self.table;
        for id in table.ids() {
            self.resolve(id)?;
        }
        Ok(())
    }

    /// Cached descriptor for `id`, if it was resolved.
    pub fn descriptor(&self, id: TypeId) -> Option<Rc<Descriptor>> {
        self.generated.get(&id).cloned()
    }

    /// Declarations in emission order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().flatten()
    }

    /// Whether `id` is the call type and gets an envelope helper.
    pub fn has_call_helper(&self, id: TypeId) -> bool {
        self.call_helpers.contains(&id)
    }

    fn generate(&mut self, record: &'t TypeDefRecord) -> Result<Rc<Descriptor>> {
        match &record.def {
            TypeDef::Primitive(kind) => self.primitive(record, kind),
            TypeDef::Array { len, elem } => self.array(record, *len, *elem),
            TypeDef::Sequence { elem } => self.sequence(record, *elem),
            TypeDef::Tuple(members) => self.tuple(record, members),
            TypeDef::Compact { inner } => self.compact(record, *inner),
            TypeDef::Composite { fields } => self.composite(record, fields),
            TypeDef::Variant { cases } => self.variant(record, cases),
            TypeDef::BitSequence { store, .. } => self.bit_sequence(record, *store),
        }
    }

    /// Resolve a dependency of the record being generated.
    pub(super) fn resolve_dependency(&mut self, id: TypeId) -> Result<Rc<Descriptor>> {
        self.resolve(id).map_err(|err| err.in_dependency(id))
    }

    /// Cache a named descriptor before its dependencies are resolved, so
    /// schemas that refer back to it terminate. Returns the cached handle and
    /// the declaration slot to fill with [`Self::declare`].
    pub(super) fn register(&mut self, desc: Descriptor) -> (Rc<Descriptor>, usize) {
        let desc = Rc::new(desc);
        if let Some(id) = desc.source {
            self.generated.insert(id, Rc::clone(&desc));
        }
        self.declarations.push(None);
        (desc, self.declarations.len() - 1)
    }

    pub(super) fn declare(&mut self, slot: usize, decl: Declaration) {
        debug!(name = %decl.name, source = %decl.source, "declared type");
        self.declarations[slot] = Some(decl);
    }
}
