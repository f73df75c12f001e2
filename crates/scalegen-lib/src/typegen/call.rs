//! Locating the runtime's root call type.

use std::rc::Rc;

use scalegen_core::{TypeId, TypeTable};

use super::{Descriptor, TypeGenerator};
use crate::{Error, Result};

/// Strategy for finding the runtime call type in a table.
pub trait CallTypeLocator {
    fn locate(&self, table: &TypeTable) -> Option<TypeId>;
}

/// Finds the first record, in id order, whose path starts with
/// `<name ending in suffix>::<marker>`, e.g. `node_runtime::Call`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePathLocator {
    pub suffix: String,
    pub marker: String,
}

impl Default for RuntimePathLocator {
    fn default() -> Self {
        Self {
            suffix: "_runtime".to_string(),
            marker: "Call".to_string(),
        }
    }
}

impl RuntimePathLocator {
    pub fn new(suffix: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            marker: marker.into(),
        }
    }
}

impl CallTypeLocator for RuntimePathLocator {
    fn locate(&self, table: &TypeTable) -> Option<TypeId> {
        table
            .iter()
            .find(|record| match record.path.as_slice() {
                [first, second, ..] => first.ends_with(&self.suffix) && *second == self.marker,
                _ => false,
            })
            .map(|record| record.id)
    }
}

impl TypeGenerator<'_> {
    /// Id of the runtime call type. The table is scanned once per generator.
    pub fn call_type_id(&self) -> Result<TypeId> {
        let located = self
            .call_type
            .get_or_init(|| self.locator.locate(self.table));
        located.ok_or(Error::NoCallTypeFound)
    }

    /// Resolve the runtime call type and mark its declaration for the
    /// `as_call` envelope helper.
    pub fn call_type(&mut self) -> Result<Rc<Descriptor>> {
        let id = self.call_type_id()?;
        let desc = self.resolve(id)?;
        if !desc.is_variant() {
            return Err(Error::CallTypeNotVariant(id));
        }
        self.call_helpers.insert(desc.source.unwrap_or(id));
        Ok(desc)
    }
}
