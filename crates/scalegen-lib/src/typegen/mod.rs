//! Type generation: resolves type ids to Rust type descriptors and collects
//! the declarations they need.
//!
//! [`TypeGenerator`] is the entry point. Each family of type definitions is
//! handled in its own module as an `impl TypeGenerator` block.

mod args;
mod call;
mod compact;
mod composite;
mod container;
mod declaration;
mod descriptor;
mod generator;
mod naming;
mod primitive;
mod tuple;
mod variant;

#[cfg(test)]
mod args_tests;

pub use args::Argument;
pub use call::{CallTypeLocator, RuntimePathLocator};
pub use declaration::{DeclCase, DeclField, DeclKind, Declaration};
pub use descriptor::{Builtin, CaseLayout, Descriptor, FieldLayout, RuntimeType, Shape, TypeRef};
pub use generator::TypeGenerator;
pub use naming::{NameAllocator, NameOverride, NameRegistry};
