//! Flattening descriptors into helper function arguments.

use scalegen_core::utils::{escape_ident, to_snake_case};

use super::{Descriptor, Shape, TypeGenerator, TypeRef};
use crate::Result;

/// One parameter of a generated helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: TypeRef,
    /// Passed by value rather than by reference.
    pub scalar: bool,
}

impl Argument {
    /// `name: T` or `name: &T`.
    pub fn parameter(&self) -> String {
        if self.scalar {
            format!("{}: {}", self.name, self.ty)
        } else {
            format!("{}: &{}", self.name, self.ty)
        }
    }
}

fn argument_name(prefixes: &[&str], index: usize) -> String {
    let base = if prefixes.is_empty() {
        "arg".to_string()
    } else {
        to_snake_case(&prefixes.join("_"))
    };
    escape_ident(&format!("{base}_{index}"))
}

impl TypeGenerator<'_> {
    /// Arguments for a value of `desc`. Tuples expand into their members,
    /// recursively; everything else is one argument named from `prefixes`
    /// (default `arg`) and the running `index`.
    pub fn flatten_args(
        &mut self,
        desc: &Descriptor,
        index: &mut usize,
        prefixes: &[&str],
    ) -> Result<Vec<Argument>> {
        let Shape::Tuple(members) = &desc.shape else {
            let name = argument_name(prefixes, *index);
            *index += 1;
            return Ok(vec![Argument {
                name,
                ty: desc.ty.clone(),
                scalar: desc.scalar,
            }]);
        };

        let mut args = Vec::new();
        for member in members {
            let member_desc = self.resolve(*member)?;
            args.extend(self.flatten_args(&member_desc, index, prefixes)?);
        }
        Ok(args)
    }
}
