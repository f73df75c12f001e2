//! Per-pallet helper modules: storage keys and call constructors.
//!
//! Both generators resolve their types through the shared
//! [`TypeGenerator`], so the declarations they need end up in the types
//! module rendered afterwards.

mod calls;
mod storage;

#[cfg(test)]
mod calls_tests;

use scalegen_core::Pallet;
use scalegen_core::utils::to_snake_case;

use crate::emit::Config;
use crate::typegen::Argument;

/// Generates the helper modules of one pallet.
pub struct PalletGenerator<'p> {
    pallet: &'p Pallet,
    config: &'p Config,
}

impl<'p> PalletGenerator<'p> {
    pub fn new(pallet: &'p Pallet, config: &'p Config) -> Self {
        Self { pallet, config }
    }

    /// Directory/module name for the pallet, e.g. `balances`.
    pub fn module_name(&self) -> String {
        to_snake_case(&self.pallet.name)
    }
}

fn parameter_list(args: &[Argument]) -> String {
    args.iter()
        .map(Argument::parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Expression passed to `push_arg`: scalars are taken by reference here.
fn arg_ref(arg: &Argument) -> String {
    if arg.scalar {
        format!("&{}", arg.name)
    } else {
        arg.name.clone()
    }
}
