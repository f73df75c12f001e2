//! Call constructors, one per case of the pallet's call variant.

use scalegen_core::utils::to_snake_case;
use scalegen_core::{TypeDef, VariantCase};
use tracing::debug;

use super::{PalletGenerator, arg_ref, parameter_list};
use crate::emit::{module_header, push_docs};
use crate::typegen::TypeGenerator;
use crate::{Error, Result};

impl PalletGenerator<'_> {
    /// Render the calls module, or `None` if the pallet has no calls.
    ///
    /// Arguments are the flattened payload fields, named after the field
    /// (`arg` for unnamed ones) and numbered across the whole call.
    pub fn generate_calls(&self, generator: &mut TypeGenerator<'_>) -> Result<Option<String>> {
        let Some(calls) = self.pallet.calls else {
            return Ok(None);
        };
        let desc = generator.resolve(calls.ty)?;
        if !desc.is_variant() {
            return Err(Error::CallsNotVariant {
                pallet: self.pallet.name.clone(),
                id: calls.ty,
            });
        }

        // A wrapper composite resolves to the variant it holds.
        let table = generator.table();
        let source = desc.source.unwrap_or(calls.ty);
        let cases: &[VariantCase] = match table.get(source).map(|record| &record.def) {
            Some(TypeDef::Variant { cases }) => cases,
            _ => &[],
        };

        let mut out = module_header(self.config, true);
        for (layout, case) in desc.cases().iter().zip(cases) {
            let mut index = 0;
            let mut args = Vec::new();
            for field in &case.fields {
                let field_desc = generator.resolve(field.ty)?;
                let prefixes: Vec<&str> = field.name.as_deref().into_iter().collect();
                args.extend(generator.flatten_args(&field_desc, &mut index, &prefixes)?);
            }

            out.push_str(&format!(
                "\n/// Call `{}.{}` (index {}).\n",
                self.pallet.name, layout.name, layout.index
            ));
            if self.config.emit_docs && !case.docs.is_empty() {
                out.push_str("///\n");
                push_docs(&mut out, "", &case.docs);
            }
            out.push_str(&format!(
                "pub fn make_{}_call({}) -> Result<rt::Call, rt::Error> {{\n",
                to_snake_case(&layout.name),
                parameter_list(&args)
            ));
            let new_call = format!("rt::Call::new({}, {})", self.pallet.index, layout.index);
            if args.is_empty() {
                out.push_str(&format!("    Ok({new_call})\n}}\n"));
                continue;
            }
            out.push_str(&format!("    let mut call = {new_call};\n"));
            for arg in &args {
                out.push_str(&format!("    call.push_arg({})?;\n", arg_ref(arg)));
            }
            out.push_str("    Ok(call)\n}\n");
        }
        debug!(
            pallet = %self.pallet.name,
            calls = cases.len(),
            "rendered calls module"
        );
        Ok(Some(out))
    }
}
