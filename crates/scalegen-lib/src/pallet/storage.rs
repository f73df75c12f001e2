//! Storage helpers: key constructors and value decoders.

use scalegen_core::utils::{to_screaming_snake_case, to_snake_case};
use scalegen_core::{StorageEntryType, StorageItem, StorageModifier};
use tracing::debug;

use super::{PalletGenerator, arg_ref, parameter_list};
use crate::emit::{module_header, push_docs};
use crate::typegen::TypeGenerator;
use crate::{Error, Result};

impl PalletGenerator<'_> {
    /// Render the storage module, or `None` if the pallet has no storage.
    pub fn generate_storage(&self, generator: &mut TypeGenerator<'_>) -> Result<Option<String>> {
        let Some(storage) = &self.pallet.storage else {
            return Ok(None);
        };

        let mut out = module_header(self.config, true);
        for item in &storage.items {
            out.push('\n');
            self.storage_key(generator, &storage.prefix, item, &mut out)?;
            out.push('\n');
            self.storage_decoder(generator, item, &mut out)?;
        }
        debug!(
            pallet = %self.pallet.name,
            items = storage.items.len(),
            "rendered storage module"
        );
        Ok(Some(out))
    }

    fn storage_key(
        &self,
        generator: &mut TypeGenerator<'_>,
        prefix: &str,
        item: &StorageItem,
        out: &mut String,
    ) -> Result<()> {
        let (args, hashers) = match &item.ty {
            StorageEntryType::Plain(_) => (Vec::new(), Vec::new()),
            StorageEntryType::Map { hashers, key, .. } => {
                let key = generator.resolve(*key)?;
                let mut index = 0;
                let args = generator.flatten_args(&key, &mut index, &["key"])?;
                let hashers: Vec<_> = hashers
                    .iter()
                    .map(|h| format!("rt::Hasher::{}", h.name()))
                    .collect();
                (args, hashers)
            }
        };

        out.push_str(&format!("/// Storage key for `{prefix}.{}`.\n", item.name));
        if self.config.emit_docs && !item.docs.is_empty() {
            out.push_str("///\n");
            push_docs(out, "", &item.docs);
        }
        out.push_str(&format!(
            "pub fn make_{}_storage_key({}) -> Result<rt::StorageKey, rt::Error> {{\n",
            to_snake_case(&item.name),
            parameter_list(&args)
        ));
        let new_key = format!(
            "rt::StorageKey::new({prefix:?}, {:?}, &[{}])",
            item.name,
            hashers.join(", ")
        );
        if args.is_empty() {
            out.push_str(&format!("    Ok({new_key})\n}}\n"));
            return Ok(());
        }
        out.push_str(&format!("    let mut key = {new_key};\n"));
        for arg in &args {
            out.push_str(&format!("    key.push_arg({})?;\n", arg_ref(arg)));
        }
        out.push_str("    Ok(key)\n}\n");
        Ok(())
    }

    fn storage_decoder(
        &self,
        generator: &mut TypeGenerator<'_>,
        item: &StorageItem,
        out: &mut String,
    ) -> Result<()> {
        let value = generator.resolve(item.ty.value())?;
        let ty = &value.ty;
        let snake = to_snake_case(&item.name);

        match item.modifier {
            StorageModifier::Optional => {
                out.push_str(&format!(
                    "/// Decode the raw `{}` value; `None` when nothing is stored.\n\
                     pub fn decode_{snake}(raw: Option<&[u8]>) -> Result<Option<{ty}>, rt::Error> {{\n    \
                     raw.map(<{ty} as rt::Decode>::decode).transpose()\n}}\n",
                    item.name
                ));
            }
            StorageModifier::Default => {
                let bytes = self.fallback_bytes(item)?;
                let constant = format!("{}_DEFAULT", to_screaming_snake_case(&item.name));
                out.push_str(&format!(
                    "/// Encoded value of `{}` when nothing is stored.\n\
                     pub const {constant}: &[u8] = &[{}];\n\n",
                    item.name,
                    bytes
                        .iter()
                        .map(|b| format!("{b:#04x}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
                out.push_str(&format!(
                    "/// Decode the raw `{}` value, falling back to [`{constant}`].\n\
                     pub fn decode_{snake}(raw: Option<&[u8]>) -> Result<{ty}, rt::Error> {{\n    \
                     <{ty} as rt::Decode>::decode(raw.unwrap_or({constant}))\n}}\n",
                    item.name
                ));
            }
        }
        Ok(())
    }

    fn fallback_bytes(&self, item: &StorageItem) -> Result<Vec<u8>> {
        let digits = item
            .fallback
            .strip_prefix("0x")
            .unwrap_or(&item.fallback);
        hex::decode(digits).map_err(|_| Error::InvalidFallback {
            pallet: self.pallet.name.clone(),
            item: item.name.clone(),
            fallback: item.fallback.clone(),
        })
    }
}
