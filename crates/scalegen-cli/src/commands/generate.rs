use std::fs;
use std::path::{Path, PathBuf};

use scalegen_core::{Metadata, Pallet};
use scalegen_lib::{Config, Emitter, PalletGenerator, TypeGenerator};
use tracing::{debug, info};

use super::metadata_loader::load_metadata;
use super::{CliError, exit_with};

const HEADER: &str = "// Generated by scalegen. Do not edit.\n";

pub struct GenerateArgs {
    pub metadata: PathBuf,
    pub out_dir: PathBuf,
    /// Pallet names to generate; empty means all of them.
    pub pallets: Vec<String>,
    pub all_types: bool,
    pub box_nested_variants: bool,
    pub config: Config,
}

pub fn run(args: GenerateArgs) {
    match generate(&args) {
        Ok(written) => info!(files = written.len(), out_dir = %args.out_dir.display(), "done"),
        Err(err) => exit_with(err),
    }
}

/// One generated pallet module.
struct PalletModule {
    name: String,
    storage: Option<String>,
    calls: Option<String>,
}

/// Generate every module and write them under `out_dir`. Returns the paths
/// written, in write order.
///
/// Nothing is written unless generation succeeds for every pallet.
pub fn generate(args: &GenerateArgs) -> Result<Vec<PathBuf>, CliError> {
    let metadata = load_metadata(&args.metadata)?;
    let pallets = select_pallets(&metadata, &args.pallets)?;

    let mut generator =
        TypeGenerator::new(&metadata.types).box_nested_variants(args.box_nested_variants);
    if args.all_types {
        generator.resolve_all()?;
    }
    match generator.call_type() {
        Ok(call) => debug!(name = %call.display_name, "found runtime call type"),
        Err(scalegen_lib::Error::NoCallTypeFound) => {
            debug!("no runtime call type, skipping as_call helper");
        }
        Err(err) => return Err(err.into()),
    }

    let mut modules = Vec::with_capacity(pallets.len());
    for pallet in pallets {
        let pallet_gen = PalletGenerator::new(pallet, &args.config);
        let module = PalletModule {
            name: pallet_gen.module_name(),
            storage: pallet_gen.generate_storage(&mut generator)?,
            calls: pallet_gen.generate_calls(&mut generator)?,
        };
        if module.storage.is_some() || module.calls.is_some() {
            modules.push(module);
        }
    }
    let types = Emitter::new(&generator, args.config.clone()).render();

    let mut written = Vec::new();
    let mut root_mod = format!("{HEADER}\npub mod types;\n");
    write_file(&args.out_dir.join("types.rs"), &types, &mut written)?;
    for module in &modules {
        root_mod.push_str(&format!("pub mod {};\n", module.name));
        let dir = args.out_dir.join(&module.name);
        let mut pallet_mod = format!("{HEADER}\n");
        if let Some(calls) = &module.calls {
            pallet_mod.push_str("pub mod calls;\n");
            write_file(&dir.join("calls.rs"), calls, &mut written)?;
        }
        if let Some(storage) = &module.storage {
            pallet_mod.push_str("pub mod storage;\n");
            write_file(&dir.join("storage.rs"), storage, &mut written)?;
        }
        write_file(&dir.join("mod.rs"), &pallet_mod, &mut written)?;
    }
    write_file(&args.out_dir.join("mod.rs"), &root_mod, &mut written)?;
    Ok(written)
}

fn select_pallets<'m>(
    metadata: &'m Metadata,
    names: &[String],
) -> Result<Vec<&'m Pallet>, CliError> {
    if names.is_empty() {
        return Ok(metadata.pallets.iter().collect());
    }
    names
        .iter()
        .map(|name| {
            metadata
                .pallet(name)
                .ok_or_else(|| CliError::UnknownPallet(name.clone()))
        })
        .collect()
}

fn write_file(path: &Path, content: &str, written: &mut Vec<PathBuf>) -> Result<(), CliError> {
    let write_err = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    written.push(path.to_path_buf());
    Ok(())
}
