use std::path::PathBuf;

use scalegen_core::TypeId;
use scalegen_lib::{Config, Emitter, TypeGenerator};

use super::metadata_loader::load_metadata;
use super::{CliError, exit_with};

pub struct TypesArgs {
    pub metadata: PathBuf,
    pub ids: Vec<u32>,
    pub box_nested_variants: bool,
    pub config: Config,
}

pub fn run(args: TypesArgs) {
    match render_types(&args) {
        Ok(output) => print!("{output}"),
        Err(err) => exit_with(err),
    }
}

/// Resolve the requested ids (every id when none are given) and render the
/// declarations they produce.
pub fn render_types(args: &TypesArgs) -> Result<String, CliError> {
    let metadata = load_metadata(&args.metadata)?;
    let mut generator =
        TypeGenerator::new(&metadata.types).box_nested_variants(args.box_nested_variants);
    if args.ids.is_empty() {
        generator.resolve_all()?;
    } else {
        for &id in &args.ids {
            generator.resolve(TypeId(id))?;
        }
    }
    Ok(Emitter::new(&generator, args.config.clone()).render())
}
