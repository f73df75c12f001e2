//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use scalegen_lib::Config;

use crate::commands::generate::GenerateArgs;
use crate::commands::types::TypesArgs;

/// Options shared by every command that renders code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitParams {
    pub runtime_path: Option<String>,
    pub no_docs: bool,
    pub box_nested_variants: bool,
    pub derive: Option<Vec<String>>,
    pub no_derive: bool,
}

impl EmitParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            runtime_path: m.get_one::<String>("runtime_path").cloned(),
            no_docs: m.get_flag("no_docs"),
            box_nested_variants: m.get_flag("box_nested_variants"),
            derive: m
                .get_many::<String>("derive")
                .map(|values| values.cloned().collect()),
            no_derive: m.get_flag("no_derive"),
        }
    }

    pub fn config(&self) -> Config {
        let mut config = Config::new().emit_docs(!self.no_docs);
        if let Some(path) = &self.runtime_path {
            config = config.runtime_path(path);
        }
        if self.no_derive {
            config = config.derives(Vec::<String>::new());
        } else if let Some(derives) = &self.derive {
            config = config.derives(derives.iter().map(|d| d.trim()));
        }
        config
    }
}

pub struct GenerateParams {
    pub metadata: PathBuf,
    pub out_dir: PathBuf,
    pub types_path: Option<String>,
    pub pallets: Vec<String>,
    pub all_types: bool,
    pub emit: EmitParams,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata: metadata_path(m),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("generated")),
            types_path: m.get_one::<String>("types_path").cloned(),
            pallets: m
                .get_many::<String>("pallets")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            all_types: m.get_flag("all_types"),
            emit: EmitParams::from_matches(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        let mut config = p.emit.config();
        if let Some(path) = p.types_path {
            config = config.types_path(path);
        }
        Self {
            metadata: p.metadata,
            out_dir: p.out_dir,
            pallets: p.pallets,
            all_types: p.all_types,
            box_nested_variants: p.emit.box_nested_variants,
            config,
        }
    }
}

pub struct TypesParams {
    pub metadata: PathBuf,
    pub ids: Vec<u32>,
    pub emit: EmitParams,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            metadata: metadata_path(m),
            ids: m
                .get_many::<u32>("ids")
                .map(|values| values.copied().collect())
                .unwrap_or_default(),
            emit: EmitParams::from_matches(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            metadata: p.metadata,
            ids: p.ids,
            box_nested_variants: p.emit.box_nested_variants,
            config: p.emit.config(),
        }
    }
}

/// The positional is required, so clap guarantees it is present.
fn metadata_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("metadata")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}
