//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Metadata JSON file, `-` for stdin (positional).
pub fn metadata_arg() -> Arg {
    Arg::new("metadata")
        .value_name("METADATA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("v14 metadata in JSON form, or - for stdin")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value("generated")
        .value_parser(value_parser!(PathBuf))
        .help("Directory the generated modules are written to")
}

/// Runtime module path (--runtime-path).
pub fn runtime_path_arg() -> Arg {
    Arg::new("runtime_path")
        .long("runtime-path")
        .value_name("PATH")
        .help("Path of the SCALE runtime imported as `rt` [default: scalegen_lib::scale]")
}

/// Types module path used by pallet modules (--types-path).
pub fn types_path_arg() -> Arg {
    Arg::new("types_path")
        .long("types-path")
        .value_name("PATH")
        .help("Path pallet modules import types from [default: super::super::types]")
}

/// Restrict to some pallets (--pallet, repeatable).
pub fn pallet_arg() -> Arg {
    Arg::new("pallets")
        .short('p')
        .long("pallet")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Only generate these pallets (repeatable)")
}

/// Resolve every type in the table (--all-types).
pub fn all_types_arg() -> Arg {
    Arg::new("all_types")
        .long("all-types")
        .action(ArgAction::SetTrue)
        .help("Declare every type in the table, not only those the pallets use")
}

/// Skip metadata docs (--no-docs).
pub fn no_docs_arg() -> Arg {
    Arg::new("no_docs")
        .long("no-docs")
        .action(ArgAction::SetTrue)
        .help("Don't copy metadata docs into the generated code")
}

/// Box nested variant payloads (--box-nested-variants).
pub fn box_nested_variants_arg() -> Arg {
    Arg::new("box_nested_variants")
        .long("box-nested-variants")
        .action(ArgAction::SetTrue)
        .help("Put single variant payloads of variant cases behind Box")
}

/// Derives for declarations (--derive, comma-separated).
pub fn derive_arg() -> Arg {
    Arg::new("derive")
        .long("derive")
        .value_name("TRAITS")
        .value_delimiter(',')
        .help("Derives for generated types [default: Debug,Clone,PartialEq]")
}

/// No derives at all (--no-derive).
pub fn no_derive_arg() -> Arg {
    Arg::new("no_derive")
        .long("no-derive")
        .action(ArgAction::SetTrue)
        .conflicts_with("derive")
        .help("Don't add derives to generated types")
}

/// Type ids to render (--id, repeatable).
pub fn type_id_arg() -> Arg {
    Arg::new("ids")
        .long("id")
        .value_name("ID")
        .action(ArgAction::Append)
        .value_parser(value_parser!(u32))
        .help("Type id to resolve (repeatable; all types if omitted)")
}
