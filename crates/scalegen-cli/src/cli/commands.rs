//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("scalegen")
        .about("Rust types and SCALE codecs from Substrate runtime metadata")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(types_command())
}

/// Emit rendering options shared by both commands.
fn with_emit_args(cmd: Command) -> Command {
    cmd.arg(runtime_path_arg())
        .arg(no_docs_arg())
        .arg(box_nested_variants_arg())
        .arg(derive_arg())
        .arg(no_derive_arg())
}

/// Write the types module and per-pallet helper modules.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate types, storage and call modules")
        .after_help(
            r#"OUTPUT:
  DIR/mod.rs                  # declares types and one module per pallet
  DIR/types.rs                # every type the pallets reach
  DIR/<pallet>/storage.rs     # storage keys and value decoders
  DIR/<pallet>/calls.rs       # call constructors

EXAMPLES:
  scalegen generate metadata.json -o src/runtime
  scalegen generate metadata.json -p System -p Balances
  curl ... | scalegen generate - --all-types"#,
        )
        .arg(metadata_arg())
        .arg(out_dir_arg())
        .arg(types_path_arg())
        .arg(pallet_arg())
        .arg(all_types_arg());
    with_emit_args(cmd)
}

/// Print the rendered types module.
pub fn types_command() -> Command {
    let cmd = Command::new("types")
        .about("Print the Rust declarations for some or all types")
        .after_help(
            r#"EXAMPLES:
  scalegen types metadata.json            # every type
  scalegen types metadata.json --id 0     # one type and its dependencies"#,
        )
        .arg(metadata_arg())
        .arg(type_id_arg());
    with_emit_args(cmd)
}
