pub mod generate;
pub mod metadata_loader;
pub mod types;

#[cfg(test)]
mod types_tests;

use std::path::PathBuf;

/// Failures of a CLI command, printed as `error: ...`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Load(#[from] scalegen_core::LoadError),

    #[error(transparent)]
    Generate(#[from] scalegen_lib::Error),

    #[error("unknown pallet '{0}'")]
    UnknownPallet(String),
}

/// Print the error and exit with status 1.
pub fn exit_with(err: CliError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
