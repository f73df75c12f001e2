//! Configuration for Rust emission.

/// Configuration shared by the type emitter and the pallet generators.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path of the SCALE runtime, imported as `rt`.
    pub(crate) runtime_path: String,
    /// Path the pallet modules import the generated types from.
    pub(crate) types_path: String,
    /// Copy metadata docs onto declarations and fields.
    pub(crate) emit_docs: bool,
    pub(crate) derives: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime_path: "scalegen_lib::scale".to_string(),
            types_path: "super::super::types".to_string(),
            emit_docs: true,
            derives: ["Debug", "Clone", "PartialEq"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    pub fn types_path(mut self, path: impl Into<String>) -> Self {
        self.types_path = path.into();
        self
    }

    pub fn emit_docs(mut self, value: bool) -> Self {
        self.emit_docs = value;
        self
    }

    /// Derives placed on every declaration. An empty list omits the attribute.
    pub fn derives<S: Into<String>>(mut self, derives: impl IntoIterator<Item = S>) -> Self {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }
}
