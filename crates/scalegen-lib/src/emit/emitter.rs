//! Emitter core: header and per-declaration dispatch.

use tracing::debug;

use super::Config;
use crate::typegen::{DeclKind, Declaration, TypeGenerator};

/// First lines of every generated module.
pub(crate) fn module_header(config: &Config, import_types: bool) -> String {
    let mut out = String::from("// Generated by scalegen. Do not edit.\n\n");
    if import_types {
        out.push_str(&format!("use {}::*;\n", config.types_path));
    }
    out.push_str(&format!("use {} as rt;\n", config.runtime_path));
    out
}

/// Renders the declarations of a generator into one Rust module.
pub struct Emitter<'a> {
    pub(super) generator: &'a TypeGenerator<'a>,
    pub(super) config: Config,
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(generator: &'a TypeGenerator<'a>, config: Config) -> Self {
        Self {
            generator,
            config,
            output: String::new(),
        }
    }

    /// Render all declarations in emission order.
    pub fn render(mut self) -> String {
        self.output = module_header(&self.config, false);
        let generator = self.generator;
        let mut count = 0usize;
        for decl in generator.declarations() {
            self.output.push('\n');
            self.declaration(decl);
            count += 1;
        }
        debug!(declarations = count, "rendered types module");
        self.output
    }

    fn declaration(&mut self, decl: &Declaration) {
        self.provenance(decl);
        match &decl.kind {
            DeclKind::Struct { fields } => self.struct_decl(&decl.name, fields),
            DeclKind::Variant { cases } => self.variant_decl(&decl.name, cases),
        }
        if self.generator.has_call_helper(decl.source) {
            self.call_helper(&decl.name);
        }
    }

    fn provenance(&mut self, decl: &Declaration) {
        match &decl.path {
            Some(path) => self.output.push_str(&format!(
                "/// Generated from `{path}` (id {}).\n",
                decl.source
            )),
            None => self
                .output
                .push_str(&format!("/// Generated from type id {}.\n", decl.source)),
        }
        if self.config.emit_docs && !decl.docs.is_empty() {
            self.output.push_str("///\n");
            super::push_docs(&mut self.output, "", &decl.docs);
        }
    }

    pub(super) fn derives(&mut self) {
        if self.config.derives.is_empty() {
            return;
        }
        self.output
            .push_str(&format!("#[derive({})]\n", self.config.derives.join(", ")));
    }
}
