//! Struct and variant rendering, including the codec impls.

use super::Emitter;
use crate::typegen::{DeclCase, DeclField};

/// Append `docs` as `///` lines at `indent`.
pub(crate) fn push_docs(out: &mut String, indent: &str, docs: &[String]) {
    for line in docs {
        let line = line.trim_end();
        if line.is_empty() {
            out.push_str(&format!("{indent}///\n"));
        } else if line.starts_with(' ') {
            out.push_str(&format!("{indent}///{line}\n"));
        } else {
            out.push_str(&format!("{indent}/// {line}\n"));
        }
    }
}

impl Emitter<'_> {
    fn field_line(&mut self, field: &DeclField) {
        if self.config.emit_docs {
            push_docs(&mut self.output, "    ", &field.docs);
        }
        self.output
            .push_str(&format!("    pub {}: {},\n", field.name, field.ty));
    }

    fn open_struct(&mut self, name: &str, empty: bool) {
        self.derives();
        if empty {
            self.output.push_str(&format!("pub struct {name} {{}}\n"));
        } else {
            self.output.push_str(&format!("pub struct {name} {{\n"));
        }
    }

    pub(super) fn struct_decl(&mut self, name: &str, fields: &[DeclField]) {
        self.open_struct(name, fields.is_empty());
        if !fields.is_empty() {
            for field in fields {
                self.field_line(field);
            }
            self.output.push_str("}\n");
        }

        // Blank
        self.output.push_str(&format!(
            "\nimpl rt::Blank for {name} {{\n    fn blank() -> Self {{\n"
        ));
        if fields.is_empty() {
            self.output.push_str("        Self {}\n");
        } else {
            self.output.push_str("        Self {\n");
            for field in fields {
                self.output
                    .push_str(&format!("            {}: rt::Blank::blank(),\n", field.name));
            }
            self.output.push_str("        }\n");
        }
        self.output.push_str("    }\n}\n");

        // Encode
        let out = if fields.is_empty() { "_out" } else { "out" };
        self.output.push_str(&format!(
            "\nimpl rt::Encode for {name} {{\n    \
             fn encode_to(&self, {out}: &mut Vec<u8>) -> Result<(), rt::Error> {{\n"
        ));
        for field in fields {
            self.output.push_str(&format!(
                "        rt::Encode::encode_to(&self.{}, out)?;\n",
                field.name
            ));
        }
        self.output.push_str("        Ok(())\n    }\n}\n");

        // Decode
        let input = if fields.is_empty() { "_input" } else { "input" };
        self.output.push_str(&format!(
            "\nimpl rt::Decode for {name} {{\n    \
             fn decode_into(&mut self, {input}: &mut rt::Input<'_>) -> Result<(), rt::Error> {{\n"
        ));
        for field in fields {
            self.output.push_str(&format!(
                "        rt::Decode::decode_into(&mut self.{}, input)?;\n",
                field.name
            ));
        }
        self.output.push_str("        Ok(())\n    }\n}\n");
    }

    pub(super) fn variant_decl(&mut self, name: &str, cases: &[DeclCase]) {
        self.open_struct(name, false);
        for case in cases {
            if self.config.emit_docs {
                push_docs(&mut self.output, "    ", &case.docs);
            }
            self.output
                .push_str(&format!("    pub {}: bool,\n", case.flag));
            for field in &case.fields {
                self.field_line(field);
            }
        }
        self.output.push_str("}\n");

        // Blank: no case selected.
        self.output.push_str(&format!(
            "\nimpl rt::Blank for {name} {{\n    fn blank() -> Self {{\n        Self {{\n"
        ));
        for case in cases {
            self.output
                .push_str(&format!("            {}: false,\n", case.flag));
            for field in &case.fields {
                self.output
                    .push_str(&format!("            {}: rt::Blank::blank(),\n", field.name));
            }
        }
        self.output.push_str("        }\n    }\n}\n");

        // Encode: the first selected case wins.
        self.output.push_str(&format!(
            "\nimpl rt::Encode for {name} {{\n    \
             fn encode_to(&self, out: &mut Vec<u8>) -> Result<(), rt::Error> {{\n"
        ));
        for case in cases {
            self.output.push_str(&format!(
                "        if self.{} {{\n            out.push({});\n",
                case.flag, case.index
            ));
            for field in &case.fields {
                self.output.push_str(&format!(
                    "            rt::Encode::encode_to(&self.{}, out)?;\n",
                    field.name
                ));
            }
            self.output
                .push_str("            return Ok(());\n        }\n");
        }
        self.output.push_str(&format!(
            "        Err(rt::Error::NoVariantSelected({name:?}.to_string()))\n    }}\n}}\n"
        ));

        // Decode
        self.output.push_str(&format!(
            "\nimpl rt::Decode for {name} {{\n    \
             fn decode_into(&mut self, input: &mut rt::Input<'_>) -> Result<(), rt::Error> {{\n        \
             *self = rt::Blank::blank();\n        \
             match input.read_byte()? {{\n"
        ));
        for case in cases {
            self.output.push_str(&format!(
                "            {} => {{\n                self.{} = true;\n",
                case.index, case.flag
            ));
            for field in &case.fields {
                self.output.push_str(&format!(
                    "                rt::Decode::decode_into(&mut self.{}, input)?;\n",
                    field.name
                ));
            }
            self.output.push_str("            }\n");
        }
        self.output.push_str(&format!(
            "            index => {{\n                \
             return Err(rt::Error::UnrecognizedVariant {{\n                    \
             type_name: {name:?}.to_string(),\n                    \
             index,\n                \
             }});\n            \
             }}\n        \
             }}\n        \
             Ok(())\n    \
             }}\n}}\n"
        ));

        self.output.push_str(&format!(
            "\nimpl {name} {{\n    \
             /// Wire index of the selected case.\n    \
             pub fn variant_index(&self) -> Result<u8, rt::Error> {{\n"
        ));
        for case in cases {
            self.output.push_str(&format!(
                "        if self.{} {{\n            return Ok({});\n        }}\n",
                case.flag, case.index
            ));
        }
        self.output.push_str(&format!(
            "        Err(rt::Error::NoVariantSelected({name:?}.to_string()))\n    }}\n}}\n"
        ));
    }

    /// `as_call` on the runtime call type: the encoded value is already
    /// pallet index, call index and arguments.
    pub(super) fn call_helper(&mut self, name: &str) {
        self.output.push_str(&format!(
            "\nimpl {name} {{\n    \
             pub fn as_call(&self) -> Result<rt::Call, rt::Error> {{\n        \
             let encoded = rt::Encode::encode(self)?;\n        \
             rt::Call::from_encoded(&encoded)\n    \
             }}\n}}\n"
        ));
    }
}
