// License: MIT

use crate::ast::{Document, Value};
use crate::constants::ConstantTable;
use crate::format::ValueFormatter;
use crate::{comments, names, ConvertError, ConvertOptions};

/// Turns a [`Document`] into DSL text.
///
/// Output order is fixed: the top-level comment block, then the constant
/// declarations from the define section, then every other top-level key in
/// document order. Each call builds its own constant table, so one converter
/// can be reused across unrelated documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter {
    options: ConvertOptions,
}

impl DocumentConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn convert(&self, document: &Document) -> Result<String, ConvertError> {
        let mut lines = comments::top_block(&document.comments);

        let define_key = self.options.define_key.as_str();
        let constants = match document.items.get(define_key) {
            Some(section) => {
                let (constants, declarations) = self.load_constants(section)?;
                lines.extend(declarations);
                lines.push(String::new());
                constants
            }
            None => ConstantTable::new(),
        };

        let formatter = ValueFormatter::with_indent(&constants, self.options.indent_width);
        for (key, value) in &document.items {
            if key == define_key {
                continue;
            }
            if let Some(comment) = comments::inline_for(&document.comments, key) {
                lines.push(comment);
            }
            names::validate(key)?;
            tracing::debug!(key = %key, kind = value.type_name(), "converting entry");
            let rendered = formatter.format(value, 1)?;
            lines.push(format!("{} : {};", key, rendered));
            lines.push(String::new());
        }

        Ok(collapse_blank_lines(lines))
    }

    /// Fill a fresh table from the define section and produce one
    /// `(define name literal);` line per entry, in source order.
    fn load_constants(&self, section: &Value) -> Result<(ConstantTable, Vec<String>), ConvertError> {
        let entries = section.as_map().ok_or_else(|| ConvertError::InvalidDefineSection {
            key: self.options.define_key.clone(),
            found: section.type_name().to_string(),
        })?;

        let mut constants = ConstantTable::new();
        for (name, value) in entries {
            constants.define(name, value)?;
        }

        let declarations = entries
            .iter()
            .filter_map(|(name, value)| {
                value
                    .as_scalar()
                    .map(|literal| format!("(define {} {});", name, literal))
            })
            .collect();

        tracing::debug!(count = constants.len(), "loaded constants");
        Ok((constants, declarations))
    }
}

/// Convert with default options.
pub fn convert(document: &Document) -> Result<String, ConvertError> {
    DocumentConverter::new().convert(document)
}

/// Join lines, dropping leading blanks and runs of consecutive blanks.
fn collapse_blank_lines(lines: Vec<String>) -> String {
    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let is_blank = line.trim().is_empty();
        if is_blank && kept.last().is_none_or(|prev| prev.trim().is_empty()) {
            continue;
        }
        kept.push(if is_blank { String::new() } else { line });
    }
    kept.join("\n")
}
