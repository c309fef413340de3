// License: MIT

//! Rendering of values into DSL syntax.

use crate::ast::{format_float, Map, Value};
use crate::constants::ConstantTable;
use crate::{expr, names, ConvertError};

/// Renders values against a fixed set of constants.
pub struct ValueFormatter<'a> {
    constants: &'a ConstantTable,
    indent_width: usize,
}

impl<'a> ValueFormatter<'a> {
    pub fn new(constants: &'a ConstantTable) -> Self {
        Self::with_indent(constants, 4)
    }

    pub fn with_indent(constants: &'a ConstantTable, indent_width: usize) -> Self {
        Self {
            constants,
            indent_width,
        }
    }

    /// Render `value` as it appears at nesting `depth`.
    ///
    /// Top-level declarations use depth 1, so the entries of a top-level map
    /// are indented by one level and its closing brace by none.
    pub fn format(&self, value: &Value, depth: usize) -> Result<String, ConvertError> {
        match value {
            Value::String(s) if value.is_expression() => {
                Ok(expr::evaluate(s, self.constants)?.to_string())
            }
            Value::String(s) => {
                if s.contains('\'') {
                    tracing::warn!(value = %s, "string contains a single quote and is emitted unescaped");
                }
                Ok(format!("'{}'", s))
            }
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(format_float(*f)),
            Value::List(items) => self.format_list(items, depth),
            Value::Map(entries) => self.format_map(entries, depth),
            Value::Bool(_) | Value::Null => Err(ConvertError::UnsupportedValueType(
                value.type_name().to_string(),
            )),
        }
    }

    fn format_list(&self, items: &[Value], depth: usize) -> Result<String, ConvertError> {
        if items.is_empty() {
            return Ok("{ }".to_string());
        }
        let rendered = items
            .iter()
            .map(|item| self.format(item, depth))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{{ {} }}", rendered.join(", ")))
    }

    fn format_map(&self, entries: &Map, depth: usize) -> Result<String, ConvertError> {
        let indent = " ".repeat(self.indent_width * depth);
        let closing = " ".repeat(self.indent_width * depth.saturating_sub(1));

        let mut out = String::from("{\n");
        for (key, value) in entries {
            names::validate(key)?;
            let rendered = self.format(value, depth + 1)?;
            out.push_str(&format!("{}{} : {},\n", indent, key, rendered));
        }
        out.push_str(&closing);
        out.push('}');
        Ok(out)
    }
}
