use indexmap::IndexMap;

use crate::ast::{Scalar, Value};
use crate::{names, ConvertError};

/// Named scalar constants declared in a document's `define` section.
///
/// One table belongs to one conversion; nothing is shared between documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantTable {
    constants: IndexMap<String, Scalar>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `name` and record `value` under it.
    ///
    /// Only strings, integers and floats are accepted. Redefining a name
    /// replaces the earlier value.
    pub fn define(&mut self, name: &str, value: &Value) -> Result<(), ConvertError> {
        names::validate(name)?;

        let scalar = value.as_scalar().ok_or_else(|| ConvertError::InvalidConstantType {
            name: name.to_string(),
            found: value.type_name().to_string(),
        })?;

        if let Some(previous) = self.constants.insert(name.to_string(), scalar) {
            tracing::warn!(name, %previous, "constant redefined, keeping the later value");
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Scalar> {
        self.constants.get(name)
    }

    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }
}
