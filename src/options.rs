use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{names, ConvertError};

/// Knobs for a conversion.
///
/// Options can be written in YAML; unspecified fields keep their defaults:
///
/// ```
/// use rune_dsl_convert::ConvertOptions;
///
/// let opts = ConvertOptions::from_yaml_str("indent_width: 2").unwrap();
/// assert_eq!(opts.indent_width, 2);
/// assert_eq!(opts.define_key, "define");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Top-level key holding constant declarations.
    pub define_key: String,
    /// Spaces per nesting level inside map blocks.
    pub indent_width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            define_key: "define".to_string(),
            indent_width: 4,
        }
    }
}

impl ConvertOptions {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        let options: Self = serde_yaml::from_str(content)
            .map_err(|e| ConvertError::SourceParseFailure(format!("invalid options: {}", e)))?;
        names::validate(&options.define_key)?;
        Ok(options)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConvertError> {
        let content = fs::read_to_string(&path).map_err(|e| ConvertError::SourceReadFailure {
            path: path.as_ref().display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }
}
