// License: MIT

use std::fs;
use std::path::Path;

use crate::converter::DocumentConverter;
use crate::{loader, ConvertError, ConvertOptions};

/// Convert YAML text straight to DSL text.
///
/// # Examples
/// ```
/// use rune_dsl_convert::export::convert_yaml_str;
///
/// let out = convert_yaml_str("define:\n  step: 2\nvalue: $(step step *)\n").unwrap();
/// assert_eq!(out, "(define step 2);\n\nvalue : 4;\n");
/// ```
pub fn convert_yaml_str(yaml: &str) -> Result<String, ConvertError> {
    let document = loader::load_str(yaml)?;
    DocumentConverter::new().convert(&document)
}

/// Read `input`, convert it, and write the result to `output`.
///
/// The output file is only touched once the whole conversion succeeded.
///
/// # Errors
/// Returns error if the input can't be read or parsed, if conversion fails,
/// or if the output can't be written.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let document = loader::load_file(&input)?;
    let rendered = DocumentConverter::with_options(options.clone()).convert(&document)?;

    fs::write(&output, rendered).map_err(|e| ConvertError::OutputWriteFailure {
        path: output.as_ref().display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        "conversion written"
    );
    Ok(())
}
