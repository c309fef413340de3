// License: MIT

//! Reading YAML sources into a [`Document`].
//!
//! `serde_yaml` keeps mapping order but drops comments, so comments are
//! harvested separately from the raw text by the [`scanner`].

use std::fs;
use std::path::Path;

use crate::ast::{Document, Map, Value};
use crate::comments::normalize;
use crate::ConvertError;

mod scanner;

/// Load a YAML file, keeping key order and comments.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document, ConvertError> {
    let content = fs::read_to_string(&path).map_err(|e| ConvertError::SourceReadFailure {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })?;
    load_str(&content)
}

/// Load YAML text, keeping key order and comments.
///
/// An empty (or comment-only) source yields an empty document. The root must
/// otherwise be a mapping.
pub fn load_str(content: &str) -> Result<Document, ConvertError> {
    let root: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| ConvertError::SourceParseFailure(e.to_string()))?;

    let items = match root {
        serde_yaml::Value::Null => Map::new(),
        serde_yaml::Value::Mapping(mapping) => convert_mapping(mapping)?,
        other => {
            return Err(ConvertError::SourceParseFailure(format!(
                "expected a mapping at the document root, got {}",
                yaml_kind(&other)
            )));
        }
    };

    let mut document = Document::new(items);
    let harvested = scanner::scan_comments(content);
    document.comments.top = harvested.top.iter().map(|token| token.value.clone()).collect();
    for (key, token) in harvested.inline {
        // Only keep comments for keys that made it into the document.
        if document.items.contains_key(&key) && !normalize(&token).is_empty() {
            document.comments.inline.entry(key).or_default().push(token.value);
        }
    }

    tracing::debug!(
        keys = document.items.len(),
        top_comments = document.comments.top.len(),
        inline_comments = document.comments.inline.len(),
        "loaded document"
    );
    Ok(document)
}

fn convert_value(value: serde_yaml::Value) -> Result<Value, ConvertError> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::List(
            seq.into_iter()
                .map(convert_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => Value::Map(convert_mapping(mapping)?),
        serde_yaml::Value::Tagged(tagged) => {
            return Err(ConvertError::UnsupportedValueType(format!(
                "tagged value {}",
                tagged.tag
            )));
        }
    })
}

fn convert_mapping(mapping: serde_yaml::Mapping) -> Result<Map, ConvertError> {
    let mut items = Map::with_capacity(mapping.len());
    for (key, value) in mapping {
        let key = match key {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => return Err(ConvertError::InvalidName(n.to_string())),
            serde_yaml::Value::Bool(b) => return Err(ConvertError::InvalidName(b.to_string())),
            other => return Err(ConvertError::InvalidName(format!("<{} key>", yaml_kind(&other)))),
        };
        items.insert(key, convert_value(value)?);
    }
    Ok(items)
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}
