use std::fmt;

use indexmap::IndexMap;

/// Ordered key/value mapping; insertion order is the output order.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    List(Vec<Value>),
    Map(Map),
    // Produced by YAML but never rendered
    Bool(bool),
    Null,
}

/// A constant-compatible value, and the result type of expression evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
}

/// Comment metadata attached to a document.
///
/// Text is stored as it came from the source (comment markers included);
/// normalization happens when it is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comments {
    pub top: Vec<String>,
    pub inline: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub items: Map,
    pub comments: Comments,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    /// True for strings of the form `$(...)`.
    pub fn is_expression(&self) -> bool {
        matches!(self, Value::String(s) if is_expression_marker(s))
    }

    pub fn as_scalar(&self) -> Option<Scalar> {
        match self {
            Value::String(s) => Some(Scalar::Str(s.clone())),
            Value::Integer(i) => Some(Scalar::Int(*i)),
            Value::Float(f) => Some(Scalar::Float(*f)),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        if let Value::Map(items) = self {
            Some(items)
        } else {
            None
        }
    }
}

pub(crate) fn is_expression_marker(s: &str) -> bool {
    s.starts_with("$(") && s.ends_with(')')
}

impl Document {
    pub fn new(items: Map) -> Self {
        Self {
            items,
            comments: Comments::default(),
        }
    }

    pub fn with_top_comment(mut self, line: impl Into<String>) -> Self {
        self.comments.top.push(line.into());
        self
    }

    pub fn with_inline_comment(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.comments
            .inline
            .entry(key.into())
            .or_default()
            .push(text.into());
        self
    }
}

/// Renders numbers the way the DSL expects: integers plainly, floats
/// always with a fractional part (`7.0`, not `7`), including in exponent
/// form (`1.0e20`, not `1e20`).
pub(crate) fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        let text = format!("{:?}", f);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{}.0e{}", mantissa, exponent)
            }
            _ => text,
        }
    }
}

impl fmt::Display for Scalar {
    /// Bare text: strings unquoted, numbers as literals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}
