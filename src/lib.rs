pub mod ast;
pub mod comments;
pub mod constants;
pub mod converter;
pub mod error;
pub mod export;
pub mod expr;
pub mod format;
pub mod loader;
pub mod names;
pub mod options;

pub use ast::{Document, Scalar, Value};
pub use constants::ConstantTable;
pub use converter::{convert, DocumentConverter};
pub use error::{ConvertError, EvalError};
pub use options::ConvertOptions;
