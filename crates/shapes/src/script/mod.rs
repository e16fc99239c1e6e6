//! A tiny language for writing shapes down, one call per statement:
//!
//! ```text
//! // the two reference shapes
//! circle(5);
//! square(10);
//! ```
//!
//! Names are resolved through a [`Registry`], so any registered
//! constructor can be called.

mod lexer;
mod parser;
mod text;

pub use lexer::{tokenise, Token};
pub use parser::{parse, Call};
pub use text::*;

use crate::registry::{Registry, RegistryError};
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxKind {
    /// A whitespace character
    Whitespace,
    /// // A comment
    Comment,
    /// An identifer
    Ident,
    /// A literal value
    Literal,

    /// ;
    SemiColon,
    /// ,
    Comma,
    /// (
    OpenRound,
    /// )
    CloseRound,

    /// Unknown character to the lexer
    Unknown,
}

impl SyntaxKind {
    pub fn is_trivia(&self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("{range}: unexpected character `{text}`")]
    UnknownChar { range: TextRange, text: String },
    #[error("{range}: expected {expected}, found {found}")]
    Expected {
        range: TextRange,
        expected: &'static str,
        found: String,
    },
    #[error("{range}: invalid number `{text}`")]
    BadLiteral { range: TextRange, text: String },
    #[error("{range}: {source}")]
    Registry {
        range: TextRange,
        source: RegistryError,
    },
}

impl ScriptError {
    pub fn range(&self) -> TextRange {
        match self {
            ScriptError::UnknownChar { range, .. }
            | ScriptError::Expected { range, .. }
            | ScriptError::BadLiteral { range, .. }
            | ScriptError::Registry { range, .. } => *range,
        }
    }
}

/// Parses `text` and builds every statement with `registry`.
///
/// All errors are collected; shapes are only returned when there are none.
pub fn compile(text: &str, registry: &Registry) -> Result<Vec<Shape>, Vec<ScriptError>> {
    let (calls, mut errors) = parse(text);

    let mut shapes = Vec::with_capacity(calls.len());
    for call in calls {
        match registry.call(&call.name, &call.args) {
            Ok(shape) => shapes.push(shape),
            Err(source) => errors.push(ScriptError::Registry {
                range: call.range,
                source,
            }),
        }
    }

    if !errors.is_empty() {
        errors.sort_by_key(ScriptError::range);
        return Err(errors);
    }

    log::debug!("compiled {} shape(s)", shapes.len());
    Ok(shapes)
}
