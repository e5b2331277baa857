use crate::{GrammarError, LexError};
use std::fmt::{Display, Formatter};

impl LexError {
    pub fn new(pointer: usize, message: String) -> Self {
        Self { pointer, message }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "LexError: {}", self.message)
    }
}

impl Display for GrammarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarError::UnbalancedParenthesis => {
                write!(f, "GrammarError: parentheses are not balanced.")
            }
            GrammarError::DanglingOperator(op) => {
                write!(f, "GrammarError: operator '{}' has no preceding symbol.", op)
            }
            GrammarError::UnresolvedReference(name) => {
                write!(
                    f,
                    "GrammarError: identifier '{}' does not name a known symbol.",
                    name
                )
            }
        }
    }
}
