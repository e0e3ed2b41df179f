//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors raised while validating a formula string
///
/// All of these are detected inside [`Formula::new`](crate::Formula::new);
/// a `Formula` value never exists in a half-validated state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FormulaError {
    /// The raw input contained no tokens
    #[error("Empty formula")]
    Empty,

    /// A piece of the input matched no lexical class
    #[error("Invalid token '{0}'")]
    InvalidToken(String),

    /// Open/close parenthesis counts do not line up
    #[error("Unbalanced parentheses: {0}")]
    UnbalancedParentheses(String),

    /// The formula starts with something other than '(', a number, or a variable
    #[error("Invalid first token '{0}'")]
    InvalidFirstToken(String),

    /// The formula ends with something other than ')', a number, or a variable
    #[error("Invalid last token '{0}'")]
    InvalidLastToken(String),

    /// The token after '(' or an operator is not '(', a number, or a variable
    #[error("Invalid token '{found}' following '{prev}'")]
    InvalidFollowing { prev: String, found: String },

    /// The token after a number, variable, or ')' is not an operator or ')'
    #[error("Invalid extra token '{found}' following '{prev}'")]
    InvalidExtraFollowing { prev: String, found: String },
}
