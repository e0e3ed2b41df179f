//! Validated infix formulas
//!
//! A [`Formula`] is built once from a raw string and is immutable after
//! that: the token sequence, the canonical rendering, and the variable
//! set never change. Construction is all-or-nothing; a syntactically
//! bad string yields a [`FormulaError`] and no `Formula` at all.

use crate::error::{FormulaError, FormulaResult};
use crate::lexer::{tokenize, Token};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An infix arithmetic formula over numbers and cell variables
///
/// The grammar allows non-negative numeric literals (double-precision
/// syntax, exponent included), variables of one or more letters followed
/// by one or more digits, parentheses, and the operators `+ - * /`.
/// Spaces only delimit tokens: `x 23` is the (invalid) letter `x` and
/// the number `23`, while `x23` is a single variable.
///
/// Two formulas compare equal exactly when their canonical forms match,
/// so `Formula::new("x1 + 5.0000")? == Formula::new("X1+5")?`.
///
/// # Example
///
/// ```rust
/// use slate_formula::Formula;
///
/// let f = Formula::new("x1 + y1 * 2")?;
/// assert_eq!(f.to_string(), "X1+Y1*2");
/// assert!(f.variables().contains("X1"));
/// # Ok::<(), slate_formula::FormulaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Formula {
    tokens: Vec<Token>,
    canonical: String,
}

impl Formula {
    /// Parse and validate a formula string
    ///
    /// Tokenizes the input and checks it against the grammar rules in a
    /// fixed order: non-empty, all tokens valid, parentheses balanced,
    /// first/last token rules, then the two pairwise "following" rules.
    /// The first violated rule is reported with the offending token.
    pub fn new(input: &str) -> FormulaResult<Self> {
        if input.is_empty() {
            return Err(FormulaError::Empty);
        }

        let tokens = tokenize(input);
        validate(&tokens)?;

        let mut canonical = String::with_capacity(input.len());
        for token in &tokens {
            canonical.push_str(&token.to_string());
        }

        Ok(Self { tokens, canonical })
    }

    /// The distinct variables referenced by the formula, uppercased
    ///
    /// Case-insensitive duplicates collapse to one entry: `x1+X1` yields
    /// just `{"X1"}`.
    pub fn variables(&self) -> HashSet<String> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Variable(name) => Some(name.to_uppercase()),
                _ => None,
            })
            .collect()
    }

    /// The validated token sequence, in source order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The canonical form: all tokens concatenated without whitespace,
    /// variables uppercased, numbers re-rendered (`5.0000` → `5`)
    ///
    /// Feeding this back to [`Formula::new`] reproduces the same
    /// canonical string.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        Self::new(s)
    }
}

/// Formulas compare by canonical form
impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

/// Run the grammar rules over a token sequence, in order
fn validate(tokens: &[Token]) -> FormulaResult<()> {
    // A whitespace-only input lexes to nothing; same failure as "".
    if tokens.is_empty() {
        return Err(FormulaError::Empty);
    }

    for token in tokens {
        if let Token::Unknown(text) = token {
            return Err(FormulaError::InvalidToken(text.clone()));
        }
    }

    let mut depth: i64 = 0;
    for token in tokens {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(FormulaError::UnbalancedParentheses(
                        "')' with no matching '('".into(),
                    ));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(FormulaError::UnbalancedParentheses(format!(
            "{} unclosed '('",
            depth
        )));
    }

    let first = &tokens[0];
    if !first.begins_operand() {
        return Err(FormulaError::InvalidFirstToken(first.to_string()));
    }

    let last = &tokens[tokens.len() - 1];
    if !last.ends_operand() {
        return Err(FormulaError::InvalidLastToken(last.to_string()));
    }

    // Pairwise rules. windows(2) never looks past the last token, so
    // the final token is exempt from needing a successor.
    for pair in tokens.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        if (matches!(current, Token::LeftParen) || current.is_operator())
            && !next.begins_operand()
        {
            return Err(FormulaError::InvalidFollowing {
                prev: current.to_string(),
                found: next.to_string(),
            });
        }

        if current.ends_operand() && !(next.is_operator() || matches!(next, Token::RightParen)) {
            return Err(FormulaError::InvalidExtraFollowing {
                prev: current.to_string(),
                found: next.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number_is_valid() {
        let f = Formula::new("1").unwrap();
        assert_eq!(f.to_string(), "1");
        assert!(f.variables().is_empty());
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(Formula::new(""), Err(FormulaError::Empty));
        assert_eq!(Formula::new("   "), Err(FormulaError::Empty));
    }

    #[test]
    fn test_invalid_token_reported() {
        assert_eq!(
            Formula::new("1 & 2"),
            Err(FormulaError::InvalidToken("&".into()))
        );
        assert_eq!(Formula::new("a"), Err(FormulaError::InvalidToken("a".into())));
    }

    #[test]
    fn test_close_before_open() {
        assert!(matches!(
            Formula::new(")1+1("),
            Err(FormulaError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn test_double_operator() {
        assert_eq!(
            Formula::new("1++1"),
            Err(FormulaError::InvalidFollowing {
                prev: "+".into(),
                found: "+".into(),
            })
        );
    }

    #[test]
    fn test_operand_adjacent_to_operand() {
        assert_eq!(
            Formula::new("2x1+5"),
            Err(FormulaError::InvalidExtraFollowing {
                prev: "2".into(),
                found: "X1".into(),
            })
        );
    }

    #[test]
    fn test_equality_by_canonical_form() {
        let a = Formula::new("x1 + 5.0000").unwrap();
        let b = Formula::new("X1+5").unwrap();
        assert_eq!(a, b);

        let c = Formula::new("X1+6").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_str() {
        let f: Formula = "y7 / 2".parse().unwrap();
        assert_eq!(f.as_str(), "Y7/2");
    }
}
