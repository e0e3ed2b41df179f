//! # slate-formula
//!
//! Formula lexer and validator for the slate spreadsheet library.
//!
//! This crate provides:
//! - Tokenization of infix formula text (parentheses, `+ - * /`,
//!   variables, numeric literals)
//! - Grammar validation with one typed error per broken rule
//! - A canonical string form and the set of referenced variables
//!
//! Evaluation is deliberately not here: the recalculation layer reads
//! [`Formula::variables`] to wire cells into a dependency graph and
//! walks [`Formula::tokens`] when it computes values.
//!
//! ## Example
//!
//! ```rust
//! use slate_formula::Formula;
//!
//! let f = Formula::new("(a1 + b2) * 3e6")?;
//! assert_eq!(f.to_string(), "(A1+B2)*3000000");
//! # Ok::<(), slate_formula::FormulaError>(())
//! ```

pub mod error;
pub mod formula;
pub mod lexer;

pub use error::{FormulaError, FormulaResult};
pub use formula::Formula;
pub use lexer::Token;
