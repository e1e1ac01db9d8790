//! # reckon
//!
//! reckon is a keypad arithmetic interpreter written in Rust.
//! It takes the symbol sequence a calculator keypad produces (digits,
//! operators, grouping marks), validates it with caret-anchored reports,
//! builds a precedence-correct expression tree in one online pass, and
//! reduces the tree to a single number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, LexError},
    input::symbol::{Symbol, symbols_from_str},
    interpreter::{builder, evaluator, lexer, validator},
};

/// Defines the structure of the built expression tree.
///
/// This module declares the arena-backed tree the builder produces and the
/// evaluator consumes: nodes addressed by index, parent back-references for
/// climbing, and branches that keep grouped sub-expressions reducible on
/// their own.
///
/// # Responsibilities
/// - Defines `AstNode`, the arena and its identifiers, branches, and the
///   tree.
/// - Keeps node identity stable across in-place rewrites.
/// - Supports destructive reduction through parent references.
pub mod ast;
/// Provides unified error types for every pipeline phase.
///
/// This module defines all errors that can be raised while collecting,
/// grouping, validating, building, or reducing an expression. It
/// standardizes error reporting and carries the context each failure needs,
/// including the caret report for entry rule violations.
///
/// # Responsibilities
/// - Defines one error enum per phase and the unified `Error` around them.
/// - Attaches positions and offending text for user feedback.
/// - Integrates with the standard error handling traits.
pub mod error;
/// Defines the lexed form of an expression.
///
/// This module declares the semantic values the value lexer produces from
/// raw symbols: textual numbers, operators with their display symbols and
/// precedence ranks, and nested groups. It also renders the conventional
/// spelling used by the caret reports.
///
/// # Responsibilities
/// - Defines `Number`, `Operator`, `Value`, and `MathExpression`.
/// - Fixes the precedence table and display symbols in one place.
/// - Renders expressions deterministically.
pub mod expr;
/// Collects and spells the raw input.
///
/// This module owns everything in front of the pipeline: the typed symbol a
/// keypad produces, the text front-end that lexes a typed line into the
/// same symbols, and the buffer that collects them key by key.
///
/// # Responsibilities
/// - Defines `Symbol` and its text lexer.
/// - Collects entries, handles deletion, and re-enters committed results.
pub mod input;
/// Orchestrates the expression pipeline.
///
/// This module ties together the four stages that turn collected symbols
/// into a number: the value lexer, the validator, the tree builder, and the
/// evaluator. Each stage is a pure function over the previous stage's
/// output.
///
/// # Responsibilities
/// - Coordinates lexing, validation, construction, and reduction.
/// - Keeps the stages independently usable and testable.
pub mod interpreter;
/// General numeric utilities.
///
/// This module provides the small arithmetic helpers shared by the
/// evaluator's operator semantics.
///
/// # Responsibilities
/// - Provides floored modulo and sign collapsing with documented edge
///   behavior.
pub mod util;

/// Returns the numeric result for a sequence of input symbols.
///
/// This function runs the whole pipeline: the symbols are grouped into
/// values, validated, built into a tree, and reduced. A failure in any
/// stage stops the run; nothing partial is returned. An open grouping mark
/// that never closes surfaces as the validation report for it, anchored at
/// the mark, like every other entry fault.
///
/// # Errors
/// Returns the first pipeline error the symbols produce.
///
/// # Examples
/// ```
/// use reckon::{evaluate, input::symbol::symbols_from_str};
///
/// let symbols = symbols_from_str("2+3*4").unwrap();
/// assert_eq!(evaluate(&symbols).unwrap(), 14.0);
///
/// // An unfinished block fails validation with a positional report.
/// let symbols = symbols_from_str("(2+3").unwrap();
/// assert!(evaluate(&symbols).is_err());
/// ```
pub fn evaluate(symbols: &[Symbol]) -> Result<f64, Error> {
    let expression = match lexer::lex(symbols) {
        Ok(expression) => expression,
        Err(LexError::UnfinishedGroup { opened_at }) => {
            let report = validator::unfinished_group_report(symbols, opened_at);
            return Err(Error::Validation(report));
        },
        Err(error) => return Err(Error::Lex(error)),
    };

    validator::validate(&expression)?;
    let tree = builder::build(&expression)?;
    let value = evaluator::evaluate(tree)?;

    Ok(value)
}

/// Returns the numeric result for a textual spelling of an expression.
///
/// The line is lexed into the same symbols a keypad would produce and then
/// handed to [`evaluate`].
///
/// # Errors
/// Returns an error if the line contains an unknown key, or if any pipeline
/// stage fails.
///
/// # Examples
/// ```
/// use reckon::evaluate_line;
///
/// assert_eq!(evaluate_line("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_line("8-3-2").unwrap(), 3.0);
///
/// // 'x' is not a key.
/// assert!(evaluate_line("2x3").is_err());
/// ```
pub fn evaluate_line(line: &str) -> Result<f64, Error> {
    let symbols = symbols_from_str(line)?;

    evaluate(&symbols)
}
