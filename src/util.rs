/// Numeric helpers.
///
/// This module provides the small arithmetic functions the evaluator's
/// operator semantics are written in terms of, kept separate so their exact
/// behavior can be documented and tested on their own.
pub mod num;
