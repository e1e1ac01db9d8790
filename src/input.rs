/// The buffer module collects symbols as they are entered.
///
/// The buffer is the keypad-facing collaborator of the pipeline: it appends
/// and removes symbols in entry order, echoes the current entry, and can
/// commit itself, replacing the entry with the computed result.
///
/// # Responsibilities
/// - Collects symbols in entry order and hands them to the pipeline as a
///   read-only slice.
/// - Handles the deletion key and full clears.
/// - Re-enters committed results as a single numeral symbol.
pub mod buffer;
/// The symbol module defines the typed unit of input.
///
/// A symbol is one key press: a digit, the decimal separator, pi, an
/// operator, or a grouping mark. The module also provides the text
/// front-end that turns a typed line into the same symbol sequence a keypad
/// would produce.
///
/// # Responsibilities
/// - Defines the `Symbol` enum and the label each key prints as.
/// - Lexes raw text into symbols, reporting unknown keys with their
///   position.
/// - Maps operator keys to their operation.
pub mod symbol;
