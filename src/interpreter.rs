/// The builder module constructs the expression tree.
///
/// The builder consumes lexed values strictly left to right and grows a
/// precedence-correct tree around two cursors, the branch head and the last
/// operation, re-rooting or splicing as each operator arrives. Nothing is
/// re-scanned; every value is placed exactly once.
///
/// # Responsibilities
/// - Turns a validated expression into an arena-backed tree.
/// - Keeps grouped sub-expressions pinned as their own branches.
/// - Defends its slot bookkeeping against unvalidated input.
pub mod builder;
/// The evaluator module reduces the tree to a number.
///
/// The evaluator rewrites the tree bottom-up: group branches first, then
/// each operation whose operands are both numbers, overwriting the operation
/// node with its result until only a number remains.
///
/// # Responsibilities
/// - Reduces branches deepest first, then climbs by parent references.
/// - Implements the semantics of every operation, including floored modulo
///   and the keypad's root behavior.
pub mod evaluator;
/// The lexer module groups raw symbols into semantic values.
///
/// The value lexer merges digit and separator runs into textual literals,
/// maps operator keys to operations, and folds balanced grouping marks into
/// nested groups. This is the first pipeline stage.
///
/// # Responsibilities
/// - Converts the symbol sequence into a `MathExpression`.
/// - Resolves grouping with a running open/close count and caps nesting.
/// - Reports an open mark that never closes.
pub mod lexer;
/// The validator module checks entry rules before the tree is built.
///
/// The validator walks the lexed expression once per nesting level and
/// judges every value against its direct neighbors, producing a caret
/// report anchored at the offending column when a rule is broken.
///
/// # Responsibilities
/// - Enforces the neighbor rules for operators, values, and groups.
/// - Rejects the literal zero behind a division and unparseable literals.
/// - Renders positional reports, including the unfinished-block report.
pub mod validator;
