use crate::{
    ast::{AstNode, AstTree, Branch, NodeArena, NodeId},
    error::EvalError,
    expr::Operator,
    util::num,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a built tree to its numeric result.
///
/// Reduction is destructive, so the tree is consumed: every computed
/// operation overwrites its own node with the result, and nothing of the
/// tree survives the call.
///
/// Branches of nested groups reduce to completion, deepest first, before
/// the branch that contains them. Within a branch the cursor sinks to an
/// operation whose children are both numbers, computes it, and climbs back
/// toward the head through the parent references, one rewrite per step.
///
/// Division by a computed zero follows IEEE and yields an infinity; only
/// the literal zero is rejected, earlier, by validation.
///
/// # Errors
/// - [`EvalError::MissingOperand`]: an operation with an absent operand was
///   reached. A tree built from a validated expression never has one.
///
/// # Example
/// ```
/// use reckon::{
///     input::symbol::symbols_from_str,
///     interpreter::{builder::build, evaluator::evaluate, lexer::lex},
/// };
///
/// let expression = lex(&symbols_from_str("(2+3)*4").unwrap()).unwrap();
/// let tree = build(&expression).unwrap();
/// assert_eq!(evaluate(tree).unwrap(), 20.0);
/// ```
pub fn evaluate(tree: AstTree) -> EvalResult<f64> {
    let AstTree { mut arena, stem } = tree;

    reduce_branch(&mut arena, &stem)
}

/// Reduces one branch to a number, children first.
fn reduce_branch(arena: &mut NodeArena, branch: &Branch) -> EvalResult<f64> {
    for child in &branch.children {
        reduce_branch(arena, child)?;
    }

    reduce_from(arena, branch.head)
}

/// Reduces the subtree rooted at `head`, assuming every group branch below
/// it is already a number.
fn reduce_from(arena: &mut NodeArena, head: NodeId) -> EvalResult<f64> {
    let mut cursor = head;

    loop {
        let (operator, left, right, parent) = match *arena.node(cursor) {
            AstNode::Number { value, .. } => return Ok(value),
            AstNode::Operator { operator,
                                parent,
                                left,
                                right, } => (operator, left, right, parent),
        };

        let (Some(left), Some(right)) = (left, right) else {
            return Err(EvalError::MissingOperand { operator: operator.symbol() });
        };

        match (arena.node(left).number_value(), arena.node(right).number_value()) {
            (Some(a), Some(b)) => {
                arena.replace_with_number(cursor, apply(operator, a, b));
                // the root rewrites in place and is picked up next round
                cursor = parent.unwrap_or(cursor);
            },
            (None, _) => cursor = left,
            (_, None) => cursor = right,
        }
    }
}

/// Computes one operation.
///
/// `Percent` reads the left side as a percentage of the right, so `200%50`
/// is 100. `Mod` is the floored modulo and follows the divisor's sign.
/// `Root` takes the left side as the radicand and the right as the degree.
fn apply(operator: Operator, left: f64, right: f64) -> f64 {
    match operator {
        Operator::Sum => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
        Operator::Percent => left / 100.0 * right,
        Operator::Mod => num::floored_mod(left, right),
        Operator::Exponent => left.powf(right),
        Operator::Root => root(left, right),
    }
}

/// The root operation as the keypad defines it.
///
/// A non-finite degree collapses to zero. An even integer degree takes the
/// real root. Every other degree collapses to the unit carrying the sign of
/// `radicand^(1/degree) * degree`. The collapse is observable behavior and
/// is pinned by tests.
fn root(radicand: f64, degree: f64) -> f64 {
    if !degree.is_finite() {
        return 0.0;
    }

    let value = radicand.powf(1.0 / degree);
    if degree % 2.0 == 0.0 {
        value
    } else {
        num::signed_unit(value * degree)
    }
}
