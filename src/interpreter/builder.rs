use crate::{
    ast::{AstNode, AstTree, Branch, NodeArena, NodeId},
    error::BuildError,
    expr::{MathExpression, Operator, Value},
};

/// Result type used by the tree builder.
pub type BuildResult<T> = Result<T, BuildError>;

/// Builds the expression tree in one online pass.
///
/// Values are consumed strictly left to right and placed exactly once; the
/// tree reshapes itself around two cursors per branch instead of re-scanning
/// consumed input:
/// - `head` is the branch's current root;
/// - `last_operation` is the most recent operator node, the only place where
///   a new value may still be attached.
///
/// An incoming operator either takes over as the new head, or splices in at
/// `last_operation`, pushing part of the tree down under itself. `Subtract`
/// always takes the head; together with its low rank that keeps chains like
/// `8-3-2` reducing left to right.
///
/// A group is built recursively into its own branch and then placed like a
/// number. Its subtree is pinned: a later operator roots over it or hangs it
/// underneath, but never reaches inside.
///
/// # Parameters
/// - `expression`: The lexed expression. Read only; validate it first, the
///   builder only defends against rule breaks, it does not report them well.
///
/// # Returns
/// The built tree: every value of the expression placed, every operator
/// node's child slots filled.
///
/// # Errors
/// - [`BuildError::EmptyExpression`]: the expression or one of its groups
///   holds no values.
/// - [`BuildError::InvalidNumber`]: a literal failed coercion to `f64`.
/// - [`BuildError::MisplacedValue`] and [`BuildError::MisplacedOperator`]:
///   slot bookkeeping was violated; unreachable on validated input.
///
/// # Example
/// ```
/// use reckon::{
///     input::symbol::symbols_from_str,
///     interpreter::{builder::build, evaluator::evaluate, lexer::lex},
/// };
///
/// let expression = lex(&symbols_from_str("2+3*4").unwrap()).unwrap();
/// let tree = build(&expression).unwrap();
/// assert_eq!(evaluate(tree).unwrap(), 14.0);
/// ```
pub fn build(expression: &MathExpression) -> BuildResult<AstTree> {
    let mut arena = NodeArena::new();
    let stem = build_branch(&mut arena, &expression.values)?;

    Ok(AstTree { arena, stem })
}

/// Builds one branch from the values of one nesting level. Nested groups
/// recurse, and their finished subtrees are recorded as child branches so
/// the evaluator can reduce them first.
fn build_branch(arena: &mut NodeArena, values: &[Value]) -> BuildResult<Branch> {
    let mut head: Option<NodeId> = None;
    let mut last_operation: Option<NodeId> = None;
    let mut children = Vec::new();

    for value in values {
        match value {
            Value::Number(number) => {
                let Some(coerced) = number.to_f64() else {
                    return Err(BuildError::InvalidNumber { text: number.to_string() });
                };
                let node = arena.alloc(AstNode::Number { value:  coerced,
                                                         parent: None, });
                place_value(arena, node, &mut head, &mut last_operation)?;
            },
            Value::Operator(operator) => {
                place_operator(arena, *operator, &mut head, &mut last_operation)?;
            },
            Value::Group(inner) => {
                let branch = build_branch(arena, &inner.values)?;
                place_value(arena, branch.head, &mut head, &mut last_operation)?;
                children.push(branch);
            },
        }
    }

    let Some(head) = head else {
        return Err(BuildError::EmptyExpression);
    };

    Ok(Branch { head, children })
}

/// Hangs a finished value node, a number or a group's subtree, into the
/// branch: the first value becomes the head, every later one fills
/// `last_operation`'s first empty child slot, left before right.
fn place_value(arena: &mut NodeArena,
               node: NodeId,
               head: &mut Option<NodeId>,
               last_operation: &mut Option<NodeId>)
               -> BuildResult<()> {
    if head.is_none() {
        *head = Some(node);
        return Ok(());
    }

    let Some(operation) = *last_operation else {
        return Err(BuildError::MisplacedValue);
    };

    match arena.node_mut(operation) {
        AstNode::Operator { left, right, .. } => {
            if left.is_none() {
                *left = Some(node);
            } else if right.is_none() {
                *right = Some(node);
            } else {
                return Err(BuildError::MisplacedValue);
            }
        },
        AstNode::Number { .. } => return Err(BuildError::MisplacedOperator),
    }
    arena.node_mut(node).set_parent(Some(operation));

    Ok(())
}

/// Works one operator into the branch.
///
/// Taking the head: when the branch so far is a bare term, when the head
/// already binds at least as tightly, or always for `Subtract`, the new node
/// roots over the whole branch and the old head drops to its left side.
///
/// Splicing: otherwise the node enters at `last_operation`. A strictly
/// looser `last_operation` hands over its right slot, pushing an occupant
/// down as the new node's left child; an equally tight or tighter one is
/// taken over in place and becomes the left child itself.
fn place_operator(arena: &mut NodeArena,
                  operator: Operator,
                  head: &mut Option<NodeId>,
                  last_operation: &mut Option<NodeId>)
                  -> BuildResult<()> {
    let node = arena.alloc(AstNode::Operator { operator,
                                               parent: None,
                                               left: None,
                                               right: None });

    let Some(current_head) = *head else {
        // nothing to root over yet
        *head = Some(node);
        *last_operation = Some(node);
        return Ok(());
    };

    if takes_head(arena, current_head, operator, *last_operation) {
        take_position(arena, node, current_head);
        *head = Some(node);
        *last_operation = Some(node);
        return Ok(());
    }

    let Some(anchor) = *last_operation else {
        return Err(BuildError::MisplacedOperator);
    };
    let AstNode::Operator { operator: anchor_operator,
                            right: anchor_right,
                            .. } = *arena.node(anchor)
    else {
        return Err(BuildError::MisplacedOperator);
    };

    if anchor_operator.precedence() < operator.precedence() {
        match anchor_right {
            Some(occupant) => take_position(arena, node, occupant),
            None => {
                if let AstNode::Operator { right, .. } = arena.node_mut(anchor) {
                    *right = Some(node);
                }
                arena.node_mut(node).set_parent(Some(anchor));
            },
        }
    } else {
        take_position(arena, node, anchor);
    }

    *last_operation = Some(node);
    Ok(())
}

/// Whether the incoming operator must root over the current head.
fn takes_head(arena: &NodeArena,
              head: NodeId,
              operator: Operator,
              last_operation: Option<NodeId>)
              -> bool {
    if operator == Operator::Subtract || last_operation.is_none() {
        return true;
    }

    match arena.node(head) {
        AstNode::Number { .. } => true,
        AstNode::Operator { operator: head_operator, .. } => {
            head_operator.precedence() >= operator.precedence()
        },
    }
}

/// Puts `node` where `old` stands: `old`'s parent adopts `node` in the same
/// child slot, or `node` becomes a root when there is none, and `old` drops
/// down to be `node`'s left child with its own subtree intact.
fn take_position(arena: &mut NodeArena, node: NodeId, old: NodeId) {
    let parent = arena.node(old).parent();

    if let Some(parent_id) = parent
        && let AstNode::Operator { left, right, .. } = arena.node_mut(parent_id)
    {
        if *left == Some(old) {
            *left = Some(node);
        } else if *right == Some(old) {
            *right = Some(node);
        }
    }

    arena.node_mut(node).set_parent(parent);
    arena.node_mut(old).set_parent(Some(node));
    if let AstNode::Operator { left, .. } = arena.node_mut(node) {
        *left = Some(old);
    }
}
