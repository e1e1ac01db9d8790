use crate::expr::Operator;

/// Index of a node inside a [`NodeArena`].
///
/// Identifiers stay valid for the whole life of the arena: reduction and
/// splicing overwrite or rewire slots in place and never move a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// A single node of the expression tree.
///
/// Parent references make destructive reduction possible: after a node is
/// computed, evaluation climbs back up without searching. They are plain
/// indices, not owners; ownership of every node lives in the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AstNode {
    /// An operation with up to two children. Child slots are only empty
    /// while the surrounding branch is still being built.
    Operator {
        /// The operation this node performs.
        operator: Operator,
        /// The node this one hangs under, if any.
        parent:   Option<NodeId>,
        /// Left operand.
        left:     Option<NodeId>,
        /// Right operand.
        right:    Option<NodeId>,
    },
    /// A leaf holding a coerced numeric value.
    Number {
        /// The numeric value.
        value:  f64,
        /// The node this one hangs under, if any.
        parent: Option<NodeId>,
    },
}

impl AstNode {
    /// The node this one hangs under, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        match self {
            Self::Operator { parent, .. } | Self::Number { parent, .. } => *parent,
        }
    }

    /// Re-points the parent back-reference.
    pub fn set_parent(&mut self, new_parent: Option<NodeId>) {
        match self {
            Self::Operator { parent, .. } | Self::Number { parent, .. } => *parent = new_parent,
        }
    }

    /// The numeric value, if this is a number leaf.
    #[must_use]
    pub const fn number_value(&self) -> Option<f64> {
        match self {
            Self::Number { value, .. } => Some(*value),
            Self::Operator { .. } => None,
        }
    }
}

/// Flat storage for every node of a tree.
///
/// Children and parents reference each other through [`NodeId`] indices, so
/// the rewiring done during construction and reduction is slot surgery: a
/// node can change place or content while everything pointing at it stays
/// valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeArena {
    nodes: Vec<AstNode>,
}

impl NodeArena {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Stores a node and returns its identifier.
    pub fn alloc(&mut self, node: AstNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Borrows the node behind `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0]
    }

    /// Mutably borrows the node behind `id`.
    pub fn node_mut(&mut self, id: NodeId) -> &mut AstNode {
        &mut self.nodes[id.0]
    }

    /// Number of stored nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Overwrites the node behind `id` with a number leaf, keeping its place
    /// in the tree. Child references of the old node are dropped with it;
    /// the parent reference survives so reduction can keep climbing.
    pub fn replace_with_number(&mut self, id: NodeId, value: f64) {
        let parent = self.nodes[id.0].parent();
        self.nodes[id.0] = AstNode::Number { value, parent };
    }
}

/// A constructed subtree: its root node plus the branches of every group
/// nested directly below, which must be reduced before the branch itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Root node of this subtree.
    pub head:     NodeId,
    /// Subtrees of nested groups, in entry order.
    pub children: Vec<Branch>,
}

/// A fully built expression tree, ready for reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct AstTree {
    /// Backing storage for every node of the tree.
    pub arena: NodeArena,
    /// The outermost branch.
    pub stem:  Branch,
}
