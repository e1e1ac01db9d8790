#[derive(Debug)]
/// Represents faults while reducing the expression tree.
pub enum EvalError {
    /// An operation was reached with an absent operand. Cannot happen for a
    /// tree built from a validated expression.
    MissingOperand {
        /// Display symbol of the operation missing an operand.
        operator: &'static str,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator } => {
                write!(f, "Error: The '{operator}' operation is missing an operand.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
