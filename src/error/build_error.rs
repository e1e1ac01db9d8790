#[derive(Debug)]
/// Represents faults while constructing the expression tree.
///
/// On validated input none of these occur; they guard the builder against
/// being fed an unchecked expression.
pub enum BuildError {
    /// The expression, or one of its groups, contains no values.
    EmptyExpression,
    /// A numeric literal failed coercion to `f64`.
    InvalidNumber {
        /// The offending literal text.
        text: String,
    },
    /// A number or group arrived with no open child slot to receive it.
    MisplacedValue,
    /// The construction bookkeeping pointed at a non-operator node.
    MisplacedOperator,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: There is nothing to calculate."),
            Self::InvalidNumber { text } => {
                write!(f, "Error: '{text}' is not a valid number.")
            },
            Self::MisplacedValue => {
                write!(f, "Error: A value arrived with no operation to receive it.")
            },
            Self::MisplacedOperator => {
                write!(f, "Error: The last operation does not point at an operator.")
            },
        }
    }
}

impl std::error::Error for BuildError {}
