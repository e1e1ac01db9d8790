#[derive(Debug)]
/// A structural or semantic fault in an otherwise lexable expression.
///
/// Carries everything needed to point at the fault: the broken rule, the
/// rendered expression text, and the zero-based character column of the
/// offending value. `Display` produces the full three-line report:
///
/// ```text
/// Error at column 1: There is an unexpected '+' after '*'.
/// 2*+4
///  ^
/// ```
pub struct ValidationError {
    /// Which rule was broken.
    pub kind:       ValidationErrorKind,
    /// The rendered expression the column refers to.
    pub expression: String,
    /// Zero-based character column of the fault.
    pub column:     usize,
}

#[derive(Debug)]
/// The individual rules a validated expression can break.
pub enum ValidationErrorKind {
    /// An operator with no value before it.
    NothingBeforeOperator {
        /// Display symbol of the operator.
        operator: &'static str,
    },
    /// An operator at the end of the expression.
    NothingAfterOperator {
        /// Display symbol of the operator.
        operator: &'static str,
    },
    /// Two operators directly next to each other.
    OperatorAfterOperator {
        /// The first operator of the pair, where the report points.
        first:  &'static str,
        /// The operator directly behind it.
        second: &'static str,
    },
    /// An operator directly before a closing mark.
    OperatorBeforeGroupEnd {
        /// Display symbol of the operator.
        operator: &'static str,
    },
    /// A division whose right-hand side is the literal zero.
    DivisionByLiteralZero,
    /// Two values with no operator between them.
    UnexpectedValue {
        /// Display text of the value the report points at.
        after: String,
    },
    /// A group with nothing inside.
    EmptyGroup,
    /// A numeric literal that does not parse.
    InvalidNumber {
        /// The offending literal text.
        text: String,
    },
    /// An open grouping mark without a matching close mark.
    UnfinishedGroup,
}

impl ValidationErrorKind {
    /// The message for this rule, without position context.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NothingBeforeOperator { operator } => {
                format!("There are no values before '{operator}'.")
            },
            Self::NothingAfterOperator { operator } => {
                format!("There are no values after '{operator}'.")
            },
            Self::OperatorAfterOperator { first, second } => {
                format!("There is an unexpected '{second}' after '{first}'.")
            },
            Self::OperatorBeforeGroupEnd { operator } => {
                format!("There is a '{operator}' directly before the end of a block.")
            },
            Self::DivisionByLiteralZero => "Division by zero is not allowed.".to_string(),
            Self::UnexpectedValue { after } => {
                format!("There is an unexpected value after '{after}'.")
            },
            Self::EmptyGroup => "There is nothing inside a block.".to_string(),
            Self::InvalidNumber { text } => format!("'{text}' is not a valid number."),
            Self::UnfinishedGroup => "There are still open blocks.".to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Error at column {}: {}", self.column, self.kind.message())?;
        writeln!(f, "{}", self.expression)?;
        write!(f, "{}^", " ".repeat(self.column))
    }
}

impl std::error::Error for ValidationError {}
