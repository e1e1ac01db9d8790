/// Tree construction faults.
///
/// Defines the errors the tree builder can raise. On validated input the
/// builder cannot fail; these guard its slot bookkeeping against unchecked
/// expressions.
pub mod build_error;
/// Reduction faults.
///
/// Defines the errors the evaluator can raise while reducing a tree to its
/// numeric result.
pub mod eval_error;
/// Text front-end faults.
///
/// Defines the errors raised while turning a typed line into input symbols,
/// before the pipeline proper begins.
pub mod input_error;
/// Symbol grouping faults.
///
/// Defines the errors the value lexer can raise while merging raw symbols
/// into semantic values, such as a grouping mark that never closes.
pub mod lex_error;
/// Entry rule violations.
///
/// Defines the validation error and its rule kinds. This is the one error
/// whose `Display` renders a full caret report pointing into the expression.
pub mod validation_error;

pub use build_error::BuildError;
pub use eval_error::EvalError;
pub use input_error::InputError;
pub use lex_error::LexError;
pub use validation_error::{ValidationError, ValidationErrorKind};

/// Any failure the pipeline can produce, one variant per phase.
///
/// Front-ends match on the variant to decide how to react; `Display` always
/// yields the user-facing message of the inner error.
#[derive(Debug)]
pub enum Error {
    /// Text could not be turned into input symbols.
    Input(InputError),
    /// Symbols could not be grouped into values.
    Lex(LexError),
    /// The expression broke an entry rule.
    Validation(ValidationError),
    /// The expression tree could not be constructed.
    Build(BuildError),
    /// The tree could not be reduced to a number.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(error) => error.fmt(f),
            Self::Lex(error) => error.fmt(f),
            Self::Validation(error) => error.fmt(f),
            Self::Build(error) => error.fmt(f),
            Self::Eval(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(error) => Some(error),
            Self::Lex(error) => Some(error),
            Self::Validation(error) => Some(error),
            Self::Build(error) => Some(error),
            Self::Eval(error) => Some(error),
        }
    }
}

impl From<InputError> for Error {
    fn from(error: InputError) -> Self {
        Self::Input(error)
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<BuildError> for Error {
    fn from(error: BuildError) -> Self {
        Self::Build(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}
