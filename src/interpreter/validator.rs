use crate::{
    error::{ValidationError, ValidationErrorKind},
    expr::{MathExpression, Number, Operator, Value},
    input::symbol::Symbol,
};

/// Checks an expression against the entry rules before any tree is built.
///
/// One pass per nesting level, every value judged against its direct
/// neighbors. A group counts as a single term at its own level and is
/// recursed into with the same rules. The expression is never changed; the
/// first broken rule wins.
///
/// # Errors
/// A [`ValidationError`] anchored to a character column of the rendered
/// expression. The rules:
/// - an operator needs a value on both sides (nothing before it, nothing
///   after it, and standing directly before a block's end are three
///   separate kinds);
/// - two operators may not stand next to each other; the report points at
///   the first of the pair;
/// - `/` may not be directly followed by the literal zero; the report
///   points at the zero;
/// - two values need an operator between them;
/// - a block may not be empty;
/// - a numeric literal must parse as a number.
///
/// # Example
/// ```
/// use reckon::{
///     input::symbol::symbols_from_str,
///     interpreter::{lexer::lex, validator::validate},
/// };
///
/// let expression = lex(&symbols_from_str("2*+4").unwrap()).unwrap();
/// let report = validate(&expression).unwrap_err();
/// assert_eq!(report.to_string(),
///            "Error at column 1: There is an unexpected '+' after '*'.\n2*+4\n ^");
/// ```
pub fn validate(expression: &MathExpression) -> Result<(), ValidationError> {
    let rendered = expression.to_string();
    let mut column = 0;

    check_level(&expression.values, &mut column, false, &rendered)
}

/// Builds the report for an open mark that never closes.
///
/// The fault lives in the raw symbols, which never become an expression, so
/// the report renders the symbols themselves and anchors at the open mark.
/// `opened_at` must index into `symbols`.
#[must_use]
pub fn unfinished_group_report(symbols: &[Symbol], opened_at: usize) -> ValidationError {
    let rendered: String = symbols.iter().map(ToString::to_string).collect();
    let column = symbols[..opened_at].iter()
                                     .map(|symbol| char_width(&symbol.to_string()))
                                     .sum();

    ValidationError { kind: ValidationErrorKind::UnfinishedGroup,
                      expression: rendered,
                      column }
}

/// Validates one nesting level, advancing `column` through the rendering of
/// every visited value. `enclosed` marks a level inside a group, which turns
/// a trailing operator into the before-block-end kind.
fn check_level(values: &[Value],
               column: &mut usize,
               enclosed: bool,
               rendered: &str)
               -> Result<(), ValidationError> {
    for (index, value) in values.iter().enumerate() {
        let start = *column;

        match value {
            Value::Operator(operator) => {
                check_operator(*operator, index, values, start, rendered, enclosed)?;
                *column += char_width(operator.symbol());
            },
            Value::Number(number) => {
                if let Number::Literal(text) = number
                    && text.parse::<f64>().is_err()
                {
                    return Err(report(ValidationErrorKind::InvalidNumber { text: text.clone() },
                                      rendered,
                                      start));
                }

                let label = number.to_string();
                *column += char_width(&label);
                if followed_by_a_value(values, index) {
                    return Err(report(ValidationErrorKind::UnexpectedValue { after: label },
                                      rendered,
                                      start));
                }
            },
            Value::Group(inner) => {
                if inner.values.is_empty() {
                    return Err(report(ValidationErrorKind::EmptyGroup, rendered, start));
                }

                *column += 1;
                check_level(&inner.values, column, true, rendered)?;
                if followed_by_a_value(values, index) {
                    let kind = ValidationErrorKind::UnexpectedValue { after: ")".to_string() };
                    return Err(report(kind, rendered, *column));
                }
                *column += 1;
            },
        }
    }

    Ok(())
}

/// Judges one operator against its neighbors. `start` is the operator's own
/// column.
fn check_operator(operator: Operator,
                  index: usize,
                  values: &[Value],
                  start: usize,
                  rendered: &str,
                  enclosed: bool)
                  -> Result<(), ValidationError> {
    let symbol = operator.symbol();

    if index == 0 {
        return Err(report(ValidationErrorKind::NothingBeforeOperator { operator: symbol },
                          rendered,
                          start));
    }

    match values.get(index + 1) {
        None if enclosed => {
            Err(report(ValidationErrorKind::OperatorBeforeGroupEnd { operator: symbol },
                       rendered,
                       start))
        },
        None => {
            Err(report(ValidationErrorKind::NothingAfterOperator { operator: symbol },
                       rendered,
                       start))
        },
        Some(Value::Operator(next)) => {
            Err(report(ValidationErrorKind::OperatorAfterOperator { first:  symbol,
                                                                    second: next.symbol(), },
                       rendered,
                       start))
        },
        Some(Value::Number(number))
            if operator == Operator::Divide && number.to_f64() == Some(0.0) =>
        {
            Err(report(ValidationErrorKind::DivisionByLiteralZero,
                       rendered,
                       start + char_width(symbol)))
        },
        Some(_) => Ok(()),
    }
}

/// Whether the value at `index` is directly followed by another value, with
/// no operator in between.
fn followed_by_a_value(values: &[Value], index: usize) -> bool {
    matches!(values.get(index + 1), Some(Value::Number(_) | Value::Group(_)))
}

fn report(kind: ValidationErrorKind, rendered: &str, column: usize) -> ValidationError {
    ValidationError { kind,
                      expression: rendered.to_string(),
                      column }
}

/// Character count of a rendered fragment. Columns count characters, not
/// bytes, so the caret lines up under a multi-byte symbol like `√`.
fn char_width(text: &str) -> usize {
    text.chars().count()
}
