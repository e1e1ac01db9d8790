use crate::{
    error::LexError,
    expr::{MathExpression, Number, Value},
    input::symbol::Symbol,
};

/// Deepest group nesting the lexer accepts.
///
/// Nesting is the only thing that grows the pipeline's recursion, so it is
/// capped here, in the first stage that can see it.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Groups a raw symbol sequence into semantic values.
///
/// One left-to-right walk: runs of digit and separator symbols merge into a
/// single numeric literal, operator symbols map to their operation, and each
/// balanced pair of grouping marks becomes one nested [`Value::Group`] with
/// the marks stripped. A closing mark with no matching open mark is skipped,
/// keeping the keypad forgiving about an extra `)`.
///
/// # Parameters
/// - `symbols`: The symbol sequence, oldest first. Left untouched; the
///   result is a pure function of it.
///
/// # Returns
/// The grouped expression. An empty sequence yields an empty expression;
/// rejecting that is the tree builder's job.
///
/// # Errors
/// - [`LexError::UnfinishedGroup`]: an open mark has no matching close mark,
///   anchored at the unmatched open mark.
/// - [`LexError::GroupTooDeep`]: nesting exceeds [`MAX_GROUP_DEPTH`].
///
/// # Example
/// ```
/// use reckon::{input::symbol::symbols_from_str, interpreter::lexer::lex};
///
/// let symbols = symbols_from_str("2+3*(4,5)").unwrap();
/// let expression = lex(&symbols).unwrap();
/// assert_eq!(expression.to_string(), "2+3*(4.5)");
/// ```
pub fn lex(symbols: &[Symbol]) -> Result<MathExpression, LexError> {
    lex_level(symbols, 0, 0)
}

/// Lexes one nesting level. `offset` is the absolute index of `symbols[0]`
/// in the original sequence, so errors anchor to the full input.
fn lex_level(symbols: &[Symbol], offset: usize, depth: usize) -> Result<MathExpression, LexError> {
    if depth > MAX_GROUP_DEPTH {
        return Err(LexError::GroupTooDeep { limit: MAX_GROUP_DEPTH });
    }

    let mut values = Vec::new();
    let mut index = 0;

    while index < symbols.len() {
        match &symbols[index] {
            Symbol::Number(_) | Symbol::Separator => {
                let (number, consumed) = accumulate_number(&symbols[index..]);
                values.push(Value::Number(number));
                index += consumed;
            },
            Symbol::Pi => {
                values.push(Value::Number(Number::Pi));
                index += 1;
            },
            Symbol::OpenGroup => {
                let Some(enclosed) = enclosed_len(&symbols[index + 1..]) else {
                    return Err(LexError::UnfinishedGroup { opened_at: offset + index });
                };
                let inner = lex_level(&symbols[index + 1..index + 1 + enclosed],
                                      offset + index + 1,
                                      depth + 1)?;
                values.push(Value::Group(inner));
                index += enclosed + 2;
            },
            // a close mark only reaches this arm when nothing opened it
            Symbol::CloseGroup => index += 1,
            symbol => {
                // every remaining symbol kind is an operator key
                if let Some(operator) = symbol.operator() {
                    values.push(Value::Operator(operator));
                }
                index += 1;
            },
        }
    }

    Ok(MathExpression { values })
}

/// Merges a run of digit and separator symbols into one textual literal.
///
/// A separator on an empty accumulation starts it as `0.`; every later
/// separator writes a bare point. The result stays text; coercion to `f64`
/// happens in the tree builder, and rejecting something unparseable like
/// `1.2.3` is the validator's job.
fn accumulate_number(symbols: &[Symbol]) -> (Number, usize) {
    let mut text = String::new();
    let mut consumed = 0;

    for symbol in symbols {
        match symbol {
            Symbol::Number(digits) => text.push_str(digits),
            Symbol::Separator if text.is_empty() => text.push_str("0."),
            Symbol::Separator => text.push('.'),
            _ => break,
        }
        consumed += 1;
    }

    (Number::Literal(text), consumed)
}

/// Length of the enclosed run for the open mark directly before `symbols`,
/// found with a running open/close count. `None` when the matching close
/// mark never comes.
fn enclosed_len(symbols: &[Symbol]) -> Option<usize> {
    let mut depth = 0usize;

    for (index, symbol) in symbols.iter().enumerate() {
        match symbol {
            Symbol::OpenGroup => depth += 1,
            Symbol::CloseGroup if depth == 0 => return Some(index),
            Symbol::CloseGroup => depth -= 1,
            _ => {},
        }
    }

    None
}
