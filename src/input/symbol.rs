use logos::Logos;

use crate::{error::InputError, expr::Operator};

/// One unit of calculator input, as a keypad produces it.
///
/// A symbol is deliberately dumber than a lexed value: digits arrive one key
/// press at a time, and only the value lexer merges them into numbers. The
/// `Logos` derive doubles as a text front-end, so an expression can also be
/// typed as a line (see [`symbols_from_str`]).
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Symbol {
    /// One or more digit keys. A re-entered result may load a whole numeral,
    /// including its sign and decimal point, into a single symbol.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// The decimal separator key.
    #[token(",")]
    #[token(".")]
    Separator,
    /// The pi constant key.
    #[token("pi")]
    #[token("π")]
    Pi,
    /// The addition key.
    #[token("+")]
    Sum,
    /// The subtraction key.
    #[token("-")]
    Subtract,
    /// The multiplication key.
    #[token("*")]
    #[token("×")]
    Multiply,
    /// The division key.
    #[token("/")]
    #[token("÷")]
    Divide,
    /// The percent key.
    #[token("%")]
    Percent,
    /// The modulo key.
    #[token("mod")]
    Mod,
    /// The exponentiation key.
    #[token("^")]
    Exponent,
    /// The root key.
    #[token("√")]
    #[token("root")]
    Root,
    /// The opening grouping mark.
    #[token("(")]
    OpenGroup,
    /// The closing grouping mark.
    #[token(")")]
    CloseGroup,
}

impl Symbol {
    /// The operation this key stands for, if it is an operator key.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Sum => Some(Operator::Sum),
            Self::Subtract => Some(Operator::Subtract),
            Self::Multiply => Some(Operator::Multiply),
            Self::Divide => Some(Operator::Divide),
            Self::Percent => Some(Operator::Percent),
            Self::Mod => Some(Operator::Mod),
            Self::Exponent => Some(Operator::Exponent),
            Self::Root => Some(Operator::Root),
            _ => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    /// Prints the key's label. The separator prints as the comma it is
    /// entered as; only the lexed expression renders it as a point.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Separator => f.write_str(","),
            Self::Pi => f.write_str("pi"),
            Self::Sum => f.write_str("+"),
            Self::Subtract => f.write_str("-"),
            Self::Multiply => f.write_str("*"),
            Self::Divide => f.write_str("/"),
            Self::Percent => f.write_str("%"),
            Self::Mod => f.write_str("mod"),
            Self::Exponent => f.write_str("^"),
            Self::Root => f.write_str("√"),
            Self::OpenGroup => f.write_str("("),
            Self::CloseGroup => f.write_str(")"),
        }
    }
}

/// Turns a textual spelling into the symbol sequence a keypad would produce.
///
/// Whitespace is skipped; everything else must be a key. Digits group into
/// one symbol per unbroken run, which makes no difference to the pipeline
/// since the value lexer merges adjacent digit symbols anyway.
///
/// # Errors
/// Returns [`InputError::UnknownKey`] when the text contains something no
/// key produces.
///
/// # Example
/// ```
/// use reckon::input::symbol::{Symbol, symbols_from_str};
///
/// let symbols = symbols_from_str("2+3").unwrap();
/// assert_eq!(symbols,
///            vec![Symbol::Number("2".to_string()), Symbol::Sum, Symbol::Number("3".to_string())]);
///
/// assert!(symbols_from_str("2&3").is_err());
/// ```
pub fn symbols_from_str(text: &str) -> Result<Vec<Symbol>, InputError> {
    let mut symbols = Vec::new();
    let mut lexer = Symbol::lexer(text);

    while let Some(token) = lexer.next() {
        if let Ok(symbol) = token {
            symbols.push(symbol);
        } else {
            return Err(InputError::UnknownKey { key:      lexer.slice().to_string(),
                                                position: lexer.span().start, });
        }
    }

    Ok(symbols)
}
