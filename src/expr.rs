/// A numeric value exactly as entered, before any coercion to `f64`.
///
/// Digit and separator keys accumulate into a textual literal and stay text
/// until the tree builder coerces them. Keeping the text means the entry can
/// be echoed back exactly, and a re-entered result (such as `-7` or `2.5`)
/// survives as a single value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    /// A literal accumulated from digit and separator keys, or a re-entered
    /// result.
    Literal(String),
    /// The constant pi.
    Pi,
}

impl Number {
    /// Coerces the number to an `f64`.
    ///
    /// # Returns
    /// - `Some(f64)`: The numeric value.
    /// - `None`: The literal text does not parse as a number, for example two
    ///   separators accumulated into `1.2.3`.
    ///
    /// # Example
    /// ```
    /// use reckon::expr::Number;
    ///
    /// assert_eq!(Number::Literal("2.5".to_string()).to_f64(), Some(2.5));
    /// assert_eq!(Number::Literal("1.2.3".to_string()).to_f64(), None);
    /// ```
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Literal(text) => text.parse().ok(),
            Self::Pi => Some(std::f64::consts::PI),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Pi => f.write_str("pi"),
        }
    }
}

/// The eight operations the keypad offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition.
    Sum,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
    /// The left side read as a percentage of the right.
    Percent,
    /// Floored modulo.
    Mod,
    /// Exponentiation.
    Exponent,
    /// The left side under the root of the right side's degree.
    Root,
}

impl Operator {
    /// The display symbol of the operation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sum => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Percent => "%",
            Self::Mod => "mod",
            Self::Exponent => "^",
            Self::Root => "√",
        }
    }

    /// How tightly the operation binds. Higher ranks bind tighter.
    ///
    /// `Subtract` ranks below `Sum` on purpose: together with the builder
    /// always rooting a subtraction over the tree built so far, this is what
    /// makes chains like `8-3-2` reduce left to right.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Subtract => 1,
            Self::Sum => 2,
            Self::Multiply | Self::Percent => 3,
            Self::Divide => 4,
            Self::Exponent => 5,
            Self::Root => 6,
            Self::Mod => 7,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One semantic element of a lexed expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A numeric value.
    Number(Number),
    /// An operation between the surrounding values.
    Operator(Operator),
    /// A grouped sub-expression. The grouping marks are stripped during
    /// lexing; the nesting itself carries their meaning.
    Group(MathExpression),
}

/// An ordered sequence of lexed values, possibly nested through groups.
///
/// Every `Group` in here came from a balanced pair of grouping marks;
/// unbalanced input never reaches this type. The sequence is created once by
/// the value lexer and read, never changed, by the validator and the tree
/// builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MathExpression {
    /// The values in entry order.
    pub values: Vec<Value>,
}

impl std::fmt::Display for MathExpression {
    /// Renders the conventional spelling: literals and operator symbols as
    /// they are, groups wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for value in &self.values {
            match value {
                Value::Number(number) => write!(f, "{number}")?,
                Value::Operator(operator) => write!(f, "{operator}")?,
                Value::Group(inner) => write!(f, "({inner})")?,
            }
        }

        Ok(())
    }
}
