use crate::{
    error::{Error, InputError},
    input::symbol::{Symbol, symbols_from_str},
};

/// Collects input symbols in entry order.
///
/// The buffer is the keypad side of the crate: keys append, `del` removes,
/// and a committed result replaces the whole entry with a single numeral so
/// the next calculation can continue from it. The pipeline reads the
/// collected symbols and never changes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    symbols: Vec<Symbol>,
}

impl InputBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { symbols: Vec::new() }
    }

    /// Builds a buffer from a textual spelling.
    ///
    /// # Errors
    /// Returns [`InputError::UnknownKey`] when the text contains something no
    /// key produces.
    pub fn from_keys(text: &str) -> Result<Self, InputError> {
        Ok(Self { symbols: symbols_from_str(text)? })
    }

    /// Appends one symbol.
    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Handles one key by its label.
    ///
    /// `"del"` removes the most recent symbol; every other label must spell
    /// exactly one symbol, which is appended. Evaluation is not a key here:
    /// committing the entry is the caller's move, see [`Self::commit`].
    ///
    /// # Errors
    /// Returns [`InputError::UnknownKey`] if the label is not a single known
    /// key.
    pub fn press(&mut self, key: &str) -> Result<(), InputError> {
        if key == "del" {
            self.delete_last();
            return Ok(());
        }

        let mut symbols = symbols_from_str(key)?;
        if symbols.len() == 1 && let Some(symbol) = symbols.pop() {
            self.symbols.push(symbol);
            return Ok(());
        }

        Err(InputError::UnknownKey { key:      key.to_string(),
                                     position: 0, })
    }

    /// Removes and returns the most recent symbol.
    pub fn delete_last(&mut self) -> Option<Symbol> {
        self.symbols.pop()
    }

    /// Removes every symbol.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// The collected symbols, oldest first.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of collected symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the buffer holds no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Replaces the whole entry with a computed result, loaded as a single
    /// numeral symbol. This is how a result, including a negative one like
    /// `-7`, can become the left-hand side of the next calculation.
    pub fn replace_with_result(&mut self, value: f64) {
        self.symbols.clear();
        self.symbols.push(Symbol::Number(value.to_string()));
    }

    /// Evaluates the current entry.
    ///
    /// On success the entry is replaced by the result as if it had been typed
    /// in; on failure it is left untouched so the fault can be corrected key
    /// by key.
    ///
    /// # Errors
    /// Whatever pipeline error the entry produced.
    ///
    /// # Example
    /// ```
    /// use reckon::input::buffer::InputBuffer;
    ///
    /// let mut buffer = InputBuffer::from_keys("7*3").unwrap();
    /// assert_eq!(buffer.commit().unwrap(), 21.0);
    /// assert_eq!(buffer.to_string(), "21");
    ///
    /// buffer.press("-").unwrap();
    /// buffer.press("1").unwrap();
    /// assert_eq!(buffer.commit().unwrap(), 20.0);
    /// ```
    pub fn commit(&mut self) -> Result<f64, Error> {
        let value = crate::evaluate(&self.symbols)?;
        self.replace_with_result(value);
        Ok(value)
    }
}

impl std::fmt::Display for InputBuffer {
    /// Echoes the entry, one key label after another.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }

        Ok(())
    }
}
