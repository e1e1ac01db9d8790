#[derive(Debug)]
/// Represents failures while turning raw text into input symbols.
pub enum InputError {
    /// The text contains something no key produces.
    UnknownKey {
        /// The unrecognized slice of text.
        key:      String,
        /// Byte offset where the slice starts.
        position: usize,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKey { key, position } => {
                write!(f, "Error at position {position}: '{key}' is not a known key.")
            },
        }
    }
}

impl std::error::Error for InputError {}
