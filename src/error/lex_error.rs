#[derive(Debug)]
/// Represents failures while grouping raw symbols into values.
pub enum LexError {
    /// An open grouping mark was never closed.
    UnfinishedGroup {
        /// Index of the unmatched open mark in the symbol sequence.
        opened_at: usize,
    },
    /// Groups were nested deeper than the supported limit.
    GroupTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnfinishedGroup { opened_at } => {
                write!(f, "Error at symbol {opened_at}: A block is opened but never closed.")
            },
            Self::GroupTooDeep { limit } => {
                write!(f, "Error: Blocks are nested more than {limit} levels deep.")
            },
        }
    }
}

impl std::error::Error for LexError {}
