use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A word or board cell contained something other than the letters a-z.
    #[error("invalid character {character:?} in {word:?}: only the letters a-z are supported")]
    InvalidCharacter { word: String, character: char },

    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("line {line}: no column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("line {line}: expected {expected} cells, found {found}")]
    RaggedBoard { line: usize, expected: usize, found: usize },

    #[error("empty tile at row {row}, column {col}")]
    EmptyTile { row: usize, col: usize },

    #[error("board has no rows")]
    EmptyBoard,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
