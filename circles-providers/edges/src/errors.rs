use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The input held no records at all.
    #[error("edge list is empty; expected a user count on the first line")]
    MissingHeader,
    /// The first record was not a single non-negative integer.
    #[error("line {line}: expected a user count but found `{content}`")]
    InvalidHeader { line: usize, content: String },
    /// A friendship record did not hold exactly two tokens.
    #[error("line {line}: expected two user ids but found `{content}`")]
    MalformedEdge { line: usize, content: String },
    /// A user id was not a non-negative integer.
    #[error("line {line}: `{token}` is not a valid user id")]
    InvalidUserId { line: usize, token: String },
    /// A line was not valid UTF-8.
    #[error("line {line}: not valid UTF-8: {source}")]
    InvalidEncoding {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
