/// Result type used across the vzor libraries
pub type Result<T, E = VzorError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum VzorError {
    /// A template, dictionary or list record does not match its grammar
    #[error("Malformed input in {origin} at line {line}: {msg}")]
    MalformedInput {
        origin: String,
        line: usize,
        msg: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VzorError {
    pub fn malformed<O, M>(origin: O, line: usize, msg: M) -> Self
    where
        O: Into<String>,
        M: Into<String>,
    {
        Self::MalformedInput {
            origin: origin.into(),
            line,
            msg: msg.into(),
        }
    }
}
