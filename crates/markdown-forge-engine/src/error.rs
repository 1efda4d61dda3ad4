#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
