use thiserror::Error;

/// Faults that stop a quiz run.
///
/// A wrong or out-of-range answer is never one of these; those are scored,
/// not raised.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("input closed before the quiz finished")]
    EndOfInput,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid quiz configuration: {0}")]
    Config(String),
}

pub type QuizResult<T> = Result<T, QuizError>;
