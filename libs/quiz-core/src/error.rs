//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing wiki quiz markup.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input string is empty or was never set.
    #[error("no input to parse")]
    EmptyInput,

    /// A question chunk violated the grammar. `question` is 1-based.
    #[error("syntax error in question {question}: {kind}")]
    Syntax {
        question: usize,
        kind: SyntaxErrorKind,
    },

    /// Validation accepted the chunk, yet no answer line is flagged
    /// correct, so there is nothing to split the credit over.
    #[error("question {question}: no answer line is flagged correct")]
    NoCorrectAnswerLine { question: usize },
}

/// Reason a question chunk failed format validation.
///
/// The checks run in a fixed order, so a chunk with several defects
/// reports the first one only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    #[error("braces missing")]
    BracesMissing,

    #[error("question type missing")]
    QuestionTypeMissing,

    #[error("question text missing")]
    QuestionTextMissing,

    #[error("invalid answers")]
    InvalidAnswers,

    #[error("good answer is missing")]
    GoodAnswerMissing,

    /// The header is not closed by `"}` and a line break.
    #[error("header terminator missing")]
    UnterminatedHeader,
}
