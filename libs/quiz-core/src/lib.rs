//! Core library for the wiki quiz authoring format.
//!
//! Provides:
//! - Parser for the `{title|type="()"}` wiki markup
//! - Quiz, question and answer types with partial-credit grading
//! - Error types carrying per-question diagnostics

pub mod error;
pub mod parser;
pub mod types;

pub use error::{ParseError, Result, SyntaxErrorKind};
pub use parser::{parse, QuizParser};
pub use types::{Answer, AnswerBlock, Question, QuestionType, Quiz};
