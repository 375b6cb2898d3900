//! Core types for parsed quizzes.

use serde::{Deserialize, Serialize};

/// Choice semantics of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ExclusiveChoice,
    MultipleChoice,
    Undefined,
}

impl Default for QuestionType {
    fn default() -> Self {
        Self::Undefined
    }
}

impl QuestionType {
    /// Map a header type code to a question type.
    /// `()` is exclusive choice, `[]` is multiple choice.
    pub fn from_code(code: &str) -> Self {
        match code {
            "()" => Self::ExclusiveChoice,
            "[]" => Self::MultipleChoice,
            _ => Self::Undefined,
        }
    }

    /// Get the question type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExclusiveChoice => "exclusive_choice",
            Self::MultipleChoice => "multiple_choice",
            Self::Undefined => "undefined",
        }
    }
}

/// A single answer with its share of the credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    /// Fraction of full credit in `[0, 1]`; 0.0 for wrong answers.
    pub credit_fraction: f64,
}

impl Answer {
    /// Whether this answer carries any credit.
    pub fn is_correct(&self) -> bool {
        self.credit_fraction > 0.0
    }
}

/// Ordered answers of one question, in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerBlock {
    pub answers: Vec<Answer>,
}

impl AnswerBlock {
    /// Sum of all credit fractions; 1.0 for any block with a correct answer.
    pub fn total_credit(&self) -> f64 {
        self.answers.iter().map(|a| a.credit_fraction).sum()
    }

    /// Number of answers flagged correct.
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct()).count()
    }
}

/// One parsed question. The format supports exactly one answer block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    pub question_type: QuestionType,
    pub answer_block: AnswerBlock,
}

/// An ordered sequence of questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}
