//! Parser for the wiki quiz format.
//!
//! # Format
//! ```text
//! {Question title|type="()"}
//! + correct answer
//! - wrong answer
//!
//! {Next question title|type="[]"}
//! + first correct
//! + second correct
//! - wrong one
//! ```
//!
//! Questions are separated by one blank line. The header holds the title and
//! the type code (`()` exclusive choice, `[]` multiple choice); each body
//! line flags one answer with `+` or `-`. Correct answers split the credit
//! evenly, wrong answers carry none.

use crate::error::{ParseError, Result, SyntaxErrorKind};
use crate::types::{Answer, AnswerBlock, Question, QuestionType, Quiz};

const TYPE_MARKER: &str = "|type=\"";
const HEADER_END: &str = "\"}\n";
const CORRECT_FLAG: char = '+';

/// Parse wiki quiz markup into a quiz.
pub fn parse(input: &str) -> Result<Quiz> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut quiz = Quiz::default();
    for (idx, text) in split_questions(input).into_iter().enumerate() {
        let question = idx + 1;
        let chunk = Chunk::scan(text).map_err(|kind| ParseError::Syntax { question, kind })?;
        quiz.questions.push(chunk.into_question(question)?);
    }
    Ok(quiz)
}

/// Stateful parser holding the current input and the last parsed quiz.
///
/// Not synchronized; use one parser per input when parsing concurrently, or
/// call [`parse`] directly.
#[derive(Debug, Default)]
pub struct QuizParser {
    input: String,
    quiz: Option<Quiz>,
}

impl QuizParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the raw text to parse, replacing any previous input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Parse the current input. On success the quiz is also retained and
    /// stays retrievable through [`QuizParser::quiz`]; a failure leaves the
    /// previously retained quiz in place.
    pub fn parse(&mut self) -> Result<Quiz> {
        let quiz = parse(&self.input)?;
        self.quiz = Some(quiz.clone());
        Ok(quiz)
    }

    /// The most recently successfully parsed quiz, if any.
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }
}

/// Split the input into question chunks on blank lines. Trailing empty
/// chunks are dropped; leading and interior ones are kept and fail
/// validation.
fn split_questions(input: &str) -> Vec<&str> {
    let mut chunks: Vec<&str> = input.split("\n\n").collect();
    while chunks.last().is_some_and(|c| c.is_empty()) {
        chunks.pop();
    }
    chunks
}

/// One question chunk with the marker offsets located during validation.
struct Chunk<'a> {
    text: &'a str,
    /// Byte offset of the first `|type="`.
    type_marker_at: usize,
    /// Byte offset of the first `"}` + line break, if any.
    header_end_at: Option<usize>,
}

impl<'a> Chunk<'a> {
    /// Run the format checks in their fixed order. A chunk with several
    /// defects reports the first failing check only.
    fn scan(text: &'a str) -> std::result::Result<Self, SyntaxErrorKind> {
        if !(text.starts_with('{') && text[1..].contains('}')) {
            return Err(SyntaxErrorKind::BracesMissing);
        }
        if !has_type_marker(text) {
            return Err(SyntaxErrorKind::QuestionTypeMissing);
        }
        if !has_question_text(text) {
            return Err(SyntaxErrorKind::QuestionTextMissing);
        }
        if !has_answer_lines(text) {
            return Err(SyntaxErrorKind::InvalidAnswers);
        }
        if !has_correct_flag_after_type(text) {
            return Err(SyntaxErrorKind::GoodAnswerMissing);
        }

        let type_marker_at = text
            .find(TYPE_MARKER)
            .ok_or(SyntaxErrorKind::QuestionTypeMissing)?;
        Ok(Chunk {
            text,
            type_marker_at,
            header_end_at: text.find(HEADER_END),
        })
    }

    /// Slice out title, type code and answer block from the offsets the scan
    /// recorded.
    fn into_question(self, question: usize) -> Result<Question> {
        let title = self.text[1..self.type_marker_at].to_string();

        let code_start = self.type_marker_at + TYPE_MARKER.len();
        let header_end = self
            .header_end_at
            .filter(|&at| at >= code_start)
            .ok_or(ParseError::Syntax {
                question,
                kind: SyntaxErrorKind::UnterminatedHeader,
            })?;
        let question_type = QuestionType::from_code(&self.text[code_start..header_end]);

        let body = &self.text[header_end + HEADER_END.len()..];
        Ok(Question {
            title,
            question_type,
            answer_block: answer_block(body, question)?,
        })
    }
}

/// The type marker must have the exact shape `|type="()"` or `|type="[]"`
/// followed by the closing brace.
fn has_type_marker(text: &str) -> bool {
    text.contains(r#"|type="()"}"#) || text.contains(r#"|type="[]"}"#)
}

/// At least one character of title text between a `{` and a later `|`. Any
/// later `|` that qualifies for some `{` also qualifies for the first one.
fn has_question_text(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.iter().position(|&b| b == b'{') {
        Some(open) => bytes.get(open + 2..).is_some_and(|rest| rest.contains(&b'|')),
        None => false,
    }
}

/// Some `}` + line break must be immediately followed by an answer line:
/// flag, one space, then at least one word or punctuation character. Text
/// beyond that first character is not constrained.
fn has_answer_lines(text: &str) -> bool {
    text.match_indices("}\n")
        .any(|(at, sep)| is_answer_line_start(&text[at + sep.len()..]))
}

fn is_answer_line_start(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    matches!(bytes.first().copied(), Some(b'+' | b'-'))
        && bytes.get(1) == Some(&b' ')
        && bytes
            .get(2)
            .is_some_and(|&b| b.is_ascii_alphanumeric() || b.is_ascii_punctuation())
}

/// A `+` must appear somewhere between the first `|type` and the end of the
/// chunk. A `+` in the title does not count; one anywhere after the marker
/// does, even outside a well-formed answer line.
fn has_correct_flag_after_type(text: &str) -> bool {
    text.find("|type")
        .is_some_and(|at| text[at..].contains(CORRECT_FLAG))
}

/// Grade the body lines: N correct lines share the credit evenly, every
/// other line gets none.
fn answer_block(body: &str, question: usize) -> Result<AnswerBlock> {
    let lines = split_lines(body);

    let correct = lines
        .iter()
        .filter(|line| line.starts_with(CORRECT_FLAG))
        .count();
    if correct == 0 {
        return Err(ParseError::NoCorrectAnswerLine { question });
    }
    let share = 1.0 / correct as f64;

    let answers = lines
        .iter()
        .map(|line| Answer {
            text: line.get(2..).unwrap_or_default().to_string(),
            credit_fraction: if line.starts_with(CORRECT_FLAG) {
                share
            } else {
                0.0
            },
        })
        .collect();
    Ok(AnswerBlock { answers })
}

/// Split the answer body into lines, dropping trailing empty ones.
fn split_lines(body: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = body.split('\n').collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}
