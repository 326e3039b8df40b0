pub mod error;
pub mod generators;
pub mod runner;
pub mod semantics;
pub mod summary;
pub mod text;

use std::borrow::Cow;

use error::{QuizError, QuizResult};
use generators::QuestionBank;
use semantics::CharacterResult;
use text::quoted;

/// Sample strings the quiz draws from. Add or remove entries freely; each
/// must contain at least one character.
pub const SAMPLES: [&str; 9] = [
    "python",
    "indexing",
    "hello world",
    "data science",
    "Florida",
    "university",
    "banana",
    "abcde",
    "0123456789",
];

pub const DEFAULT_ROUNDS: usize = 10;
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Name the player types when direct indexing fails.
pub const OUT_OF_RANGE_ANSWER: &str = "IndexError";

#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub samples: Vec<String>,
    pub bank: QuestionBank,
    pub rounds: usize,
    pub wrap_width: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            samples: SAMPLES.iter().map(|s| s.to_string()).collect(),
            bank: QuestionBank::default(),
            rounds: DEFAULT_ROUNDS,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> QuizResult<()> {
        if self.samples.is_empty() {
            return Err(QuizError::Config("no sample strings configured".to_string()));
        }
        if self.samples.iter().any(|s| s.is_empty()) {
            return Err(QuizError::Config(
                "sample strings must not be empty".to_string(),
            ));
        }
        if self.bank.is_empty() {
            return Err(QuizError::Config("question bank is empty".to_string()));
        }
        if self.rounds == 0 {
            return Err(QuizError::Config("a quiz needs at least one round".to_string()));
        }
        Ok(())
    }
}

/// What a correct answer looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Text(String),
    OutOfRange,
}

impl Expected {
    /// The exact text a player must type.
    pub fn canonical(&self) -> &str {
        match self {
            Expected::Text(text) => text,
            Expected::OutOfRange => OUT_OF_RANGE_ANSWER,
        }
    }

    /// What the player types to be marked correct. Answers are trimmed, so a
    /// result with leading or trailing whitespace is typed in quotes,
    /// e.g. `' world'`.
    pub fn typed_answer(&self) -> Cow<'_, str> {
        let canonical = self.canonical();
        if canonical.trim() != canonical {
            Cow::Owned(quoted(canonical))
        } else {
            Cow::Borrowed(canonical)
        }
    }

    /// Answers are trimmed at both ends and otherwise compared exactly.
    pub fn is_answered_by(&self, answer: &str) -> bool {
        answer.trim() == self.typed_answer()
    }
}

impl From<CharacterResult> for Expected {
    fn from(result: CharacterResult) -> Self {
        match result {
            CharacterResult::Char(c) => Expected::Text(c.to_string()),
            CharacterResult::OutOfRange => Expected::OutOfRange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub expected: Expected,
    pub explanation: String,
}

impl Question {
    pub fn new(prompt: String, expected: Expected, explanation: String) -> Self {
        Self {
            prompt,
            expected,
            explanation,
        }
    }
}
