use std::io::Write;

use crate::quiz::error::QuizResult;

pub const REMINDERS: [&str; 5] = [
    "Strings are zero-based: s[0] is the first character.",
    "Negative indices count from the end: s[-1] is the last character.",
    "Slices never raise IndexError; they clamp to bounds and can be empty.",
    "Direct indexing out-of-range raises IndexError.",
    "s[::-1] reverses the string.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Solid,
    NeedsRefresher,
}

impl Verdict {
    /// Seventy percent or better is solid, boundary included.
    pub fn from_score(score: usize, total: usize) -> Self {
        if score == total {
            Verdict::Perfect
        } else if score * 10 >= total * 7 {
            Verdict::Solid
        } else {
            Verdict::NeedsRefresher
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect! You’ve got string indexing down.",
            Verdict::Solid => {
                "Solid work. Review the explanations you missed to tighten up details."
            }
            Verdict::NeedsRefresher => {
                "Recommend a quick refresher on zero-based indexing, negatives, and slicing semantics."
            }
        }
    }
}

pub fn report<W: Write>(out: &mut W, score: usize, total: usize) -> QuizResult<Verdict> {
    let verdict = Verdict::from_score(score, total);

    writeln!(out, "\n=== Results ===")?;
    writeln!(out, "Score: {} / {}", score, total)?;
    writeln!(out, "{}", verdict.message())?;

    writeln!(out, "\nKey reminders:")?;
    for reminder in REMINDERS {
        writeln!(out, "- {}", reminder)?;
    }
    out.flush()?;

    Ok(verdict)
}
