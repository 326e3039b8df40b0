use std::io::{BufRead, Write};

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz::error::{QuizError, QuizResult};
use crate::quiz::generators::QuestionKind;
use crate::quiz::summary::{self, Verdict};
use crate::quiz::text::{quoted, wrap};
use crate::quiz::{self, QuizConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Running { round: usize },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub verdict: Verdict,
}

/// Pick a sample, then a generator, then build the question from them.
pub(crate) fn draw_question<G: Rng + ?Sized>(
    config: &QuizConfig,
    rng: &mut G,
) -> QuizResult<(String, QuestionKind, quiz::Question)> {
    let sample = config
        .samples
        .choose(rng)
        .ok_or_else(|| QuizError::Config("no sample strings configured".to_string()))?
        .clone();
    let kind = config
        .bank
        .pick(rng)
        .ok_or_else(|| QuizError::Config("question bank is empty".to_string()))?;
    let question = kind.generate_question(&sample, rng);
    Ok((sample, kind, question))
}

/// Plays one quiz: a banner, `config.rounds` questions asked once each, then
/// the summary. Reads one line of `input` per question.
pub struct QuizRunner<'a, I, O, G> {
    config: &'a QuizConfig,
    input: I,
    output: O,
    rng: G,
    state: State,
    score: usize,
}

impl<'a, I: BufRead, O: Write, G: Rng> QuizRunner<'a, I, O, G> {
    pub fn new(config: &'a QuizConfig, input: I, output: O, rng: G) -> QuizResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            input,
            output,
            rng,
            state: State::NotStarted,
            score: 0,
        })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> QuizResult<State> {
        self.state = match self.state {
            State::NotStarted => {
                self.print_banner()?;
                State::Running { round: 1 }
            }
            State::Running { round } => {
                self.play_round(round)?;
                if round >= self.config.rounds {
                    State::Finished
                } else {
                    State::Running { round: round + 1 }
                }
            }
            State::Finished => State::Finished,
        };
        Ok(self.state)
    }

    pub fn run(mut self) -> QuizResult<QuizOutcome> {
        info!("Starting a {}-round quiz", self.config.rounds);
        while self.step()? != State::Finished {}

        let total = self.config.rounds;
        let verdict = summary::report(&mut self.output, self.score, total)?;
        info!("Quiz finished: {}/{} ({:?})", self.score, total, verdict);
        Ok(QuizOutcome {
            score: self.score,
            total,
            verdict,
        })
    }

    fn print_banner(&mut self) -> QuizResult<()> {
        writeln!(self.output, "=== String Indexing Quiz ===")?;
        writeln!(
            self.output,
            "Answer with the exact result (e.g., hello, an empty line, {}).",
            quiz::OUT_OF_RANGE_ANSWER
        )?;
        writeln!(
            self.output,
            "Tip: type strings without quotes; the empty string '' is just an empty answer. \
             Quote a result only when it starts or ends with a space, e.g. ' world'."
        )?;
        writeln!(self.output)?;
        Ok(())
    }

    fn play_round(&mut self, round: usize) -> QuizResult<()> {
        let (sample, kind, question) = draw_question(self.config, &mut self.rng)?;
        debug!(
            "Round {}/{}: {:?} on {:?}",
            round, self.config.rounds, kind, sample
        );

        writeln!(self.output, "\nQuestion {}/{}", round, self.config.rounds)?;
        if self.ask(&question)? {
            self.score += 1;
        }
        Ok(())
    }

    /// Returns whether the answer was correct.
    fn ask(&mut self, question: &quiz::Question) -> QuizResult<bool> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", wrap(&question.prompt, self.config.wrap_width))?;
        write!(self.output, "\nYour answer: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(QuizError::EndOfInput);
        }

        let correct = question.expected.is_answered_by(&answer);
        debug!(
            "Answer {:?} against {:?}: {}",
            answer.trim(),
            question.expected.canonical(),
            if correct { "correct" } else { "wrong" }
        );

        if correct {
            writeln!(self.output, "✅ Correct!")?;
        } else {
            writeln!(
                self.output,
                "❌ Not quite. Expected: {}",
                quoted(question.expected.canonical())
            )?;
        }
        writeln!(self.output, "ℹ️  {}", question.explanation)?;
        Ok(correct)
    }
}
