use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz;
use crate::quiz::semantics::{char_at, CharacterResult, SliceSpec};
use crate::quiz::text::quoted;

const STEPS: [i64; 6] = [-3, -2, -1, 1, 2, 3];

/// One family of questions. Each variant turns a sample string into a
/// prompt, the answer real indexing/slicing gives, and the rule behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    CharAt,
    SliceBasic,
    SliceStep,
    Reverse,
    LenVsIndexError,
    EmptySlice,
    FirstLast,
    OmitBounds,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 8] = [
        QuestionKind::CharAt,
        QuestionKind::SliceBasic,
        QuestionKind::SliceStep,
        QuestionKind::Reverse,
        QuestionKind::LenVsIndexError,
        QuestionKind::EmptySlice,
        QuestionKind::FirstLast,
        QuestionKind::OmitBounds,
    ];

    /// # Panics
    ///
    /// Panics if `sample` is empty; `QuizConfig::validate` rules that out.
    pub fn generate_question<R: Rng + ?Sized>(&self, sample: &str, rng: &mut R) -> quiz::Question {
        let n = sample.chars().count() as i64;
        match self {
            QuestionKind::CharAt => char_at_question(sample, n, rng),
            QuestionKind::SliceBasic => {
                let spec = SliceSpec::new(random_bound(n, rng), random_bound(n, rng));
                let result = spec.apply(sample);
                let explanation = format!(
                    "Slicing does not raise on out-of-range; it returns empty string. Result: {}.",
                    quoted(&result)
                );
                slice_question(sample, spec, result, explanation)
            }
            QuestionKind::SliceStep => {
                let step = STEPS[rng.gen_range(0..STEPS.len())];
                let spec =
                    SliceSpec::new(random_bound(n, rng), random_bound(n, rng)).with_step(step);
                let result = spec.apply(sample);
                let explanation = format!(
                    "Step controls direction/stride. With step={}, start/stop are interpreted accordingly. \
                     Slices are safe and clamp to bounds. Result: {}.",
                    step,
                    quoted(&result)
                );
                slice_question(sample, spec, result, explanation)
            }
            QuestionKind::Reverse => {
                let spec = SliceSpec::default().with_step(-1);
                let result = spec.apply(sample);
                slice_question(
                    sample,
                    spec,
                    result,
                    "s[::-1] reverses the string (start/stop omitted, step = -1).".to_string(),
                )
            }
            QuestionKind::LenVsIndexError => {
                // One past the end is always out of range.
                let expected = quiz::Expected::from(char_at(sample, n));
                let prompt = format!(
                    "For s = {} (len={}), what happens with s[{}] ?",
                    quoted(sample),
                    n,
                    n
                );
                let explanation = format!(
                    "Valid indices are 0..{} and -1..{}. Using index {} is out-of-range and raises IndexError.",
                    n - 1,
                    -n,
                    n
                );
                quiz::Question::new(prompt, expected, explanation)
            }
            QuestionKind::EmptySlice => {
                let (start, stop) = empty_slice_bounds(n, rng);
                let spec = SliceSpec::new(Some(start), Some(stop));
                let result = spec.apply(sample);
                slice_question(
                    sample,
                    spec,
                    result,
                    "With default step=1, start >= stop gives ''. Slices never raise IndexError."
                        .to_string(),
                )
            }
            QuestionKind::FirstLast => {
                let expected = match (char_at(sample, 0), char_at(sample, -1)) {
                    (CharacterResult::Char(first), CharacterResult::Char(last)) => {
                        quiz::Expected::Text(format!("{}{}", first, last))
                    }
                    _ => quiz::Expected::OutOfRange,
                };
                let prompt = format!(
                    "For s = {}, what is s[0] + s[-1] ? (concatenate the two characters)",
                    quoted(sample)
                );
                let explanation = "s[0] is first char; s[-1] is last char. \
                                   Concatenating gives the two-character string."
                    .to_string();
                quiz::Question::new(prompt, expected, explanation)
            }
            QuestionKind::OmitBounds => {
                let (spec, explanation) = if rng.gen_bool(0.5) {
                    let stop = rng.gen_range(0..=n);
                    (
                        SliceSpec::new(None, Some(stop)),
                        "Omitting start defaults to the beginning.",
                    )
                } else {
                    let start = rng.gen_range(-n..=n);
                    (SliceSpec::new(Some(start), None), "Omitting stop goes to the end.")
                };
                let result = spec.apply(sample);
                slice_question(sample, spec, result, explanation.to_string())
            }
        }
    }
}

fn char_at_question<R: Rng + ?Sized>(sample: &str, n: i64, rng: &mut R) -> quiz::Question {
    let index = if rng.gen_bool(0.5) {
        rng.gen_range(-n..n)
    } else {
        let invalid = [n, -n - 1, n + 3];
        invalid[rng.gen_range(0..invalid.len())]
    };
    let prompt = format!("For s = {}, what is s[{}] ?", quoted(sample), index);
    let result = char_at(sample, index);
    let explanation = match result {
        CharacterResult::Char(c) => format!(
            "Zero-based indexing; negative indices count from the end. s[{}] = {}.",
            index,
            quoted(&c.to_string())
        ),
        CharacterResult::OutOfRange => {
            "Direct indexing requires a valid position; out-of-range raises IndexError.".to_string()
        }
    };
    quiz::Question::new(prompt, result.into(), explanation)
}

fn slice_question(sample: &str, spec: SliceSpec, result: String, explanation: String) -> quiz::Question {
    let prompt = format!("For s = {}, what is {} ?", quoted(sample), spec);
    quiz::Question::new(prompt, quiz::Expected::Text(result), explanation)
}

/// Either omitted or anywhere in `-n-1..=n`, so both clamping directions show up.
fn random_bound<R: Rng + ?Sized>(n: i64, rng: &mut R) -> Option<i64> {
    if rng.gen_bool(0.5) {
        None
    } else {
        Some(rng.gen_range(-n - 1..=n))
    }
}

/// Bounds whose unit-step slice is empty for any `n >= 1`: the stop never
/// lands after the start once negative positions are normalized.
pub(crate) fn empty_slice_bounds<R: Rng + ?Sized>(n: i64, rng: &mut R) -> (i64, i64) {
    let start = rng.gen_range(-n + 1..=n);
    let stop = if start < 0 {
        rng.gen_range(-n..=start)
    } else {
        rng.gen_range(0..=start)
    };
    (start, stop)
}

/// The generators a quiz draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    kinds: Vec<QuestionKind>,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(QuestionKind::ALL.to_vec())
    }
}

impl QuestionBank {
    pub fn new(kinds: Vec<QuestionKind>) -> Self {
        Self { kinds }
    }

    pub fn kinds(&self) -> &[QuestionKind] {
        &self.kinds
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<QuestionKind> {
        self.kinds.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::semantics::slice;
    use crate::quiz::{Expected, SAMPLES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Pull the bracketed subscript out of a prompt, e.g. `[2:-1:3]`.
    fn subscript(prompt: &str) -> Vec<Option<i64>> {
        let open = prompt.rfind("s[").expect("prompt has a subscript") + 2;
        let close = open + prompt[open..].find(']').expect("subscript is closed");
        prompt[open..close]
            .split(':')
            .map(|part| {
                if part.is_empty() {
                    None
                } else {
                    Some(part.parse().expect("bound is an integer"))
                }
            })
            .collect()
    }

    fn recompute(sample: &str, parts: &[Option<i64>]) -> Expected {
        match parts {
            [Some(index)] => char_at(sample, *index).into(),
            [start, stop] => Expected::Text(slice(sample, *start, *stop, 1)),
            [start, stop, Some(step)] => Expected::Text(slice(sample, *start, *stop, *step)),
            other => panic!("unexpected subscript {:?}", other),
        }
    }

    fn samples_of_every_length() -> Vec<String> {
        let mut samples: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();
        samples.extend((1..=12).map(|n| "xyz".chars().cycle().take(n).collect::<String>()));
        samples
    }

    #[test]
    fn test_prompts_agree_with_expected_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let consistent_kinds = [
            QuestionKind::CharAt,
            QuestionKind::SliceBasic,
            QuestionKind::SliceStep,
            QuestionKind::Reverse,
            QuestionKind::LenVsIndexError,
            QuestionKind::EmptySlice,
            QuestionKind::OmitBounds,
        ];
        for sample in samples_of_every_length() {
            for kind in consistent_kinds {
                for _ in 0..50 {
                    let question = kind.generate_question(&sample, &mut rng);
                    assert!(question.prompt.contains(&quoted(&sample)));
                    assert!(!question.explanation.is_empty());
                    let parts = subscript(&question.prompt);
                    assert_eq!(
                        recompute(&sample, &parts),
                        question.expected,
                        "{:?} on {:?}: {}",
                        kind,
                        sample,
                        question.prompt
                    );
                }
            }
        }
    }

    #[test]
    fn test_slice_questions_never_expect_out_of_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for sample in samples_of_every_length() {
            for kind in [
                QuestionKind::SliceBasic,
                QuestionKind::SliceStep,
                QuestionKind::Reverse,
                QuestionKind::EmptySlice,
                QuestionKind::OmitBounds,
            ] {
                for _ in 0..50 {
                    let question = kind.generate_question(&sample, &mut rng);
                    assert!(matches!(question.expected, Expected::Text(_)));
                }
            }
        }
    }

    #[test]
    fn test_char_at_mixes_valid_and_invalid_indices() {
        let mut rng = StdRng::seed_from_u64(3);
        let draws = 1000;
        let out_of_range = (0..draws)
            .filter(|_| {
                QuestionKind::CharAt.generate_question("banana", &mut rng).expected
                    == Expected::OutOfRange
            })
            .count();
        assert!(out_of_range > draws * 35 / 100, "{}", out_of_range);
        assert!(out_of_range < draws * 65 / 100, "{}", out_of_range);
    }

    #[test]
    fn test_char_at_invalid_indices_come_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let question = QuestionKind::CharAt.generate_question("abcde", &mut rng);
            let index = subscript(&question.prompt)[0].expect("index present");
            if question.expected == Expected::OutOfRange {
                assert!([5, -6, 8].contains(&index), "{}", index);
            } else {
                assert!((-5..5).contains(&index), "{}", index);
            }
        }
    }

    #[test]
    fn test_slice_bounds_are_omitted_or_within_one_past_either_end() {
        let mut rng = StdRng::seed_from_u64(13);
        let n = 6;
        let (mut omitted, mut present) = (0, 0);
        for kind in [QuestionKind::SliceBasic, QuestionKind::SliceStep] {
            for _ in 0..500 {
                let question = kind.generate_question("banana", &mut rng);
                for bound in &subscript(&question.prompt)[..2] {
                    match bound {
                        None => omitted += 1,
                        Some(b) => {
                            present += 1;
                            assert!((-n - 1..=n).contains(b), "{}", question.prompt);
                        }
                    }
                }
            }
        }
        assert!(omitted > 0 && present > 0);
    }

    #[test]
    fn test_omit_bounds_ranges() {
        let mut rng = StdRng::seed_from_u64(17);
        let n = 5;
        for _ in 0..500 {
            let question = QuestionKind::OmitBounds.generate_question("abcde", &mut rng);
            match subscript(&question.prompt).as_slice() {
                [None, Some(stop)] => assert!((0..=n).contains(stop), "{}", question.prompt),
                [Some(start), None] => assert!((-n..=n).contains(start), "{}", question.prompt),
                other => panic!("unexpected subscript {:?}", other),
            }
        }
    }

    #[test]
    fn test_questions_on_spaced_samples_are_answerable() {
        let mut rng = StdRng::seed_from_u64(23);
        for sample in ["hello world", "data science", " padded "] {
            for kind in QuestionKind::ALL {
                for _ in 0..200 {
                    let question = kind.generate_question(sample, &mut rng);
                    let typed = question.expected.typed_answer();
                    assert!(
                        question.expected.is_answered_by(&format!("{}\n", typed)),
                        "{}",
                        question.prompt
                    );
                }
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_empty_sample_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        QuestionKind::EmptySlice.generate_question("", &mut rng);
    }

    #[test]
    fn test_step_is_never_zero() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let question = QuestionKind::SliceStep.generate_question("python", &mut rng);
            let step = subscript(&question.prompt)[2].expect("step present");
            assert!(STEPS.contains(&step));
        }
    }

    #[test]
    fn test_empty_slice_bounds_are_empty_for_every_length() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in 1..=30i64 {
            let sample: String = "ab".chars().cycle().take(n as usize).collect();
            for _ in 0..200 {
                let (start, stop) = empty_slice_bounds(n, &mut rng);
                assert!(start >= -n + 1 && start <= n);
                assert_eq!(slice(&sample, Some(start), Some(stop), 1), "", "n={} [{}:{}]", n, start, stop);
            }
        }
    }

    #[test]
    fn test_fixed_questions() {
        let mut rng = StdRng::seed_from_u64(0);

        let reverse = QuestionKind::Reverse.generate_question("0123456789", &mut rng);
        assert_eq!(reverse.prompt, "For s = '0123456789', what is s[::-1] ?");
        assert_eq!(reverse.expected, Expected::Text("9876543210".to_string()));

        let past_end = QuestionKind::LenVsIndexError.generate_question("banana", &mut rng);
        assert_eq!(past_end.prompt, "For s = 'banana' (len=6), what happens with s[6] ?");
        assert_eq!(past_end.expected, Expected::OutOfRange);
        assert!(past_end.explanation.contains("0..5 and -1..-6"));

        let ends = QuestionKind::FirstLast.generate_question("Florida", &mut rng);
        assert_eq!(ends.expected, Expected::Text("Fa".to_string()));

        let single = QuestionKind::FirstLast.generate_question("x", &mut rng);
        assert_eq!(single.expected, Expected::Text("xx".to_string()));
    }

    #[test]
    fn test_omit_bounds_asks_both_forms() {
        let mut rng = StdRng::seed_from_u64(21);
        let prompts: Vec<String> = (0..200)
            .map(|_| QuestionKind::OmitBounds.generate_question("banana", &mut rng).prompt)
            .collect();
        assert!(prompts.iter().any(|p| p.contains("s[:")));
        assert!(prompts.iter().any(|p| p.contains(":] ?")));
    }

    #[test]
    fn test_bank_holds_every_kind_and_picks_from_it() {
        let bank = QuestionBank::default();
        assert_eq!(bank.kinds(), &QuestionKind::ALL);

        let mut rng = StdRng::seed_from_u64(1);
        let only_reverse = QuestionBank::new(vec![QuestionKind::Reverse]);
        assert_eq!(only_reverse.pick(&mut rng), Some(QuestionKind::Reverse));
        assert_eq!(QuestionBank::new(Vec::new()).pick(&mut rng), None);
    }
}
