use std::fmt;

/// Result of reading a single character at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterResult {
    Char(char),
    OutOfRange,
}

/// Direct indexing. Negative positions count from the end; anything outside
/// `-n..n` is out of range.
pub fn char_at(s: &str, index: i64) -> CharacterResult {
    let len = s.chars().count() as i64;
    let position = if index < 0 { len + index } else { index };
    if position < 0 || position >= len {
        return CharacterResult::OutOfRange;
    }
    match s.chars().nth(position as usize) {
        Some(c) => CharacterResult::Char(c),
        None => CharacterResult::OutOfRange,
    }
}

/// Clamp one slice bound the way CPython adjusts slice indices.
fn adjust_bound(bound: Option<i64>, default: i64, len: i64, lower: i64, upper: i64) -> i64 {
    match bound {
        None => default,
        Some(i) if i < 0 => (i + len).max(lower),
        Some(i) => i.min(upper),
    }
}

/// Slicing. Never fails: out-of-range bounds clamp and the result may be empty.
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn slice(s: &str, start: Option<i64>, stop: Option<i64>, step: i64) -> String {
    assert_ne!(step, 0, "slice step cannot be zero");

    let chars: Vec<char> = s.chars().collect();
    let len = chars.len() as i64;
    // Valid bound range is [0, n] forwards and [-1, n - 1] backwards,
    // where -1 means "before the first character".
    let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
    let (default_start, default_stop) = if step > 0 { (lower, upper) } else { (upper, lower) };

    let start = adjust_bound(start, default_start, len, lower, upper);
    let stop = adjust_bound(stop, default_stop, len, lower, upper);

    let mut out = String::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        out.push(chars[i as usize]);
        // A huge step jumps past either end, which ends the slice.
        match i.checked_add(step) {
            Some(next) => i = next,
            None => break,
        }
    }
    out
}

/// The `[start:stop:step]` part of a slice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

impl SliceSpec {
    pub fn new(start: Option<i64>, stop: Option<i64>) -> Self {
        Self {
            start,
            stop,
            step: None,
        }
    }

    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn apply(&self, s: &str) -> String {
        slice(s, self.start, self.stop, self.step.unwrap_or(1))
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<i64>| b.map(|v| v.to_string()).unwrap_or_default();
        write!(f, "s[{}:{}", bound(self.start), bound(self.stop))?;
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        write!(f, "]")
    }
}
