#![forbid(unsafe_code)]

//! Scramble-reveal: text that resolves from noise into its final value.
//!
//! A [`ScrambleSequence`] counts `current_step` down from `total_steps` to
//! the target's length, one step per tick. While counting down, each frame
//! shows the left part of the target that is already "revealed" followed by
//! freshly sampled noise, padded so every frame has the same display width.
//! The frame emitted when `current_step` reaches the target length is the
//! target itself, unpadded, and the sequence is then done.
//!
//! # Invariants
//!
//! 1. `len(target) <= current_step <= total_steps` at all times.
//! 2. The revealed prefix never shrinks from one tick to the next.
//! 3. A sequence is done after exactly `total_steps - len(target) + 1` ticks,
//!    and its last frame equals the final text (target or literal).
//! 4. Non-final frames have display width
//!    `width(target) + max_noise * charset.max_width()`.
//!
//! # Failure Modes
//!
//! - Empty charset: rejected with [`ScrambleError::EmptyCharset`].
//! - Control or combining characters in the charset: rejected with
//!   [`ScrambleError::UnprintableSymbol`], since they would merge with their
//!   neighbours and make the frame width unpredictable.
//! - `total_steps < len(target)`: rejected with
//!   [`ScrambleError::TotalStepsBelowLength`], since the countdown could not
//!   reveal the text monotonically.
//!
//! Length is measured in extended grapheme clusters so combined characters
//! are revealed as a unit.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Symbols used for noise unless configured otherwise.
pub const DEFAULT_CHARSET: &str = "#@$%^&*!?";

/// Countdown start unless configured otherwise.
pub const DEFAULT_TOTAL_STEPS: usize = 60;

/// Upper bound on noise characters per frame unless configured otherwise.
pub const DEFAULT_MAX_NOISE: usize = 14;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Invalid scramble parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// The noise charset has no symbols to sample from.
    EmptyCharset,
    /// A charset symbol has no display width of its own.
    UnprintableSymbol(char),
    /// The countdown is shorter than the text it has to reveal.
    TotalStepsBelowLength {
        /// Requested countdown start.
        total_steps: usize,
        /// Target length in grapheme clusters.
        target_len: usize,
    },
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCharset => write!(f, "scramble charset must not be empty"),
            Self::UnprintableSymbol(c) => {
                write!(f, "scramble charset symbol {c:?} has no display width")
            }
            Self::TotalStepsBelowLength {
                total_steps,
                target_len,
            } => write!(
                f,
                "total_steps ({total_steps}) must be at least the target length ({target_len})"
            ),
        }
    }
}

impl std::error::Error for ScrambleError {}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Noise alphabet. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<char>,
    /// Display width of the widest symbol.
    max_width: usize,
}

impl Charset {
    /// Build a charset from the characters of `symbols`.
    ///
    /// Every symbol must occupy at least one terminal column on its own.
    pub fn new(symbols: &str) -> Result<Self, ScrambleError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(ScrambleError::EmptyCharset);
        }
        let mut max_width = 0;
        for &c in &symbols {
            match c.width() {
                Some(w) if w > 0 => max_width = max_width.max(w),
                _ => return Err(ScrambleError::UnprintableSymbol(c)),
            }
        }
        Ok(Self { symbols, max_width })
    }

    /// Number of symbols.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols, in definition order.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Display width of the widest symbol.
    #[inline]
    #[must_use]
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Whether `c` belongs to the charset.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.chars().collect(),
            max_width: 1,
        }
    }
}

/// What a sequence shows once it is nearly resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    /// Reveal the target left to right behind a shrinking noise tail.
    #[default]
    Noise,
    /// Switch to a fixed literal once `visible >= len(target) - 1` and keep
    /// showing it, including as the final frame.
    Literal(String),
}

/// Per-sequence tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleOptions {
    /// Countdown start. Must be at least the target length.
    pub total_steps: usize,
    /// Cap on sampled noise characters per frame.
    pub max_noise: usize,
    /// Noise alphabet.
    pub charset: Charset,
    /// Resolution policy.
    pub policy: RevealPolicy,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            total_steps: DEFAULT_TOTAL_STEPS,
            max_noise: DEFAULT_MAX_NOISE,
            charset: Charset::default(),
            policy: RevealPolicy::Noise,
        }
    }
}

impl ScrambleOptions {
    /// Set the countdown start (builder pattern).
    #[must_use]
    pub fn total_steps(mut self, total_steps: usize) -> Self {
        self.total_steps = total_steps;
        self
    }

    /// Set the noise cap (builder pattern).
    #[must_use]
    pub fn max_noise(mut self, max_noise: usize) -> Self {
        self.max_noise = max_noise;
        self
    }

    /// Set the noise alphabet (builder pattern).
    #[must_use]
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Resolve to `literal` instead of the noise-derived text (builder pattern).
    #[must_use]
    pub fn literal(mut self, literal: impl Into<String>) -> Self {
        self.policy = RevealPolicy::Literal(literal.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// Lifecycle of a sequence. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScramblePhase {
    /// Nothing of the target is visible yet.
    Scrambling,
    /// Part of the target is visible.
    Resolving,
    /// The final text was emitted.
    Done,
}

/// One emitted frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleFrame {
    /// Text to display.
    pub text: String,
    /// Number of target grapheme clusters shown verbatim at the start of
    /// `text` (for literal frames: the visible length that triggered it).
    pub revealed: usize,
    /// Phase the frame was emitted in.
    pub phase: ScramblePhase,
}

/// A single scramble-reveal countdown.
#[derive(Debug, Clone)]
pub struct ScrambleSequence {
    target: String,
    /// Byte offset of each grapheme start, plus `target.len()` at the end.
    boundaries: Vec<usize>,
    width: usize,
    total_steps: usize,
    current_step: usize,
    max_noise: usize,
    charset: Charset,
    policy: RevealPolicy,
    finished: bool,
}

impl ScrambleSequence {
    /// Create a sequence that resolves to `target`.
    pub fn new(target: impl Into<String>, options: ScrambleOptions) -> Result<Self, ScrambleError> {
        let target = target.into();
        let mut boundaries: Vec<usize> = target.grapheme_indices(true).map(|(i, _)| i).collect();
        boundaries.push(target.len());
        let target_len = boundaries.len() - 1;

        if options.charset.is_empty() {
            return Err(ScrambleError::EmptyCharset);
        }
        if options.total_steps < target_len {
            return Err(ScrambleError::TotalStepsBelowLength {
                total_steps: options.total_steps,
                target_len,
            });
        }

        Ok(Self {
            width: target.width(),
            target,
            boundaries,
            total_steps: options.total_steps,
            current_step: options.total_steps,
            max_noise: options.max_noise,
            charset: options.charset,
            policy: options.policy,
            finished: false,
        })
    }

    /// The text being revealed.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Target length in grapheme clusters.
    #[inline]
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Countdown start.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Current countdown value.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The text of the last frame: the literal under [`RevealPolicy::Literal`],
    /// the target otherwise.
    #[must_use]
    pub fn final_text(&self) -> &str {
        match &self.policy {
            RevealPolicy::Noise => &self.target,
            RevealPolicy::Literal(literal) => literal,
        }
    }

    /// Display width of every non-final frame, room for `max_noise` of the
    /// widest symbol included.
    #[must_use]
    pub fn frame_width(&self) -> usize {
        self.width + self.max_noise * self.charset.max_width()
    }

    /// Number of target grapheme clusters visible at the current step.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        let len = self.target_len();
        let excess = self.current_step.saturating_sub(len);
        len.saturating_sub(excess)
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ScramblePhase {
        if self.finished {
            ScramblePhase::Done
        } else if self.visible_len() == 0 {
            ScramblePhase::Scrambling
        } else {
            ScramblePhase::Resolving
        }
    }

    /// Whether the final frame was emitted.
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.finished
    }

    /// Ticks left until done, counting the final frame.
    #[must_use]
    pub fn remaining_ticks(&self) -> usize {
        if self.finished {
            0
        } else {
            self.current_step - self.target_len() + 1
        }
    }

    /// Restart the countdown from `total_steps`.
    pub fn reset(&mut self) {
        self.current_step = self.total_steps;
        self.finished = false;
    }

    /// Emit the frame for the current step and advance the countdown.
    ///
    /// Ticking a done sequence re-emits the final text.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ScrambleFrame {
        let len = self.target_len();
        if self.current_step <= len {
            self.finished = true;
            return ScrambleFrame {
                text: self.final_text().to_string(),
                revealed: len,
                phase: ScramblePhase::Done,
            };
        }

        let visible = self.visible_len();
        let phase = self.phase();
        let text = match &self.policy {
            RevealPolicy::Literal(literal) if visible >= len.saturating_sub(1) => literal.clone(),
            _ => self.noise_text(visible, rng),
        };
        self.current_step -= 1;

        ScrambleFrame {
            text,
            revealed: visible,
            phase,
        }
    }

    /// `target[..visible] + noise[visible..]`, padded to [`Self::frame_width`].
    fn noise_text<R: Rng + ?Sized>(&self, visible: usize, rng: &mut R) -> String {
        let noise_len = self.current_step.min(self.max_noise);
        let mut out = String::with_capacity(self.target.len() + self.frame_width());
        out.push_str(&self.target[..self.boundaries[visible]]);
        for _ in visible..noise_len {
            out.push(self.charset.sample(rng));
        }
        let pad = self.frame_width().saturating_sub(out.width());
        out.extend(std::iter::repeat_n(' ', pad));
        out
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// Independent sequences advanced by one shared clock.
///
/// Each sequence keeps its own countdown; they share only the tick and the
/// noise generator. The group is done once every sequence is done.
#[derive(Debug)]
pub struct ScrambleGroup {
    sequences: Vec<ScrambleSequence>,
    rng: SmallRng,
}

impl ScrambleGroup {
    /// Create a group with OS-seeded noise.
    #[must_use]
    pub fn new(sequences: Vec<ScrambleSequence>) -> Self {
        Self {
            sequences,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Create a group whose noise is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(sequences: Vec<ScrambleSequence>, seed: u64) -> Self {
        Self {
            sequences,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Add a sequence (builder pattern).
    #[must_use]
    pub fn with(mut self, sequence: ScrambleSequence) -> Self {
        self.sequences.push(sequence);
        self
    }

    /// Number of sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether the group has no sequences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The sequences, in insertion order.
    #[must_use]
    pub fn sequences(&self) -> &[ScrambleSequence] {
        &self.sequences
    }

    /// Whether every sequence is done. An empty group is done.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.sequences.iter().all(ScrambleSequence::is_done)
    }

    /// Ticks left until the whole group is done.
    #[must_use]
    pub fn remaining_ticks(&self) -> usize {
        self.sequences
            .iter()
            .map(ScrambleSequence::remaining_ticks)
            .max()
            .unwrap_or(0)
    }

    /// Advance every sequence by one step; one frame per sequence, in order.
    pub fn tick(&mut self) -> Vec<ScrambleFrame> {
        let rng = &mut self.rng;
        self.sequences.iter_mut().map(|seq| seq.tick(rng)).collect()
    }

    /// Restart every sequence.
    pub fn reset(&mut self) {
        for seq in &mut self.sequences {
            seq.reset();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(target: &str, steps: usize) -> ScrambleSequence {
        ScrambleSequence::new(target, ScrambleOptions::default().total_steps(steps))
            .expect("valid sequence")
    }

    fn run(mut seq: ScrambleSequence, seed: u64) -> Vec<ScrambleFrame> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut frames = Vec::new();
        while !seq.is_done() {
            frames.push(seq.tick(&mut rng));
        }
        frames
    }

    #[test]
    fn defaults_match_hero_timing() {
        let opts = ScrambleOptions::default();
        assert_eq!(opts.total_steps, 60);
        assert_eq!(opts.max_noise, 14);
        assert_eq!(opts.charset.symbols(), &['#', '@', '$', '%', '^', '&', '*', '!', '?']);
        assert_eq!(opts.policy, RevealPolicy::Noise);
    }

    #[test]
    fn done_after_exact_tick_count() {
        let frames = run(seq("UI/UX Concept", 60), 7);
        assert_eq!(frames.len(), 60 - 13 + 1);
        assert_eq!(frames.last().unwrap().text, "UI/UX Concept");
        assert_eq!(frames.last().unwrap().phase, ScramblePhase::Done);
    }

    #[test]
    fn intermediate_frames_have_stable_width() {
        let s = seq("Developer", 30);
        let width = s.frame_width();
        let frames = run(s, 3);
        for frame in &frames[..frames.len() - 1] {
            assert_eq!(frame.text.width(), width, "frame {:?}", frame.text);
        }
    }

    #[test]
    fn noise_uses_charset_only() {
        let frames = run(seq("Developer", 40), 11);
        for frame in &frames[..frames.len() - 1] {
            let prefix: String = "Developer".chars().take(frame.revealed).collect();
            assert!(frame.text.starts_with(&prefix));
            let tail = &frame.text[prefix.len()..];
            assert!(
                tail.chars().all(|c| c == ' ' || DEFAULT_CHARSET.contains(c)),
                "unexpected noise in {tail:?}"
            );
        }
    }

    #[test]
    fn visible_len_formula() {
        let mut s = seq("Frontend", 20);
        let mut rng = SmallRng::seed_from_u64(0);
        // visible = 8 - (step - 8), clamped at 0
        assert_eq!(s.visible_len(), 0);
        for _ in 0..8 {
            s.tick(&mut rng);
        }
        assert_eq!(s.current_step(), 12);
        assert_eq!(s.visible_len(), 4);
    }

    #[test]
    fn phases_move_forward() {
        let frames = run(seq("abc", 10), 1);
        let phases: Vec<ScramblePhase> = frames.iter().map(|f| f.phase).collect();
        assert_eq!(phases.first(), Some(&ScramblePhase::Scrambling));
        assert_eq!(phases.last(), Some(&ScramblePhase::Done));
        let rank = |p: &ScramblePhase| match p {
            ScramblePhase::Scrambling => 0,
            ScramblePhase::Resolving => 1,
            ScramblePhase::Done => 2,
        };
        assert!(phases.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
    }

    #[test]
    fn literal_policy_sticks_once_threshold_crossed() {
        let s = ScrambleSequence::new(
            "Frontend",
            ScrambleOptions::default().total_steps(20).literal("FRONTEND"),
        )
        .unwrap();
        let frames = run(s, 5);
        let first_literal = frames
            .iter()
            .position(|f| f.text == "FRONTEND")
            .expect("literal emitted");
        assert_eq!(frames[first_literal].revealed, 7);
        assert!(frames[first_literal..].iter().all(|f| f.text == "FRONTEND"));
        assert!(frames[..first_literal].iter().all(|f| f.revealed < 7));
    }

    #[test]
    fn ticking_done_sequence_repeats_final_text() {
        let mut s = seq("ok", 2);
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(s.tick(&mut rng).text, "ok");
        assert!(s.is_done());
        assert_eq!(s.tick(&mut rng).text, "ok");
        assert_eq!(s.remaining_ticks(), 0);
    }

    #[test]
    fn empty_target_resolves_to_empty() {
        let frames = run(seq("", 3), 0);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames.last().unwrap().text, "");
    }

    #[test]
    fn graphemes_reveal_as_units() {
        let s = seq("e\u{301}te\u{301}", 4);
        assert_eq!(s.target_len(), 3);
        let frames = run(s, 9);
        assert_eq!(frames.len(), 2);
        assert!(frames[0].text.starts_with("e\u{301}t"));
        assert_eq!(frames[1].text, "e\u{301}te\u{301}");
    }

    #[test]
    fn rejects_short_countdown() {
        let err = ScrambleSequence::new("Developer", ScrambleOptions::default().total_steps(5))
            .unwrap_err();
        assert_eq!(
            err,
            ScrambleError::TotalStepsBelowLength {
                total_steps: 5,
                target_len: 9
            }
        );
        assert!(err.to_string().contains("at least the target length"));
    }

    #[test]
    fn rejects_empty_charset() {
        assert_eq!(Charset::new("").unwrap_err(), ScrambleError::EmptyCharset);
    }

    #[test]
    fn rejects_symbols_without_width() {
        assert_eq!(
            Charset::new("#\u{301}").unwrap_err(),
            ScrambleError::UnprintableSymbol('\u{301}')
        );
        assert_eq!(
            Charset::new("\t").unwrap_err(),
            ScrambleError::UnprintableSymbol('\t')
        );
        assert_eq!(Charset::default().max_width(), 1);
    }

    #[test]
    fn wide_noise_keeps_frame_width() {
        let options = ScrambleOptions::default()
            .total_steps(10)
            .charset(Charset::new("日").unwrap());
        let s = ScrambleSequence::new("ab", options).unwrap();
        assert_eq!(s.frame_width(), 2 + 14 * 2);
        let width = s.frame_width();
        let frames = run(s, 4);
        assert_eq!(frames[0].text.trim_end(), "日".repeat(10));
        for frame in &frames[..frames.len() - 1] {
            assert_eq!(frame.text.width(), width, "frame {:?}", frame.text);
        }
        assert_eq!(frames.last().unwrap().text, "ab");
    }

    #[test]
    fn reset_restarts_countdown() {
        let mut s = seq("abc", 6);
        let mut rng = SmallRng::seed_from_u64(0);
        while !s.is_done() {
            s.tick(&mut rng);
        }
        s.reset();
        assert_eq!(s.current_step(), 6);
        assert_eq!(s.phase(), ScramblePhase::Scrambling);
        assert_eq!(s.remaining_ticks(), 4);
    }

    #[test]
    fn group_done_when_slowest_sequence_done() {
        let mut group = ScrambleGroup::with_seed(vec![seq("abc", 5), seq("abcdef", 8)], 42);
        assert_eq!(group.remaining_ticks(), 3);
        let mut ticks = 0;
        while !group.is_done() {
            let frames = group.tick();
            assert_eq!(frames.len(), 2);
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        let frames = group.tick();
        assert_eq!(frames[0].text, "abc");
        assert_eq!(frames[1].text, "abcdef");
    }

    #[test]
    fn seeded_groups_are_reproducible() {
        let make = || ScrambleGroup::with_seed(vec![seq("Developer", 30)], 99);
        let (mut a, mut b) = (make(), make());
        while !a.is_done() {
            assert_eq!(a.tick(), b.tick());
        }
    }

    #[test]
    fn empty_group_is_done() {
        let group = ScrambleGroup::with_seed(Vec::new(), 0);
        assert!(group.is_done());
        assert_eq!(group.remaining_ticks(), 0);
    }
}
