//! Property-based invariant tests for scramble-reveal sequences.
//!
//! 1. The last frame equals the target exactly
//! 2. Done is reached after exactly `total_steps - len + 1` ticks
//! 3. The revealed prefix never shrinks and always matches the target
//! 4. Literal frames are sticky once the threshold is crossed
//! 5. Non-final frames keep a constant display width
//! 6. Same seed, same frames

use foliofx_core::{Charset, ScrambleFrame, ScrambleGroup, ScrambleOptions, ScrambleSequence};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

// ── Strategies ──────────────────────────────────────────────────────────

fn target_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 /]{0,24}"
}

/// Noise alphabets mixing narrow, wide, and emoji symbols.
fn charset_strategy() -> impl Strategy<Value = Charset> {
    prop_oneof![
        Just("#@$%^&*!?"),
        Just("日本語"),
        Just("😀🎉"),
        Just("#日😀é"),
        Just("ａｂｃ01"),
    ]
    .prop_map(|symbols| Charset::new(symbols).expect("printable charset"))
}

/// Target plus a countdown at least as long as it.
fn case_strategy() -> impl Strategy<Value = (String, usize, usize)> {
    (target_strategy(), 0usize..40, 0usize..20).prop_map(|(target, extra, max_noise)| {
        let len = target.graphemes(true).count();
        (target, len + extra, max_noise)
    })
}

fn run(target: &str, total_steps: usize, max_noise: usize, seed: u64) -> Vec<ScrambleFrame> {
    run_with(target, total_steps, max_noise, Charset::default(), seed)
}

fn run_with(
    target: &str,
    total_steps: usize,
    max_noise: usize,
    charset: Charset,
    seed: u64,
) -> Vec<ScrambleFrame> {
    let seq = ScrambleSequence::new(
        target,
        ScrambleOptions::default()
            .total_steps(total_steps)
            .max_noise(max_noise)
            .charset(charset),
    )
    .expect("valid sequence");
    let mut group = ScrambleGroup::with_seed(vec![seq], seed);
    let mut frames = Vec::new();
    while !group.is_done() {
        frames.extend(group.tick());
    }
    frames
}

proptest! {
    #[test]
    fn final_frame_is_target((target, steps, noise) in case_strategy(), seed in any::<u64>()) {
        let frames = run(&target, steps, noise, seed);
        prop_assert_eq!(&frames.last().unwrap().text, &target);
    }

    #[test]
    fn done_after_exact_tick_count(
        (target, steps, noise) in case_strategy(),
        seed in any::<u64>(),
    ) {
        let len = target.graphemes(true).count();
        let frames = run(&target, steps, noise, seed);
        prop_assert_eq!(frames.len(), steps - len + 1);
    }

    #[test]
    fn reveal_is_monotonic(
        (target, steps, noise) in case_strategy(),
        seed in any::<u64>(),
    ) {
        let frames = run(&target, steps, noise, seed);
        let mut prev = 0usize;
        for frame in &frames {
            prop_assert!(
                frame.revealed >= prev,
                "revealed shrank: {} -> {}",
                prev,
                frame.revealed
            );
            let prefix: String = target.graphemes(true).take(frame.revealed).collect();
            prop_assert!(frame.text.starts_with(&prefix));
            prev = frame.revealed;
        }
    }

    #[test]
    fn width_is_stable_until_final(
        (target, steps, noise) in case_strategy(),
        charset in charset_strategy(),
        seed in any::<u64>(),
    ) {
        let expected = target.width() + noise * charset.max_width();
        let frames = run_with(&target, steps, noise, charset, seed);
        for frame in &frames[..frames.len() - 1] {
            prop_assert_eq!(frame.text.width(), expected, "frame {:?}", frame.text);
        }
    }

    #[test]
    fn literal_is_sticky((target, steps, _noise) in case_strategy(), seed in any::<u64>()) {
        let len = target.graphemes(true).count();
        let seq = ScrambleSequence::new(
            target.as_str(),
            ScrambleOptions::default().total_steps(steps).literal("LITERAL"),
        )
        .expect("valid sequence");
        let mut group = ScrambleGroup::with_seed(vec![seq], seed);
        let mut seen_literal = false;
        while !group.is_done() {
            let frame = group.tick().remove(0);
            if frame.revealed >= len.saturating_sub(1) {
                seen_literal = true;
            }
            if seen_literal {
                prop_assert_eq!(frame.text.as_str(), "LITERAL");
            }
        }
        prop_assert!(seen_literal);
    }

    #[test]
    fn seeded_runs_are_deterministic(
        (target, steps, noise) in case_strategy(),
        seed in any::<u64>(),
    ) {
        prop_assert_eq!(run(&target, steps, noise, seed), run(&target, steps, noise, seed));
    }
}
