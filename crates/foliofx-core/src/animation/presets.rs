#![forbid(unsafe_code)]

//! Ready-made scramble groups.
//!
//! | Preset | Description |
//! |--------|-------------|
//! | [`hero_titles`] | The three stacked hero headings |

use unicode_segmentation::UnicodeSegmentation;

use super::scramble::{RevealPolicy, ScrambleError, ScrambleOptions, ScrambleSequence};

/// First hero heading.
pub const HERO_TITLE: &str = "UI/UX Concept";
/// Second hero heading; resolves through the literal policy.
pub const HERO_SUBTITLE: &str = "Frontend";
/// Third hero heading.
pub const HERO_ROLE: &str = "Developer";

/// Smallest countdown that can reveal every hero heading.
#[must_use]
pub fn hero_min_total_steps() -> usize {
    [HERO_TITLE, HERO_SUBTITLE, HERO_ROLE]
        .iter()
        .map(|title| title.graphemes(true).count())
        .max()
        .unwrap_or(0)
}

/// The three hero headings, all driven by `options` except that the middle
/// one snaps to its literal near the end instead of trailing noise.
pub fn hero_titles(options: &ScrambleOptions) -> Result<Vec<ScrambleSequence>, ScrambleError> {
    let plain = ScrambleOptions {
        policy: RevealPolicy::Noise,
        ..options.clone()
    };
    Ok(vec![
        ScrambleSequence::new(HERO_TITLE, plain.clone())?,
        ScrambleSequence::new(HERO_SUBTITLE, plain.clone().literal(HERO_SUBTITLE))?,
        ScrambleSequence::new(HERO_ROLE, plain)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::scramble::ScrambleGroup;

    #[test]
    fn hero_titles_resolve_in_order() {
        let titles = hero_titles(&ScrambleOptions::default()).unwrap();
        let targets: Vec<&str> = titles.iter().map(ScrambleSequence::target).collect();
        assert_eq!(targets, [HERO_TITLE, HERO_SUBTITLE, HERO_ROLE]);

        let mut group = ScrambleGroup::with_seed(titles, 1);
        // Slowest title is the shortest: 60 - 8 + 1 ticks.
        assert_eq!(group.remaining_ticks(), 53);
        let mut last = Vec::new();
        while !group.is_done() {
            last = group.tick();
        }
        let texts: Vec<&str> = last.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, [HERO_TITLE, HERO_SUBTITLE, HERO_ROLE]);
    }

    #[test]
    fn min_total_steps_is_longest_title() {
        assert_eq!(hero_min_total_steps(), 13);
        let options = ScrambleOptions::default().total_steps(hero_min_total_steps());
        assert!(hero_titles(&options).is_ok());
    }

    #[test]
    fn hero_titles_reject_short_countdown() {
        let err = hero_titles(&ScrambleOptions::default().total_steps(10)).unwrap_err();
        assert!(matches!(err, ScrambleError::TotalStepsBelowLength { target_len: 13, .. }));
    }
}
