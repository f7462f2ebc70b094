//! Verses and teasers for each verdict

use crate::chart::Chart;
use crate::verdict::scoring::Verdict;
use rand::seq::SliceRandom;
use rand::Rng;

const YES_VERSES: &[&str] = &[
    "Two roads diverged in a wood, and I\u{2014} I took the one less traveled by, And that has made all the difference.",
    "Hope springs eternal in the human breast: Man never is, but always to be blest.",
    "I am the master of my fate: I am the captain of my soul.",
];

const NO_VERSES: &[&str] = &[
    "Turn, turn, turn. To everything there is a season, and a time to every purpose under the heaven.",
    "The best-laid schemes o' mice an' men Gang aft agley.",
];

const NOT_NOW_VERSES: &[&str] = &[
    "To be, or not to be: that is the question: Whether 'tis nobler in the mind to suffer The slings and arrows of outrageous fortune.",
    "All the world's a stage, And all the men and women merely players; They have their exits and their entrances.",
];

/// Candidate verses for a verdict
pub fn verses(verdict: Verdict) -> &'static [&'static str] {
    match verdict {
        Verdict::Yes => YES_VERSES,
        Verdict::No => NO_VERSES,
        Verdict::NotNow => NOT_NOW_VERSES,
    }
}

/// Uniform pick among the verdict's verses
pub fn pick_verse<R: Rng + ?Sized>(verdict: Verdict, rng: &mut R) -> &'static str {
    let candidates = verses(verdict);
    // Every candidate list is a non-empty const
    candidates.choose(rng).copied().unwrap_or(candidates[0])
}

/// Two-sentence teaser built from the day master and the year asked about
pub fn teaser(chart: &Chart, current_year: i32, verdict: Verdict) -> String {
    let stem = chart.day_master.stem;
    let element = chart.day_master.element;

    let (first, second) = match verdict {
        Verdict::Yes => (
            format!(
                "The {stem} {element} energy flows freely this year, opening pathways aligned with your cosmic blueprint."
            ),
            format!(
                "Your chart reveals a harmonious resonance between your destiny and the {current_year} celestial currents."
            ),
        ),
        Verdict::No => (
            format!(
                "The {stem} {element} energy encounters resistance this year, signaling obstacles in your queried path."
            ),
            "Celestial forces suggest pausing and realigning before proceeding with your current course.".to_string(),
        ),
        Verdict::NotNow => (
            format!(
                "The {stem} {element} energy exists in a state of flux this year, neither fully open nor blocked."
            ),
            "This is a time of preparation and waiting for the cosmic tides to shift in your favor.".to_string(),
        ),
    };

    format!("{first} {second}")
}
