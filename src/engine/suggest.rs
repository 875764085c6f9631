//! engine::suggest
//!
//! "Did you mean" hints for unrecognized subcommands.
//!
//! # Algorithm
//!
//! Classic dynamic-programming Levenshtein distance with unit costs for
//! insertion, deletion, and substitution, computed against every
//! recognized subcommand. The minimum-distance candidate is offered as
//! a hint when its distance is at most [`MAX_SUGGESTION_DISTANCE`];
//! ties break on first-encountered order in the recognized list.
//!
//! Candidates are subcommands only. The program name is deliberately
//! not in the candidate set, so `git gti` draws no hint from `git`.

use super::command::RECOGNIZED;

/// Largest edit distance that still produces a hint.
pub const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Levenshtein edit distance between two strings.
///
/// # Example
///
/// ```
/// use gitdrill::engine::suggest::edit_distance;
///
/// assert_eq!(edit_distance("status", "sttaus"), 2);
/// assert_eq!(edit_distance("init", "initt"), 1);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Two-row DP over the (a.len() + 1) x (b.len() + 1) cost table.
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// The closest recognized subcommand, if any lies within
/// [`MAX_SUGGESTION_DISTANCE`].
pub fn closest(token: &str) -> Option<&'static str> {
    let mut best: Option<(usize, &'static str)> = None;
    for candidate in RECOGNIZED {
        let distance = edit_distance(token, candidate.name());
        // Strict comparison keeps the first-encountered candidate on ties.
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, candidate.name()));
        }
    }
    best.and_then(|(distance, name)| (distance <= MAX_SUGGESTION_DISTANCE).then_some(name))
}
