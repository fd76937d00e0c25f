//! Edit-distance matching for "did you mean" suggestions.
//!
//! When a project shortcut, note name, or link name/keyword does not match
//! exactly, callers collect every known identifier and ask [`find_similar`]
//! for the ones within a small Levenshtein distance of what the user typed.
//!
//! Comparison is case-insensitive and works on `char`s, so names with
//! multi-byte characters are measured correctly.

/// Default suggestion threshold used by the CLI for every identifier kind.
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// Levenshtein distance between `a` and `b` after lower-casing both.
///
/// Insertions, deletions and substitutions each cost one.
///
/// # Examples
///
/// ```
/// use al_core::similarity::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("Project", "project"), 0);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rolling rows of the (len(a)+1) x (len(b)+1) table.
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Return the candidates within `max_distance` edits of `query`, in input order.
///
/// Duplicates in `candidates` are kept as given. An empty result means
/// nothing was close enough; it is not an error.
///
/// # Examples
///
/// ```
/// use al_core::similarity::find_similar;
///
/// let hits = find_similar("myporject", ["myproject", "otherthing"], 3);
/// assert_eq!(hits, vec!["myproject".to_string()]);
/// ```
pub fn find_similar<I, S>(query: &str, candidates: I, max_distance: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter(|candidate| edit_distance(query, candidate.as_ref()) <= max_distance)
        .map(|candidate| candidate.as_ref().to_string())
        .collect()
}
