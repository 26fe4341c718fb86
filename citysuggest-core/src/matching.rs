use strsim::levenshtein;

use crate::{normalize, SCORE_OFFSET};

/// A candidate that passed the subsequence predicate: its position in the
/// input sequence plus its string score.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NameMatch {
    pub index: usize,
    pub score: f64,
}

/// True when every char of `needle` occurs in `haystack` in the same relative
/// order, gaps allowed. Both sides must already be normalized.
pub fn subsequence_match(needle: &str, haystack: &str) -> bool {
    let mut pending = needle.chars().peekable();
    for c in haystack.chars() {
        match pending.peek() {
            Some(p) if *p == c => {
                pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    pending.peek().is_none()
}

/// Score every name the normalized query fuzzily matches. Names must be
/// normalized already; an empty query matches nothing. Output keeps the input
/// order, callers sort.
///
/// Candidates failing the subsequence predicate are dropped. The rest score
/// by inverted edit distance, `1 / (levenshtein + 1)`, which is 1 for an
/// exact match and falls toward 0 as the name diverges from the query.
pub fn rank<'a, I>(query: &str, names: I) -> Vec<NameMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = normalize(query);
    if needle.is_empty() {
        return vec![];
    }
    names
        .into_iter()
        .enumerate()
        .filter(|(_, name)| subsequence_match(&needle, name))
        .map(|(index, name)| NameMatch {
            index,
            score: 1.0 / (levenshtein(&needle, name) as f64 + SCORE_OFFSET),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsequence_allows_gaps() {
        assert!(subsequence_match("woon", "workington"));
        assert!(subsequence_match("wo", "wo"));
        assert!(!subsequence_match("woon", "london"));
    }

    #[test]
    fn subsequence_respects_order() {
        assert!(!subsequence_match("ow", "wo"));
    }

    #[test]
    fn empty_needle_matches_trivially() {
        assert!(subsequence_match("", "anything"));
    }

    #[test]
    fn empty_query_ranks_nothing() {
        assert!(rank("", ["london", "leeds"]).is_empty());
    }

    #[test]
    fn query_is_normalized_before_matching() {
        let matches = rank("wrexHAM", ["wrexham"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 1.0);
    }

    #[test]
    fn score_falls_with_edit_distance() {
        let matches = rank("woon", ["workington", "woodford green"]);
        assert_eq!(matches.len(), 2);
        assert!((matches[0].score - 1.0 / 7.0).abs() < 1e-12);
        assert!((matches[1].score - 1.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn non_matching_names_are_dropped() {
        assert!(rank("xyz", ["london", "leeds"]).is_empty());
    }

    #[test]
    fn indices_point_at_the_input_sequence() {
        let matches = rank("leeds", ["london", "leeds"]);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].index, 1);
    }
}
