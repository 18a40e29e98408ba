use anyhow::*;
use regex::Regex;
use std::collections::HashSet;

/// Builds the input matcher for one question: one or more of its option
/// letters, comma-separated, anchored at both ends. Rebuilt per question
/// since every question carries its own letter set.
pub fn selection_pattern(letters: &[char]) -> Result<Regex> {
    ensure!(
        !letters.is_empty(),
        "Cannot build a selection pattern without options"
    );
    let class: String = letters.iter().collect();
    let pattern = format!("^[{}](?:,\\s*[{}])*$", class, class);
    Regex::new(&pattern).with_context(|| format!("Invalid selection pattern `{}`", pattern))
}

/// Turns a line of user input into a deduplicated letter set, or None if the
/// input does not satisfy the format matcher.
pub fn parse_selection(input: &str, pattern: &Regex) -> Option<HashSet<char>> {
    let input = input.trim();
    if !pattern.is_match(input) {
        return None;
    }
    Some(
        input
            .split(',')
            .filter_map(|token| token.trim().chars().next())
            .collect(),
    )
}

/// True iff the selected letters exactly match the correct letters: same
/// size and full containment, regardless of input order.
pub fn is_selection_correct(selection: &HashSet<char>, correct: &HashSet<char>) -> bool {
    if selection.is_empty() || correct.is_empty() {
        return false;
    }
    selection.len() == correct.len() && selection.iter().all(|letter| correct.contains(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(letters: &[char]) -> HashSet<char> {
        letters.iter().copied().collect()
    }

    #[test]
    fn pattern_accepts_valid_selections() {
        let pattern = selection_pattern(&['a', 'b', 'c']).unwrap();
        assert!(pattern.is_match("a"));
        assert!(pattern.is_match("a,b"));
        assert!(pattern.is_match("a, b, c"));
    }

    #[test]
    fn pattern_rejects_invalid_selections() {
        let pattern = selection_pattern(&['a', 'b', 'c']).unwrap();
        assert!(!pattern.is_match("a,d"));
        assert!(!pattern.is_match(""));
        assert!(!pattern.is_match("ab"));
        assert!(!pattern.is_match("a,"));
    }

    #[test]
    fn pattern_requires_at_least_one_option() {
        assert!(selection_pattern(&[]).is_err());
    }

    #[test]
    fn parse_trims_and_deduplicates() {
        let pattern = selection_pattern(&['a', 'b', 'c']).unwrap();
        assert_eq!(
            parse_selection("  a, a, b ", &pattern),
            Some(letters(&['a', 'b']))
        );
        assert_eq!(parse_selection("a,e", &pattern), None);
    }

    #[test]
    fn matching_sets_are_correct() {
        assert!(is_selection_correct(
            &letters(&['a', 'b']),
            &letters(&['a', 'b'])
        ));
        assert!(is_selection_correct(
            &letters(&['b', 'a']),
            &letters(&['a', 'b'])
        ));
    }

    #[test]
    fn partial_selection_is_incorrect() {
        assert!(!is_selection_correct(
            &letters(&['a']),
            &letters(&['a', 'b'])
        ));
    }

    #[test]
    fn excess_selection_is_incorrect() {
        assert!(!is_selection_correct(
            &letters(&['a', 'b', 'c']),
            &letters(&['a', 'b'])
        ));
    }

    #[test]
    fn empty_sets_are_incorrect() {
        assert!(!is_selection_correct(&letters(&[]), &letters(&['a'])));
        assert!(!is_selection_correct(&letters(&['a']), &letters(&[])));
    }
}
