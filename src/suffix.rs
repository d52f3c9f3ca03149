//! Suffix array construction.
//!
//! `suffix_array` sorts all suffixes of the terminated sequence with a
//! plain comparison sort, O(N log^2 N). That is fine for the sequence
//! sizes this crate targets; the query contracts do not depend on the
//! construction algorithm, so an induced-sorting build (SA-IS) could be
//! dropped in without touching anything else.

/// Build the suffix array of `text` plus an implicit terminator.
///
/// The result is a permutation of `[0, N+1)` where entry `r` is the start
/// offset of the suffix with sort rank `r`. Offset `N` denotes the
/// terminator-only suffix and always lands at rank 0, because the empty
/// slice compares less than every non-empty suffix, exactly as a
/// lexicographically-least terminator would.
pub fn suffix_array(text: &[u8]) -> Vec<usize> {
    let n = text.len();
    let mut sa: Vec<usize> = (0..=n).collect();
    sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Invert a suffix array: `inverse[p]` is the sort rank of the suffix
/// starting at offset `p`.
pub fn invert(sa: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; sa.len()];
    for (rank, &offset) in sa.iter().enumerate() {
        inverse[offset] = rank;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banana() {
        // suffixes of banana$: $ a$ ana$ anana$ banana$ na$ nana$
        assert_eq!(suffix_array(b"banana"), vec![6, 5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn terminator_suffix_ranks_first() {
        for text in [&b"mississippi"[..], b"aaaa", b"z", b""] {
            let sa = suffix_array(text);
            assert_eq!(sa[0], text.len());
            assert_eq!(sa.len(), text.len() + 1);
        }
    }

    #[test]
    fn is_a_permutation() {
        let sa = suffix_array(b"abracadabra");
        let mut sorted = sa.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..=11).collect::<Vec<_>>());
    }

    #[test]
    fn inverse_roundtrips() {
        let sa = suffix_array(b"mississippi");
        let inv = invert(&sa);
        for (rank, &offset) in sa.iter().enumerate() {
            assert_eq!(inv[offset], rank);
        }
    }
}
