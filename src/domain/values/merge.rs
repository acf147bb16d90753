//! Local/remote conflict resolution.
//!
//! Both inputs are folded into one sequence keyed by [`QuoteKey`]:
//! - a key keeps the position where it was first seen,
//! - the record stored at that position is the last one seen for the key,
//! - local records are folded before remote ones, so remote always wins.
//!
//! The result is local order with superseded records replaced in place,
//! followed by new remote keys in remote order.

use crate::domain::entities::quote::Quote;
use crate::domain::values::quote_key::QuoteKey;
use serde::Serialize;
use std::collections::HashMap;

/// Merged quotes plus what the merge did to the local set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeOutcome {
    pub quotes: Vec<Quote>,
    /// Remote keys that did not exist locally.
    pub added: usize,
    /// Local records replaced by a remote record with different text or category.
    pub updated: usize,
    /// Local records matched by an identical remote record.
    pub unchanged: usize,
    /// Malformed records (blank text) skipped from either side.
    pub dropped: usize,
}

impl MergeOutcome {
    pub fn has_conflicts(&self) -> bool {
        self.updated > 0
    }
}

struct Fold {
    quotes: Vec<Quote>,
    index: HashMap<QuoteKey, usize>,
    dropped: usize,
}

impl Fold {
    fn new(capacity: usize) -> Self {
        Self {
            quotes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            dropped: 0,
        }
    }

    /// Returns the slot the record landed in.
    fn push(&mut self, quote: &Quote) -> Option<usize> {
        if !quote.is_well_formed() {
            self.dropped += 1;
            return None;
        }
        let key = quote.key();
        match self.index.get(&key) {
            Some(&slot) => {
                self.quotes[slot] = quote.clone();
                Some(slot)
            }
            None => {
                let slot = self.quotes.len();
                self.quotes.push(quote.clone());
                self.index.insert(key, slot);
                Some(slot)
            }
        }
    }
}

/// Merge `remote` into `local`. Pure; never fails.
pub fn resolve(local: &[Quote], remote: &[Quote]) -> MergeOutcome {
    let mut fold = Fold::new(local.len() + remote.len());
    for quote in local {
        fold.push(quote);
    }

    let local_len = fold.quotes.len();
    let baseline = fold.quotes.clone();
    let mut touched = vec![false; local_len];

    for quote in remote {
        if let Some(slot) = fold.push(quote) {
            if slot < local_len {
                touched[slot] = true;
            }
        }
    }

    let (updated, unchanged) = touched
        .iter()
        .enumerate()
        .filter(|(_, hit)| **hit)
        .fold((0, 0), |(upd, same), (slot, _)| {
            if fold.quotes[slot] == baseline[slot] {
                (upd, same + 1)
            } else {
                (upd + 1, same)
            }
        });

    MergeOutcome {
        added: fold.quotes.len() - local_len,
        updated,
        unchanged,
        dropped: fold.dropped,
        quotes: fold.quotes,
    }
}

/// Merged sequence only.
pub fn merge(local: &[Quote], remote: &[Quote]) -> Vec<Quote> {
    resolve(local, remote).quotes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn q(text: &str, category: &str) -> Quote {
        Quote {
            text: text.to_string(),
            category: category.to_string(),
        }
    }

    fn keys(quotes: &[Quote]) -> HashSet<QuoteKey> {
        quotes.iter().map(Quote::key).collect()
    }

    #[test]
    fn test_remote_wins_on_case_insensitive_collision() {
        let merged = merge(&[q("Be bold", "Old")], &[q("be bold", "New")]);
        assert_eq!(merged, vec![q("be bold", "New")]);
    }

    #[test]
    fn test_empty_remote_keeps_local() {
        let local = vec![q("A", "X")];
        assert_eq!(merge(&local, &[]), local);
    }

    #[test]
    fn test_empty_local_dedupes_remote_last_wins() {
        let merged = merge(&[], &[q("B", "Y"), q("b", "Z")]);
        assert_eq!(merged, vec![q("b", "Z")]);
    }

    #[test]
    fn test_both_empty() {
        assert!(merge(&[], &[]).is_empty());
    }

    #[test]
    fn test_order_local_in_place_then_new_remote() {
        let local = vec![q("one", "L"), q("two", "L"), q("three", "L")];
        let remote = vec![q("four", "R"), q("TWO", "R"), q("five", "R")];
        let merged = merge(&local, &remote);
        assert_eq!(
            merged,
            vec![
                q("one", "L"),
                q("TWO", "R"),
                q("three", "L"),
                q("four", "R"),
                q("five", "R"),
            ]
        );
    }

    #[test]
    fn test_category_is_not_part_of_key() {
        let merged = merge(&[q("Same", "A")], &[q("Same", "B")]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].category, "B");
    }

    #[test]
    fn test_blank_text_is_dropped() {
        let outcome = resolve(&[q("", "X"), q("kept", "X")], &[q("   ", "Y")]);
        assert_eq!(outcome.quotes, vec![q("kept", "X")]);
        assert_eq!(outcome.dropped, 2);
    }

    #[test]
    fn test_idempotent_with_empty_remote() {
        let a = vec![q("x", "1"), q("Y", "1"), q("x", "2")];
        let b = vec![q("y", "3"), q("z", "3")];
        let once = merge(&a, &b);
        assert_eq!(merge(&once, &[]), once);
    }

    #[test]
    fn test_same_keys_regardless_of_argument_order() {
        let a = vec![q("alpha", "1"), q("Beta", "1")];
        let b = vec![q("beta", "2"), q("gamma", "2")];
        let ab = merge(&a, &b);
        let ba = merge(&b, &a);
        assert_eq!(keys(&ab), keys(&ba));
        let beta_ab = ab.iter().find(|x| x.key() == QuoteKey::of("beta")).unwrap();
        let beta_ba = ba.iter().find(|x| x.key() == QuoteKey::of("beta")).unwrap();
        assert_eq!(beta_ab.category, "2");
        assert_eq!(beta_ba.category, "1");
    }

    #[test]
    fn test_every_key_exactly_once() {
        let local = vec![q("a", "L"), q("b", "L"), q("A", "L2")];
        let remote = vec![q("c", "R"), q("B", "R"), q("c", "R2")];
        let merged = merge(&local, &remote);
        assert_eq!(merged.len(), keys(&merged).len());
        assert_eq!(merged.len(), 3);
        assert!(merged.contains(&q("A", "L2")));
        assert!(merged.contains(&q("B", "R")));
        assert!(merged.contains(&q("c", "R2")));
    }

    #[test]
    fn test_outcome_counts() {
        let local = vec![q("keep", "L"), q("same", "S"), q("change", "L")];
        let remote = vec![q("same", "S"), q("Change", "R"), q("new", "R")];
        let outcome = resolve(&local, &remote);
        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.updated, 1);
        assert_eq!(outcome.unchanged, 1);
        assert_eq!(outcome.dropped, 0);
        assert!(outcome.has_conflicts());
    }

    #[test]
    fn test_remote_duplicate_of_new_key_counts_once() {
        let outcome = resolve(&[], &[q("n", "1"), q("N", "2")]);
        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.updated, 0);
    }
}
