//! Aggregations shared by the reporters.
//!
//! Every "most frequent" value in this crate uses the same tie-break: among
//! the values sharing the highest count, the one seen first in table order
//! wins.

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences, keeping values in first-seen order.
fn tally<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for v in values {
        match index.get(&v) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    counts
}

/// Occurrence count of every distinct value, highest count first.
/// Equal counts keep first-seen order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut counts = tally(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value with its count; `None` for empty input.
pub fn mode<K, I>(values: I) -> Option<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut best: Option<(K, usize)> = None;
    for (value, count) in tally(values) {
        // strict '>' keeps the earliest value on ties
        if best.as_ref().is_none_or(|(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best
}
