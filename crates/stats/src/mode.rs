//! Frequency helpers shared by every report.
//!
//! Two orderings are used:
//! - `mode` picks one most frequent value; ties go to the smallest value
//!   in its natural order, so repeated runs always agree
//! - `value_counts` lists every value by descending count; ties keep the
//!   order in which values were first seen

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A most-frequent value and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

/// One distinct value and its number of occurrences
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Most frequent value, or `None` for an empty input
pub fn mode<T, I>(values: I) -> Option<Popular<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // BTreeMap yields keys in ascending order; only a strictly higher count
    // replaces the current best
    let mut best: Option<Popular<T>> = None;
    for (value, count) in counts {
        if best.as_ref().is_none_or(|b| count > b.count) {
            best = Some(Popular { value, count });
        }
    }
    best
}

/// Occurrences of each distinct value, most frequent first
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut position: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();

    for value in values {
        match position.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                position.insert(value, counts.len());
                counts.push(ValueCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_of_months() {
        let popular = mode([3u32, 3, 5]).unwrap();
        assert_eq!(popular, Popular { value: 3, count: 2 });
    }

    #[test]
    fn test_mode_tie_breaks_ascending() {
        for _ in 0..10 {
            let popular = mode(["B", "A", "B", "A"]).unwrap();
            assert_eq!(popular.value, "A");
            assert_eq!(popular.count, 2);
        }
        assert_eq!(mode([23u32, 7, 23, 7, 12]).unwrap().value, 7);
    }

    #[test]
    fn test_mode_of_nothing() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(["Customer", "Subscriber", "Dependent", "Subscriber", "Dependent"]);
        let flat: Vec<_> = counts.iter().map(|c| (c.value.as_str(), c.count)).collect();
        // Subscriber and Dependent tie at 2; Subscriber was seen first
        assert_eq!(flat, vec![("Subscriber", 2), ("Dependent", 2), ("Customer", 1)]);
    }
}
