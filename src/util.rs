use std::collections::HashMap;
use std::hash::Hash;

/// `true` if the string is empty or only whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Remove items sharing a key, keeping the value of the last occurrence.
///
/// The surviving item takes the position of the first occurrence of its key.
pub(crate) fn dedup_by_key_keep_last<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<T> = Vec::new();
    for item in items {
        let k = key(&item);
        match positions.get(&k) {
            Some(&i) => out[i] = item,
            None => {
                positions.insert(k, out.len());
                out.push(item);
            }
        }
    }
    out
}

/// Keys that occur more than once, in order of first appearance.
pub(crate) fn find_duplicates<'a, T, F>(items: &'a [T], key: F) -> Vec<&'a str>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for item in items {
        let k = key(item);
        let count = counts.entry(k).or_insert(0);
        if *count == 0 {
            order.push(k);
        }
        *count += 1;
    }
    order.retain(|k| counts[k] > 1);
    order
}
