use std::cmp::Ordering;
use std::hash::Hash;

use indexmap::IndexMap;

/// Sort map entries by a key in descending order.
///
/// Stable: entries with equal keys keep their insertion order.
/// `IndexMap::sort_by` is a stable merge sort, `sort_unstable_by` must not be used here.
/// Keys must be totally ordered (no NaN).
///
/// # Arguments
/// * `map` - map to reorder in place
/// * `key` - sort key of a value
pub fn sort_desc_stable<K, V, S, F>(map: &mut IndexMap<K, V>, mut key: F)
where
    K: Hash + Eq,
    F: FnMut(&V) -> S,
    S: PartialOrd,
{
    map.sort_by(|_, a, _, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compare with stable baseline:
    /// sort by key desc, and if key is equal, preserve original order.
    fn baseline_stable_desc(entries: &[(&'static str, u32)]) -> Vec<(&'static str, u32)> {
        let mut pairs: Vec<(usize, (&'static str, u32))> = entries.iter().copied().enumerate().collect();
        pairs.sort_unstable_by(|a, b| b.1 .1.cmp(&a.1 .1).then_with(|| a.0.cmp(&b.0)));
        pairs.into_iter().map(|(_, e)| e).collect()
    }

    /// tiny deterministic PRNG (xorshift32)
    struct Rng(u32);
    impl Rng {
        fn next_u32(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }
    }

    const KEYS: [&str; 12] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"];

    #[test]
    fn sorts_descending_and_keeps_ties_in_order() {
        let mut map: IndexMap<&str, u32> = IndexMap::new();
        map.insert("x", 1);
        map.insert("y", 3);
        map.insert("z", 1);
        map.insert("w", 3);
        sort_desc_stable(&mut map, |v| *v);
        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(keys, vec!["y", "w", "x", "z"]);
        assert_eq!(map.get("z"), Some(&1));
    }

    #[test]
    fn matches_baseline_on_many_ties() {
        let mut rng = Rng(0x1234_5678);
        for _ in 0..64 {
            let entries: Vec<(&'static str, u32)> = KEYS.iter().map(|k| (*k, rng.next_u32() % 3)).collect();
            let mut map: IndexMap<&str, u32> = entries.iter().copied().collect();
            sort_desc_stable(&mut map, |v| *v);
            let sorted: Vec<(&str, u32)> = map.into_iter().collect();
            assert_eq!(sorted, baseline_stable_desc(&entries));
        }
    }

    #[test]
    fn empty_map() {
        let mut map: IndexMap<&str, f64> = IndexMap::new();
        sort_desc_stable(&mut map, |v| *v);
        assert!(map.is_empty());
    }
}
