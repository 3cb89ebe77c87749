use num_traits::{Float, Zero};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

/// A partial-sorting container: a multi-set of (key, value) pairs bounded
/// above by `B`, supporting Insert, BatchPrepend and Pull.
///
/// Realized as an ordered map from value to the set of keys holding it, plus
/// a key-to-value index for O(log n) updates. This gives up an amortized-O(1)
/// bound in exchange for an implementation whose correctness does not depend
/// on block-splitting bookkeeping.
#[derive(Debug)]
pub struct PartialSortingStructure<K, V>
where
    K: Eq + std::hash::Hash + Copy + Debug,
    V: Float + Zero + Debug + Copy + Ord,
{
    block_size: usize,
    upper_bound: V,
    key_to_value: HashMap<K, V>,
    buckets: BTreeMap<V, Vec<K>>,
}

impl<K, V> PartialSortingStructure<K, V>
where
    K: Eq + std::hash::Hash + Copy + Debug,
    V: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new structure with the given block size (the `Pull` batch
    /// granularity) and upper bound `B`.
    pub fn new(block_size: usize, upper_bound: V) -> Self {
        PartialSortingStructure {
            block_size: block_size.max(1),
            upper_bound,
            key_to_value: HashMap::new(),
            buckets: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key_to_value.is_empty()
    }

    pub fn len(&self) -> usize {
        self.key_to_value.len()
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.key_to_value.get(key).copied()
    }

    /// Insert(v, x): ignored if `x >= B`, or if a stored value for `v` is
    /// already `<= x`; otherwise stores `(v, x)`, replacing any prior value.
    pub fn insert(&mut self, key: K, value: V) {
        if value >= self.upper_bound {
            return;
        }
        if let Some(&old_value) = self.key_to_value.get(&key) {
            if value >= old_value {
                return;
            }
            self.remove_from_bucket(old_value, key);
        }

        self.key_to_value.insert(key, value);
        self.buckets.entry(value).or_default().push(key);
    }

    /// BatchPrepend(items): Insert semantics applied to each item. The
    /// "prepend" precondition (every value below the structure's current
    /// minimum) is not required for correctness here since both paths reduce
    /// to the same per-item Insert logic.
    pub fn batch_prepend(&mut self, pairs: Vec<(K, V)>) {
        let mut best: HashMap<K, V> = HashMap::new();
        for (key, value) in pairs {
            if value >= self.upper_bound {
                continue;
            }
            best.entry(key)
                .and_modify(|existing| {
                    if value < *existing {
                        *existing = value;
                    }
                })
                .or_insert(value);
        }

        for (key, value) in best {
            self.insert(key, value);
        }
    }

    /// Pull(): extracts and returns up to `max_count` distinct keys with the
    /// smallest stored values, together with the smallest remaining stored
    /// value — or `B` if the structure is now empty. The recommended batch
    /// size for BMSSP callers is the block size this structure was
    /// constructed with.
    pub fn pull(&mut self, max_count: usize) -> (Vec<K>, V) {
        let max_count = max_count.max(1);
        let mut result = Vec::with_capacity(max_count.min(self.len()));
        let mut drained_values = Vec::new();

        for (&value, keys) in self.buckets.iter() {
            if result.len() >= max_count {
                break;
            }
            let take = (max_count - result.len()).min(keys.len());
            result.extend(keys.iter().take(take).copied());
            drained_values.push((value, take));
        }

        for &(value, take) in &drained_values {
            let keys = self.buckets.get_mut(&value).expect("bucket must exist");
            let drained: Vec<K> = keys.drain(..take).collect();
            for key in drained {
                self.key_to_value.remove(&key);
            }
            if keys.is_empty() {
                self.buckets.remove(&value);
            }
        }

        let next_bound = self
            .buckets
            .keys()
            .next()
            .copied()
            .unwrap_or(self.upper_bound);

        (result, next_bound)
    }

    /// The block size this structure was constructed with (the `Pull` batch
    /// granularity a caller should normally request).
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    fn remove_from_bucket(&mut self, value: V, key: K) {
        if let Some(keys) = self.buckets.get_mut(&value) {
            keys.retain(|&k| k != key);
            if keys.is_empty() {
                self.buckets.remove(&value);
            }
        }
    }
}
