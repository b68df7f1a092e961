// src/core/ranking.rs
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Frequency counts that remember the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FrequencyTable<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Counts one occurrence of `key` and returns its new count.
    pub fn record(&mut self, key: K) -> usize {
        if let Some(&position) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(position) {
                entry.1 = entry.1.saturating_add(1);
                return entry.1;
            }
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 1));
        1
    }

    #[must_use]
    pub fn count(&self, key: &K) -> usize {
        self.index
            .get(key)
            .and_then(|&position| self.entries.get(position))
            .map_or(0, |entry| entry.1)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// The `limit` most frequent keys, count descending. The sort is stable,
    /// so equal counts keep first-seen order.
    #[must_use]
    pub fn top(&self, limit: usize) -> Ranking<K> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.truncate(limit);
        Ranking(sorted)
    }

    /// Every key in first-seen order, unsorted.
    #[must_use]
    pub fn into_ranking(self) -> Ranking<K> {
        Ranking(self.entries)
    }
}

/// Ordered `key -> count` pairs.
///
/// Serializes as a map whose entry order is the ranking order, and reads the
/// entries back in the order they appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<K>(Vec<(K, usize)>);

impl<K> Default for Ranking<K> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K> Ranking<K> {
    #[must_use]
    pub fn entries(&self) -> &[(K, usize)] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.0.iter().map(|(key, count)| (key, *count))
    }

    /// Relabels every key, keeping order and counts.
    #[must_use]
    pub fn map_keys<J, F: FnMut(K) -> J>(self, mut f: F) -> Ranking<J> {
        Ranking(self.0.into_iter().map(|(key, count)| (f(key), count)).collect())
    }
}

impl<K> FromIterator<(K, usize)> for Ranking<K> {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K: Serialize> Serialize for Ranking<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, count)| (key, count)))
    }
}

struct RankingVisitor<K>(PhantomData<K>);

impl<'de, K: Deserialize<'de>> Visitor<'de> for RankingVisitor<K> {
    type Value = Ranking<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of keys to counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, count)) = access.next_entry::<K, usize>()? {
            entries.push((key, count));
        }
        Ok(Ranking(entries))
    }
}

impl<'de, K: Deserialize<'de>> Deserialize<'de> for Ranking<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RankingVisitor(PhantomData))
    }
}
