use std::{collections::HashMap, ops::AddAssign};

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::model::SalesRecord;

/// Per-key accumulations kept in first-seen order.
///
/// The order is what makes tie-breaking in the max queries deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSums<V> {
    index: HashMap<String, usize>,
    groups: Vec<(String, V)>,
}

/// Key → summed value, as returned by the aggregation queries.
pub type AggregateMap = GroupedSums<f64>;

impl<V> GroupedSums<V> {
    pub fn new() -> Self {
        Self { index: HashMap::new(), groups: Vec::new() }
    }

    fn entry(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.groups.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[slot].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.groups[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.groups.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Converts every accumulated value, keeping keys and order.
    pub fn map_values<W, F>(self, mut f: F) -> GroupedSums<W>
    where
        F: FnMut(V) -> W,
    {
        GroupedSums {
            index: self.index,
            groups: self.groups.into_iter().map(|(key, value)| (key, f(value))).collect(),
        }
    }
}

impl<V> Default for GroupedSums<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for GroupedSums<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<V: Serialize> Serialize for GroupedSums<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (key, value) in &self.groups {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Groups `records` by `key_fn` and accumulates `value_fn` within each group.
///
/// Records for which `key_fn` returns `None` are left out entirely.
pub fn group_sum<'r, V, K, F>(records: &'r [SalesRecord], key_fn: K, value_fn: F) -> GroupedSums<V>
where
    K: Fn(&'r SalesRecord) -> Option<&'r str>,
    F: Fn(&SalesRecord) -> V,
    V: AddAssign + Default,
{
    let mut sums = GroupedSums::new();
    for record in records {
        if let Some(key) = key_fn(record) {
            *sums.entry(key) += value_fn(record);
        }
    }
    sums
}
