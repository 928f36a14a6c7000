use serde::{Deserialize, Serialize};

/// Fixed, ordered sequence of records.
///
/// Built once and never mutated afterwards; iteration follows input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset<T> {
    records: Vec<T>,
}

impl<T> Dataset<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Clone> Dataset<T> {
    /// New dataset holding `self` followed by `other`
    pub fn concat(&self, other: &Dataset<T>) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> FromIterator<T> for Dataset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StockRecord;

    #[test]
    fn test_concat_preserves_order() {
        let a = Dataset::new(vec![StockRecord::new("a", 1), StockRecord::new("b", 0)]);
        let b: Dataset<_> = [StockRecord::new("c", 2)].into_iter().collect();

        let joined = a.concat(&b);
        let names: Vec<_> = joined.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        // Inputs untouched
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_deserialize_as_plain_array() {
        let dataset: Dataset<StockRecord> =
            serde_json::from_str(r#"[{"name": "Laptop", "stock": 5}]"#).unwrap();
        assert_eq!(dataset.records(), &[StockRecord::new("Laptop", 5)]);
        assert!(!dataset.is_empty());
        assert!(Dataset::<StockRecord>::default().is_empty());
    }
}
