use hashbrown::HashMap;

/// Maps feature names to their row in the matrix
#[derive(Debug)]
pub struct EncodeIndex<'a> {
    map: HashMap<&'a str, usize>,
}
impl<'a> EncodeIndex<'a> {
    /// Duplicated feature names resolve to their first row
    pub fn new(features: &'a [String]) -> Self {
        let mut map = HashMap::with_capacity(features.len());
        for (row, f) in features.iter().enumerate() {
            map.entry(f.as_str()).or_insert(row);
        }
        EncodeIndex { map }
    }

    pub fn get(&self, feature: &str) -> Option<usize> {
        self.map.get(feature).copied()
    }

    /// Encodes a list of feature names into rows, dropping names not found in the matrix
    pub fn encode<S: AsRef<str>>(&self, members: &[S]) -> Vec<usize> {
        members
            .iter()
            .filter_map(|m| self.get(m.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// An ordered collection of named index sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexSets {
    names: Vec<String>,
    indices: Vec<Vec<usize>>,
}
impl IndexSets {
    /// Wraps raw row indices, naming each set by its position
    pub fn from_indices(indices: Vec<Vec<usize>>) -> Self {
        let names = (0..indices.len()).map(|x| format!("set.{}", x)).collect();
        Self { names, indices }
    }

    /// Matches named feature sets against the row names of the matrix
    pub fn from_names<S: AsRef<str>>(features: &[String], sets: &[(String, Vec<S>)]) -> Self {
        let encoding = EncodeIndex::new(features);
        let (names, indices) = sets
            .iter()
            .map(|(name, members)| (name.clone(), encoding.encode(members)))
            .unzip();
        Self { names, indices }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn indices(&self) -> &[Vec<usize>] {
        &self.indices
    }

    pub fn get(&self, j: usize) -> Option<(&str, &[usize])> {
        self.names
            .get(j)
            .zip(self.indices.get(j))
            .map(|(name, idx)| (name.as_str(), idx.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod testing {
    use super::{EncodeIndex, IndexSets};

    fn features() -> Vec<String> {
        ["TP53", "BRCA1", "EGFR", "MYC", "BRCA1"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_encode_index() {
        let features = features();
        let encoding = EncodeIndex::new(&features);
        assert_eq!(encoding.len(), 4);
        assert_eq!(encoding.get("EGFR"), Some(2));
        assert_eq!(encoding.get("BRCA1"), Some(1));
        assert_eq!(encoding.get("KRAS"), None);
        assert_eq!(encoding.encode(&["MYC", "KRAS", "TP53"]), vec![3, 0]);
    }

    #[test]
    fn test_from_names() {
        let features = features();
        let sets = vec![
            ("proliferation".to_string(), vec!["MYC", "EGFR"]),
            ("unknown".to_string(), vec!["KRAS"]),
        ];
        let index_sets = IndexSets::from_names(&features, &sets);
        assert_eq!(index_sets.len(), 2);
        assert_eq!(index_sets.names(), &["proliferation", "unknown"]);
        assert_eq!(index_sets.get(0), Some(("proliferation", &[3usize, 2][..])));
        assert_eq!(index_sets.get(1), Some(("unknown", &[][..])));
        assert_eq!(index_sets.get(2), None);
    }

    #[test]
    fn test_from_indices() {
        let index_sets = IndexSets::from_indices(vec![vec![0, 1], vec![2]]);
        assert_eq!(index_sets.names(), &["set.0", "set.1"]);
        assert_eq!(index_sets.indices(), &[vec![0, 1], vec![2]]);
    }
}
