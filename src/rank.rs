use crate::{
    error::{Result, WmwError},
    ties::tie_coefficient,
    utils::{argsort, first_missing},
};
use ndarray::{Array1, ArrayView1};

/// Tie-aware ranking of a single column.
///
/// Ranks are ascending and 1-based. Every member of a tie group receives the
/// mean of the ordinal positions the group occupies, so the ranks always sum
/// to `n(n+1)/2`. The list is never mutated after construction and can be
/// shared by every index set evaluated against the column.
#[derive(Debug, Clone)]
pub struct RankList {
    ranks: Array1<f64>,
    order: Vec<usize>,
    tie_groups: Vec<usize>,
}

impl RankList {
    pub fn new(values: ArrayView1<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(WmwError::EmptyColumn);
        }
        if let Some(row) = first_missing(values) {
            return Err(WmwError::MissingValue { row });
        }

        let order = argsort(values);
        let n = order.len();
        let mut ranks = Array1::zeros(n);
        let mut tie_groups = Vec::with_capacity(n);

        let mut start = 0;
        while start < n {
            let mut end = start;
            while end + 1 < n && values[order[end + 1]] == values[order[start]] {
                end += 1;
            }
            // mean of the ordinal ranks start+1..=end+1
            let rank = (start + end + 2) as f64 / 2.;
            for &row in &order[start..=end] {
                ranks[row] = rank;
            }
            tie_groups.push(end - start + 1);
            start = end + 1;
        }

        Ok(Self {
            ranks,
            order,
            tie_groups,
        })
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Rank of the provided original row
    pub fn rank(&self, row: usize) -> f64 {
        self.ranks[row]
    }

    /// Ranks addressed by original row
    pub fn ranks(&self) -> &Array1<f64> {
        &self.ranks
    }

    /// Original rows in ascending order of their values
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Sizes of the tie groups in sorted order
    pub fn tie_groups(&self) -> &[usize] {
        &self.tie_groups
    }

    pub fn n_unique(&self) -> usize {
        self.tie_groups.len()
    }

    pub fn has_ties(&self) -> bool {
        self.n_unique() != self.len()
    }

    /// Variance deflation factor for the ties in this column
    pub fn tie_coefficient(&self) -> f64 {
        tie_coefficient(&self.tie_groups, self.len())
    }
}
