use crate::{
    error::{Result, WmwError},
    mwu::RankSumEvaluator,
    rank::RankList,
    utils::{validate_group_sizes, validate_indices},
    value_type::ValueType,
};
use log::{debug, trace};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

/// Rank-sum tests of many index sets against every column of a matrix
#[derive(Debug)]
pub struct WmwTest<'a> {
    index_sets: &'a [Vec<usize>],
    matrix: ArrayView2<'a, f64>,
    value_type: ValueType,
    parallel: bool,
}

impl<'a> WmwTest<'a> {
    /// # Arguments
    /// * `index_sets` - The rows forming the first group of each test
    /// * `matrix` - Features in rows and samples in columns
    /// * `value_type` - The value reported for each index set and column
    pub fn new(
        index_sets: &'a [Vec<usize>],
        matrix: ArrayView2<'a, f64>,
        value_type: ValueType,
    ) -> WmwTest<'a> {
        WmwTest {
            index_sets,
            matrix,
            value_type,
            parallel: true,
        }
    }

    /// Evaluate columns on the rayon thread pool (default) or serially
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns a grid of shape (index sets, columns)
    pub fn fit(&self) -> Result<Array2<f64>> {
        let (n_rows, n_cols) = self.matrix.dim();
        debug!(
            "Testing {} index sets against {} columns of {} rows ({}, parallel: {})",
            self.index_sets.len(),
            n_cols,
            n_rows,
            self.value_type,
            self.parallel
        );

        if n_rows == 0 {
            return Err(WmwError::EmptyColumn);
        }
        validate_indices(self.index_sets, n_rows)?;
        if self.value_type.needs_variance() {
            validate_group_sizes(self.index_sets, n_rows)?;
        }

        let columns = if self.parallel {
            self.matrix
                .axis_iter(Axis(1))
                .into_par_iter()
                .enumerate()
                .map(|(i, column)| self.fit_column(i, column))
                .collect::<Result<Vec<Array1<f64>>>>()?
        } else {
            self.matrix
                .axis_iter(Axis(1))
                .enumerate()
                .map(|(i, column)| self.fit_column(i, column))
                .collect::<Result<Vec<Array1<f64>>>>()?
        };

        let mut grid = Array2::zeros((self.index_sets.len(), n_cols));
        for (mut out, values) in grid.axis_iter_mut(Axis(1)).zip(columns) {
            out.assign(&values);
        }
        Ok(grid)
    }

    /// Ranks one column and evaluates every index set against it
    fn fit_column(&self, i: usize, column: ArrayView1<f64>) -> Result<Array1<f64>> {
        let ranks = RankList::new(column).map_err(|e| e.at_column(i))?;
        let evaluator = RankSumEvaluator::new(&ranks);
        trace!(
            "Column {}: {} unique values, tie coefficient {}",
            i,
            ranks.n_unique(),
            evaluator.tie_coefficient()
        );
        self.index_sets
            .iter()
            .map(|set| evaluator.evaluate(set, self.value_type))
            .collect()
    }
}

/// Evaluates every index set against every column of the matrix.
///
/// `mode` is the integer code of a [`ValueType`] and is validated before any
/// numeric work is performed.
pub fn wmw_test<'a>(
    index_sets: &'a [Vec<usize>],
    matrix: ArrayView2<'a, f64>,
    mode: i32,
) -> Result<Array2<f64>> {
    let value_type = ValueType::try_from(mode)?;
    WmwTest::new(index_sets, matrix, value_type).fit()
}
