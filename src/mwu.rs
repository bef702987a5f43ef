use crate::{
    error::{Result, WmwError},
    normal::{normal_tails, Tail},
    rank::RankList,
    value_type::ValueType,
};

/// Sums the ranks of the rows belonging to the index set
///
/// # Arguments
/// * `ranks` - The rank list of the column
/// * `index_set` - The rows of the first group (duplicates are counted twice)
///
/// # Returns
/// * `r1` - The rank sum of the first group
pub fn rank_sum(ranks: &RankList, index_set: &[usize]) -> f64 {
    index_set.iter().map(|&row| ranks.rank(row)).sum()
}

/// Calculates the U-Statistic given the rank sum of the first group
///
/// # Arguments
/// * `n1` - The number of elements in the first group
/// * `n2` - The number of elements in the second group
/// * `r1` - The rank sum of the first group
///
/// # Returns
/// * `u` - The U-Statistic, in `[0, n1 * n2]`
pub fn u_statistic(n1: f64, n2: f64, r1: f64) -> f64 {
    n1 * n2 + n1 * (n1 + 1.) * 0.5 - r1
}

/// Calculates the U-Distribution Mean
pub fn u_mean(n1: f64, n2: f64) -> f64 {
    n1 * n2 * 0.5
}

/// Calculates the tie corrected U-Distribution Variance
///
/// # Arguments
/// * `n1` - The number of elements in the first group
/// * `n2` - The number of elements in the second group
/// * `tie_coef` - The tie correction coefficient of the column
///
/// # Returns
/// * `s2_u` - The variance of the U-Distribution
pub fn u_variance(n1: f64, n2: f64, tie_coef: f64) -> f64 {
    n1 * n2 * (n1 + n2 + 1.) / 12. * tie_coef
}

/// Calculates the continuity corrected Z-Score of the U-Statistic
//
// The tail selects the hypothesis: Lower (greater) adds 0.5 and Upper (less)
// subtracts 0.5. Both shifts U towards the mean; U equal to the mean is
// treated as not greater and is shifted up.
//
// # Arguments
// * `u` - The U-Statistic
// * `mu` - The mean of the U-Distribution
// * `sigma2` - The variance of the U-Distribution
// * `tail` - The normal tail evaluated for the requested value
//
// # Returns
// * `z_u` - The z-score of the U-Statistic
pub fn z_score(u: f64, mu: f64, sigma2: f64, tail: Tail) -> f64 {
    let shifted = match tail {
        Tail::Lower => u + 0.5 - mu,
        Tail::Upper => u - 0.5 - mu,
        Tail::Both => {
            let correction = if u > mu { 0.5 } else { -0.5 };
            u - mu - correction
        }
    };
    shifted / sigma2.sqrt()
}

fn abs_log10(x: f64) -> f64 {
    x.log10().abs()
}

/// Evaluates index sets against a single ranked column.
///
/// Holds only shared references to the column state so that many index sets
/// can be evaluated against the same ranking.
#[derive(Debug, Clone, Copy)]
pub struct RankSumEvaluator<'a> {
    ranks: &'a RankList,
    tie_coef: f64,
}

impl<'a> RankSumEvaluator<'a> {
    pub fn new(ranks: &'a RankList) -> Self {
        Self {
            ranks,
            tie_coef: ranks.tie_coefficient(),
        }
    }

    /// Builds an evaluator with an externally provided tie coefficient
    pub fn with_tie_coefficient(ranks: &'a RankList, tie_coef: f64) -> Self {
        Self { ranks, tie_coef }
    }

    pub fn tie_coefficient(&self) -> f64 {
        self.tie_coef
    }

    /// Calculates the requested value for one index set.
    ///
    /// Every index must be smaller than the length of the rank list.
    pub fn evaluate(&self, index_set: &[usize], value_type: ValueType) -> Result<f64> {
        let n = self.ranks.len();
        let n1 = index_set.len();
        let n2 = n as isize - n1 as isize;

        let n1f = n1 as f64;
        let n2f = n2 as f64;
        let u = u_statistic(n1f, n2f, rank_sum(self.ranks, index_set));
        let Some(tail) = value_type.family().tail() else {
            return Ok(u);
        };

        let mu = u_mean(n1f, n2f);
        let sigma2 = u_variance(n1f, n2f, self.tie_coef);
        if n1 == 0 || n2 <= 0 || n <= 1 || !(sigma2 > 0.) {
            return Err(WmwError::DegenerateInput { n1, n2, n });
        }

        let z = z_score(u, mu, sigma2, tail);
        let (plt, pgt) = normal_tails(z, tail);
        let value = match value_type {
            ValueType::PGreater => plt,
            ValueType::AbsLog10PGreater => abs_log10(plt),
            ValueType::PLess => pgt,
            ValueType::Log10PLess => pgt.log10(),
            ValueType::PTwoSided => 2. * plt.min(pgt),
            ValueType::AbsLog10PTwoSided => abs_log10(2. * plt.min(pgt)),
            ValueType::Q if plt <= pgt => abs_log10(plt),
            ValueType::Q => -abs_log10(pgt),
            ValueType::U => u,
        };
        Ok(value)
    }
}
