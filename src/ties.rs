/// Calculates the tie correction coefficient that deflates the U variance
///
/// # Arguments
/// * `tie_groups` - The sizes of each tie group, summing to `n`
/// * `n` - The number of ranked values
///
/// # Returns
/// * `coef` - `1 - sum(t/n * (t+1)/(n+1) * (t-1)/(n-1))`, exactly `1` without ties
pub fn tie_coefficient(tie_groups: &[usize], n: usize) -> f64 {
    if n <= 1 || tie_groups.len() == n {
        return 1.;
    }
    let nf = n as f64;
    let correction: f64 = tie_groups
        .iter()
        .map(|&t| {
            let t = t as f64;
            t / nf * (t + 1.) / (nf + 1.) * (t - 1.) / (nf - 1.)
        })
        .sum();
    debug_assert!(
        (0. ..=1. + 1e-12).contains(&correction),
        "tie correction {correction} outside of [0, 1]"
    );
    (1. - correction).max(0.)
}
