use crate::error::{Result, WmwError};
use ndarray::ArrayView1;

/// Performs a stable argsort on a 1D ndarray and returns an array of indices
pub fn argsort(array: ArrayView1<f64>) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..array.len()).collect();
    indices.sort_by(|&a, &b| array[a].total_cmp(&array[b]));
    indices
}

/// Returns the position of the first missing value, if any
pub fn first_missing(array: ArrayView1<f64>) -> Option<usize> {
    array.iter().position(|x| x.is_nan())
}

/// Validates that every index of every index set addresses a row of the matrix
pub fn validate_indices(index_sets: &[Vec<usize>], n_rows: usize) -> Result<()> {
    for (set, indices) in index_sets.iter().enumerate() {
        if let Some(&index) = indices.iter().find(|&&idx| idx >= n_rows) {
            return Err(WmwError::IndexOutOfBounds { set, index, n_rows });
        }
    }
    Ok(())
}

/// Validates that every index set leaves both groups non-empty
pub fn validate_group_sizes(index_sets: &[Vec<usize>], n_rows: usize) -> Result<()> {
    for indices in index_sets {
        let n1 = indices.len();
        if n1 == 0 || n1 >= n_rows {
            return Err(WmwError::DegenerateInput {
                n1,
                n2: n_rows as isize - n1 as isize,
                n: n_rows,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod testing {
    use super::{argsort, first_missing, validate_group_sizes, validate_indices};
    use crate::error::WmwError;
    use ndarray::array;

    #[test]
    fn test_argsort_forward() {
        let array = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let sorted = argsort(array.view());
        assert_eq!(sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_argsort_reverse() {
        let array = array![5.0, 4.0, 3.0, 2.0, 1.0];
        let sorted = argsort(array.view());
        assert_eq!(sorted, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_argsort_stable_ties() {
        let array = array![2.0, 1.0, 2.0, 1.0];
        let sorted = argsort(array.view());
        assert_eq!(sorted, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_first_missing() {
        assert_eq!(first_missing(array![1.0, 2.0].view()), None);
        assert_eq!(first_missing(array![1.0, f64::NAN, 2.0].view()), Some(1));
    }

    #[test]
    fn test_validate_indices() {
        let sets = vec![vec![0, 1], vec![2, 5]];
        assert!(validate_indices(&sets, 6).is_ok());
        assert_eq!(
            validate_indices(&sets, 5),
            Err(WmwError::IndexOutOfBounds {
                set: 1,
                index: 5,
                n_rows: 5
            })
        );
    }

    #[test]
    fn test_validate_group_sizes() {
        assert!(validate_group_sizes(&[vec![0, 1]], 3).is_ok());
        assert!(validate_group_sizes(&[vec![]], 3).is_err());
        assert_eq!(
            validate_group_sizes(&[vec![0]], 1),
            Err(WmwError::DegenerateInput { n1: 1, n2: 0, n: 1 })
        );
        assert_eq!(
            validate_group_sizes(&[vec![0, 1, 2]], 3),
            Err(WmwError::DegenerateInput { n1: 3, n2: 0, n: 3 })
        );
    }
}
