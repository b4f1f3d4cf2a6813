extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::{Determinant, Inverse, Norm};

use crate::array_utils::*;
use crate::ellipsoid_error::*;

///Computes the determinant of a square matrix.
pub fn checked_determinant(mat : &Array2<f32>) -> Result<f32, EllipsoidError> {
    match (mat.det()) {
        Result::Ok(det) => Result::Ok(det),
        Result::Err(err) => Result::Err(EllipsoidError::Factorization(format!("{:?}", err)))
    }
}

///Inverts a square matrix. LAPACK failures and non-finite results are both errors.
pub fn checked_inverse(mat : &Array2<f32>) -> Result<Array2<f32>, EllipsoidError> {
    let inv = match (mat.inv()) {
        Result::Ok(inv) => inv,
        Result::Err(err) => {
            return Result::Err(EllipsoidError::Factorization(format!("{:?}", err)));
        }
    };
    if (!all_finite_matrix(inv.view())) {
        return Result::Err(EllipsoidError::NonFinite);
    }
    Result::Ok(inv)
}

///Computes `AA^T`. Applied to `C^-1`, this is the matrix of the
///quadratic form whose gradient gives ellipsoid surface normals.
pub fn gram_outer(a : ArrayView2<f32>) -> Array2<f32> {
    a.dot(&a.t())
}

///Scales `vec` to unit Euclidean length, or returns `None`
///if its length is zero or not finite.
pub fn normalize(vec : ArrayView1<f32>) -> Option<Array1<f32>> {
    let norm = vec.norm_l2();
    if (norm > 0.0f32 && norm.is_finite()) {
        let mut result = vec.to_owned();
        result /= norm;
        Option::Some(result)
    } else {
        Option::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn inverse_of_diagonal() {
        let mat = to_array2(&[[2.0f32, 0.0f32], [0.0f32, 4.0f32]]);
        let inv = checked_inverse(&mat).unwrap();
        assert_eps_equals(inv[[0, 0]], 0.5f32);
        assert_eps_equals(inv[[1, 1]], 0.25f32);
        assert_eps_equals(inv[[0, 1]], 0.0f32);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let mat = to_array2(&random_shape_matrix::<3>());
        let inv = checked_inverse(&mat).unwrap();
        let prod = mat.dot(&inv);
        let eye : Array2<f32> = Array::eye(3);
        assert_equal_matrices_to_within(&prod, &eye, DEFAULT_TEST_THRESH);
    }

    #[test]
    fn determinant_of_triangular() {
        let mat = to_array2(&[[2.0f32, 5.0f32], [0.0f32, 3.0f32]]);
        assert_eps_equals(checked_determinant(&mat).unwrap(), 6.0f32);
    }

    #[test]
    fn gram_outer_is_symmetric() {
        let mat = to_array2(&[[1.0f32, 2.0f32], [3.0f32, 4.0f32]]);
        let gram = gram_outer(mat.view());
        assert_eps_equals(gram[[0, 1]], gram[[1, 0]]);
        assert_eps_equals(gram[[0, 0]], 5.0f32);
        assert_eps_equals(gram[[1, 1]], 25.0f32);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let vec = to_array1(&[3.0f32, 4.0f32]);
        let unit = normalize(vec.view()).unwrap();
        assert_eps_equals(unit[[0,]], 0.6f32);
        assert_eps_equals(unit[[1,]], 0.8f32);
    }

    #[test]
    fn normalize_rejects_infinite_length() {
        let vec = to_array1(&[std::f32::INFINITY, 0.0f32]);
        assert!(normalize(vec.view()).is_none());
    }

    #[test]
    fn normalize_rejects_zero() {
        let vec = to_array1(&[0.0f32, 0.0f32, 0.0f32]);
        assert!(normalize(vec.view()).is_none());
    }
}
