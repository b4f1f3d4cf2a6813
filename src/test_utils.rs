extern crate ndarray;

use ndarray::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use crate::array_utils::*;

pub use crate::params::*;

pub fn assert_eps_equals_to_within(one : f32, two : f32, epsilon : f32) {
    let diff = (one - two).abs();
    if (diff > epsilon) {
        panic!("{} and {} differ by more than {}", one, two, epsilon);
    }
}

pub fn assert_eps_equals(one : f32, two : f32) {
    assert_eps_equals_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_equal_vectors_to_within<const D : usize>(one : &Vecf<D>, two : &Vecf<D>, epsilon : f32) {
    for i in 0..D {
        if ((one[i] - two[i]).abs() > epsilon) {
            panic!("{:?} and {:?} differ by more than {} at index {}", one, two, epsilon, i);
        }
    }
}

pub fn assert_equal_vectors<const D : usize>(one : &Vecf<D>, two : &Vecf<D>) {
    assert_equal_vectors_to_within(one, two, DEFAULT_TEST_THRESH);
}

pub fn assert_equal_matrices_to_within(one : &Array2<f32>, two : &Array2<f32>, epsilon : f32) {
    let diff = one - two;
    let max_diff = max_abs_entry(diff.view());
    if (max_diff > epsilon) {
        panic!("{} and {} differ by more than {}", one, two, epsilon);
    }
}

pub fn unit_length<const D : usize>(vec : &Vecf<D>) -> f32 {
    vec.iter().map(|elem| elem * elem).sum::<f32>().sqrt()
}

///A random symmetric, diagonally-dominant (hence well-conditioned)
///shape matrix with axis lengths in `[0.5, 2.0]`.
pub fn random_shape_matrix<const D : usize>() -> Matf<D> {
    let off_diag = Array::random((D, D), Uniform::new(-0.1f32, 0.1f32));
    let diag = Array::random((D,), Uniform::new(0.5f32, 2.0f32));
    let mut result = [[0.0f32; D]; D];
    for i in 0..D {
        for j in 0..D {
            if (i == j) {
                result[i][j] = diag[[i,]];
            } else {
                result[i][j] = off_diag[[i, j]] + off_diag[[j, i]];
            }
        }
    }
    result
}

pub fn random_center<const D : usize>() -> Vecf<D> {
    let center = Array::random((D,), Uniform::new(-3.0f32, 3.0f32));
    from_array1(center.view())
}
