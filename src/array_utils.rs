extern crate ndarray;

use ndarray::*;

///A point (or direction) in `D`-dimensional space.
pub type Vecf<const D : usize> = [f32; D];

///A row-major `D`x`D` matrix.
pub type Matf<const D : usize> = [[f32; D]; D];

pub fn to_array1<const D : usize>(vec : &Vecf<D>) -> Array1<f32> {
    Array::from(vec.to_vec())
}

pub fn to_array2<const D : usize>(mat : &Matf<D>) -> Array2<f32> {
    Array::from_shape_fn((D, D), |(i, j)| mat[i][j])
}

///Copies the first `D` entries of `vec` into a fixed-size point.
///`vec` must have at least `D` entries.
pub fn from_array1<const D : usize>(vec : ArrayView1<f32>) -> Vecf<D> {
    let mut result = [0.0f32; D];
    for i in 0..D {
        result[i] = vec[[i,]];
    }
    result
}

pub fn from_array2<const D : usize>(mat : ArrayView2<f32>) -> Matf<D> {
    let mut result = [[0.0f32; D]; D];
    for i in 0..D {
        for j in 0..D {
            result[i][j] = mat[[i, j]];
        }
    }
    result
}

pub fn all_finite(vec : ArrayView1<f32>) -> bool {
    vec.iter().all(|elem| elem.is_finite())
}

pub fn all_finite_matrix(mat : ArrayView2<f32>) -> bool {
    mat.iter().all(|elem| elem.is_finite())
}

pub fn max_abs_entry(mat : ArrayView2<f32>) -> f32 {
    let mut max_value = 0.0f32;
    for elem in mat.iter() {
        max_value = max_value.max(elem.abs());
    }
    max_value
}
