extern crate ndarray;

use ndarray::*;

use rand::prelude::*;
use rand_distr::StandardNormal;
use crate::array_utils::*;

fn generate_standard_normal_random<R : Rng + ?Sized>(rng : &mut R, dims : usize) -> Array1<f32> {
    let as_vec : Vec<f32> = rng.sample_iter(StandardNormal).take(dims).collect();

    Array::from(as_vec)
}

///Generates a random vector on the unit `dims`-sphere.
pub fn gen_nsphere_random<R : Rng + ?Sized>(rng : &mut R, dims : usize) -> Array1<f32> {
    let mut vec = generate_standard_normal_random(rng, dims);
    let mut norm = 0.0f32;
    for i in 0..dims {
        norm += vec[[i,]] * vec[[i,]];
    }
    let norm = norm.sqrt();

    vec /= norm;

    vec
}

///Generates a random unit-length direction in `D` dimensions.
pub fn gen_unit_direction<R : Rng + ?Sized, const D : usize>(rng : &mut R) -> Vecf<D> {
    let vec = gen_nsphere_random(rng, D);
    from_array1(vec.view())
}

///Generates a point uniformly distributed in the axis-aligned
///box `[-half_width, half_width]^D`.
pub fn gen_box_point<R : Rng + ?Sized, const D : usize>(rng : &mut R, half_width : f32) -> Vecf<D> {
    let mut result = [0.0f32; D];
    for i in 0..D {
        result[i] = rng.gen_range(-half_width, half_width);
    }
    result
}
