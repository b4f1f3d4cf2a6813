extern crate ndarray;

use ndarray::*;
use crate::array_utils::*;

///A half-space boundary in `D` dimensions, given by an anchor point `p`
///on the plane and a normal `n` pointing out of the half-space.
///
///Points `x` with `n . (x - p) <= 0` lie on the inner side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperplane<const D : usize> {
    p : Vecf<D>,
    n : Vecf<D>
}

impl<const D : usize> Hyperplane<D> {
    ///Builds a [`Hyperplane`] through `p` with normal `n`. `n` is taken as-is,
    ///so it should already be unit length if distances are to be Euclidean.
    pub fn new(p : Vecf<D>, n : Vecf<D>) -> Hyperplane<D> {
        Hyperplane {
            p,
            n
        }
    }

    pub fn point(&self) -> Vecf<D> {
        self.p
    }

    pub fn normal(&self) -> Vecf<D> {
        self.n
    }

    ///Signed distance of `pt` from this plane, positive on the side `n` points to.
    pub fn signed_dist(&self, pt : &Vecf<D>) -> f32 {
        let normal = ArrayView1::from(&self.n[..]);
        let diff = to_array1(pt) - &ArrayView1::from(&self.p[..]);
        normal.dot(&diff)
    }

    pub fn dist(&self, pt : &Vecf<D>) -> f32 {
        self.signed_dist(pt).abs()
    }
}
