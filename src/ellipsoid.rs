extern crate ndarray;
extern crate ndarray_linalg;

use std::convert::TryFrom;
use std::f32::consts::PI;
use std::fmt;

use ndarray::*;
use ndarray_linalg::Norm;
use serde::{Deserialize, Serialize};

use crate::array_utils::*;
use crate::ellipsoid_error::*;
use crate::hyperplane::*;
use crate::linalg_utils::*;
use crate::params::*;

///A metric-weighted ball in `D` dimensions: the image of the unit ball
///under `x -> Cx + d`. The distance [`Ellipsoid::dist`] is the length of
///`C^-1 (x - d)`, so the boundary sits at distance exactly one.
///
///An [`Ellipsoid`] is immutable once built, and caches `C^-1`, the
///quadratic-form matrix `C^-1 C^-T` and `det(C)` at construction.
#[derive(Clone, Debug)]
pub struct Ellipsoid<const D : usize> {
    C : Array2<f32>,
    d : Array1<f32>,
    C_inv : Array2<f32>,
    metric : Array2<f32>,
    det : f32
}

pub type Ellipsoid2D = Ellipsoid<2>;
pub type Ellipsoid3D = Ellipsoid<3>;

///Untyped form of an [`Ellipsoid`] for exchange with code that
///doesn't know the dimension statically. Convert with `Ellipsoid::try_from`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EllipsoidRecord {
    pub C : Array2<f32>,
    pub d : Array1<f32>
}

impl<const D : usize> Ellipsoid<D> {
    ///Builds the ellipsoid with shape matrix `C` and center `d`,
    ///failing if `C` isn't invertible.
    ///
    ///There is no conditioning cut-off: thin ellipsoids such as
    ///`diag(100, 5e-5)` are accepted as long as the LU factorization gives
    ///a nonzero finite determinant and a finite inverse.
    pub fn new(C : Matf<D>, d : Vecf<D>) -> Result<Ellipsoid<D>, EllipsoidError> {
        Ellipsoid::from_arrays(to_array2(&C), to_array1(&d))
    }

    fn from_arrays(C : Array2<f32>, d : Array1<f32>) -> Result<Ellipsoid<D>, EllipsoidError> {
        if (!all_finite_matrix(C.view()) || !all_finite(d.view())) {
            debug!("Rejecting ellipsoid with non-finite shape or center");
            return Result::Err(EllipsoidError::NonFinite);
        }

        let det = checked_determinant(&C)?;
        if (!(det.abs() > 0.0f32) || !det.is_finite()) {
            debug!("Rejecting singular ellipsoid shape with determinant {}", det);
            return Result::Err(EllipsoidError::Singular { det });
        }

        let C_inv = checked_inverse(&C)?;
        let metric = gram_outer(C_inv.view());

        trace!("Built {}-dimensional ellipsoid with determinant {}", D, det);

        Result::Ok(Ellipsoid {
            C,
            d,
            C_inv,
            metric,
            det
        })
    }

    ///Metric distance of `pt` from the center: below one inside,
    ///exactly one on the boundary and above one outside.
    pub fn dist(&self, pt : &Vecf<D>) -> f32 {
        let diff = to_array1(pt) - &self.d;
        self.C_inv.dot(&diff).norm_l2()
    }

    ///Boundary points count as inside.
    pub fn inside(&self, pt : &Vecf<D>) -> bool {
        self.dist(pt) <= 1.0f32
    }

    ///Returns the points of `O` which are [`Ellipsoid::inside`] this
    ///ellipsoid, in their original order.
    pub fn points_inside(&self, O : &[Vecf<D>]) -> Vec<Vecf<D>> {
        O.iter().filter(|pt| self.inside(pt)).copied().collect()
    }

    ///Finds the point of `O` with the smallest [`Ellipsoid::dist`].
    ///The first of several equally-close points wins. Returns `None`
    ///exactly when `O` is empty. A point at NaN distance only wins
    ///if every point of `O` is at NaN distance.
    pub fn closest_point(&self, O : &[Vecf<D>]) -> Option<Vecf<D>> {
        let mut closest : Option<(f32, Vecf<D>)> = Option::None;
        for pt in O.iter() {
            let dist = self.dist(pt);
            let better = match (closest) {
                Option::None => true,
                Option::Some((min_dist, _)) => dist < min_dist || (min_dist.is_nan() && !dist.is_nan())
            };
            if (better) {
                closest = Option::Some((dist, *pt));
            }
        }
        closest.map(|(_, pt)| pt)
    }

    ///Gets the plane through [`Ellipsoid::closest_point`] of `O` whose normal is
    ///the gradient `C^-1 C^-T (p - d)` of the ellipsoid's quadratic form there.
    ///The normal points away from the center.
    ///
    ///`None` if `O` is empty, if the closest point is the center itself
    ///(where the gradient vanishes), or if the gradient's length overflows
    ///to infinity, as it does for points with huge coordinates.
    pub fn closest_hyperplane(&self, O : &[Vecf<D>]) -> Option<Hyperplane<D>> {
        let closest = self.closest_point(O)?;
        let diff = to_array1(&closest) - &self.d;
        let gradient = self.metric.dot(&diff);
        match (normalize(gradient.view())) {
            Option::Some(normal) => {
                trace!("Closest obstacle {:?} at distance {}", closest, self.dist(&closest));
                Option::Some(Hyperplane::new(closest, from_array1(normal.view())))
            },
            Option::None => {
                warn!("No tangent plane through {:?}: gradient is zero or overflows", closest);
                Option::None
            }
        }
    }

    ///`det(C)`. Proportional to the enclosed volume, not equal to it.
    pub fn volume(&self) -> f32 {
        self.det
    }

    pub fn C(&self) -> Matf<D> {
        from_array2(self.C.view())
    }

    pub fn d(&self) -> Vecf<D> {
        from_array1(self.d.view())
    }

    pub fn to_record(&self) -> EllipsoidRecord {
        EllipsoidRecord {
            C : self.C.clone(),
            d : self.d.clone()
        }
    }
}

impl Ellipsoid<2> {
    ///Draws `num` points along the contour, at angles spaced `2pi / num`
    ///apart starting from the image of `(1, 0)`.
    pub fn sample(&self, num : usize) -> Vec<Vecf<2>> {
        let dyaw = PI * 2.0f32 / (num as f32);
        let mut pts = Vec::with_capacity(num);
        for i in 0..num {
            let yaw = dyaw * (i as f32);
            let local = arr1(&[yaw.cos(), yaw.sin()]);
            let mut pt = self.C.dot(&local);
            pt += &self.d;
            pts.push(from_array1(pt.view()));
        }
        pts
    }
}

impl<const D : usize> TryFrom<EllipsoidRecord> for Ellipsoid<D> {
    type Error = EllipsoidError;

    fn try_from(record : EllipsoidRecord) -> Result<Ellipsoid<D>, EllipsoidError> {
        if (record.C.shape() != [D, D]) {
            return Result::Err(EllipsoidError::DimensionMismatch {
                expected : D,
                found : record.C.shape().to_vec()
            });
        }
        if (record.d.shape() != [D]) {
            return Result::Err(EllipsoidError::DimensionMismatch {
                expected : D,
                found : record.d.shape().to_vec()
            });
        }
        Ellipsoid::from_arrays(record.C, record.d)
    }
}

impl<const D : usize> fmt::Display for Ellipsoid<D> {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        write!(f, "C: {}\nd: {}", self.C, self.d)
    }
}
