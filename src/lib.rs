//! A metric-weighted ellipsoid kernel for convex free-space decomposition.
//!
//! Iterative region inflation (as used for safe corridors in motion planning)
//! repeatedly grows an ellipsoid around a seed, picks the obstacle point the
//! ellipsoid's own metric judges closest, and cuts the free space with the
//! plane tangent to the ellipsoid at that point. This crate provides the
//! ellipsoid side of that loop: see [`crate::ellipsoid::Ellipsoid`] for
//! distance, containment, closest-point and tangent-plane queries, and
//! [`crate::hyperplane::Hyperplane`] for the planes it produces.
//!
//! The dimension is a const parameter, so points of the wrong length are
//! rejected at compile time. Contour sampling is only offered in 2D.

#![allow(dead_code)]
#![allow(non_snake_case)]
#![allow(unused_imports)]
#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod params;
pub mod array_utils;
pub mod linalg_utils;
pub mod rand_utils;
pub mod ellipsoid_error;
pub mod hyperplane;
pub mod ellipsoid;

#[cfg(test)]
mod test_utils;
