use thiserror::Error;

///Reasons an [`crate::ellipsoid::Ellipsoid`] can't be built from the given shape and center.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EllipsoidError {
    #[error("ellipsoid shape matrix or center contains non-finite entries")]
    NonFinite,
    #[error("ellipsoid shape matrix is singular (det = {det})")]
    Singular { det : f32 },
    #[error("factorization of the ellipsoid shape matrix failed: {0}")]
    Factorization(String),
    #[error("expected a {expected}-dimensional ellipsoid, found an array of shape {found:?}")]
    DimensionMismatch { expected : usize, found : Vec<usize> }
}
