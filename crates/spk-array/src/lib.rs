#![forbid(unsafe_code)]

//! Numeric containers for spectrakit: a complex scalar and an owning,
//! shaped array with explicit row-major strides.

pub mod array;
pub mod complex;
pub mod error;
pub mod shape;

pub use array::NumericArray;
pub use complex::{Complex, Complex32, Complex64};
pub use error::ArrayError;
pub use shape::{Extents, Shape};
