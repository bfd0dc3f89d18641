#![forbid(unsafe_code)]

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::ArrayError;
use crate::shape::{Extents, Shape};

/// Owning, contiguous, row-major array of `E` described by a [`Shape`].
///
/// The buffer length always equals the product of the shape's extents.
/// Deserialization goes through [`NumericArray::from_vec`]; serialized
/// strides are ignored and recomputed from the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawArray<E>",
    bound(deserialize = "E: Deserialize<'de>")
)]
pub struct NumericArray<E> {
    shape: Shape,
    strides: Extents,
    data: Vec<E>,
}

#[derive(Deserialize)]
struct RawArray<E> {
    shape: Shape,
    data: Vec<E>,
}

impl<E> TryFrom<RawArray<E>> for NumericArray<E> {
    type Error = ArrayError;

    fn try_from(raw: RawArray<E>) -> Result<Self, Self::Error> {
        Self::from_vec(raw.shape, raw.data)
    }
}

impl<E: Clone> NumericArray<E> {
    /// Allocate `product(shape)` elements, all equal to `fill`.
    pub fn new(shape: impl Into<Shape>, fill: E) -> Result<Self, ArrayError> {
        let shape = shape.into();
        let size = shape.checked_size()?;
        Ok(Self {
            strides: shape.strides(),
            data: vec![fill; size],
            shape,
        })
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: E) {
        self.data.fill(value);
    }
}

impl<E> NumericArray<E> {
    /// Adopt `data` as the buffer for `shape`.
    pub fn from_vec(shape: impl Into<Shape>, data: Vec<E>) -> Result<Self, ArrayError> {
        let shape = shape.into();
        let expected = shape.checked_size()?;
        if data.len() != expected {
            return Err(ArrayError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            strides: shape.strides(),
            shape,
            data,
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    pub fn at(&self, index: usize) -> Result<&E, ArrayError> {
        let size = self.size();
        self.data
            .get(index)
            .ok_or(ArrayError::OutOfBounds { index, size })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut E, ArrayError> {
        let size = self.size();
        self.data
            .get_mut(index)
            .ok_or(ArrayError::OutOfBounds { index, size })
    }

    pub fn set(&mut self, index: usize, value: E) -> Result<(), ArrayError> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Linear offset of a per-axis index, validated against the extents.
    pub fn offset_of(&self, index: &[usize]) -> Result<usize, ArrayError> {
        if index.len() != self.ndim() {
            return Err(ArrayError::RankMismatch {
                expected: self.ndim(),
                actual: index.len(),
            });
        }
        let mut offset = 0usize;
        for ((&position, &extent), &stride) in index
            .iter()
            .zip(self.shape.extents())
            .zip(self.strides.iter())
        {
            if position >= extent {
                return Err(ArrayError::OutOfBounds {
                    index: position,
                    size: extent,
                });
            }
            offset += position * stride;
        }
        Ok(offset)
    }

    pub fn get_nd(&self, index: &[usize]) -> Result<&E, ArrayError> {
        let offset = self.offset_of(index)?;
        self.at(offset)
    }

    pub fn get_nd_mut(&mut self, index: &[usize]) -> Result<&mut E, ArrayError> {
        let offset = self.offset_of(index)?;
        self.at_mut(offset)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.data.iter_mut()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }
}

impl<E> Index<usize> for NumericArray<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.data[index]
    }
}

impl<E> IndexMut<usize> for NumericArray<E> {
    fn index_mut(&mut self, index: usize) -> &mut E {
        &mut self.data[index]
    }
}

impl<'a, E> IntoIterator for &'a NumericArray<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
