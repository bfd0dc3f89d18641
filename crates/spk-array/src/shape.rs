#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ArrayError;

/// Inline capacity for extents; higher ranks spill to the heap.
pub type Extents = SmallVec<[usize; 4]>;

/// Ordered per-axis extents of an array, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    extents: Extents,
}

impl Shape {
    #[must_use]
    pub fn new(extents: &[usize]) -> Self {
        Self {
            extents: Extents::from_slice(extents),
        }
    }

    /// One-dimensional shape `[n]`.
    #[must_use]
    pub fn vector(n: usize) -> Self {
        Self::new(&[n])
    }

    /// Build from signed extents, rejecting any negative axis.
    pub fn from_signed(extents: &[i64]) -> Result<Self, ArrayError> {
        let mut out = Extents::with_capacity(extents.len());
        for (axis, &extent) in extents.iter().enumerate() {
            let value =
                usize::try_from(extent).map_err(|_| ArrayError::NegativeExtent { axis, extent })?;
            out.push(value);
        }
        Ok(Self { extents: out })
    }

    #[must_use]
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    #[must_use]
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Element count, saturating at `usize::MAX`; see [`Self::checked_size`].
    #[must_use]
    pub fn size(&self) -> usize {
        self.checked_size().unwrap_or(usize::MAX)
    }

    pub fn checked_size(&self) -> Result<usize, ArrayError> {
        self.extents
            .iter()
            .try_fold(1usize, |acc, &next| acc.checked_mul(next))
            .ok_or_else(|| ArrayError::SizeOverflow {
                extents: self.extents.to_vec(),
            })
    }

    /// Row-major strides in element units; the last axis is contiguous.
    #[must_use]
    pub fn strides(&self) -> Extents {
        let mut strides = Extents::from_elem(1, self.extents.len());
        let mut running = 1usize;
        for axis in (0..self.extents.len()).rev() {
            strides[axis] = running;
            running = running.saturating_mul(self.extents[axis]);
        }
        strides
    }

    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.extents.len() == 1
    }
}

impl From<usize> for Shape {
    fn from(n: usize) -> Self {
        Self::vector(n)
    }
}

impl From<&[usize]> for Shape {
    fn from(extents: &[usize]) -> Self {
        Self::new(extents)
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(extents: [usize; N]) -> Self {
        Self::new(&extents)
    }
}
