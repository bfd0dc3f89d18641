use num_traits::Float;
use spk_array::{Complex, NumericArray};

use crate::transforms::TransformError;

/// Sample frequencies for the bins of a length-`n` transform.
///
/// Bins past the midpoint map to negative frequencies, matching the natural
/// output order of [`crate::fft`] and [`crate::dft`].
pub fn fftfreq(n: usize, sample_spacing: f64) -> Result<Vec<f64>, TransformError> {
    if n == 0 {
        return Err(TransformError::InvalidShape {
            detail: "n must be greater than zero",
        });
    }
    if !(sample_spacing.is_finite() && sample_spacing > 0.0) {
        return Err(TransformError::InvalidSampleSpacing);
    }
    let scale = 1.0 / (n as f64 * sample_spacing);
    let split = n.div_ceil(2);
    Ok((0..n)
        .map(|idx| {
            if idx < split {
                idx as f64 * scale
            } else {
                -((n - idx) as f64) * scale
            }
        })
        .collect())
}

/// Move the zero-frequency bin to the center of a one-dimensional spectrum.
pub fn fftshift<E: Clone>(input: &NumericArray<E>) -> Result<NumericArray<E>, TransformError> {
    rotate_left_owned(input, input.size().div_ceil(2))
}

/// Inverse of [`fftshift`].
pub fn ifftshift<E: Clone>(input: &NumericArray<E>) -> Result<NumericArray<E>, TransformError> {
    rotate_left_owned(input, input.size() / 2)
}

/// Per-bin power `norm()` of a spectrum, same shape as the input.
pub fn power_spectrum<T: Float>(
    spectrum: &NumericArray<Complex<T>>,
) -> Result<NumericArray<T>, TransformError> {
    let power = spectrum.iter().map(|value| value.norm()).collect();
    Ok(NumericArray::from_vec(spectrum.shape().clone(), power)?)
}

/// Sum of `norm()` over every element.
#[must_use]
pub fn total_energy<T: Float>(values: &NumericArray<Complex<T>>) -> T {
    values
        .iter()
        .fold(T::zero(), |acc, value| acc + value.norm())
}

fn rotate_left_owned<E: Clone>(
    input: &NumericArray<E>,
    shift: usize,
) -> Result<NumericArray<E>, TransformError> {
    if !input.shape().is_vector() {
        return Err(TransformError::InvalidShape {
            detail: "spectrum shifts operate on one-dimensional arrays",
        });
    }
    let data = input.as_slice();
    let split = if data.is_empty() { 0 } else { shift % data.len() };
    let rotated = data[split..]
        .iter()
        .chain(data[..split].iter())
        .cloned()
        .collect();
    Ok(NumericArray::from_vec(input.shape().clone(), rotated)?)
}
