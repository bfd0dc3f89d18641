#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spk_array::{Complex32, NumericArray, Shape};
use spk_transform::{TransformError, dft, fft};

#[derive(Debug, Arbitrary)]
struct LengthInput {
    input_len: u16,
    output_len: u16,
    samples: Vec<(f32, f32)>,
}

fuzz_target!(|input: LengthInput| {
    let input_len = usize::from(input.input_len % 600);
    let output_len = usize::from(input.output_len % 600);
    let mut data = vec![Complex32::zero(); input_len];
    for (slot, &(re, im)) in data.iter_mut().zip(&input.samples) {
        *slot = Complex32::new(re, im);
    }
    let Ok(signal) = NumericArray::from_vec(Shape::vector(input_len), data) else {
        return;
    };
    let snapshot = signal.clone();
    let Ok(mut output) = NumericArray::new(Shape::vector(output_len), Complex32::zero()) else {
        return;
    };

    let dft_result = dft(&signal, &mut output);
    let fft_result = fft(&signal, &mut output);
    assert_eq!(snapshot, signal);

    if input_len != output_len {
        assert!(matches!(dft_result, Err(TransformError::ShapeMismatch { .. })));
        assert!(matches!(fft_result, Err(TransformError::ShapeMismatch { .. })));
    } else if input_len > 0 && !input_len.is_power_of_two() {
        assert!(dft_result.is_ok());
        assert!(matches!(fft_result, Err(TransformError::NonPowerOfTwo { .. })));
    } else {
        assert!(dft_result.is_ok());
        assert!(fft_result.is_ok());
    }
});
