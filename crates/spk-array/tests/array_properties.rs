//! Property tests for spk-array construction and addressing.
//!
//! Convention: test_{module}_{function}_{scenario}

use proptest::prelude::*;
use spk_array::{ArrayError, Complex64, NumericArray, Shape};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_array_new_every_element_equals_fill(
        n in 0usize..2048,
        real in -1e6f64..1e6,
        imag in -1e6f64..1e6,
    ) {
        let fill = Complex64::new(real, imag);
        let array = NumericArray::new(Shape::vector(n), fill).expect("construct");
        prop_assert_eq!(array.size(), n);
        prop_assert_eq!(array.shape().extents(), &[n][..]);
        prop_assert!(array.iter().all(|&value| value == fill));
    }

    #[test]
    fn test_array_at_rejects_every_index_past_size(n in 0usize..512, past in 0usize..64) {
        let array = NumericArray::new(Shape::vector(n), 0.0f32).expect("construct");
        let index = n + past;
        prop_assert_eq!(array.at(index), Err(ArrayError::OutOfBounds { index, size: n }));
    }

    #[test]
    fn test_array_offset_matches_manual_row_major(
        rows in 1usize..8,
        cols in 1usize..8,
        depth in 1usize..8,
    ) {
        let shape = Shape::new(&[rows, cols, depth]);
        let data = (0..shape.size()).collect::<Vec<_>>();
        let array = NumericArray::from_vec(shape, data).expect("construct");
        for r in 0..rows {
            for c in 0..cols {
                for d in 0..depth {
                    let expected = (r * cols + c) * depth + d;
                    prop_assert_eq!(*array.get_nd(&[r, c, d]).expect("in bounds"), expected);
                }
            }
        }
    }
}

#[test]
fn test_array_set_then_read_back_linear_order() {
    let mut array = NumericArray::new(Shape::vector(8), Complex64::zero()).expect("construct");
    for i in 0..array.size() {
        array
            .set(i, Complex64::new(i as f64, -(i as f64)))
            .expect("in bounds");
    }
    for (i, value) in array.iter().enumerate() {
        assert_eq!(*value, Complex64::new(i as f64, -(i as f64)));
    }
}
