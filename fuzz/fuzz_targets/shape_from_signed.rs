#![no_main]

use libfuzzer_sys::fuzz_target;
use spk_array::{ArrayError, NumericArray, Shape};

fuzz_target!(|extents: Vec<i64>| {
    let extents = &extents[..extents.len().min(6)];
    match Shape::from_signed(extents) {
        Ok(shape) => {
            let Ok(size) = shape.checked_size() else {
                return;
            };
            if size > 1 << 16 {
                return;
            }
            let Ok(array) = NumericArray::new(shape, 0u8) else {
                return;
            };
            assert_eq!(array.size(), size);
            assert!(matches!(
                array.at(size),
                Err(ArrayError::OutOfBounds { .. })
            ));
        }
        Err(ArrayError::NegativeExtent { .. }) => {
            assert!(extents.iter().any(|&extent| extent < 0));
        }
        Err(_) => {}
    }
});
