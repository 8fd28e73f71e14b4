#![no_main]

use libfuzzer_sys::fuzz_target;

use bm1pi_core::{ConversionError, DigitString, GaussianInt};

fuzz_target!(|data: [u8; 32]| {
    let mut real = [0u8; 16];
    let mut imag = [0u8; 16];
    real.copy_from_slice(&data[..16]);
    imag.copy_from_slice(&data[16..]);
    let value = GaussianInt::new(i128::from_le_bytes(real), i128::from_le_bytes(imag));

    // Arbitrary pairs either expand and evaluate back, or overflow cleanly.
    match bm1pi_core::to_digits(value) {
        Ok(digits) => assert_eq!(bm1pi_core::to_gaussian(digits), value),
        Err(ConversionError::RepresentationOverflow { value: v }) => assert_eq!(v, value),
        Err(e) => panic!("unexpected error for {value}: {e}"),
    }

    // Every digit string survives forward then inverse.
    let digits = DigitString::new(u128::from_le_bytes(real));
    let z = bm1pi_core::to_gaussian(digits);
    assert_eq!(bm1pi_core::to_digits(z), Ok(digits));
});
